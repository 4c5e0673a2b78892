//! The instrument tracks that make up a pattern

use crate::pattern::FromReaderError;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// A single named instrument track and the steps it triggers on
///
/// Each instrument carries 16 step flags, grouped into four beat groups of
/// four bytes for display. A step byte of `0x01` counts as a hit; any other
/// value is a rest. The bytes are stored exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    /// The track's numeric identifier; not necessarily unique within a pattern
    pub id: u32,

    /// The track's display name
    pub name: String,

    /// The raw step bytes, one beat group per row
    pub steps: [[u8; 4]; 4],
}

impl Instrument {
    /// The step byte value that renders as a hit; every other value is a rest
    pub const HIT: u8 = 0x01;

    /// Parse a single instrument record from the start of a byte slice
    ///
    /// A record is laid out as a little-endian u32 id, a one-byte name
    /// length, the name itself and four beat groups of four step bytes. On
    /// success this also returns the number of bytes the record took up, so
    /// the caller can keep count of what remains of the framed payload.
    ///
    /// A record that runs past the end of the slice fails with
    /// [`FromReaderError::Truncated`].
    pub fn from_bytes(bytes: &[u8]) -> Result<(Self, usize), FromReaderError> {
        let id = bytes.get(..4).ok_or(FromReaderError::Truncated)?;
        let id = LittleEndian::read_u32(id);

        let name_len = *bytes.get(4).ok_or(FromReaderError::Truncated)? as usize;

        // Names are raw length-prefixed bytes; unlike the version field,
        // nothing gets trimmed.
        let name = bytes
            .get(5..5 + name_len)
            .ok_or(FromReaderError::Truncated)?;
        let name = String::from_utf8_lossy(name).into_owned();

        let mut steps = [[0; 4]; 4];
        let mut offset = 5 + name_len;

        for group in &mut steps {
            let source = bytes
                .get(offset..offset + group.len())
                .ok_or(FromReaderError::Truncated)?;
            group.copy_from_slice(source);
            offset += group.len();
        }

        Ok((Self { id, name, steps }, offset))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) {}\t|", self.id, self.name)?;

        for group in &self.steps {
            for step in group {
                write!(f, "{}", if *step == Self::HIT { 'x' } else { '-' })?;
            }

            write!(f, "|")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_bytes(id: u32, name: &str, steps: [[u8; 4]; 4]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&id.to_le_bytes());
        bytes.push(name.len() as u8);
        bytes.extend_from_slice(name.as_bytes());

        for group in steps {
            bytes.extend_from_slice(&group);
        }

        bytes
    }

    #[test]
    fn round_trip() {
        let steps = [
            [1, 0, 0, 1],
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 1, 0, 0],
        ];

        let mut bytes = record_bytes(42, "maracas", steps);

        // Trailing bytes belong to the next record and stay untouched
        bytes.extend_from_slice(&[0xAB, 0xCD]);

        let (instrument, consumed) = Instrument::from_bytes(&bytes).expect("could not parse record");

        assert_eq!(instrument.id, 42);
        assert_eq!(instrument.name, "maracas");
        assert_eq!(instrument.steps, steps);
        assert_eq!(consumed, 5 + "maracas".len() + 16);
    }

    #[test]
    fn empty_name() {
        let bytes = record_bytes(0, "", [[0; 4]; 4]);
        let (instrument, consumed) = Instrument::from_bytes(&bytes).expect("could not parse record");

        assert_eq!(instrument.name, "");
        assert_eq!(consumed, 21);
    }

    #[test]
    fn truncation_at_every_stage() {
        let bytes = record_bytes(1, "kick", [[1, 0, 0, 0]; 4]);

        // Cut mid-id, mid-name-length, mid-name and mid-steps
        for len in [2, 4, 7, bytes.len() - 1] {
            let error = Instrument::from_bytes(&bytes[..len]).unwrap_err();
            assert!(matches!(error, FromReaderError::Truncated));
        }
    }

    #[test]
    fn display() {
        let (instrument, _) =
            Instrument::from_bytes(&record_bytes(1, "kick", [[1, 0, 0, 0]; 4]))
                .expect("could not parse record");

        assert_eq!(instrument.to_string(), "(1) kick\t|x---|x---|x---|x---|");
    }

    #[test]
    fn only_one_counts_as_a_hit() {
        let steps = [
            [0x00, 0x01, 0xFF, 0x7F],
            [0x02, 0x01, 0x01, 0x00],
            [0x00; 4],
            [0x01; 4],
        ];

        let (instrument, _) = Instrument::from_bytes(&record_bytes(9, "fx", steps))
            .expect("could not parse record");

        assert_eq!(instrument.to_string(), "(9) fx\t|-x--|-xx-|----|xxxx|");
    }
}
