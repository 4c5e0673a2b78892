//! Splice pattern files and everything they're made of

pub mod instrument;

use byteorder::{ByteOrder, LittleEndian};
use instrument::Instrument;
use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
    slice,
};
use thiserror::Error;

/// A single decoded drum machine pattern
///
/// Every `.splice` file stores exactly one pattern: the version of the
/// hardware that saved it, the tempo to play it back at and an ordered list
/// of [`Instrument`] tracks. Instruments appear in file order and may share
/// ids; nothing is deduplicated or sorted.
///
/// ```no_run
/// # use splice::pattern::Pattern;
/// let pattern = Pattern::from_path("pattern_1.splice")?;
///
/// println!("{} instruments at {} bpm", pattern.instruments.len(), pattern.tempo);
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Formatting a pattern yields the canonical text representation: a version
/// line, a tempo line and one step grid line per instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// The version of the hardware that saved the pattern
    pub version: String,

    /// The playback tempo in beats per minute
    pub tempo: f32,

    /// The instrument tracks, in file order
    pub instruments: Vec<Instrument>,
}

impl Pattern {
    /// The length in bytes of the magic marker at the start of every file
    const HEADER_LEN: usize = 13;

    /// The magic marker itself, before its zero-byte padding
    const HEADER_MAGIC: &'static [u8] = b"SPLICE";

    /// The length in bytes of the hardware version field
    const VERSION_LEN: usize = 32;

    /// The length in bytes of the tempo field
    const TEMPO_LEN: usize = 4;

    /// Parse a pattern from an I/O reader
    ///
    /// The reader is consumed up to the end of the framed payload; anything
    /// after that is left untouched.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut header = [0; Self::HEADER_LEN];
        reader.read_exact(&mut header)?;

        if trim_trailing_zeros(&header) != Self::HEADER_MAGIC {
            return Err(FromReaderError::InvalidHeader);
        }

        // The single byte after the header is the sole length authority for
        // the rest of the file; there is no end-of-data marker anywhere below.
        let mut length = 0;
        reader.read_exact(slice::from_mut(&mut length))?;

        // Once the length is declared, coming up short is a framing problem
        // with the file itself rather than an I/O failure.
        let mut payload = vec![0; length as usize];
        reader
            .read_exact(&mut payload)
            .map_err(|error| match error.kind() {
                io::ErrorKind::UnexpectedEof => FromReaderError::Truncated,
                _ => FromReaderError::Io(error),
            })?;

        if payload.len() < Self::VERSION_LEN + Self::TEMPO_LEN {
            return Err(FromReaderError::Truncated);
        }

        let version = String::from_utf8_lossy(trim_trailing_zeros(&payload[..Self::VERSION_LEN]))
            .into_owned();

        let tempo =
            LittleEndian::read_f32(&payload[Self::VERSION_LEN..Self::VERSION_LEN + Self::TEMPO_LEN]);

        let mut remaining = &payload[Self::VERSION_LEN + Self::TEMPO_LEN..];
        let mut instruments = Vec::new();

        // Each record reports how many bytes it took up; the remainder has to
        // land on exactly zero or the declared length was a lie.
        while !remaining.is_empty() {
            let (instrument, consumed) = Instrument::from_bytes(remaining)?;
            remaining = &remaining[consumed..];
            instruments.push(instrument);
        }

        Ok(Self {
            version,
            tempo,
            instruments,
        })
    }

    /// Parse a pattern from a path on disk (.splice)
    pub fn from_path<P>(path: P) -> Result<Self, FromReaderError>
    where
        P: AsRef<Path>,
    {
        Self::from_reader(File::open(path)?)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;

        for instrument in &self.instruments {
            writeln!(f, "{instrument}")?;
        }

        Ok(())
    }
}

/// Strip the zero bytes padding out the end of a fixed-size field
fn trim_trailing_zeros(bytes: &[u8]) -> &[u8] {
    let len = bytes
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |index| index + 1);

    &bytes[..len]
}

/// An error describing what could go wrong reading a [`Pattern`] from I/O
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Every pattern file starts with the same magic marker. This error is
    /// returned when the first bytes don't match it.
    #[error("The file does not start with a valid pattern header")]
    InvalidHeader,

    /// The declared payload length promises more data than the file actually
    /// holds, or an instrument record runs past the end of it
    #[error("The pattern data ends before its declared length")]
    Truncated,

    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Io(#[from] io::Error),
}
