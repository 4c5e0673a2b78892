//! Decoding for Splice drum machine pattern files
//!
//! The Splice sequencer stores one drum pattern per `.splice` file: a magic
//! header, a single length byte that frames everything after it, the version
//! of the hardware that saved the file, a playback tempo and a list of
//! instrument tracks with 16 step flags each. This crate parses those files
//! into a [`Pattern`](pattern::Pattern) and renders them back out as text,
//! so patterns can be inspected without the original hardware.
//!
//! ```no_run
//! use splice::pattern::Pattern;
//!
//! // Load a pattern from a path on disk
//! let pattern = Pattern::from_path("pattern_1.splice")?;
//!
//! // Or from an arbitrary reader
//! let pattern = Pattern::from_reader(std::fs::File::open("pattern_1.splice")?)?;
//!
//! print!("{pattern}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod pattern;
