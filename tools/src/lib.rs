//! # Splice Tools
//!
//! Splice drum machines save their sequencer state as `.splice` pattern files. Without the
//! hardware those files are opaque blobs, which is inconvenient when you want to check what's
//! on a memory card full of them. This crate provides a command-line utility that decodes
//! pattern files and prints their contents.
//!
//! ## Inspect
//!
//! ```console
//! splice-tools-inspect 0.1.0
//! Stijn Frishert <info@stijnfrishert.com>
//! Inspect .splice pattern files, or even entire directories for their contents
//!
//! USAGE:
//!     splice-tools inspect [OPTIONS] [PATH]...
//!
//! ARGS:
//!     <PATH>...    The path(s) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -r, --recursive    Search folders recursively
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > splice-tools inspect pattern_1.splice
//! pattern_1.splice
//! Saved with HW Version: 0.808-alpha
//! Tempo: 120
//! (0) kick        |x---|x---|x---|x---|
//! (1) snare       |----|x---|----|x---|
//! (2) clap        |----|x-x-|----|----|
//! (3) hh-open     |--x-|--x-|x-x-|--x-|
//! (4) hh-close    |x---|x---|----|x--x|
//! (5) cowbell     |----|----|--x-|----|
//! ```

pub mod inspect;
