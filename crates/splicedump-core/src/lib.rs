//! Splicedump core library for decoding SPLICE drum-machine files.
//!
//! This crate implements the decode pipeline used by the CLI: the framer
//! validates the file header and bounds the payload, the parser decodes the
//! payload into a [`Pattern`], and the renderer turns the pattern into the
//! canonical text printout. Parsing is byte-oriented and side-effect free;
//! all I/O is isolated behind the `decode_file` entry point. Wire-format
//! conventions are captured in the `format` module so the parser stays
//! minimal and consistent with the file layout.
//!
//! Invariants:
//! - Payload consumption is byte-exact: exactly the declared payload size is
//!   interpreted, as a whole number of tracks.
//! - A decode either yields a complete `Pattern` or an error; no partial
//!   results.
//! - Decoding the same bytes twice yields structurally equal patterns.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use splicedump_core::decode_file;
//!
//! let pattern = decode_file(Path::new("pattern_1.splice"))?;
//! println!("{pattern}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod format;
mod render;

pub use format::{DecodeError, Field, decode, decode_file};

/// Number of sixteenth-note steps in one track (one bar).
pub const STEPS_PER_TRACK: usize = 16;

/// On/off flags for the sixteen steps of one track.
pub type Steps = [bool; STEPS_PER_TRACK];

/// A decoded drum-machine pattern.
///
/// Constructed once by the decoder and never mutated afterwards; track order
/// is file order.
///
/// # Examples
/// ```
/// use splicedump_core::Pattern;
///
/// let pattern = Pattern {
///     version: "0.808-alpha".to_string(),
///     tempo: 120.0,
///     tracks: Vec::new(),
/// };
/// assert_eq!(pattern.to_string(), "Saved with HW Version: 0.808-alpha\nTempo: 120\n");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Hardware version string stored in the file header.
    pub version: String,
    /// Tempo in beats per minute (stored as an IEEE-754 single).
    pub tempo: f32,
    /// Tracks in file order (may be empty).
    pub tracks: Vec<Track>,
}

/// A single percussion track within a [`Pattern`].
///
/// # Examples
/// ```
/// use splicedump_core::Track;
///
/// let track = Track {
///     id: 0,
///     name: "kick".to_string(),
///     steps: [false; 16],
/// };
/// assert_eq!(track.id, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track identifier as stored in the file.
    pub id: u32,
    /// Track name (raw bytes, no encoding validation).
    pub name: String,
    /// Step grid: `true` marks an enabled sixteenth-note step.
    pub steps: Steps,
}
