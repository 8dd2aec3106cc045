use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{Pattern, Steps, Track};

use super::error::{DecodeError, Field};
use super::layout;
use super::reader::{PayloadReader, frame, read_payload_field};

/// Decode the SPLICE file at `path`.
///
/// The file is opened for the duration of one decode pass and released when
/// the call returns, on success and failure alike. An open failure (missing
/// path, permissions) surfaces as `DecodeError::Io`.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use splicedump_core::decode_file;
///
/// let pattern = decode_file(Path::new("pattern_1.splice"))?;
/// assert!(!pattern.version.is_empty());
/// # Ok::<(), splicedump_core::DecodeError>(())
/// ```
///
/// # Errors
/// See [`decode`].
pub fn decode_file(path: &Path) -> Result<Pattern, DecodeError> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decode a SPLICE byte stream into a [`Pattern`].
///
/// Frames the payload behind the magic identifier, then decodes version,
/// tempo, and tracks in fixed order until exactly the declared payload size
/// has been consumed. Bytes past the payload boundary are left untouched.
///
/// # Examples
/// ```
/// use splicedump_core::decode;
///
/// let mut bytes = b"SPLICE".to_vec();
/// bytes.extend_from_slice(&36i64.to_be_bytes());
/// let mut version = [0u8; 32];
/// version[..5].copy_from_slice(b"0.909");
/// bytes.extend_from_slice(&version);
/// bytes.extend_from_slice(&240.0f32.to_le_bytes());
///
/// let pattern = decode(&bytes[..])?;
/// assert_eq!(pattern.version, "0.909");
/// assert_eq!(pattern.tempo, 240.0);
/// assert!(pattern.tracks.is_empty());
/// # Ok::<(), splicedump_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `UnsupportedFormat` for a non-SPLICE stream, `TruncatedHeader`
/// when the fixed header is short, and `TruncatedField` naming the field
/// that came up short during payload decoding. No partial pattern is
/// returned.
pub fn decode<R: Read>(source: R) -> Result<Pattern, DecodeError> {
    let mut payload = frame(source)?;
    decode_pattern(&mut payload)
}

fn decode_pattern<R: Read>(payload: &mut PayloadReader<R>) -> Result<Pattern, DecodeError> {
    let mut version = [0u8; layout::VERSION_LEN];
    read_payload_field(payload, &mut version, Field::Version)?;
    let version = crop_version(&version);

    let mut tempo = [0u8; layout::TEMPO_LEN];
    read_payload_field(payload, &mut tempo, Field::Tempo)?;
    let tempo = f32::from_le_bytes(tempo);

    let mut tracks = Vec::new();
    while payload.remaining() > 0 {
        tracks.push(decode_track(payload)?);
    }

    Ok(Pattern {
        version,
        tempo,
        tracks,
    })
}

fn decode_track<R: Read>(payload: &mut PayloadReader<R>) -> Result<Track, DecodeError> {
    let mut id = [0u8; layout::TRACK_ID_LEN];
    read_payload_field(payload, &mut id, Field::TrackId)?;
    let id = u32::from_le_bytes(id);

    let name = decode_track_name(payload)?;
    let steps = decode_steps(payload)?;

    Ok(Track { id, name, steps })
}

fn decode_track_name<R: Read>(payload: &mut PayloadReader<R>) -> Result<String, DecodeError> {
    let mut len = [0u8; 1];
    read_payload_field(payload, &mut len, Field::TrackNameLength)?;

    let mut name = vec![0u8; len[0] as usize];
    read_payload_field(payload, &mut name, Field::TrackName)?;
    Ok(String::from_utf8_lossy(&name).into_owned())
}

fn decode_steps<R: Read>(payload: &mut PayloadReader<R>) -> Result<Steps, DecodeError> {
    let mut bytes = [0u8; layout::STEPS_LEN];
    read_payload_field(payload, &mut bytes, Field::Steps)?;

    let mut steps = [false; layout::STEPS_LEN];
    for (step, byte) in steps.iter_mut().zip(bytes) {
        // Strictly 0x01 means enabled; any other value is off.
        *step = byte == layout::STEP_ON;
    }
    Ok(steps)
}

/// Crop the fixed-width version field at the first zero byte, keeping the
/// full width when none is present.
fn crop_version(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
