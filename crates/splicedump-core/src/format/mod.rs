//! SPLICE wire-format decoding.
//!
//! The framer validates the magic identifier and bounds further reads to the
//! declared payload size, then the parser decodes version, tempo, and the
//! track list in fixed order until the payload is exhausted.
//!
//! Errors distinguish a non-SPLICE input from a truncated one, and truncation
//! errors name the field that came up short. Wire-format details are defined
//! in `layout`, while the bounded cursor and safe reads live in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::{DecodeError, Field};
pub use parser::{decode, decode_file};
