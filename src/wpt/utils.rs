//! Low-level text decoding utilities

use super::error::{Result, WptError};

/// Decode bytes as strict single-byte ASCII.
///
/// The format predates multi-byte encodings; bytes outside the ASCII range
/// have no defined meaning and are rejected rather than guessed at.
pub fn decode_ascii(bytes: Vec<u8>, context: &'static str) -> Result<String> {
    let mut text = String::with_capacity(bytes.len());
    for (offset, &byte) in bytes.iter().enumerate() {
        if !byte.is_ascii() {
            return Err(WptError::NonAsciiText {
                context,
                byte,
                offset,
            });
        }
        text.push(byte as char);
    }
    Ok(text)
}
