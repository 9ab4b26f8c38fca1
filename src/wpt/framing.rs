//! Generic length-prefixed block framing
//!
//! Every nested block in a WPT file has the same self-describing shape:
//!
//! - N bytes: Open identifier
//! - w bytes: Total block length (little-endian, w = 1 or 2)
//! - Payload
//! - w bytes: Total block length again
//! - N bytes: Close identifier
//!
//! The recorded length counts the whole block, identifiers and length
//! fields included. The payload decoder receives the byte budget left
//! after that framing overhead and must consume exactly that many bytes.
//! The top-level container uses fixed markers instead of recorded lengths
//! and is framed separately by the reader.

use std::io::{Read, Seek};
use log::{trace, warn};
use super::cursor::ByteCursor;
use super::error::{Result, WptError};
use super::models::FormatWarning;

/// Width of a block's two length fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthWidth {
    One,
    Two,
}

impl LengthWidth {
    fn bytes(self) -> u64 {
        match self {
            LengthWidth::One => 1,
            LengthWidth::Two => 2,
        }
    }

    fn read<R: Read + Seek>(self, cursor: &mut ByteCursor<R>) -> Result<u64> {
        match self {
            LengthWidth::One => Ok(cursor.read_u8()? as u64),
            LengthWidth::Two => Ok(cursor.read_u16_le()? as u64),
        }
    }
}

/// Static framing description for one block kind.
pub struct FrameSpec {
    /// Name used in errors and warnings.
    pub name: &'static str,
    /// Identifier bytes expected at both ends of the block.
    pub identifier: &'static [u8],
    pub length_width: LengthWidth,
}

/// Read one framed block, handing its payload budget to `decode`.
///
/// Enforces the block invariants: matching identifiers at both ends,
/// equal length fields, and a payload decoder that consumes exactly the
/// budget implied by the recorded length.
pub fn read_block<R, T, F>(cursor: &mut ByteCursor<R>, frame: &FrameSpec, decode: F) -> Result<T>
where
    R: Read + Seek,
    F: FnOnce(&mut ByteCursor<R>, u64) -> Result<T>,
{
    let found = cursor.read_bytes(frame.identifier.len())?;
    if found != frame.identifier {
        return Err(WptError::BadIdentifier {
            block: frame.name,
            expected: frame.identifier.to_vec(),
            found,
        });
    }

    let total = frame.length_width.read(cursor)?;
    let overhead = 2 * frame.identifier.len() as u64 + 2 * frame.length_width.bytes();
    let budget = total.checked_sub(overhead).ok_or_else(|| {
        WptError::InvalidFormat(format!(
            "{} records {} total bytes, less than its {} bytes of framing",
            frame.name, total, overhead
        ))
    })?;
    trace!("{}: total {} bytes, payload budget {}", frame.name, total, budget);

    let payload_start = cursor.position()?;
    let value = decode(cursor, budget)?;
    let consumed = cursor.position()? - payload_start;
    if consumed != budget {
        return Err(WptError::PayloadSize {
            block: frame.name,
            budget,
            consumed,
        });
    }

    let closed = frame.length_width.read(cursor)?;
    if closed != total {
        return Err(WptError::LengthMismatch {
            block: frame.name,
            opened: total,
            closed,
        });
    }

    let found = cursor.read_bytes(frame.identifier.len())?;
    if found != frame.identifier {
        return Err(WptError::BadIdentifier {
            block: frame.name,
            expected: frame.identifier.to_vec(),
            found,
        });
    }

    Ok(value)
}

/// Read a fixed-width reserved field and compare it against the observed
/// constant.
///
/// A mismatch is advisory: it is recorded and logged, never fatal, and the
/// bytes actually read are returned either way.
pub fn read_reserved<R: Read + Seek, const N: usize>(
    cursor: &mut ByteCursor<R>,
    block: &'static str,
    expected: &[u8; N],
    warnings: &mut Vec<FormatWarning>,
) -> Result<[u8; N]> {
    let found = cursor.read_bytes(N)?;
    if found != *expected {
        let warning = FormatWarning::ReservedTag {
            block,
            expected: expected.to_vec(),
            found: found.clone(),
        };
        warn!("{}", warning);
        warnings.push(warning);
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&found);
    Ok(out)
}
