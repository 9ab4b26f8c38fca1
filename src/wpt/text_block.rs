//! Header/footer text block parsing
//!
//! Headers and footers share the identifier `1C` and are told apart purely
//! by order of appearance after the linecount block: the first text block
//! in the container is the header, the second is the footer. There is no
//! distinguishing tag in the format itself.

use std::io::{Read, Seek};
use log::trace;
use super::cursor::ByteCursor;
use super::error::{Result, WptError};
use super::framing::{self, FrameSpec, LengthWidth};
use super::margins;
use super::models::{FormatWarning, MarginContext, TextBlock};
use super::utils;

/// Identifier byte the container peeks for when probing for an optional
/// header or footer.
pub const IDENTIFIER: u8 = 0x1C;

const FRAME: FrameSpec = FrameSpec {
    name: "text block",
    identifier: &[IDENTIFIER],
    length_width: LengthWidth::Two,
};

/// Mandatory terminator byte closing the text payload.
const TERMINATOR: u8 = 0x02;

/// Parse a header or footer block.
///
/// Payload layout:
/// - Nested margin block (page-text variant, no tab stops)
/// - N bytes: ASCII text, where N is the payload budget left after the
///   margin block minus one byte for the terminator
/// - 1 byte:  Terminator (`02`, fatal if missing)
pub fn read<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    warnings: &mut Vec<FormatWarning>,
) -> Result<TextBlock> {
    framing::read_block(cursor, &FRAME, |cursor, budget| {
        let margin_start = cursor.position()?;
        let margin = margins::read(cursor, MarginContext::PageText, warnings)?;
        let margin_bytes = cursor.position()? - margin_start;

        let text_bytes = budget.checked_sub(margin_bytes + 1).ok_or_else(|| {
            WptError::InvalidFormat(format!(
                "text block payload of {} bytes cannot hold its {}-byte margin block and terminator",
                budget, margin_bytes
            ))
        })?;
        let text = utils::decode_ascii(cursor.read_bytes(text_bytes as usize)?, "text block")?;

        let terminator = cursor.read_u8()?;
        if terminator != TERMINATOR {
            return Err(WptError::MissingTerminator {
                block: FRAME.name,
                expected: TERMINATOR,
                found: terminator,
            });
        }

        trace!("Text block: {} text bytes", text_bytes);
        Ok(TextBlock { margin, text })
    })
}
