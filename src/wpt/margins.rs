//! Margin block parsing (two positional variants sharing one shape)

use std::io::{Read, Seek};
use log::debug;
use super::cursor::ByteCursor;
use super::error::{Result, WptError};
use super::framing::{self, FrameSpec, LengthWidth};
use super::models::{FormatWarning, MarginContext, MarginInfo};

const FRAME: FrameSpec = FrameSpec {
    name: "margin block",
    identifier: &[0x98],
    length_width: LengthWidth::One,
};

/// Byte cost of the fixed fields before any tab stops.
const FIXED_FIELDS: u64 = 2 + 2 + 3 + 1 + 1;

/// Reserved-tag constant observed at each container position.
fn expected_reserved(context: MarginContext) -> &'static [u8; 3] {
    match context {
        MarginContext::PageText => &[0x00, 0x00, 0x00],
        MarginContext::Document => &[0x00, 0x00, 0x06],
    }
}

/// Parse a margin block.
///
/// Payload layout:
/// - 2 bytes: Left margin
/// - 2 bytes: Right margin
/// - 3 bytes: Reserved tag (advisory; `00 00 00` inside a header/footer,
///   `00 00 06` at document level)
/// - 1 byte:  Packed justification + pitch (kept opaque)
/// - 1 byte:  Line spacing (signed)
/// - Document level only: trailing 2-byte tab-stop positions filling the
///   rest of the payload; an odd leftover byte carries no tab stop and is
///   skipped.
pub fn read<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    context: MarginContext,
    warnings: &mut Vec<FormatWarning>,
) -> Result<MarginInfo> {
    framing::read_block(cursor, &FRAME, |cursor, budget| {
        let left_margin = cursor.read_u16_le()?;
        let right_margin = cursor.read_u16_le()?;
        let reserved =
            framing::read_reserved(cursor, FRAME.name, expected_reserved(context), warnings)?;
        let justification_pitch = cursor.read_u8()?;
        let line_spacing = cursor.read_i8()?;

        let mut tab_stops = Vec::new();
        if context == MarginContext::Document {
            let tab_bytes = budget.checked_sub(FIXED_FIELDS).ok_or_else(|| {
                WptError::InvalidFormat(format!(
                    "margin block payload of {} bytes cannot hold its {} fixed bytes",
                    budget, FIXED_FIELDS
                ))
            })?;

            tab_stops.reserve((tab_bytes / 2) as usize);
            for _ in 0..tab_bytes / 2 {
                tab_stops.push(cursor.read_u16_le()?);
            }
            if tab_bytes % 2 != 0 {
                // Odd leftover byte carries no tab stop; skip it.
                cursor.seek_relative(1)?;
            }
            debug!(
                "Margin block: left={} right={} tabs={:?}",
                left_margin, right_margin, tab_stops
            );
        }

        Ok(MarginInfo {
            left_margin,
            right_margin,
            reserved,
            justification_pitch,
            line_spacing,
            tab_stops,
        })
    })
}
