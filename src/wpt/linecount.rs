//! Linecount block parsing (pagination parameters)

use std::io::{Read, Seek};
use log::debug;
use super::cursor::ByteCursor;
use super::error::Result;
use super::framing::{self, FrameSpec, LengthWidth};
use super::models::{FormatWarning, LineCountInfo};

const FRAME: FrameSpec = FrameSpec {
    name: "linecount block",
    identifier: &[0x1E],
    length_width: LengthWidth::One,
};

/// Reserved trailing tag observed in real files; not confidently understood.
const RESERVED_TAG: [u8; 3] = [0xFF, 0x05, 0x13];

/// Parse the linecount block.
///
/// Payload layout:
/// - 2 bytes: Total lines per page
/// - 2 bytes: Top margin
/// - 2 bytes: Top space
/// - 2 bytes: Bottom space
/// - 2 bytes: Bottom margin
/// - 3 bytes: Reserved tag (advisory, expected `FF 05 13`)
pub fn read<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    warnings: &mut Vec<FormatWarning>,
) -> Result<LineCountInfo> {
    framing::read_block(cursor, &FRAME, |cursor, _budget| {
        let total_lines = cursor.read_u16_le()?;
        let top_margin = cursor.read_u16_le()?;
        let top_space = cursor.read_u16_le()?;
        let bottom_space = cursor.read_u16_le()?;
        let bottom_margin = cursor.read_u16_le()?;
        let reserved = framing::read_reserved(cursor, FRAME.name, &RESERVED_TAG, warnings)?;

        debug!(
            "Linecount block: {} lines per page, margins top={} bottom={}",
            total_lines, top_margin, bottom_margin
        );

        Ok(LineCountInfo {
            total_lines,
            top_margin,
            top_space,
            bottom_space,
            bottom_margin,
            reserved,
        })
    })
}
