//! Data structures representing WPT format components

use std::fmt;

/// Pagination parameters from the linecount block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCountInfo {
    pub total_lines: u16,
    pub top_margin: u16,
    pub top_space: u16,
    pub bottom_space: u16,
    pub bottom_margin: u16,
    /// Reserved trailing tag, observed as `FF 05 13`; kept as read.
    pub reserved: [u8; 3],
}

/// Which container position a margin block was decoded from.
///
/// Both positions share one byte shape but differ in the expected
/// reserved-tag constant and in whether tab stops follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginContext {
    /// Nested inside a header or footer text block; fixed shape, no tab stops.
    PageText,
    /// Document level; a trailing tab-stop list fills the rest of the payload.
    Document,
}

/// Margin and layout settings from a margin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginInfo {
    pub left_margin: u16,
    pub right_margin: u16,
    /// Reserved tag; the expected constant depends on the block's position
    /// (see [`MarginContext`]) and a mismatch is advisory-only.
    pub reserved: [u8; 3],
    /// Packed justification + pitch byte, kept opaque.
    pub justification_pitch: u8,
    pub line_spacing: i8,
    /// Ordered tab-stop positions; always empty in the page-text variant.
    pub tab_stops: Vec<u16>,
}

/// A header or footer: its margin settings plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub margin: MarginInfo,
    pub text: String,
}

/// An advisory format mismatch recorded during a parse.
///
/// These cover fields whose expected constants are observed in real files
/// but not confidently understood. A mismatch is reported and the bytes
/// actually read are kept; parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatWarning {
    /// A reserved constant-byte field held an unexpected value.
    ReservedTag {
        block: &'static str,
        expected: Vec<u8>,
        found: Vec<u8>,
    },
    /// The container's trailing close marker held an unexpected value.
    EndMarker { expected: u8, found: u8 },
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatWarning::ReservedTag {
                block,
                expected,
                found,
            } => write!(
                f,
                "unexpected reserved bytes in {}: expected {:02X?}, found {:02X?}",
                block, expected, found
            ),
            FormatWarning::EndMarker { expected, found } => write!(
                f,
                "file ends with unexpected byte: expected {:#04X}, found {:#04X}",
                expected, found
            ),
        }
    }
}
