//! Top-level WPT container parsing

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use log::{debug, info, warn};
use super::cursor::ByteCursor;
use super::error::{Result, WptError};
use super::framing;
use super::models::{FormatWarning, LineCountInfo, MarginContext, MarginInfo, TextBlock};
use super::{linecount, margins, text_block, utils};

/// Fixed 3-byte marker opening the container; fatal on mismatch.
const OPEN_MARKER: [u8; 3] = [0x8F, 0x81, 0x01];

/// Reserved tag following the open marker; advisory on mismatch.
const RESERVED_TAG: [u8; 5] = [0x07, 0x00, 0x00, 0x42, 0x52];

/// Single-byte marker expected as the final byte of the file.
///
/// Unlike every nested block, a mismatch here is advisory only: the body
/// has already been read in full by the time this byte is checked.
const CLOSE_MARKER: u8 = 0xDE;

const CONTAINER: &str = "document container";

/// A fully decoded WPT document.
///
/// Produced in a single forward pass over the source; every field is
/// populated exactly once and never mutated afterwards.
#[derive(Debug)]
pub struct WptDocument {
    pub linecount: LineCountInfo,
    pub header: Option<TextBlock>,
    pub footer: Option<TextBlock>,
    /// Document-level margin settings, including the tab-stop list.
    pub margin: MarginInfo,
    /// Document body text (strict ASCII).
    pub body: String,
    /// Advisory mismatches recorded during the parse.
    pub warnings: Vec<FormatWarning>,
}

impl WptDocument {
    /// Read a WPT file from the given path.
    ///
    /// The file handle lives only for the duration of the parse and is
    /// released on every exit path, including parse failure.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, is truncated, or
    /// violates any fatal structural invariant (identifier or length
    /// mismatch, missing text terminator, non-ASCII text).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening WPT file: {}", path.display());
        let mut file = File::open(path)?;
        Self::from_reader(&mut file)
    }

    /// Parse a WPT document from an already-open, randomly-seekable source.
    ///
    /// Container layout:
    /// - 3 bytes: Open marker (`8F 81 01`, fatal on mismatch)
    /// - 5 bytes: Reserved tag (`07 00 00 42 52`, advisory)
    /// - Linecount block (mandatory)
    /// - Header text block (optional)
    /// - Footer text block (optional)
    /// - Document-level margin block (mandatory)
    /// - Body text (everything up to the final byte, ASCII)
    /// - 1 byte:  Close marker (`DE`, advisory)
    ///
    /// The container records no length of its own; its end is the final
    /// byte of the source. Header and footer share one identifier and are
    /// discovered by a single byte of lookahead each: the first text block
    /// found is the header, the second is the footer.
    pub fn from_reader<R: Read + Seek>(source: &mut R) -> Result<Self> {
        let mut cursor = ByteCursor::new(source);
        let mut warnings = Vec::new();

        let found = cursor.read_bytes(OPEN_MARKER.len())?;
        if found != OPEN_MARKER {
            return Err(WptError::BadIdentifier {
                block: CONTAINER,
                expected: OPEN_MARKER.to_vec(),
                found,
            });
        }
        framing::read_reserved(&mut cursor, CONTAINER, &RESERVED_TAG, &mut warnings)?;

        let linecount = linecount::read(&mut cursor, &mut warnings)?;

        let mut header = None;
        let mut footer = None;
        if cursor.peek_one()? == text_block::IDENTIFIER {
            header = Some(text_block::read(&mut cursor, &mut warnings)?);
            debug!("Header block present");
        }
        if cursor.peek_one()? == text_block::IDENTIFIER {
            footer = Some(text_block::read(&mut cursor, &mut warnings)?);
            debug!("Footer block present");
        }

        let margin = margins::read(&mut cursor, MarginContext::Document, &mut warnings)?;

        let mut tail = cursor.read_to_end()?;
        let end_byte = tail.pop().ok_or_else(|| {
            WptError::InvalidFormat("container ends before its close marker".to_string())
        })?;
        let body = utils::decode_ascii(tail, "document body")?;

        if end_byte != CLOSE_MARKER {
            let warning = FormatWarning::EndMarker {
                expected: CLOSE_MARKER,
                found: end_byte,
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        info!(
            "WPT document parsed: {} body bytes, header {}, footer {}, {} warnings",
            body.len(),
            if header.is_some() { "present" } else { "absent" },
            if footer.is_some() { "present" } else { "absent" },
            warnings.len()
        );

        Ok(Self {
            linecount,
            header,
            footer,
            margin,
            body,
            warnings,
        })
    }
}
