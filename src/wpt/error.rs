//! Custom error types for the wpt-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant here is fatal: parsing stops at the first one raised.
/// Advisory mismatches are not errors and are recorded as
/// [`FormatWarning`](super::models::FormatWarning) values instead.
#[derive(Debug, Error)]
pub enum WptError {
    /// An error originating from I/O operations. Truncated input surfaces
    /// here as `ErrorKind::UnexpectedEof`.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A block's open or close identifier bytes did not match the expected value.
    #[error("Bad identifier for {block}: expected {expected:02X?}, found {found:02X?}")]
    BadIdentifier {
        block: &'static str,
        expected: Vec<u8>,
        found: Vec<u8>,
    },

    /// The length recorded at a block's open does not equal the length
    /// re-read at its close.
    #[error("Length mismatch in {block}: opened with {opened} bytes, closed with {closed}")]
    LengthMismatch {
        block: &'static str,
        opened: u64,
        closed: u64,
    },

    /// A payload decoder did not consume exactly the byte budget implied by
    /// the block's recorded length.
    #[error("Payload size error in {block}: budget {budget} bytes, consumed {consumed}")]
    PayloadSize {
        block: &'static str,
        budget: u64,
        consumed: u64,
    },

    /// A text block ended without its mandatory terminator byte.
    #[error("Missing terminator in {block}: expected {expected:#04X}, found {found:#04X}")]
    MissingTerminator {
        block: &'static str,
        expected: u8,
        found: u8,
    },

    /// Text contained a byte outside the ASCII range.
    #[error("Non-ASCII byte {byte:#04X} at offset {offset} in {context}")]
    NonAsciiText {
        context: &'static str,
        byte: u8,
        offset: usize,
    },

    /// The file is structurally invalid in a way no more specific variant covers.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A convenience `Result` type alias using the crate's `WptError` type.
pub type Result<T> = std::result::Result<T, WptError>;
