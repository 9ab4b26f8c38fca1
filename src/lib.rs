//! # wpt-reader
//!
//! A reader for legacy WPT word-processor document files.
//! Decodes the length-framed binary container into the document body text
//! plus layout metadata (margins, tab stops, line spacing, header/footer
//! text, and pagination parameters).
pub mod wpt;

// Re-export the main types for convenience
pub use wpt::{
    WptDocument,
    WptError,
    Result,
    models::{
        LineCountInfo,
        MarginInfo,
        MarginContext,
        TextBlock,
        FormatWarning,
    },
};
