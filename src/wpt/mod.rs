//! Core WPT reader module
//!
//! # Module Organization
//!
//! - [`models`]: Decoded document structures and advisory warnings
//! - [`error`]: Error types shared by every decoder
//! - `cursor`: Sequential, seekable byte-source primitives
//! - `framing`: Generic length-prefixed block framing
//! - `linecount`, `margins`, `text_block`: Payload decoders
//! - `reader`: Top-level container assembly
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌───────────────────────┐
//! │ Open marker + tag     │ ← reader
//! ├───────────────────────┤
//! │ Linecount block       │ ← linecount::read()
//! ├───────────────────────┤
//! │ Header text block (?) │ ← text_block::read()
//! │ Footer text block (?) │   (discovered by one-byte lookahead)
//! ├───────────────────────┤
//! │ Margin block          │ ← margins::read() (tab-stop variant)
//! ├───────────────────────┤
//! │ Body text + end byte  │ ← reader
//! └───────────────────────┘
//! ```

pub mod error;
pub mod models;

mod cursor;
mod framing;
mod linecount;
mod margins;
mod reader;
mod text_block;
mod utils;

pub use error::{Result, WptError};
pub use reader::WptDocument;
