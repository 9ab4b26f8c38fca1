//! Low-level cursor over a seekable byte source

use std::io::{Read, Seek, SeekFrom};
use byteorder::{LittleEndian, ReadBytesExt};
use super::error::Result;

/// Sequential reader over a finite, randomly-seekable byte source.
///
/// Wraps the source with the small set of primitives the block decoders
/// need: exact-length reads, little-endian integer fields, a one-byte
/// non-consuming lookahead, and position tracking.
pub struct ByteCursor<R> {
    source: R,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read exactly `len` bytes, failing with `UnexpectedEof` if fewer remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.source.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.source.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.source.read_i8()?)
    }

    /// Read a 2-byte little-endian number.
    ///
    /// Used throughout the WPT format for size and position fields.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(self.source.read_u16::<LittleEndian>()?)
    }

    /// Return the next byte without consuming it.
    ///
    /// Implemented as read-then-rewind, which is why the source must
    /// support random access rather than pure streaming.
    pub fn peek_one(&mut self) -> Result<u8> {
        let byte = self.source.read_u8()?;
        self.source.seek(SeekFrom::Current(-1))?;
        Ok(byte)
    }

    /// Skip `offset` bytes relative to the current position.
    pub fn seek_relative(&mut self, offset: i64) -> Result<()> {
        self.source.seek(SeekFrom::Current(offset))?;
        Ok(())
    }

    /// Current byte offset from the start of the source.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.source.stream_position()?)
    }

    /// Consume every byte left in the source.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.source.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
