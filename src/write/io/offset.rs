// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Error, Write};

use crate::spec::encode::{le_u16, le_u32};

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
///
/// This type is only ever used internally to record where each local file header begins, and where the central
/// directory starts and ends.
pub struct OffsetWriter<W: Write> {
    inner: W,
    offset: u64,
}

impl<W: Write> OffsetWriter<W> {
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Writes a u16 with little endianness, regardless of the host's byte order.
    pub fn write_u16_le(&mut self, value: u16) -> Result<(), Error> {
        self.write_all(&le_u16(value))
    }

    /// Writes a u32 with little endianness, regardless of the host's byte order.
    pub fn write_u32_le(&mut self, value: u32) -> Result<(), Error> {
        self.write_all(&le_u32(value))
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for OffsetWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        let written = self.inner.write(buf)?;
        self.offset += written as u64;

        Ok(written)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()
    }
}
