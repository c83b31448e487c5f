// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing stored ZIP files.
//!
//! Records are emitted strictly in the order a reader expects them: every local file header directly followed by its
//! data, then one central directory record per entry, then the end of central directory record.
//!
//! # Example
//! ```no_run
//! # use zipdir::{Compression, ZipEntryBuilder, write::ZipFileWriter};
//! # use zipdir::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new(Vec::<u8>::new());
//!
//! let data = b"This is an example file.";
//! let opts = ZipEntryBuilder::new(String::from("foo.txt"), Compression::Stored);
//!
//! writer.write_entry_whole(opts, data)?;
//! let bytes = writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod cd;
pub(crate) mod entry_whole;
pub(crate) mod eocdr;
pub(crate) mod io;

pub use io::offset::OffsetWriter;

use std::io::Write;

use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::header::CentralDirectoryRecord;

use entry_whole::EntryWholeWriter;

pub(crate) struct CentralDirectoryEntry {
    pub header: CentralDirectoryRecord,
    pub entry: ZipEntry,
}

/// The positions and sizes recorded in the end of central directory record of a closed archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveLayout {
    /// The number of entries in the archive.
    pub entries: u16,
    /// The offset of the first central directory record.
    pub cd_offset: u32,
    /// The summed size of all central directory records.
    pub cd_size: u32,
    /// The total number of bytes written, trailer included.
    pub archive_size: u64,
}

/// A ZIP file writer which acts over [`Write`] implementers.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called before a writer goes out of scope.
pub struct ZipFileWriter<W: Write> {
    pub(crate) writer: OffsetWriter<W>,
    pub(crate) cd_entries: Vec<CentralDirectoryEntry>,
}

impl<W: Write> ZipFileWriter<W> {
    /// Construct a new ZIP file writer from a writer.
    pub fn new(writer: W) -> Self {
        Self { writer: OffsetWriter::new(writer), cd_entries: Vec::new() }
    }

    /// Write a new ZIP entry of known size and data.
    ///
    /// Returns the offset at which the entry's local file header was written.
    pub fn write_entry_whole<E: Into<ZipEntry>>(&mut self, entry: E, data: &[u8]) -> Result<u64> {
        EntryWholeWriter::from_raw(self, entry.into(), data).write()
    }

    /// Returns the number of entries written so far.
    pub fn len(&self) -> usize {
        self.cd_entries.len()
    }

    /// Returns whether or not no entries have been written yet.
    pub fn is_empty(&self) -> bool {
        self.cd_entries.is_empty()
    }

    /// Returns the number of bytes written so far.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    /// - Flushing the inner writer.
    ///
    /// Failure to call this function before going out of scope would result in a corrupted ZIP file.
    pub fn close(self) -> Result<W> {
        self.finish().map(|(writer, _)| writer)
    }

    /// Equivalent to [`ZipFileWriter::close()`] but also returns the layout recorded in the trailer.
    ///
    /// An archive without entries cannot be closed: there is no first central directory record for the trailer to
    /// point at, so [`ZipError::EmptyArchive`] is returned and nothing further is written.
    pub fn finish(mut self) -> Result<(W, ArchiveLayout)> {
        if self.cd_entries.is_empty() {
            return Err(ZipError::EmptyArchive);
        }

        let directory = cd::write_central_directory(&mut self.writer, &self.cd_entries)?;
        let header = eocdr::write_end_of_central_directory(&mut self.writer, self.cd_entries.len(), &directory)?;
        self.writer.flush()?;

        let layout = ArchiveLayout {
            entries: header.num_of_entries,
            cd_offset: header.cent_dir_offset,
            cd_size: header.size_cent_dir,
            archive_size: self.writer.offset(),
        };

        Ok((self.writer.into_inner(), layout))
    }
}
