// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Write;

use crate::error::{Result, ZipError};
use crate::spec::consts::CDH_SIGNATURE;
use crate::write::io::offset::OffsetWriter;
use crate::write::CentralDirectoryEntry;

/// Where the central directory was written and how many bytes it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CentralDirectoryLayout {
    /// The offset at which the first record was written.
    pub offset: u64,
    /// The summed encoded length of every record.
    pub size: u64,
}

/// Writes one central directory record per entry, in the order the entries were written.
pub(crate) fn write_central_directory<W: Write>(
    writer: &mut OffsetWriter<W>,
    entries: &[CentralDirectoryEntry],
) -> Result<CentralDirectoryLayout> {
    let mut first_offset = None;
    let mut size = 0;

    for entry in entries {
        let offset = writer.offset();
        if first_offset.is_none() {
            first_offset = Some(offset);
        }
        size += write_record(writer, entry)?;

        debug_assert_eq!(writer.offset() - offset, entry.header.encoded_len());
    }

    let offset = first_offset.ok_or(ZipError::EmptyArchive)?;
    Ok(CentralDirectoryLayout { offset, size })
}

/// Writes a single central directory record and returns its encoded length.
fn write_record<W: Write>(writer: &mut OffsetWriter<W>, entry: &CentralDirectoryEntry) -> Result<u64> {
    tracing::trace!(
        filename = entry.entry.filename(),
        lh_offset = entry.header.lh_offset,
        offset = writer.offset(),
        "writing central directory record"
    );

    writer.write_u32_le(CDH_SIGNATURE)?;
    writer.write_all(&entry.header.as_slice())?;
    writer.write_all(entry.entry.filename().as_bytes())?;

    Ok(entry.header.encoded_len())
}
