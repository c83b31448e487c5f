// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Write;

use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::consts::{EOCDR_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};
use crate::spec::header::EndOfCentralDirectoryHeader;
use crate::write::cd::CentralDirectoryLayout;
use crate::write::io::offset::OffsetWriter;

/// Writes the end of central directory record for a single-disk archive without a comment.
pub(crate) fn write_end_of_central_directory<W: Write>(
    writer: &mut OffsetWriter<W>,
    num_entries: usize,
    directory: &CentralDirectoryLayout,
) -> Result<EndOfCentralDirectoryHeader> {
    if num_entries == 0 {
        return Err(ZipError::EmptyArchive);
    }

    let num_entries = u16::try_from(num_entries)
        .ok()
        .filter(|num| *num < NON_ZIP64_MAX_NUM_FILES)
        .ok_or(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles))?;

    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: num_entries,
        num_of_entries: num_entries,
        size_cent_dir: to_non_zip64_u32(directory.size)?,
        cent_dir_offset: to_non_zip64_u32(directory.offset)?,
        file_comm_length: 0,
    };

    writer.write_u32_le(EOCDR_SIGNATURE)?;
    writer.write_all(&header.as_slice())?;

    tracing::debug!(
        entries = num_entries,
        cd_offset = header.cent_dir_offset,
        cd_size = header.size_cent_dir,
        "wrote end of central directory record"
    );

    Ok(header)
}

fn to_non_zip64_u32(value: u64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|value| *value < NON_ZIP64_MAX_SIZE)
        .ok_or(ZipError::Zip64Needed(Zip64ErrorCase::LargeFile))
}
