// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Write;

use crate::crc::compute_crc;
use crate::entry::ZipEntry;
use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::consts::{LFH_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};
use crate::spec::header::LocalFileHeader;
use crate::write::{CentralDirectoryEntry, ZipFileWriter};

pub struct EntryWholeWriter<'b, 'c, W: Write> {
    writer: &'b mut ZipFileWriter<W>,
    entry: ZipEntry,
    data: &'c [u8],
}

impl<'b, 'c, W: Write> EntryWholeWriter<'b, 'c, W> {
    pub fn from_raw(writer: &'b mut ZipFileWriter<W>, entry: ZipEntry, data: &'c [u8]) -> Self {
        Self { writer, entry, data }
    }

    pub fn write(self) -> Result<u64> {
        // 0xFFFF is reserved as the ZIP64 marker in the end of central directory record.
        if self.writer.cd_entries.len() + 1 >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles));
        }

        let lh_offset = self.writer.writer.offset();
        let lh_offset_u32 = u32::try_from(lh_offset)
            .ok()
            .filter(|offset| *offset < NON_ZIP64_MAX_SIZE)
            .ok_or(ZipError::Zip64Needed(Zip64ErrorCase::LargeFile))?;

        // Stored data is written verbatim so both sizes are the data's length.
        let size = u32::try_from(self.data.len())
            .ok()
            .filter(|size| *size < NON_ZIP64_MAX_SIZE)
            .ok_or(ZipError::Zip64Needed(Zip64ErrorCase::LargeFile))?;

        let lf_header = LocalFileHeader {
            version: crate::spec::version::as_needed_to_extract(&self.entry),
            flags: 0,
            compression: self.entry.compression().into(),
            mod_time: 0,
            mod_date: 0,
            crc: compute_crc(self.data),
            compressed_size: size,
            uncompressed_size: size,
            file_name_length: self.entry.filename().len().try_into().map_err(|_| ZipError::FileNameTooLarge)?,
            extra_field_length: 0,
        };

        self.writer.writer.write_u32_le(LFH_SIGNATURE)?;
        self.writer.writer.write_all(&lf_header.as_slice())?;
        self.writer.writer.write_all(self.entry.filename().as_bytes())?;
        self.writer.writer.write_all(self.data)?;

        tracing::debug!(
            filename = self.entry.filename(),
            offset = lh_offset,
            size,
            crc = lf_header.crc,
            "wrote local file header and data"
        );

        let header = lf_header.to_central(lh_offset_u32);
        self.writer.cd_entries.push(CentralDirectoryEntry { header, entry: self.entry });

        Ok(lh_offset)
    }
}
