// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub version: u16,
    pub flags: u16,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralDirectoryRecord {
    pub v_made_by: u16,
    pub v_needed: u16,
    pub flags: u16,
    pub compression: u16,
    pub mod_time: u16,
    pub mod_date: u16,
    pub crc: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub disk_start: u16,
    pub inter_attr: u16,
    pub exter_attr: u32,
    pub lh_offset: u32,
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfCentralDirectoryHeader {
    pub(crate) disk_num: u16,
    pub(crate) start_cent_dir_disk: u16,
    pub(crate) num_of_entries_disk: u16,
    pub(crate) num_of_entries: u16,
    pub(crate) size_cent_dir: u32,
    pub(crate) cent_dir_offset: u32,
    pub(crate) file_comm_length: u16,
}

impl LocalFileHeader {
    /// Builds the matching central directory record for this header, pointing back at `lh_offset`.
    pub fn to_central(&self, lh_offset: u32) -> CentralDirectoryRecord {
        CentralDirectoryRecord {
            v_made_by: crate::spec::version::as_made_by(),
            v_needed: self.version,
            flags: self.flags,
            compression: self.compression,
            mod_time: self.mod_time,
            mod_date: self.mod_date,
            crc: self.crc,
            compressed_size: self.compressed_size,
            uncompressed_size: self.uncompressed_size,
            file_name_length: self.file_name_length,
            extra_field_length: self.extra_field_length,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset,
        }
    }
}

impl CentralDirectoryRecord {
    /// Returns the number of bytes this record occupies once written, including its signature and the trailing
    /// filename, extra field and comment.
    pub fn encoded_len(&self) -> u64 {
        // 6 four-byte fields (signature included), 2 one-byte version fields and 10 two-byte fields.
        let fixed = 6 * 4 + 2 + 10 * 2;
        debug_assert_eq!(fixed, crate::spec::consts::SIGNATURE_LENGTH + crate::spec::consts::CDH_LENGTH);

        fixed as u64
            + self.file_name_length as u64
            + self.extra_field_length as u64
            + self.file_comment_length as u64
    }
}
