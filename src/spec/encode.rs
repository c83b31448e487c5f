// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

impl LocalFileHeader {
    pub fn as_slice(&self) -> [u8; LFH_LENGTH] {
        let mut array = [0; LFH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, le_u16(self.version));
        array_push!(array, cursor, le_u16(self.flags));
        array_push!(array, cursor, le_u16(self.compression));
        array_push!(array, cursor, le_u16(self.mod_time));
        array_push!(array, cursor, le_u16(self.mod_date));
        array_push!(array, cursor, le_u32(self.crc));
        array_push!(array, cursor, le_u32(self.compressed_size));
        array_push!(array, cursor, le_u32(self.uncompressed_size));
        array_push!(array, cursor, le_u16(self.file_name_length));
        array_push!(array, cursor, le_u16(self.extra_field_length));

        array
    }
}

impl CentralDirectoryRecord {
    pub fn as_slice(&self) -> [u8; CDH_LENGTH] {
        let mut array = [0; CDH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, le_u16(self.v_made_by));
        array_push!(array, cursor, le_u16(self.v_needed));
        array_push!(array, cursor, le_u16(self.flags));
        array_push!(array, cursor, le_u16(self.compression));
        array_push!(array, cursor, le_u16(self.mod_time));
        array_push!(array, cursor, le_u16(self.mod_date));
        array_push!(array, cursor, le_u32(self.crc));
        array_push!(array, cursor, le_u32(self.compressed_size));
        array_push!(array, cursor, le_u32(self.uncompressed_size));
        array_push!(array, cursor, le_u16(self.file_name_length));
        array_push!(array, cursor, le_u16(self.extra_field_length));
        array_push!(array, cursor, le_u16(self.file_comment_length));
        array_push!(array, cursor, le_u16(self.disk_start));
        array_push!(array, cursor, le_u16(self.inter_attr));
        array_push!(array, cursor, le_u32(self.exter_attr));
        array_push!(array, cursor, le_u32(self.lh_offset));

        array
    }
}

impl EndOfCentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; EOCDR_LENGTH] {
        let mut array = [0; EOCDR_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, le_u16(self.disk_num));
        array_push!(array, cursor, le_u16(self.start_cent_dir_disk));
        array_push!(array, cursor, le_u16(self.num_of_entries_disk));
        array_push!(array, cursor, le_u16(self.num_of_entries));
        array_push!(array, cursor, le_u32(self.size_cent_dir));
        array_push!(array, cursor, le_u32(self.cent_dir_offset));
        array_push!(array, cursor, le_u16(self.file_comm_length));

        array
    }
}

/// Splits a u16 into its two bytes, least significant first.
pub(crate) fn le_u16(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Splits a u32 into its four bytes, least significant first.
pub(crate) fn le_u32(value: u32) -> [u8; 4] {
    [value as u8, (value >> 8) as u8, (value >> 16) as u8, (value >> 24) as u8]
}
