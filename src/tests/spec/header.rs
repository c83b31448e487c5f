// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{CDH_LENGTH, LFH_SIGNATURE, SIGNATURE_LENGTH};
use crate::spec::encode::{le_u16, le_u32};
use crate::spec::header::{EndOfCentralDirectoryHeader, LocalFileHeader};

fn sample_lfh() -> LocalFileHeader {
    LocalFileHeader {
        version: 10,
        flags: 0,
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0xDEADBEEF,
        compressed_size: 0x01020304,
        uncompressed_size: 0x01020304,
        file_name_length: 5,
        extra_field_length: 0,
    }
}

#[test]
fn little_endian_helpers() {
    assert_eq!(le_u16(0x0102), [0x02u8, 0x01]);
    assert_eq!(le_u32(0x01020304), [0x04u8, 0x03, 0x02, 0x01]);
    assert_eq!(&le_u32(LFH_SIGNATURE), b"PK\x03\x04");
}

#[test]
fn local_file_header_layout() {
    let bytes = sample_lfh().as_slice();

    #[rustfmt::skip]
    let expected: [u8; 26] = [
        10, 0,
        0, 0,
        0, 0,
        0, 0,
        0, 0,
        0xEF, 0xBE, 0xAD, 0xDE,
        0x04, 0x03, 0x02, 0x01,
        0x04, 0x03, 0x02, 0x01,
        5, 0,
        0, 0,
    ];

    assert_eq!(bytes, expected);
}

#[test]
fn central_directory_record_mirrors_local_header() {
    let lfh = sample_lfh();
    let cdr = lfh.to_central(0x0A0B0C0D);

    assert_eq!(cdr.v_needed, lfh.version);
    assert_eq!(cdr.crc, lfh.crc);
    assert_eq!(cdr.compressed_size, lfh.uncompressed_size);
    assert_eq!(cdr.file_name_length, lfh.file_name_length);
    assert_eq!(cdr.lh_offset, 0x0A0B0C0D);
    assert_eq!((cdr.file_comment_length, cdr.disk_start, cdr.inter_attr, cdr.exter_attr), (0, 0, 0, 0));

    let bytes = cdr.as_slice();
    assert_eq!(bytes.len(), CDH_LENGTH);
    assert_eq!(&bytes[0..2], &le_u16(cdr.v_made_by));
    assert_eq!(&bytes[12..16], &[0xEFu8, 0xBE, 0xAD, 0xDE]);
    assert_eq!(&bytes[38..42], &[0x0Du8, 0x0C, 0x0B, 0x0A]);
}

#[test]
fn central_directory_record_length() {
    let cdr = sample_lfh().to_central(0);

    assert_eq!(cdr.encoded_len(), (SIGNATURE_LENGTH + CDH_LENGTH) as u64 + 5);
    assert_eq!(cdr.encoded_len(), 51);
}

#[test]
fn end_of_central_directory_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 2,
        num_of_entries: 2,
        size_cent_dir: 105,
        cent_dir_offset: 75,
        file_comm_length: 0,
    };

    let expected: [u8; 18] = [0, 0, 0, 0, 2, 0, 2, 0, 105, 0, 0, 0, 75, 0, 0, 0, 0, 0];
    assert_eq!(header.as_slice(), expected);
}
