// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Error, ErrorKind, Write};

use crate::entry::builder::ZipEntryBuilder;
use crate::error::{Zip64ErrorCase, ZipError};
use crate::spec::compression::Compression;
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE};
use crate::tests::{read_u16, read_u32};
use crate::write::ZipFileWriter;


/// A writer which rejects every write.
pub(crate) struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _: &[u8]) -> Result<usize, Error> {
        Err(Error::new(ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

fn stored(name: &str) -> ZipEntryBuilder {
    ZipEntryBuilder::new(name.to_string(), Compression::Stored)
}

#[test]
fn empty() {
    let writer = ZipFileWriter::new(Vec::<u8>::new());
    assert!(writer.is_empty());

    let result = writer.close();
    assert!(matches!(result, Err(ZipError::EmptyArchive)));
}

#[test]
fn single_entry_no_data() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());

    let offset = writer.write_entry_whole(stored("a.txt"), &[]).expect("failed to write entry");
    assert_eq!(offset, 0);
    assert_eq!(writer.offset(), 35);

    let (bytes, layout) = writer.finish().expect("failed to close writer");
    assert_eq!(bytes.len(), 108);
    assert_eq!(layout.entries, 1);
    assert_eq!(layout.cd_offset, 35);
    assert_eq!(layout.cd_size, 51);
    assert_eq!(layout.archive_size, 108);

    // Local file header
    assert_eq!(read_u32(&bytes, 0), LFH_SIGNATURE);
    assert_eq!(read_u16(&bytes, 4), 10);
    assert_eq!(read_u16(&bytes, 8), 0);
    assert_eq!(read_u32(&bytes, 14), 0x00000000);
    assert_eq!(read_u32(&bytes, 18), 0);
    assert_eq!(read_u32(&bytes, 22), 0);
    assert_eq!(read_u16(&bytes, 26), 5);
    assert_eq!(read_u16(&bytes, 28), 0);
    assert_eq!(&bytes[30..35], b"a.txt");

    // Central directory record
    assert_eq!(read_u32(&bytes, 35), CDH_SIGNATURE);
    assert_eq!(read_u16(&bytes, 41), 10);
    assert_eq!(read_u32(&bytes, 51), 0x00000000);
    assert_eq!(read_u16(&bytes, 63), 5);
    assert_eq!(read_u32(&bytes, 77), 0);
    assert_eq!(&bytes[81..86], b"a.txt");

    // End of central directory record
    assert_eq!(read_u32(&bytes, 86), EOCDR_SIGNATURE);
    assert_eq!(read_u16(&bytes, 94), 1);
    assert_eq!(read_u16(&bytes, 96), 1);
    assert_eq!(read_u32(&bytes, 98), 51);
    assert_eq!(read_u32(&bytes, 102), 35);
    assert_eq!(read_u16(&bytes, 106), 0);
}

#[test]
fn directory_and_file_offsets() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());

    let dir_offset = writer.write_entry_whole(ZipEntryBuilder::directory("sub".to_string()), &[]).unwrap();
    let before_file = writer.offset();
    let file_offset = writer.write_entry_whole(stored("sub/b.txt"), b"hi").unwrap();
    assert_eq!(dir_offset, 0);
    assert_eq!(file_offset, before_file);
    assert_eq!(file_offset, 34);
    assert_eq!(writer.len(), 2);

    let (bytes, layout) = writer.finish().unwrap();
    assert_eq!(layout.cd_offset, 75);
    assert_eq!(layout.cd_size, 50 + 55);
    assert_eq!(layout.archive_size, 75 + 105 + 22);

    // The directory needs version 2.0 and stores nothing.
    assert_eq!(read_u16(&bytes, 4), 20);
    assert_eq!(read_u32(&bytes, 22), 0);
    assert_eq!(&bytes[30..34], b"sub/");

    // Both sizes of the file equal its length, and its data directly follows the name.
    assert_eq!(read_u32(&bytes, 34 + 14), crate::crc::compute_crc(b"hi"));
    assert_eq!(read_u32(&bytes, 34 + 18), 2);
    assert_eq!(read_u32(&bytes, 34 + 22), 2);
    assert_eq!(&bytes[64..75], b"sub/b.txthi");

    // Central directory records point back at each local header.
    assert_eq!(read_u32(&bytes, 75), CDH_SIGNATURE);
    assert_eq!(read_u32(&bytes, 75 + 42), 0);
    assert_eq!(read_u32(&bytes, 125), CDH_SIGNATURE);
    assert_eq!(read_u32(&bytes, 125 + 16), crate::crc::compute_crc(b"hi"));
    assert_eq!(read_u32(&bytes, 125 + 42), 34);
    assert_eq!(&bytes[171..180], b"sub/b.txt");

    assert_eq!(read_u32(&bytes, 180), EOCDR_SIGNATURE);
    assert_eq!(read_u32(&bytes, 180 + 12), 105);
    assert_eq!(read_u32(&bytes, 180 + 16), 75);
}

#[test]
fn filename_too_large() {
    let mut writer = ZipFileWriter::new(Vec::<u8>::new());
    let name = "a".repeat(u16::MAX as usize + 1);

    let result = writer.write_entry_whole(stored(&name), &[]);
    assert!(matches!(result, Err(ZipError::FileNameTooLarge)));
    assert!(writer.is_empty());
    assert_eq!(writer.offset(), 0);
}

#[test]
fn too_many_files() {
    let mut writer = ZipFileWriter::new(std::io::sink());

    for index in 0..u16::MAX - 1 {
        writer.write_entry_whole(stored(&index.to_string()), &[]).expect("failed to write entry");
    }

    let result = writer.write_entry_whole(stored("one-too-many"), &[]);
    assert!(matches!(result, Err(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles))));

    let (_, layout) = writer.finish().expect("failed to close writer");
    assert_eq!(layout.entries, u16::MAX - 1);
}

#[test]
fn upstream_write_error() {
    let mut writer = ZipFileWriter::new(FailingSink);

    let result = writer.write_entry_whole(stored("foo.bar"), b"data");
    assert!(matches!(result, Err(ZipError::UpstreamWriteError(_))));
    assert!(writer.is_empty());
}
