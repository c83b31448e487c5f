// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # zipdir
//!
//! Packs a directory tree into a ZIP file using the stored (uncompressed) method.
//!
//! ## Features
//! - A synchronous [`ZipFileWriter`](crate::write::ZipFileWriter) over any [`std::io::Write`] implementer.
//! - An [`ArchiveBuilder`](crate::fs::ArchiveBuilder) which walks a directory and writes `<name>.zip`.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance
//!   for single-disk, non-ZIP64 archives.
//!
//! ## Layout
//! Every entry is written as a local file header followed by its data. Once all entries are written, one central
//! directory record per entry follows, then the end of central directory record which points back at the first of
//! them.

pub mod crc;
pub mod error;
pub mod fs;
pub mod spec;
pub mod write;

pub(crate) mod entry;

pub use crate::entry::{builder::ZipEntryBuilder, ZipEntry};
pub use crate::spec::compression::Compression;
