// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::spec::compression::Compression;

// MS-DOS; no host-specific attributes are recorded.
const HOST_COMPATIBILITY: u16 = 0;
const SPEC_VERSION_MADE_BY: u16 = 20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(entry: &ZipEntry) -> u16 {
    let mut version = match entry.compression() {
        Compression::Stored => 10,
    };

    if entry.dir() {
        version = std::cmp::max(version, 20);
    }

    version
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    (HOST_COMPATIBILITY << 8) | SPEC_VERSION_MADE_BY
}
