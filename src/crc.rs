// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crc32fast::Hasher;

/// Computes the CRC-32 (IEEE 802.3 polynomial) of an entry's uncompressed data, as stored in ZIP headers.
pub fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
