// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Fixed-layout ZIP records and their little-endian encodings.

pub mod compression;
pub(crate) mod consts;
pub mod encode;
pub mod header;
pub(crate) mod version;
