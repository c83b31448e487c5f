// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

#[derive(Debug, PartialEq, Eq)]
pub enum Zip64ErrorCase {
    TooManyFiles,
    LargeFile,
}

impl Display for Zip64ErrorCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyFiles => write!(f, "too many files for a non-ZIP64 archive"),
            Self::LargeFile => write!(f, "file size or archive offset does not fit in 32 bits"),
        }
    }
}

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
    #[error("unable to read '{}': {source}", .path.display())]
    FileReadError { path: PathBuf, source: std::io::Error },
    #[error("unable to walk the input directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("filename exceeded maximum length")]
    FileNameTooLarge,
    #[error("ZIP64 is not supported but would be required ({0})")]
    Zip64Needed(Zip64ErrorCase),
    #[error("an archive must contain at least one entry")]
    EmptyArchive,

    #[error("path is not valid UTF-8: '{}'", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("'{}' is not a directory which can be archived", .0.display())]
    InvalidRoot(PathBuf),
}
