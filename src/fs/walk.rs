// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ZipError};

/// A file or directory found beneath the root, before its data has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceEntry {
    pub path: PathBuf,
    /// Root-relative, `/` separated, with a trailing `/` for directories.
    pub name: String,
    pub dir: bool,
}

/// Recursively enumerates everything beneath `root`, depth-first, in the order the filesystem yields it.
///
/// The root itself is not included. Symbolic links are followed when `follow_links` is set and skipped otherwise. Paths equal to `exclude`
/// are skipped so an archive is never written into itself.
pub(crate) fn collect_entries(root: &Path, follow_links: bool, exclude: Option<&Path>) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for dir_entry in WalkDir::new(root).min_depth(1).follow_links(follow_links) {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if exclude.is_some_and(|exclude| exclude == path) {
            tracing::debug!(path = %path.display(), "skipping output archive");
            continue;
        }

        let file_type = dir_entry.file_type();
        if file_type.is_symlink() {
            tracing::warn!(path = %path.display(), "skipping symbolic link");
            continue;
        }

        let relative = path.strip_prefix(root).map_err(|_| ZipError::InvalidRoot(root.to_path_buf()))?;
        let dir = file_type.is_dir();

        entries.push(SourceEntry { path: path.to_path_buf(), name: relative_name(relative, dir)?, dir });
    }

    Ok(entries)
}

/// Converts a root-relative path into an entry name, joining components with `/` whatever the host separator.
pub(crate) fn relative_name(relative: &Path, dir: bool) -> Result<String> {
    let mut name = String::new();

    for component in relative.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        let part = part.to_str().ok_or_else(|| ZipError::NonUtf8Path(relative.to_path_buf()))?;

        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part);
    }

    if dir {
        name.push('/');
    }

    Ok(name)
}
