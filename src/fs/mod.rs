// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which packs a directory tree from the filesystem into a ZIP file.
//!
//! # Example
//! ```no_run
//! # use zipdir::fs::ArchiveBuilder;
//! # use zipdir::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! // Writes `photos.zip` into the current working directory.
//! let summary = ArchiveBuilder::new("/home/user/photos").build()?;
//! println!("{} entries, {} bytes", summary.entries, summary.archive_size);
//! #   Ok(())
//! # }
//! ```

pub(crate) mod walk;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::entry::builder::ZipEntryBuilder;
use crate::error::{Result, ZipError};
use crate::spec::compression::Compression;
use crate::write::{ArchiveLayout, ZipFileWriter};

use walk::SourceEntry;

/// The outcome of a successful [`ArchiveBuilder::build()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Where the archive was written.
    pub output: PathBuf,
    /// The number of files and directories stored.
    pub entries: u16,
    /// The summed size of all central directory records.
    pub cd_size: u32,
    /// The size of the whole archive.
    pub archive_size: u64,
}

/// Builds a stored ZIP file from every file and directory beneath a root directory.
///
/// Entries are named relative to the root with `/` separators; directories are stored as zero-length entries with a
/// trailing `/`. The root itself is not stored.
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    root: PathBuf,
    output: Option<PathBuf>,
    follow_links: bool,
}

impl ArchiveBuilder {
    /// Constructs a new builder for the directory at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into(), output: None, follow_links: true }
    }

    /// Sets the path the archive is written to.
    ///
    /// Defaults to `<root directory name>.zip` in the current working directory. An existing file is overwritten.
    pub fn output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Whether symbolic links are followed while walking the root.
    ///
    /// On by default: a link is stored under its own name with the content of its target. When off, links are skipped
    /// with a warning. Link cycles surface as [`ZipError::WalkError`].
    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Returns the path [`ArchiveBuilder::build()`] will write to.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }

        let root = canonical_root(&self.root)?;
        let name = root.file_name().ok_or_else(|| ZipError::InvalidRoot(self.root.clone()))?;
        let name = name.to_str().ok_or_else(|| ZipError::NonUtf8Path(self.root.clone()))?;

        Ok(PathBuf::from(format!("{name}.zip")))
    }

    /// Walks the root and writes the archive to [`ArchiveBuilder::output_path()`].
    ///
    /// The root is enumerated before the output file is created, so a root without any entries fails with
    /// [`ZipError::EmptyArchive`] and leaves the filesystem untouched. Any other failure aborts the build and may leave
    /// a truncated archive behind.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<BuildSummary> {
        let output = self.output_path()?;
        let entries = self.collect(Some(output.as_path()))?;

        let file = File::create(&output)?;
        let (writer, layout) = write_entries(&entries, BufWriter::new(file))?;

        let file = writer.into_inner().map_err(|err| err.into_error())?;
        file.sync_all()?;

        tracing::info!(
            output = %output.display(),
            entries = layout.entries,
            size = layout.archive_size,
            "wrote archive"
        );

        Ok(BuildSummary { output, entries: layout.entries, cd_size: layout.cd_size, archive_size: layout.archive_size })
    }

    /// Walks the root and writes the archive to `writer` instead of a file.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(W, ArchiveLayout)> {
        let entries = self.collect(None)?;
        write_entries(&entries, writer)
    }

    fn collect(&self, output: Option<&Path>) -> Result<Vec<SourceEntry>> {
        let root = canonical_root(&self.root)?;
        let exclude = output.and_then(canonical_output);

        let entries = walk::collect_entries(&root, self.follow_links, exclude.as_deref())?;
        if entries.is_empty() {
            return Err(ZipError::EmptyArchive);
        }

        tracing::debug!(count = entries.len(), "collected entries");
        Ok(entries)
    }
}

pub(crate) fn write_entries<W: Write>(entries: &[SourceEntry], writer: W) -> Result<(W, ArchiveLayout)> {
    let mut writer = ZipFileWriter::new(writer);

    for entry in entries {
        if entry.dir {
            writer.write_entry_whole(ZipEntryBuilder::directory(entry.name.clone()), &[])?;
        } else {
            let data = std::fs::read(&entry.path)
                .map_err(|source| ZipError::FileReadError { path: entry.path.clone(), source })?;
            writer.write_entry_whole(ZipEntryBuilder::new(entry.name.clone(), Compression::Stored), &data)?;
        }
    }

    writer.finish()
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    let canonical =
        root.canonicalize().map_err(|source| ZipError::FileReadError { path: root.to_path_buf(), source })?;

    if !canonical.is_dir() {
        return Err(ZipError::InvalidRoot(root.to_path_buf()));
    }

    Ok(canonical)
}

// The output may not exist yet, so only its parent can be canonicalised.
fn canonical_output(output: &Path) -> Option<PathBuf> {
    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    parent.canonicalize().ok().map(|parent| parent.join(name))
}
