//! Single-level directory enumeration with per-entry metadata.
//!
//! The `ignore` crate's walker does the enumeration (depth 1, every standard
//! filter off so hidden and gitignored files are visible - filtering is the
//! collector's job). Each entry is then stat'ed through [`FsProvider::stat_entry`],
//! the one place metadata is fetched. Any failure there aborts the listing.
//!
//! ## Rationale
//!
//! The walker is held to one level because the tree view recurses itself,
//! one `list` call per directory, so depth limits and hidden filtering apply
//! per level. gitignore, hidden and parent-ignore handling are all switched
//! off: a listing shows what is on disk, and the collector decides what to
//! hide. Links are never followed during enumeration; `stat_entry` resolves
//! each one separately so a broken target still lists.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::types::{Entry, EntryKind, LinkTarget, Permissions};

/// Source of directory entries.
///
/// The filesystem implementation is [`FsProvider`]; tests substitute
/// in-memory trees.
pub trait MetadataProvider {
    /// List the immediate children of `dir` in enumeration order.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>>;
}

/// Reads the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProvider;

impl FsProvider {
    pub fn new() -> Self {
        Self
    }

    /// Stat one entry without following symlinks, resolving the target if it is one.
    pub fn stat_entry(path: &Path) -> Result<Entry> {
        let meta = fs::symlink_metadata(path)
            .with_context(|| format!("Failed to stat '{}'", path.display()))?;

        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let link = if kind == EntryKind::Symlink {
            let target = fs::read_link(path)
                .with_context(|| format!("Failed to read link '{}'", path.display()))?;
            // Broken links stay listable; only the glyph falls back.
            let is_dir = fs::metadata(path).ok().map(|m| m.is_dir());
            Some(LinkTarget { path: target, is_dir })
        } else {
            None
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let modified = meta
            .modified()
            .with_context(|| format!("No modification time for '{}'", path.display()))?;

        Ok(Entry {
            name,
            path: path.to_path_buf(),
            kind,
            size: meta.len(),
            modified,
            permissions: Permissions::from_mode(meta.mode()),
            uid: meta.uid(),
            gid: meta.gid(),
            link,
        })
    }
}

impl MetadataProvider for FsProvider {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        if !dir.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }

        let walker = WalkBuilder::new(dir)
            .standard_filters(false) // no hidden/gitignore filtering here
            .follow_links(false)
            .max_depth(Some(1))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let dent = result.with_context(|| format!("Failed to read '{}'", dir.display()))?;
            if dent.depth() == 0 {
                continue;
            }
            entries.push(Self::stat_entry(dent.path())?);
        }

        log::debug!("listed {} entries in {}", entries.len(), dir.display());
        Ok(entries)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory provider for tests that do not need a real filesystem.

    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Debug, Default)]
    pub struct MemoryProvider {
        dirs: HashMap<PathBuf, Vec<Entry>>,
    }

    impl MemoryProvider {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register `entries` as the children of `dir`, rewriting their paths.
        pub fn with_dir(mut self, dir: &str, entries: Vec<Entry>) -> Self {
            let dir = PathBuf::from(dir);
            let entries = entries
                .into_iter()
                .map(|mut e| {
                    e.path = dir.join(&e.name);
                    e
                })
                .collect();
            self.dirs.insert(dir, entries);
            self
        }
    }

    impl MetadataProvider for MemoryProvider {
        fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
            self.dirs
                .get(dir)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Not a directory: {}", dir.display()))
        }
    }
}
