//! Core types for glyphls - directory entries and their metadata.
//!
//! An [`Entry`] is built fresh for every listing from the metadata provider
//! and never mutated afterwards. Renderers only ever borrow it.

use std::path::PathBuf;
use std::time::SystemTime;

/// What kind of filesystem object an entry is, from a non-following stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// Raw permission bits of an entry (the low 12 bits of `st_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions(u32);

impl Permissions {
    const SETUID: u32 = 0o4000;
    const OWNER_EXEC: u32 = 0o100;

    pub fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_setuid(&self) -> bool {
        self.0 & Self::SETUID != 0
    }

    /// Owner-execute bit. This is the only execute bit the glyph rules look at.
    pub fn owner_can_execute(&self) -> bool {
        self.0 & Self::OWNER_EXEC != 0
    }

    /// The three rwx triplets, owner first, each as (read, write, execute).
    pub fn triplets(&self) -> [(bool, bool, bool); 3] {
        let triplet = |shift: u32| {
            let bits = (self.0 >> shift) & 0o7;
            (bits & 0o4 != 0, bits & 0o2 != 0, bits & 0o1 != 0)
        };
        [triplet(6), triplet(3), triplet(0)]
    }
}

/// Where a symlink points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    /// Target as stored in the link (not canonicalized).
    pub path: PathBuf,
    /// Whether the target is a directory. `None` when it cannot be resolved.
    pub is_dir: Option<bool>,
}

/// One filesystem object from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: SystemTime,
    pub permissions: Permissions,
    pub uid: u32,
    pub gid: u32,
    /// Only set for symlinks.
    pub link: Option<LinkTarget>,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Extension including the leading dot (`"main.go"` -> `".go"`).
    ///
    /// A dotfile is its own extension (`.git` -> `".git"`).
    pub fn extension(&self) -> Option<&str> {
        let idx = self.name.rfind('.')?;
        if idx + 1 == self.name.len() {
            return None;
        }
        Some(&self.name[idx..])
    }
}
