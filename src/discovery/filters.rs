//! Entry collection: raw listing, then hidden/symlink filters, then sorting.
//!
//! Order matters. The "no files found" check runs on the raw listing (after the
//! extension filter, before the hidden filter), so a directory holding only
//! dotfiles renders empty instead of reporting nothing found.

use anyhow::Result;

use super::listing::MetadataProvider;
use crate::config::Config;
use crate::types::{Entry, EntryKind};

/// Result of collecting a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// The raw listing had no entries at all.
    Empty,
    Entries(Vec<Entry>),
}

/// List `config.directory` and apply every configured filter and sort.
pub fn collect(provider: &dyn MetadataProvider, config: &Config) -> Result<Collected> {
    let mut entries = provider.list(&config.directory)?;

    if let Some(ext) = &config.extension {
        entries = filter_extension(entries, ext);
    }

    if entries.is_empty() {
        return Ok(Collected::Empty);
    }

    let raw = entries.len();
    let entries = filter_hidden(entries, config.show_hidden);
    let mut entries = if config.symlinks_only {
        filter_symlinks(entries)
    } else {
        entries
    };

    if config.sort_by_time {
        sort_by_time(&mut entries);
    } else if config.sort_by_size {
        sort_by_size(&mut entries);
    }

    log::debug!("collected {} of {} entries", entries.len(), raw);
    Ok(Collected::Entries(entries))
}

/// Keep regular files whose name ends in `.<ext>`.
pub fn filter_extension(entries: Vec<Entry>, ext: &str) -> Vec<Entry> {
    let suffix = format!(".{ext}");
    entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::File && e.name.ends_with(&suffix))
        .collect()
}

/// Drop dotfiles unless `show_hidden`.
pub fn filter_hidden(entries: Vec<Entry>, show_hidden: bool) -> Vec<Entry> {
    if show_hidden {
        return entries;
    }
    entries.into_iter().filter(|e| !e.is_hidden()).collect()
}

pub fn filter_symlinks(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(Entry::is_symlink).collect()
}

/// Stable, ascending.
pub fn sort_by_size(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.size);
}

/// Stable, oldest first.
pub fn sort_by_time(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.modified);
}
