//! Column formatting shared by the renderers: permission strings, sizes,
//! timestamps, padding and the trailing summary.

use chrono::{DateTime, Local};
use humansize::{format_size, FormatSizeOptions, WINDOWS};
use once_cell::sync::Lazy;

use super::colors::{Palette, Tint};
use crate::types::{Entry, EntryKind};

/// 1024-based, two decimals, unit glued to the value.
static HUMAN: Lazy<FormatSizeOptions> = Lazy::new(|| {
    FormatSizeOptions::from(WINDOWS)
        .decimal_places(2)
        .decimal_zeroes(2)
        .space_after_value(false)
});

const KIB: u64 = 1024;

/// Size column text: human-readable, or the raw byte count with a `B` suffix.
///
/// Human-readable sizes below 1 KiB stay whole bytes (`7B`); larger ones get
/// two decimals and an upper-case unit (`1.50KB`, `5.00MB`).
pub fn size_string(size: u64, human: bool) -> String {
    if !human || size < KIB {
        return format!("{size}B");
    }
    // humansize spells the Windows kilo unit "kB"
    format_size(size, *HUMAN).replacen("kB", "KB", 1)
}

/// Ten-character mode string, e.g. `drwxr-xr-x`.
///
/// Symlinks always get `l`, whatever they point at.
pub fn permission_string(entry: &Entry) -> String {
    let mut s = String::with_capacity(10);
    s.push(match entry.kind {
        EntryKind::Symlink => 'l',
        EntryKind::Directory => 'd',
        EntryKind::File => '-',
    });

    for (i, (r, w, x)) in entry.permissions.triplets().into_iter().enumerate() {
        s.push(if r { 'r' } else { '-' });
        s.push(if w { 'w' } else { '-' });
        let setuid = i == 0 && entry.permissions.is_setuid();
        s.push(match (x, setuid) {
            (true, true) => 's',
            (false, true) => 'S',
            (true, false) => 'x',
            (false, false) => '-',
        });
    }
    s
}

/// Color the r/w/x characters of a permission string (green/yellow/red).
pub fn paint_permissions(perms: &str, palette: &Palette) -> String {
    if !palette.enabled() {
        return perms.to_string();
    }
    let mut out = String::new();
    for (i, c) in perms.chars().enumerate() {
        let tint = match c {
            'r' if i > 0 => Some(Tint::Green),
            'w' if i > 0 => Some(Tint::Yellow),
            'x' | 's' | 'S' if i > 0 => Some(Tint::Red),
            'd' if i == 0 => Some(Tint::BrightBlue),
            'l' if i == 0 => Some(Tint::Cyan),
            _ => None,
        };
        match tint {
            Some(tint) => out.push_str(&palette.paint(&c.to_string(), tint)),
            None => out.push(c),
        }
    }
    out
}

/// Month, day and time columns in local time: (`Jan`, `02`, `15:04`).
pub fn time_columns(entry: &Entry) -> (String, String, String) {
    let local: DateTime<Local> = entry.modified.into();
    (
        local.format("%b").to_string(),
        local.format("%d").to_string(),
        local.format("%H:%M").to_string(),
    )
}

/// Display width of a name in terminal cells (one per char).
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Spaces needed to pad `s` out to `width`, zero if it is already wider.
pub fn padding(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(display_width(s)))
}

/// Blank line, then `N directories, M files`. Symlinks count as files.
pub fn summary(entries: &[Entry], palette: &Palette) -> String {
    let dirs = entries.iter().filter(|e| e.is_dir()).count();
    let files = entries.len() - dirs;
    format!(
        "\n{}\n",
        palette.dim(&format!("{dirs} directories, {files} files"))
    )
}
