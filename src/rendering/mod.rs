//! Output rendering - from collected entries to terminal text.
//!
//! Four mutually exclusive modes, chosen by [`Config::mode`]:
//! - Grid: names in fixed-width columns (default)
//! - Size: one entry per line with its size
//! - Long: permissions, size, owner, group, time
//! - Tree: recursive listing with box-drawing connectors
//!
//! Every renderer returns a `String`; printing is the caller's job.

mod colors;
mod format;
mod glyphs;
mod grid;
mod long;
mod size;
mod tree;

pub use colors::{Palette, Tint};
pub use format::{permission_string, size_string, summary};
pub use glyphs::{resolve_glyph, Glyph, GlyphRule, Special, GLYPH_RULES};
pub use grid::GridRenderer;
pub use long::LongRenderer;
pub use size::SizeRenderer;
pub use tree::TreeRenderer;

use crate::config::Config;
use crate::types::Entry;

/// Glyph and name for the grid and size views.
///
/// Directories get a trailing `/` and their icon on the right, or on the
/// left with `-i`.
fn entry_label(entry: &Entry, config: &Config, palette: &Palette) -> String {
    let glyph = resolve_glyph(entry);
    if entry.is_dir() {
        let name = palette.directory(&format!("{}/", entry.name));
        if config.icon_left {
            format!("{}{}", glyph.paint(palette), name)
        } else {
            format!("{} {}", name, glyph.paint_symbol(palette))
        }
    } else {
        format!("{}{}", glyph.paint(palette), entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::{dir, file};

    #[test]
    fn test_directory_icon_placement() {
        let palette = Palette::plain();
        let right = entry_label(&dir("src"), &Config::default(), &palette);
        assert_eq!(right, "src/ \u{f07b}");

        let config = Config {
            icon_left: true,
            ..Config::default()
        };
        let left = entry_label(&dir("src"), &config, &palette);
        assert_eq!(left, "\u{f07b} src/");
    }

    #[test]
    fn test_file_label() {
        let label = entry_label(&file("LICENSE", 1), &Config::default(), &Palette::plain());
        assert_eq!(label, "  LICENSE");
    }
}
