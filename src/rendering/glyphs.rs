//! Extension and file-type glyphs (Nerd Font code points).
//!
//! Resolution order, first match wins:
//! 1. symlink with a resolvable target - link-to-directory or link-to-file
//! 2. directory
//! 3. extension table (`.sh` brightens when owner-executable)
//! 4. owner-executable with no mapped extension
//! 5. blank
//!
//! ## Rationale
//!
//! Extensions live in one table rather than a match so that adding a file
//! type is a single line, and several extensions can share a rule. The order
//! above is fixed: a symlink's glyph describes its target even when the link
//! name carries an extension, and the executable fallback applies only when
//! no extension rule matched.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::colors::{Palette, Tint};
use crate::types::{Entry, Permissions};

/// A display symbol and the tint it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub tint: Option<Tint>,
}

impl Glyph {
    pub const DIRECTORY: Glyph = Glyph::new("\u{f07b}", Tint::BrightBlue);
    pub const LINK_DIR: Glyph = Glyph::new("\u{f482}", Tint::Cyan);
    pub const LINK_FILE: Glyph = Glyph::new("\u{f481}", Tint::Cyan);
    pub const EXECUTABLE: Glyph = Glyph::new("\u{f489}", Tint::BrightGreen);
    pub const BLANK: Glyph = Glyph {
        symbol: " ",
        tint: None,
    };

    const fn new(symbol: &'static str, tint: Tint) -> Self {
        Self {
            symbol,
            tint: Some(tint),
        }
    }

    /// Just the tinted symbol.
    pub fn paint_symbol(&self, palette: &Palette) -> String {
        match self.tint {
            Some(tint) => palette.paint(self.symbol, tint),
            None => self.symbol.to_string(),
        }
    }

    /// Symbol plus one trailing space, tinted.
    pub fn paint(&self, palette: &Palette) -> String {
        format!("{} ", self.paint_symbol(palette))
    }
}

/// Extension rule beyond a plain glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// Use this tint instead when the owner-execute bit is set.
    Executable(Tint),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRule {
    pub glyph: Glyph,
    pub special: Option<Special>,
}

impl GlyphRule {
    const fn plain(symbol: &'static str, tint: Tint) -> Self {
        Self {
            glyph: Glyph::new(symbol, tint),
            special: None,
        }
    }

    fn apply(&self, permissions: Permissions) -> Glyph {
        match self.special {
            Some(Special::Executable(tint)) if permissions.owner_can_execute() => Glyph {
                tint: Some(tint),
                ..self.glyph
            },
            _ => self.glyph,
        }
    }
}

const SOURCE_C: &str = "\u{e61e}";
const SOURCE_CPP: &str = "\u{e61d}";
const IMAGE: &str = "\u{f03e}";
const VECTOR: &str = "\u{f1c5}";
const MARKUP: &str = "\u{eae9}";
const AUDIO: &str = "\u{e638}";
const VIDEO: &str = "\u{f03d}";
const ARCHIVE: &str = "\u{f0ffa}";
const JAVA: &str = "\u{e738}";
const SHELL: &str = "\u{e795}";

/// Extension (with leading dot, lowercase) -> glyph rule.
pub static GLYPH_RULES: Lazy<HashMap<&'static str, GlyphRule>> = Lazy::new(|| {
    use Tint::*;

    let mut rules = HashMap::new();
    let mut add = |exts: &[&'static str], rule: GlyphRule| {
        for ext in exts {
            rules.insert(*ext, rule);
        }
    };

    // Source code
    add(&[".go"], GlyphRule::plain("\u{e627}", Cyan));
    add(&[".c", ".h"], GlyphRule::plain(SOURCE_C, Blue));
    add(&[".cpp", ".hpp", ".cxx", ".hxx", ".cc"], GlyphRule::plain(SOURCE_CPP, Blue));
    add(&[".rs"], GlyphRule::plain("\u{e7a8}", Orange));
    add(&[".py"], GlyphRule::plain("\u{e73c}", Yellow));
    add(&[".js"], GlyphRule::plain("\u{e781}", Yellow));
    add(&[".ts"], GlyphRule::plain("\u{e628}", Blue));
    add(&[".java", ".jar"], GlyphRule::plain(JAVA, White));
    add(&[".rb"], GlyphRule::plain("\u{e791}", Red));
    add(&[".php"], GlyphRule::plain("\u{e608}", Purple));
    add(&[".pl"], GlyphRule::plain("\u{e769}", Orange));
    add(&[".lua"], GlyphRule::plain("\u{e620}", Blue));
    add(&[".zig"], GlyphRule::plain("\u{e6a9}", DarkOrange));
    add(&[".css"], GlyphRule::plain("\u{f13c}", Blue));
    add(
        &[".sh", ".bash"],
        GlyphRule {
            glyph: Glyph::new(SHELL, White),
            special: Some(Special::Executable(BrightGreen)),
        },
    );

    // Markup, data, documents
    add(&[".xml", ".htm", ".html"], GlyphRule::plain(MARKUP, Red));
    add(&[".md"], GlyphRule::plain("\u{e73e}", Blue));
    add(&[".txt"], GlyphRule::plain("\u{f15c}", White));
    add(&[".json"], GlyphRule::plain("\u{e60b}", DarkYellow));
    add(&[".toml"], GlyphRule::plain("\u{e6b2}", White));
    add(&[".yml", ".yaml"], GlyphRule::plain("\u{e6a8}", LightRed));
    add(&[".pdf"], GlyphRule::plain("\u{f1c1}", Red));

    // Images
    add(&[".png", ".jpg", ".jpeg", ".webp", ".gif", ".bmp"], GlyphRule::plain(IMAGE, Magenta));
    add(&[".svg", ".eps", ".ps"], GlyphRule::plain(VECTOR, Magenta));
    add(&[".xcf"], GlyphRule::plain("\u{f338}", White));

    // Audio / video
    add(&[".mp3", ".ogg", ".wav", ".flac"], GlyphRule::plain(AUDIO, Cyan));
    add(&[".mp4", ".mkv", ".webm"], GlyphRule::plain(VIDEO, Cyan));

    // Archives and packages
    add(&[".zip", ".tar", ".gz", ".bz2", ".xz", ".7z", ".rar"], GlyphRule::plain(ARCHIVE, Yellow));
    add(&[".deb"], GlyphRule::plain("\u{e77d}", Red));
    add(&[".xbps"], GlyphRule::plain("\u{f32e}", DarkGreen));

    // VCS
    add(&[".git"], GlyphRule::plain("\u{e702}", Orange));

    rules
});

/// Pick the glyph for an entry.
pub fn resolve_glyph(entry: &Entry) -> Glyph {
    if let Some(is_dir) = entry.link.as_ref().and_then(|l| l.is_dir) {
        return if is_dir { Glyph::LINK_DIR } else { Glyph::LINK_FILE };
    }

    if entry.is_dir() {
        return Glyph::DIRECTORY;
    }

    let rule = entry
        .extension()
        .and_then(|ext| GLYPH_RULES.get(ext.to_ascii_lowercase().as_str()));
    if let Some(rule) = rule {
        return rule.apply(entry.permissions);
    }

    if entry.permissions.owner_can_execute() {
        return Glyph::EXECUTABLE;
    }

    Glyph::BLANK
}
