//! ANSI color utilities for glyphls.
//!
//! Every color the renderers use is a [`Tint`]. Painting goes through a
//! [`Palette`] so `--no-color` (and the tests) get plain text from the same
//! code path.

use owo_colors::{OwoColorize, Style};

/// Named colors used by glyphs, directories and permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    LightRed,
    Green,
    BrightGreen,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    BrightBlue,
    Magenta,
    Purple,
    Cyan,
    White,
    BrightWhite,
    Orange,
    DarkOrange,
}

impl Tint {
    /// Terminal style for this tint. The 256-color xterm shades are given as RGB.
    pub fn style(&self) -> Style {
        match self {
            Tint::Red => Style::new().red(),
            Tint::LightRed => Style::new().bright_red(),
            Tint::Green => Style::new().green(),
            Tint::BrightGreen => Style::new().bright_green().bold(),
            Tint::DarkGreen => Style::new().truecolor(0, 95, 0),
            Tint::Yellow => Style::new().yellow(),
            Tint::DarkYellow => Style::new().truecolor(215, 135, 0),
            Tint::Blue => Style::new().blue(),
            Tint::BrightBlue => Style::new().bright_blue().bold(),
            Tint::Magenta => Style::new().magenta(),
            Tint::Purple => Style::new().bright_magenta(),
            Tint::Cyan => Style::new().cyan(),
            Tint::White => Style::new().white(),
            Tint::BrightWhite => Style::new().bright_white(),
            Tint::Orange => Style::new().truecolor(255, 135, 0),
            Tint::DarkOrange => Style::new().truecolor(215, 95, 0),
        }
    }
}

/// Applies tints, or passes text through untouched when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, s: &str, tint: Tint) -> String {
        if self.enabled {
            s.style(tint.style()).to_string()
        } else {
            s.to_string()
        }
    }

    /// Directory names: bold bright blue.
    pub fn directory(&self, s: &str) -> String {
        self.paint(s, Tint::BrightBlue)
    }

    /// Secondary text (symlink arrows, summaries).
    pub fn dim(&self, s: &str) -> String {
        if self.enabled {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_passes_through() {
        let palette = Palette::plain();
        assert_eq!(palette.paint("main.rs", Tint::Orange), "main.rs");
        assert_eq!(palette.directory("src"), "src");
        assert_eq!(palette.dim("==>"), "==>");
    }

    #[test]
    fn test_enabled_palette_emits_escapes() {
        let palette = Palette::new(true);
        let painted = palette.paint("x", Tint::Red);
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains('x'));
        assert!(painted.ends_with("\x1b[0m"));
    }
}
