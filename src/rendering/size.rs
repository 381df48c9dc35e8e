//! Size view: one entry per line, size right-aligned in a ten-column field.

use super::colors::Palette;
use super::entry_label;
use super::format::{size_string, summary};
use crate::config::Config;
use crate::types::Entry;

const SIZE_WIDTH: usize = 10;

pub struct SizeRenderer<'a> {
    config: &'a Config,
    palette: Palette,
}

impl<'a> SizeRenderer<'a> {
    pub fn new(config: &'a Config, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn render(&self, entries: &[Entry]) -> String {
        let mut output = String::new();

        for entry in entries {
            let size = size_string(entry.size, self.config.human_readable);
            output.push_str(&format!(
                "{:>width$}  {}\n",
                size,
                entry_label(entry, self.config, &self.palette),
                width = SIZE_WIDTH
            ));
        }

        if self.config.show_summary {
            output.push_str(&summary(entries, &self.palette));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::{dir, file};

    #[test]
    fn test_raw_sizes_right_aligned() {
        let config = Config::default();
        let out = SizeRenderer::new(&config, Palette::plain())
            .render(&[file("LICENSE", 1234), file("NOTICE", 7)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "     1234B    LICENSE");
        assert_eq!(lines[1], "        7B    NOTICE");
    }

    #[test]
    fn test_human_sizes_and_directories() {
        let config = Config {
            human_readable: true,
            icon_left: true,
            ..Config::default()
        };
        let out = SizeRenderer::new(&config, Palette::plain())
            .render(&[dir("src"), file("tiny", 7)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "    4.00KB  \u{f07b} src/");
        assert_eq!(lines[1], "        7B    tiny");
    }

    #[test]
    fn test_summary() {
        let config = Config {
            show_summary: true,
            ..Config::default()
        };
        let out = SizeRenderer::new(&config, Palette::plain()).render(&[file("a", 1)]);
        assert!(out.ends_with("\n0 directories, 1 files\n"));
    }
}
