//! Grid view: names left-to-right in 19-column cells, four to a line.

use super::colors::Palette;
use super::entry_label;
use super::format::{display_width, padding, summary};
use crate::config::Config;
use crate::types::Entry;

/// Name width a cell holds before it forces a line break.
pub const COLUMN_WIDTH: usize = 19;

/// Visible width of a padded cell: glyph, space, then the name column.
const CELL_WIDTH: usize = COLUMN_WIDTH + 2;

/// Entries per line before wrapping.
pub const PER_LINE: usize = 4;

pub struct GridRenderer<'a> {
    config: &'a Config,
    palette: Palette,
}

impl<'a> GridRenderer<'a> {
    pub fn new(config: &'a Config, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn render(&self, entries: &[Entry]) -> String {
        let mut output = String::new();
        let mut in_line = 0;

        let plain = Palette::plain();

        for entry in entries {
            output.push_str(&entry_label(entry, self.config, &self.palette));
            in_line += 1;

            // A name wider than a cell ends its line
            let wide = display_width(&entry.name) > COLUMN_WIDTH;
            if self.config.one_column || wide || in_line >= PER_LINE {
                output.push('\n');
                in_line = 0;
            } else {
                // Measured on the uncolored label so escapes and the
                // directory suffix don't shift the next column
                let label = entry_label(entry, self.config, &plain);
                output.push_str(&padding(&label, CELL_WIDTH));
            }
        }

        if in_line > 0 {
            let end = output.trim_end_matches(' ').len();
            output.truncate(end);
            output.push('\n');
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

    fn render(entries: &[Entry], config: &Config) -> String {
        GridRenderer::new(config, Palette::plain()).render(entries)
    }

    fn names(n: usize) -> Vec<Entry> {
        (0..n).map(|i| file(&format!("f{i}.txt"), 1)).collect()
    }

    #[test]
    fn test_wraps_after_four() {
        let out = render(&names(6), &Config::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("f0.txt") && lines[0].contains("f3.txt"));
        assert!(lines[1].contains("f4.txt") && lines[1].contains("f5.txt"));
        assert!(out.ends_with("f5.txt\n"));
    }

    #[test]
    fn test_cells_are_padded_to_column_width() {
        let out = render(&names(2), &Config::default());
        // glyph (1) + space (1) + name (6) + padding (13) before the next glyph
        let line = out.lines().next().unwrap();
        let second = line.find("f1.txt").unwrap();
        assert_eq!(line[..second].chars().count(), CELL_WIDTH + 2);
    }

    #[test]
    fn test_columns_align_after_directories() {
        let entries = vec![
            dir("src"),
            file("a.txt", 1),
            file("b.txt", 1),
            file("c.txt", 1),
            file("d.txt", 1),
            file("e.txt", 1),
        ];
        for icon_left in [false, true] {
            let config = Config {
                icon_left,
                ..Config::default()
            };
            let out = render(&entries, &config);
            let lines: Vec<&str> = out.lines().collect();
            let column = |line: &str, name: &str| line[..line.find(name).unwrap()].chars().count();
            assert_eq!(column(lines[0], "a.txt"), CELL_WIDTH + 2);
            assert_eq!(column(lines[0], "b.txt"), 2 * CELL_WIDTH + 2);
            assert_eq!(column(lines[1], "e.txt"), CELL_WIDTH + 2);
        }
    }

    #[test]
    fn test_colored_cells_align_like_plain() {
        let entries = vec![dir("src"), file("main.rs", 1), file("x.txt", 1)];
        let config = Config::default();
        let colored = GridRenderer::new(&config, Palette::new(true)).render(&entries);
        let strip = |s: &str| {
            let mut out = String::new();
            let mut in_escape = false;
            for c in s.chars() {
                match (in_escape, c) {
                    (false, '\x1b') => in_escape = true,
                    (true, 'm') => in_escape = false,
                    (false, c) => out.push(c),
                    _ => {}
                }
            }
            out
        };
        assert_eq!(strip(&colored), render(&entries, &config));
    }

    #[test]
    fn test_one_column() {
        let config = Config {
            one_column: true,
            ..Config::default()
        };
        let out = render(&names(3), &config);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn test_long_name_forces_break() {
        let entries = vec![
            file("short.txt", 1),
            file("a_really_long_file_name.txt", 1),
            file("next.txt", 1),
        ];
        let out = render(&entries, &Config::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("a_really_long_file_name.txt"));
        assert!(lines[1].contains("next.txt"));
    }

    #[test]
    fn test_summary() {
        let config = Config {
            show_summary: true,
            ..Config::default()
        };
        let out = render(&[dir("src"), file("a.rs", 1)], &config);
        assert!(out.ends_with("\n\n1 directories, 1 files\n"));
        assert!(out.contains("src/"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], &Config::default()), "");
    }
}
