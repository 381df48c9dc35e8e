//! Tree view: depth-first recursive listing with box-drawing connectors.
//!
//! ```text
//! ├──  Cargo.toml
//! ├──  src
//! │   ├──  lib.rs
//! │   └──  main.rs
//! └──  README.md
//! ```
//!
//! ## Rationale
//!
//! Symlinked directories are shown but never entered. A link back to an
//! ancestor would otherwise recurse until the depth limit, or forever when
//! unlimited. Each level is listed through the same [`MetadataProvider`] as
//! the flat views, so the tree and the grid see the same entries and apply
//! the same hidden filter. Only the top level counts toward `-f`.

use anyhow::Result;
use std::path::Path;

use super::colors::Palette;
use super::format::summary;
use super::glyphs::resolve_glyph;
use crate::config::Config;
use crate::discovery::{filter_hidden, MetadataProvider};
use crate::types::Entry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

pub struct TreeRenderer<'a> {
    provider: &'a dyn MetadataProvider,
    config: &'a Config,
    palette: Palette,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(provider: &'a dyn MetadataProvider, config: &'a Config, palette: Palette) -> Self {
        Self {
            provider,
            config,
            palette,
        }
    }

    /// Render the whole tree under `config.directory`.
    ///
    /// Returns `None` when the root directory has no entries at all.
    pub fn render(&self) -> Result<Option<String>> {
        let root = self.provider.list(&self.config.directory)?;
        if root.is_empty() {
            return Ok(None);
        }

        let mut output = String::new();
        let top = filter_hidden(root, self.config.show_hidden);
        self.render_level(&top, 0, "", &mut output)?;

        if self.config.show_summary {
            output.push_str(&summary(&top, &self.palette));
        }

        Ok(Some(output))
    }

    fn render_level(
        &self,
        entries: &[Entry],
        depth: usize,
        prefix: &str,
        output: &mut String,
    ) -> Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            let last = i + 1 == entries.len();

            output.push_str(prefix);
            output.push_str(if last { LAST_BRANCH } else { BRANCH });
            output.push_str(&resolve_glyph(entry).paint(&self.palette));
            if entry.is_dir() {
                output.push_str(&self.palette.directory(&entry.name));
            } else {
                output.push_str(&entry.name);
            }
            output.push('\n');

            if entry.is_dir() && self.may_descend(depth + 1) {
                let child_prefix = format!("{prefix}{}", if last { SPACE } else { PIPE });
                self.descend(&entry.path, depth + 1, &child_prefix, output)?;
            }
        }
        Ok(())
    }

    fn descend(&self, dir: &Path, depth: usize, prefix: &str, output: &mut String) -> Result<()> {
        log::debug!("tree: entering {} at depth {}", dir.display(), depth);
        let children = filter_hidden(self.provider.list(dir)?, self.config.show_hidden);
        self.render_level(&children, depth, prefix, output)
    }

    fn may_descend(&self, depth: usize) -> bool {
        self.config.depth_limit().map_or(true, |max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::MemoryProvider;
    use crate::types::fixtures::{dir, file, symlink};
    use std::path::PathBuf;

    /// root/
    ///   a/
    ///     b/
    ///       c/
    ///         deep.txt
    ///     mid.txt
    ///   .hidden
    ///   top.txt
    fn provider() -> MemoryProvider {
        MemoryProvider::new()
            .with_dir("root", vec![dir("a"), file(".hidden", 1), file("top.txt", 1)])
            .with_dir("root/a", vec![dir("b"), file("mid.txt", 1)])
            .with_dir("root/a/b", vec![dir("c")])
            .with_dir("root/a/b/c", vec![file("deep.txt", 1)])
    }

    fn render(config: Config) -> String {
        let provider = provider();
        let config = Config {
            directory: PathBuf::from("root"),
            recursive: true,
            ..config
        };
        TreeRenderer::new(&provider, &config, Palette::plain())
            .render()
            .unwrap()
            .unwrap()
    }

    fn strip_glyphs(out: &str) -> String {
        out.lines()
            .map(|l| {
                l.chars()
                    .filter(|c| !('\u{e000}'..='\u{f8ff}').contains(c) && *c < '\u{f0000}')
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_full_depth_layout() {
        let out = strip_glyphs(&render(Config::default()));
        let expected = [
            "├──  a",
            "│   ├──  b",
            "│   │   └──  c",
            "│   │       └──  deep.txt",
            "│   └──  mid.txt",
            "└──  top.txt",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_max_depth_limits_descent() {
        let zero = render(Config {
            max_depth: 0,
            ..Config::default()
        });
        assert_eq!(zero.lines().count(), 2);
        assert!(!zero.contains("mid.txt"));

        let one = render(Config {
            max_depth: 1,
            ..Config::default()
        });
        assert!(one.contains("mid.txt"));
        assert!(one.contains(" b"));
        assert!(!one.contains(" c"));

        let unlimited = render(Config {
            max_depth: -1,
            ..Config::default()
        });
        assert!(unlimited.contains("deep.txt"));
    }

    #[test]
    fn test_hidden_entries() {
        assert!(!render(Config::default()).contains(".hidden"));
        assert!(render(Config {
            show_hidden: true,
            ..Config::default()
        })
        .contains(".hidden"));
    }

    #[test]
    fn test_summary_counts_top_level_only() {
        let out = render(Config {
            show_summary: true,
            ..Config::default()
        });
        assert!(out.ends_with("\n1 directories, 1 files\n"), "got {out:?}");
    }

    #[test]
    fn test_symlinked_directory_not_entered() {
        let provider = MemoryProvider::new()
            .with_dir("loop", vec![symlink("self", "loop", Some(true))]);
        let config = Config {
            directory: PathBuf::from("loop"),
            recursive: true,
            ..Config::default()
        };
        let out = TreeRenderer::new(&provider, &config, Palette::plain())
            .render()
            .unwrap()
            .unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_empty_root() {
        let provider = MemoryProvider::new().with_dir("empty", vec![]);
        let config = Config {
            directory: PathBuf::from("empty"),
            ..Config::default()
        };
        let result = TreeRenderer::new(&provider, &config, Palette::plain()).render();
        assert_eq!(result.unwrap(), None);
    }
}
