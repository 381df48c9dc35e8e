//! Top-level listing pipeline: pick the mode, collect, render.

use anyhow::Result;

use crate::config::{version_string, Config, Mode};
use crate::discovery::{collect, Collected, MetadataProvider, OwnerLookup};
use crate::rendering::{GridRenderer, LongRenderer, Palette, SizeRenderer, TreeRenderer};

/// Printed when the directory (after any extension filter) has no entries.
pub const NO_FILES: &str = "No files found.";

/// Produce the complete stdout text for one invocation.
pub fn run(
    config: &Config,
    provider: &dyn MetadataProvider,
    owners: &dyn OwnerLookup,
) -> Result<String> {
    if config.show_version {
        return Ok(format!("{}\n", version_string()));
    }

    let palette = Palette::new(config.color);
    let mode = config.mode();
    log::debug!("listing {} in {:?} mode", config.directory.display(), mode);

    let mut output = if mode == Mode::Tree {
        match TreeRenderer::new(provider, config, palette).render()? {
            Some(tree) => tree,
            None => return Ok(format!("{NO_FILES}\n")),
        }
    } else {
        let entries = match collect(provider, config)? {
            Collected::Empty => return Ok(format!("{NO_FILES}\n")),
            Collected::Entries(entries) => entries,
        };
        match mode {
            Mode::Long => LongRenderer::new(config, palette, owners).render(&entries),
            Mode::Size => SizeRenderer::new(config, palette).render(&entries),
            _ => GridRenderer::new(config, palette).render(&entries),
        }
    };

    if config.trailing_blank_line() {
        output.push('\n');
    }

    Ok(output)
}
