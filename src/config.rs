//! Command-line configuration.
//!
//! Flags follow the classic `ls` style: single letters that can be fused into
//! one token (`-lah`), plus `-d N` / `-dN` for the tree depth. The parsed
//! [`Args`] are folded into an immutable [`Config`] which every renderer reads.
//!
//! `-h` means human-readable sizes here, so clap's automatic `-h`/`-V` are
//! disabled and help lives on `--help` only. Repeating a flag (`-ll`,
//! `-la -l`, `-d 2 -d 3`) is allowed; the last value wins.
//!
//! Positionals are `[DIRECTORY] [FILTER]`. Any further ones are accepted and
//! ignored, so `-v` still prints the version whatever follows it.

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// List a directory with colored file-type glyphs.
///
/// Examples:
///   glyphls                    # Grid of the current directory
///   glyphls -lh src            # Long listing with human-readable sizes
///   glyphls -r -d2             # Tree, two levels deep
///   glyphls . main.go          # Only *.go files
#[derive(Parser, Debug, Clone)]
#[command(name = "glyphls")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Args {
    /// Show hidden entries (names starting with '.')
    #[arg(short = 'a')]
    pub all: bool,

    /// One entry per line in grid mode
    #[arg(short = 'c')]
    pub one_column: bool,

    /// Print directory and file counts after the listing
    #[arg(short = 'f')]
    pub summary: bool,

    /// Human-readable sizes (1.50KB)
    #[arg(short = 'h')]
    pub human: bool,

    /// Put the directory icon on the left of the name
    #[arg(short = 'i')]
    pub icon_left: bool,

    /// Long listing: permissions, size, owner, group, time
    #[arg(short = 'l')]
    pub long: bool,

    /// Only list symlinks
    #[arg(short = 'm')]
    pub symlinks: bool,

    /// Sort by size, smallest first
    #[arg(short = 'o')]
    pub sort_size: bool,

    /// Recursive tree view
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Print the size of every entry
    #[arg(short = 's')]
    pub size: bool,

    /// Sort by modification time, oldest first
    #[arg(short = 't')]
    pub sort_time: bool,

    /// Print the version and exit
    #[arg(short = 'v')]
    pub version: bool,

    /// Maximum tree depth (-1 = unlimited)
    #[arg(short = 'd', value_name = "N", allow_negative_numbers = true)]
    pub depth: Option<i32>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Directory to list, then a file name whose extension filters the
    /// listing (e.g. main.go or *.go)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Which renderer runs. Exactly one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tree,
    Long,
    Size,
    Grid,
}

/// Immutable listing configuration, built once from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub long_listing: bool,
    pub human_readable: bool,
    pub show_size: bool,
    pub sort_by_size: bool,
    pub sort_by_time: bool,
    pub symlinks_only: bool,
    pub show_hidden: bool,
    pub recursive: bool,
    /// Negative means unlimited.
    pub max_depth: i32,
    pub icon_left: bool,
    pub one_column: bool,
    pub show_summary: bool,
    pub show_version: bool,
    pub color: bool,

    pub directory: PathBuf,
    /// Extension without the leading dot.
    pub extension: Option<String>,

    /// Some letter flag was given.
    pub any_flag: bool,
    /// Some flag beyond the mode flags (`l`, `s`, `r`, `c`) was given.
    pub specific_flag: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(Args {
            all: false,
            one_column: false,
            summary: false,
            human: false,
            icon_left: false,
            long: false,
            symlinks: false,
            sort_size: false,
            recursive: false,
            size: false,
            sort_time: false,
            version: false,
            depth: None,
            no_color: false,
            help: None,
            paths: Vec::new(),
        })
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mode_flag = args.long || args.size || args.recursive || args.one_column;
        let specific_flag = args.all
            || args.summary
            || args.human
            || args.icon_left
            || args.symlinks
            || args.sort_size
            || args.sort_time
            || args.version
            || args.depth.is_some();

        Self {
            long_listing: args.long,
            human_readable: args.human,
            show_size: args.size,
            sort_by_size: args.sort_size,
            sort_by_time: args.sort_time,
            symlinks_only: args.symlinks,
            show_hidden: args.all,
            recursive: args.recursive,
            max_depth: args.depth.unwrap_or(-1),
            icon_left: args.icon_left,
            one_column: args.one_column,
            show_summary: args.summary,
            show_version: args.version,
            color: !args.no_color,
            directory: args.paths.first().map_or_else(|| PathBuf::from("."), PathBuf::from),
            extension: args.paths.get(1).and_then(|token| extension_filter(token)),
            any_flag: mode_flag || specific_flag,
            specific_flag,
        }
    }
}

impl Config {
    /// Parse a full argument list (program name first).
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(args).map(Self::from)
    }

    /// Active renderer: tree > long > size > grid.
    pub fn mode(&self) -> Mode {
        if self.recursive {
            Mode::Tree
        } else if self.long_listing {
            Mode::Long
        } else if self.show_size {
            Mode::Size
        } else {
            Mode::Grid
        }
    }

    /// Depth limit for the tree renderer; `None` when unlimited.
    pub fn depth_limit(&self) -> Option<usize> {
        usize::try_from(self.max_depth).ok()
    }

    /// Whether a blank line follows the listing.
    pub fn trailing_blank_line(&self) -> bool {
        self.any_flag && !self.specific_flag
    }
}

/// Extension suffix of a filter token: `main.go`, `*.go` and `.go` all give `go`.
pub fn extension_filter(token: &str) -> Option<String> {
    let name = Path::new(token).file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('*') {
        return None;
    }
    Some(ext.to_string())
}

/// Version line printed for `-v`.
pub fn version_string() -> String {
    format!("{}: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
