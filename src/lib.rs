//! glyphls - directory listing with file-type glyphs
//!
//! Lists one directory (or a tree of them) with Nerd Font icons and ANSI
//! colors keyed by file type and extension.
//!
//! # Architecture
//!
//! ```text
//! Args → Config → Listing → Filters/Sort → Renderer (grid | size | long | tree)
//!   ↓       ↓        ↓           ↓               ↓
//!  clap  immutable  ignore    hidden/ext/     glyph table
//!                   + stat    symlink          + owo-colors
//! ```

pub mod config;
pub mod discovery;
pub mod pipeline;
pub mod rendering;
pub mod types;

pub use config::{Config, Mode};
pub use discovery::{FsProvider, MetadataProvider, OwnerLookup, SystemOwners};
pub use pipeline::run;
pub use types::{Entry, EntryKind, LinkTarget, Permissions};
