//! Directory discovery: listing, owner lookup and entry filtering.
//!
//! Uses the `ignore` crate for enumeration and the `users` crate for
//! uid/gid names. Both sit behind traits so renderers can be tested without
//! touching the filesystem.

mod filters;
mod listing;
mod owners;

pub use filters::{
    collect, filter_extension, filter_hidden, filter_symlinks, sort_by_size, sort_by_time,
    Collected,
};
pub use listing::{FsProvider, MetadataProvider};
pub use owners::{OwnerLookup, StaticOwners, SystemOwners};

#[cfg(test)]
pub(crate) use listing::memory::MemoryProvider;
