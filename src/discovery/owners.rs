//! User and group name resolution for the long listing.

use std::collections::HashMap;
use users::{Groups, Users, UsersCache};

/// Maps numeric ids to display names.
pub trait OwnerLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    /// User name, or the numeric id when the system has no entry for it.
    fn user_or_id(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| {
            log::warn!("no user entry for uid {uid}");
            uid.to_string()
        })
    }

    /// Group name, or the numeric id when the system has no entry for it.
    fn group_or_id(&self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| {
            log::warn!("no group entry for gid {gid}");
            gid.to_string()
        })
    }
}

/// Looks names up in the system user/group databases, caching results.
pub struct SystemOwners {
    cache: UsersCache,
}

impl SystemOwners {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemOwners {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerLookup for SystemOwners {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
    }
}

/// Fixed id -> name tables. Used by tests and anywhere names are known up front.
#[derive(Debug, Default, Clone)]
pub struct StaticOwners {
    pub users: HashMap<u32, String>,
    pub groups: HashMap<u32, String>,
}

impl StaticOwners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.to_string());
        self
    }

    pub fn group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.to_string());
        self
    }
}

impl OwnerLookup for StaticOwners {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).cloned()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups.get(&gid).cloned()
    }
}
