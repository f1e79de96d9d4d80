use std::convert::Infallible;
use std::fmt;
use std::io;
use std::str::FromStr;

use nix::unistd::{Gid, Group, Uid, User};

use crate::fs_op::mode::Mode;

/// A user or group, given either by name or by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    Name(String),
    Id(u32),
}

impl Identity {
    /// Look the identity up as a user.
    pub fn uid(&self) -> io::Result<Uid> {
        match self {
            Identity::Id(id) => Ok(Uid::from_raw(*id)),
            Identity::Name(name) => User::from_name(name)?
                .map(|user| user.uid)
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, format!("no such user `{name}`"))
                }),
        }
    }

    /// Look the identity up as a group.
    pub fn gid(&self) -> io::Result<Gid> {
        match self {
            Identity::Id(id) => Ok(Gid::from_raw(*id)),
            Identity::Name(name) => Group::from_name(name)?
                .map(|group| group.gid)
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, format!("no such group `{name}`"))
                }),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Name(name) => f.write_str(name),
            Identity::Id(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Identity {
    type Err = Infallible;

    /// All-digit text is an id; anything else is a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(id) if s.bytes().all(|b| b.is_ascii_digit()) => Identity::Id(id),
            _ => Identity::Name(s.to_string()),
        })
    }
}

impl From<u32> for Identity {
    fn from(id: u32) -> Self {
        Identity::Id(id)
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Identity::Name(name.to_string())
    }
}

/// The value a chmod, chown or chgrp was asked to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionChange {
    Mode(Mode),
    Owner(Identity),
    Group(Identity),
}

impl fmt::Display for PermissionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionChange::Mode(mode) => write!(f, "mode to {mode}"),
            PermissionChange::Owner(user) => write!(f, "owner to {user}"),
            PermissionChange::Group(group) => write!(f, "group to {group}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_as_ids() {
        assert_eq!("0".parse::<Identity>().unwrap(), Identity::Id(0));
        assert_eq!("1000".parse::<Identity>().unwrap(), Identity::Id(1000));
        assert_eq!(
            "+12".parse::<Identity>().unwrap(),
            Identity::Name("+12".to_string())
        );
        assert_eq!(
            "www-data".parse::<Identity>().unwrap(),
            Identity::Name("www-data".to_string())
        );
    }

    #[test]
    fn numeric_ids_resolve_without_lookup() {
        assert_eq!(Identity::Id(4242).uid().unwrap(), Uid::from_raw(4242));
        assert_eq!(Identity::Id(4242).gid().unwrap(), Gid::from_raw(4242));
    }

    #[test]
    fn unknown_names_are_not_found() {
        let who = Identity::Name("no-such-user-fstree-test".into());
        assert_eq!(who.uid().unwrap_err().kind(), io::ErrorKind::NotFound);
        assert_eq!(who.gid().unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn root_resolves_by_name() {
        // uid 0 is named root on every Unix we run on
        if let Ok(Some(root)) = User::from_uid(Uid::from_raw(0)) {
            let resolved = Identity::Name(root.name.clone()).uid().unwrap();
            assert!(resolved.is_root());
        }
    }

    #[test]
    fn change_display_names_the_value() {
        assert_eq!(
            PermissionChange::Mode(Mode::new(0o644)).to_string(),
            "mode to 0644"
        );
        assert_eq!(
            PermissionChange::Owner(Identity::Id(0)).to_string(),
            "owner to 0"
        );
    }
}
