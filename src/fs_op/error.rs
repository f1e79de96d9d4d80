use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fs_op::identity::PermissionChange;
use crate::fs_op::mode::Mode;

/// Errors produced by path handles and the free-function helpers.
///
/// Every variant names the operation category that failed and carries the
/// offending path(s) as fields, so callers can inspect them without parsing
/// the message. Work already done on disk before the failure is not undone.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// A directory could not be created.
    #[error("cannot create directory `{}` with mode {mode}: {source}", path.display())]
    Creation {
        path: PathBuf,
        mode: Mode,
        #[source]
        source: io::Error,
    },

    /// A file could not be copied, or the destination was not writable.
    #[error("cannot copy `{}` to `{}`: {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rename backing a move failed.
    #[error("cannot move `{}` to `{}`: {source}", src.display(), dst.display())]
    Move {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An unlink or rmdir failed while removing a tree.
    #[error("cannot remove `{}`: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A mode, owner or group change failed.
    #[error("cannot change {change} of `{}`: {source}", path.display())]
    Permission {
        path: PathBuf,
        change: PermissionChange,
        #[source]
        source: io::Error,
    },

    /// A move without overwrite found its destination already present.
    #[error("cannot move `{}` to `{}`: destination exists and overwrite is disabled", src.display(), dst.display())]
    Conflict { src: PathBuf, dst: PathBuf },

    /// The path an operation needs does not exist.
    #[error("path `{}` does not exist", path.display())]
    NotFound { path: PathBuf },
}

impl FsOpError {
    /// The path the failure is reported against (the source for two-path
    /// variants).
    pub fn path(&self) -> &std::path::Path {
        match self {
            FsOpError::Creation { path, .. }
            | FsOpError::Remove { path, .. }
            | FsOpError::Permission { path, .. }
            | FsOpError::NotFound { path } => path,
            FsOpError::Copy { src, .. }
            | FsOpError::Move { src, .. }
            | FsOpError::Conflict { src, .. } => src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::identity::Identity;

    #[test]
    fn messages_name_the_offending_path() {
        let err = FsOpError::Remove {
            path: PathBuf::from("/srv/data/old"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        insta::assert_snapshot!(err.to_string(), @"cannot remove `/srv/data/old`: permission denied");

        let err = FsOpError::Permission {
            path: PathBuf::from("/srv/data"),
            change: PermissionChange::Group(Identity::Name("staff".into())),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        insta::assert_snapshot!(err.to_string(), @"cannot change group to staff of `/srv/data`: entity not found");

        let err = FsOpError::Creation {
            path: PathBuf::from("/srv/new"),
            mode: Mode::new(0o750),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        insta::assert_snapshot!(err.to_string(), @"cannot create directory `/srv/new` with mode 0750: entity already exists");
    }

    #[test]
    fn path_accessor_prefers_source() {
        let err = FsOpError::Conflict {
            src: PathBuf::from("/a"),
            dst: PathBuf::from("/b"),
        };
        assert_eq!(err.path(), std::path::Path::new("/a"));
        assert!(std::error::Error::source(&err).is_none());

        let err = FsOpError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.path(), std::path::Path::new("/missing"));
    }
}
