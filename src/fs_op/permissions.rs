//! Recursive mode, owner and group changes.
//!
//! All three walk the tree the same way: a directory is changed first, then
//! each immediate child in enumeration order, with subdirectories handled
//! completely (by a fresh handle) before the next sibling. Every entry is
//! changed exactly once. Symbolic links inside the tree are left alone so a
//! walk never escapes it. Because the directory is changed before it is
//! listed, a recursive change can repair a directory the caller could not
//! read beforehand.
//!
//! The first failure aborts the walk with [`FsOpError::Permission`] naming
//! the path and the requested value.

use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::fs_op::error::FsOpError;
use crate::fs_op::handle::PathHandle;
use crate::fs_op::helpers::read_children;
use crate::fs_op::identity::{Identity, PermissionChange};
use crate::fs_op::metadata::apply_mode;
use crate::fs_op::mode::Mode;
use crate::fs_op::stat::{is_symlink, PathType};

type ApplyFn<'a> = dyn Fn(&Path) -> io::Result<()> + 'a;

pub(crate) fn chmod(handle: &PathHandle, mode: Mode, recursive: bool) -> Result<(), FsOpError> {
    let change = PermissionChange::Mode(mode);
    debug!(path = %handle.current_path().display(), %change, recursive, "chmod");
    apply_tree(handle, recursive, &change, &|p: &Path| apply_mode(p, mode))
}

pub(crate) fn chown(handle: &PathHandle, user: &Identity, recursive: bool) -> Result<(), FsOpError> {
    let change = PermissionChange::Owner(user.clone());
    debug!(path = %handle.current_path().display(), %change, recursive, "chown");
    let uid = user
        .uid()
        .map_err(|e| permission_error(handle.current_path(), &change, e))?;
    apply_tree(handle, recursive, &change, &|p: &Path| {
        nix::unistd::chown(p, Some(uid), None).map_err(io::Error::from)
    })
}

pub(crate) fn chgrp(handle: &PathHandle, group: &Identity, recursive: bool) -> Result<(), FsOpError> {
    let change = PermissionChange::Group(group.clone());
    debug!(path = %handle.current_path().display(), %change, recursive, "chgrp");
    let gid = group
        .gid()
        .map_err(|e| permission_error(handle.current_path(), &change, e))?;
    apply_tree(handle, recursive, &change, &|p: &Path| {
        nix::unistd::chown(p, None, Some(gid)).map_err(io::Error::from)
    })
}

fn apply_tree(
    handle: &PathHandle,
    recursive: bool,
    change: &PermissionChange,
    apply: &ApplyFn<'_>,
) -> Result<(), FsOpError> {
    let path = handle.current_path();
    if !(recursive && handle.is_dir()) {
        return apply_one(path, change, apply);
    }

    apply_one(path, change, apply)?;
    // the new value may itself have revoked read access
    let children = read_children(path).map_err(|e| permission_error(path, change, e))?;

    for child in children {
        if is_symlink(&child) {
            trace!(path = %child.display(), "symlink left unchanged");
            continue;
        }
        if PathType::of(&child) == PathType::Directory {
            apply_tree(&PathHandle::new(&child), true, change, apply)?;
        } else {
            apply_one(&child, change, apply)?;
        }
    }
    Ok(())
}

fn apply_one(path: &Path, change: &PermissionChange, apply: &ApplyFn<'_>) -> Result<(), FsOpError> {
    trace!(path = %path.display(), %change, "apply");
    apply(path).map_err(|e| permission_error(path, change, e))
}

fn permission_error(path: &Path, change: &PermissionChange, source: io::Error) -> FsOpError {
    FsOpError::Permission {
        path: path.to_path_buf(),
        change: change.clone(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::unistd::{getegid, geteuid};
    use std::fs;
    use std::os::unix::fs::{MetadataExt, PermissionsExt};
    use tempfile::tempdir;

    fn mode_of(p: &Path) -> u32 {
        fs::metadata(p).unwrap().permissions().mode() & 0o7777
    }

    fn sample_tree(root: &Path) {
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), b"1").unwrap();
        fs::write(root.join("a/mid.txt"), b"2").unwrap();
        fs::write(root.join("a/b/leaf.txt"), b"3").unwrap();
    }

    #[test]
    fn recursive_chmod_reaches_every_entry() {
        let td = tempdir().unwrap();
        let root = td.path().join("tree");
        sample_tree(&root);

        chmod(&PathHandle::new(&root), Mode::new(0o700), true).unwrap();
        for rel in ["", "a", "a/b", "top.txt", "a/mid.txt", "a/b/leaf.txt"] {
            assert_eq!(mode_of(&root.join(rel)), 0o700, "mode of `{rel}`");
        }
    }

    #[test]
    fn non_recursive_chmod_touches_only_the_directory() {
        let td = tempdir().unwrap();
        let root = td.path().join("tree");
        sample_tree(&root);
        fs::set_permissions(root.join("top.txt"), fs::Permissions::from_mode(0o644)).unwrap();

        chmod(&PathHandle::new(&root), Mode::new(0o711), false).unwrap();
        assert_eq!(mode_of(&root), 0o711);
        assert_eq!(mode_of(&root.join("top.txt")), 0o644);
    }

    #[test]
    fn chmod_644_on_directory_with_one_file() {
        // without CAP_DAC_OVERRIDE the child of a 0644 directory cannot be
        // reached any more
        if !geteuid().is_root() {
            eprintln!("not running as root, skipping");
            return;
        }
        let td = tempdir().unwrap();
        let dir = td.path().join("d");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("f"), b"x").unwrap();

        chmod(&PathHandle::new(&dir), Mode::new(0o644), true).unwrap();
        assert_eq!(mode_of(&dir.join("f")), 0o644);
        assert_eq!(mode_of(&dir), 0o644);
    }

    #[test]
    fn missing_path_is_a_permission_error() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope");
        let err = chmod(&PathHandle::new(&missing), Mode::new(0o600), true).unwrap_err();
        match err {
            FsOpError::Permission { path, change, .. } => {
                assert!(path.ends_with("nope"));
                assert_eq!(change, PermissionChange::Mode(Mode::new(0o600)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn symlinks_inside_the_tree_are_skipped() {
        let td = tempdir().unwrap();
        let outside = td.path().join("outside.txt");
        fs::write(&outside, b"x").unwrap();
        fs::set_permissions(&outside, fs::Permissions::from_mode(0o644)).unwrap();

        let root = td.path().join("tree");
        fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        chmod(&PathHandle::new(&root), Mode::new(0o700), true).unwrap();
        assert_eq!(mode_of(&outside), 0o644);
    }

    #[test]
    fn chown_and_chgrp_to_self_succeed() {
        let td = tempdir().unwrap();
        let root = td.path().join("tree");
        sample_tree(&root);

        let uid = geteuid().as_raw();
        let gid = getegid().as_raw();
        chown(&PathHandle::new(&root), &Identity::Id(uid), true).unwrap();
        chgrp(&PathHandle::new(&root), &Identity::Id(gid), true).unwrap();

        let leaf = fs::metadata(root.join("a/b/leaf.txt")).unwrap();
        assert_eq!(leaf.uid(), uid);
        assert_eq!(leaf.gid(), gid);
    }

    #[test]
    fn unknown_group_fails_before_touching_anything() {
        let td = tempdir().unwrap();
        let root = td.path().join("tree");
        sample_tree(&root);

        let group = Identity::Name("no-such-group-fstree-test".into());
        let err = chgrp(&PathHandle::new(&root), &group, true).unwrap_err();
        match err {
            FsOpError::Permission { path, change, source } => {
                assert_eq!(path, fs::canonicalize(&root).unwrap());
                assert_eq!(change, PermissionChange::Group(group));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failure_on_the_directory_itself_stops_the_walk() {
        // an unprivileged user may not give files away to root
        if geteuid().is_root() {
            eprintln!("running as root, skipping");
            return;
        }
        let td = tempdir().unwrap();
        let root = td.path().join("tree");
        sample_tree(&root);

        let err = chown(&PathHandle::new(&root), &Identity::Id(0), true).unwrap_err();
        assert_eq!(err.path(), fs::canonicalize(&root).unwrap());
    }

    #[test]
    fn recursive_chmod_repairs_an_unlistable_directory() {
        if geteuid().is_root() {
            eprintln!("running as root, directory modes are not enforced; skipping");
            return;
        }
        let td = tempdir().unwrap();
        let locked = td.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("f"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let res = chmod(&PathHandle::new(&locked), Mode::new(0o755), true);
        if res.is_err() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        }
        res.unwrap();
        assert_eq!(mode_of(&locked), 0o755);
        assert_eq!(mode_of(&locked.join("f")), 0o755);
    }

    #[test]
    fn mode_that_revokes_listing_is_reported_on_the_directory() {
        if geteuid().is_root() {
            eprintln!("running as root, directory modes are not enforced; skipping");
            return;
        }
        let td = tempdir().unwrap();
        let dir = td.path().join("d");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("f"), b"x").unwrap();
        fs::set_permissions(dir.join("f"), fs::Permissions::from_mode(0o644)).unwrap();

        let err = chmod(&PathHandle::new(&dir), Mode::new(0o300), true).unwrap_err();
        assert_eq!(mode_of(&dir), 0o300);
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        match err {
            FsOpError::Permission { path, source, .. } => {
                assert_eq!(path, fs::canonicalize(&dir).unwrap());
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(mode_of(&dir.join("f")), 0o644);
    }
}
