//! Handles bound to one filesystem path.
//!
//! A [`PathHandle`] resolves its path once, at bind time, and then exposes
//! queries plus the tree-aware operations (copy, move, remove, chmod, chown,
//! chgrp, size). Binding never touches the filesystem beyond resolving the
//! path: a handle on a path that does not exist is valid, and `exists()`
//! answers the question on demand.
//!
//! Recursive operations never share handles; every child visited gets its
//! own short-lived `PathHandle`.

use std::path::{Path, PathBuf};

use crate::fs_op::error::FsOpError;
use crate::fs_op::identity::Identity;
use crate::fs_op::mode::Mode;
use crate::fs_op::{copy, mv, path, permissions, remove, size, stat};

/// Options applied when binding a handle.
///
/// `create` only has an effect on handle kinds that can create their path
/// (see [`DirHandle`](crate::fs_op::create::DirHandle)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindOptions {
    pub create: bool,
    pub mode: Mode,
}

impl Default for BindOptions {
    fn default() -> Self {
        BindOptions {
            create: true,
            mode: Mode::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHandle {
    path: PathBuf,
}

impl PathHandle {
    /// Bind to `path`. Generic handles never create anything.
    pub fn new(path: impl AsRef<Path>) -> Self {
        PathHandle {
            path: path::resolve_path(path),
        }
    }

    /// The resolved path this handle is bound to.
    pub fn current_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        stat::exists(&self.path)
    }

    pub fn is_dir(&self) -> bool {
        stat::is_dir(&self.path)
    }

    pub fn is_file(&self) -> bool {
        stat::is_file(&self.path)
    }

    pub fn is_symlink(&self) -> bool {
        stat::is_symlink(&self.path)
    }

    pub fn is_writable(&self) -> bool {
        stat::is_writable(&self.path)
    }

    pub fn is_readable(&self) -> bool {
        stat::is_readable(&self.path)
    }

    pub fn is_executable(&self) -> bool {
        stat::is_executable(&self.path)
    }

    /// Copy this path to `to`, recursively for directories, setting `mode`
    /// on everything created and keeping file modification times.
    ///
    /// Existing destination files are overwritten. The handle stays bound
    /// to the source.
    pub fn copy(&self, to: impl AsRef<Path>, mode: Mode) -> Result<&Self, FsOpError> {
        copy::copy_tree(self, to.as_ref(), mode)?;
        Ok(self)
    }

    /// Rename this path to `to` and rebind the handle there.
    ///
    /// With `overwrite == false` an existing destination is a
    /// [`FsOpError::Conflict`] and nothing is touched.
    pub fn move_to(&mut self, to: impl AsRef<Path>, overwrite: bool) -> Result<&mut Self, FsOpError> {
        mv::move_path(&self.path, to.as_ref(), overwrite)?;
        self.path = path::resolve_path(to);
        Ok(self)
    }

    /// Delete this path and, for a directory, everything below it.
    pub fn remove(&self) -> Result<(), FsOpError> {
        remove::remove_tree(&self.path)
    }

    /// Set the permission bits of the bound path to exactly `mode`.
    ///
    /// With `recursive` and a directory, the directory is changed first and
    /// then everything below it. Symbolic links inside the tree are left
    /// unchanged and not followed, so their targets keep their mode. The
    /// first failure stops the walk with [`FsOpError::Permission`].
    pub fn chmod(&self, mode: Mode, recursive: bool) -> Result<&Self, FsOpError> {
        permissions::chmod(self, mode, recursive)?;
        Ok(self)
    }

    /// Change the owning user, walking the tree like [`PathHandle::chmod`].
    ///
    /// Symbolic links inside the tree are skipped: neither the link nor its
    /// target changes owner. An unknown user name fails before anything is
    /// touched.
    pub fn chown(&self, user: &Identity, recursive: bool) -> Result<&Self, FsOpError> {
        permissions::chown(self, user, recursive)?;
        Ok(self)
    }

    /// Change the owning group, walking the tree like [`PathHandle::chmod`].
    /// Symbolic links inside the tree are skipped.
    pub fn chgrp(&self, group: &Identity, recursive: bool) -> Result<&Self, FsOpError> {
        permissions::chgrp(self, group, recursive)?;
        Ok(self)
    }

    /// Total size in bytes of the regular files at or below this path.
    pub fn size(&self) -> Result<u64, FsOpError> {
        size::tree_size(self)
    }
}
