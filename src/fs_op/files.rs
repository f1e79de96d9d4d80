//! One-shot helpers taking a path instead of a handle.
//!
//! Each function binds a transient [`PathHandle`] (creation disabled), runs
//! one operation and drops the handle again, so these are exactly
//! equivalent to calling the handle method yourself:
//!
//! ```no_run
//! use fstree::fs_op::files;
//! use fstree::Mode;
//!
//! files::copy("/srv/site", "/srv/site.bak", Mode::new(0o750))?;
//! let bytes = files::size("/srv/site.bak")?;
//! # Ok::<(), fstree::FsOpError>(())
//! ```

use std::path::Path;

use crate::fs_op::create::DirHandle;
use crate::fs_op::error::FsOpError;
use crate::fs_op::handle::PathHandle;
use crate::fs_op::identity::Identity;
use crate::fs_op::mode::Mode;

/// Stat-based helpers for simple predicates.
pub use crate::fs_op::stat::{exists, is_dir, is_executable, is_file, is_readable, is_symlink, is_writable};

pub fn copy(path: impl AsRef<Path>, to: impl AsRef<Path>, mode: Mode) -> Result<(), FsOpError> {
    PathHandle::new(path).copy(to, mode).map(|_| ())
}

/// Move `path` to `to`, returning a handle bound to the new location.
pub fn move_path(path: impl AsRef<Path>, to: impl AsRef<Path>, overwrite: bool) -> Result<PathHandle, FsOpError> {
    let mut handle = PathHandle::new(path);
    handle.move_to(to, overwrite)?;
    Ok(handle)
}

pub fn remove(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    PathHandle::new(path).remove()
}

pub fn chmod(path: impl AsRef<Path>, mode: Mode, recursive: bool) -> Result<(), FsOpError> {
    PathHandle::new(path).chmod(mode, recursive).map(|_| ())
}

pub fn chown(path: impl AsRef<Path>, user: &Identity, recursive: bool) -> Result<(), FsOpError> {
    PathHandle::new(path).chown(user, recursive).map(|_| ())
}

pub fn chgrp(path: impl AsRef<Path>, group: &Identity, recursive: bool) -> Result<(), FsOpError> {
    PathHandle::new(path).chgrp(group, recursive).map(|_| ())
}

pub fn size(path: impl AsRef<Path>) -> Result<u64, FsOpError> {
    PathHandle::new(path).size()
}

/// Create a directory (parents too when `recursive`) and return a handle
/// on it.
pub fn create_dir(path: impl AsRef<Path>, mode: Mode, recursive: bool) -> Result<DirHandle, FsOpError> {
    let handle = DirHandle::open(path);
    handle.create(mode, recursive)?;
    Ok(handle)
}
