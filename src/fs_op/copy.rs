use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use tracing::{debug, trace};

use crate::fs_op::create::{create_dir_with_mode, DirHandle};
use crate::fs_op::error::FsOpError;
use crate::fs_op::handle::PathHandle;
use crate::fs_op::helpers::read_children;
use crate::fs_op::metadata::{apply_copied_metadata, apply_mode};
use crate::fs_op::mode::Mode;
use crate::fs_op::stat::PathType;

/// Copy whatever `src` is bound to into `to`.
///
/// Directories are walked depth-first: the destination directory exists
/// before any of its children are copied, and every subdirectory is
/// handled by a fresh handle on the source child. Regular files get `mode`
/// and the source's modification time. A link to a file is copied as that
/// file; links to directories and other entry kinds are skipped. Nothing is
/// rolled back when a step fails.
pub(crate) fn copy_tree(src: &PathHandle, to: &Path, mode: Mode) -> Result<(), FsOpError> {
    let from = src.current_path();
    debug!(src = %from.display(), dst = %to.display(), %mode, "copy");

    if !src.is_dir() {
        return copy_file(from, to, mode);
    }

    let dest = DirHandle::open(to);
    let dest_root = dest.current_path();
    if dest_root.starts_with(from) {
        return Err(copy_error(
            from,
            dest_root,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination lies inside the source directory",
            ),
        ));
    }
    dest.create(mode, true)?;
    if !dest.is_writable() {
        return Err(copy_error(
            from,
            dest_root,
            io::Error::new(io::ErrorKind::PermissionDenied, "destination is not writable"),
        ));
    }

    let children = read_children(from).map_err(|e| copy_error(from, dest_root, e))?;
    for child in children {
        let Some(name) = child.file_name() else {
            continue;
        };
        let target = dest_root.join(name);
        match PathType::of_entry(&child) {
            PathType::File => copy_file(&child, &target, mode)?,
            PathType::Directory => {
                ensure_dir(&target, mode)?;
                copy_tree(&PathHandle::new(&child), &target, mode)?;
            }
            kind => trace!(path = %child.display(), ?kind, "not copied"),
        }
    }
    Ok(())
}

fn copy_file(from: &Path, to: &Path, mode: Mode) -> Result<(), FsOpError> {
    trace!(src = %from.display(), dst = %to.display(), "copy file");
    if same_file(from, to) {
        return Err(copy_error(
            from,
            to,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            ),
        ));
    }
    fs::copy(from, to).map_err(|e| copy_error(from, to, e))?;
    apply_copied_metadata(from, to, mode).map_err(|e| copy_error(from, to, e))
}

// `fs::copy` truncates the destination before reading the source.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

// An existing directory at the destination is reused with `mode` reapplied.
fn ensure_dir(path: &Path, mode: Mode) -> Result<(), FsOpError> {
    if PathType::of(path) == PathType::Directory {
        return apply_mode(path, mode).map_err(|source| FsOpError::Creation {
            path: path.to_path_buf(),
            mode,
            source,
        });
    }
    create_dir_with_mode(path, mode, false)
}

fn copy_error(src: &Path, dst: &Path, source: io::Error) -> FsOpError {
    FsOpError::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    }
}
