use std::fs;

use tracing::{debug, warn};

use crate::fs_op::error::FsOpError;
use crate::fs_op::handle::PathHandle;
use crate::fs_op::helpers::read_children;
use crate::fs_op::stat::PathType;

/// Sum of the sizes of the regular files at or below `handle`.
///
/// Subdirectories are summed by fresh handles; entries that are neither
/// files nor directories add nothing. A link to a file counts as that file,
/// a link to a directory is not followed. A subdirectory that cannot be
/// listed counts as empty. Nothing is cached.
pub(crate) fn tree_size(handle: &PathHandle) -> Result<u64, FsOpError> {
    let path = handle.current_path();
    if !handle.exists() {
        return Err(FsOpError::NotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "size");
    Ok(walk_size(handle))
}

fn walk_size(handle: &PathHandle) -> u64 {
    let path = handle.current_path();
    if !handle.is_dir() {
        return file_size(path);
    }

    let children = match read_children(path) {
        Ok(children) => children,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot list directory, counted as empty");
            return 0;
        }
    };
    children
        .iter()
        .map(|child| match PathType::of_entry(child) {
            PathType::File => file_size(child),
            PathType::Directory => walk_size(&PathHandle::new(child)),
            _ => 0,
        })
        .sum()
}

fn file_size(path: &std::path::Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
