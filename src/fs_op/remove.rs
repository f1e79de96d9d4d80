use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;

/// Remove `path` and, if it is a directory, everything below it.
///
/// The walk is post-order (contents first) and never follows symbolic
/// links: links are unlinked, not descended into. The first failing unlink
/// or rmdir stops the walk and is returned with the failing path; entries
/// already removed stay removed.
///
/// Unlike `std::fs::remove_dir_all` wrappers that treat a missing path as
/// success, removing something that is not there is an error.
pub fn remove_tree(path: &Path) -> Result<(), FsOpError> {
    debug!(path = %path.display(), "remove");

    let meta = fs::symlink_metadata(path).map_err(|source| FsOpError::Remove {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return fs::remove_file(path).map_err(|source| FsOpError::Remove {
            path: path.to_path_buf(),
            source,
        });
    }

    for entry in WalkDir::new(path).follow_links(false).contents_first(true) {
        let entry = entry.map_err(|e| {
            let failed = e.path().unwrap_or(path).to_path_buf();
            FsOpError::Remove {
                path: failed,
                source: io::Error::from(e),
            }
        })?;
        let target = entry.path();
        trace!(path = %target.display(), "unlink");
        let removed = if entry.file_type().is_dir() {
            fs::remove_dir(target)
        } else {
            fs::remove_file(target)
        };
        removed.map_err(|source| FsOpError::Remove {
            path: target.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
