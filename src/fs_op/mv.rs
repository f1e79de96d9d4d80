use std::fs;
use std::path::Path;

use tracing::debug;

use crate::fs_op::error::FsOpError;

/// Rename `src` to `dest`.
///
/// When `overwrite` is false and anything (including a dangling symlink)
/// already sits at `dest`, a [`FsOpError::Conflict`] is returned before the
/// filesystem is touched. Otherwise the result of `rename(2)` decides; no
/// copy fallback is attempted across filesystems.
pub fn move_path(src: &Path, dest: &Path, overwrite: bool) -> Result<(), FsOpError> {
    debug!(src = %src.display(), dst = %dest.display(), overwrite, "move");
    if !overwrite && fs::symlink_metadata(dest).is_ok() {
        return Err(FsOpError::Conflict {
            src: src.to_path_buf(),
            dst: dest.to_path_buf(),
        });
    }
    fs::rename(src, dest).map_err(|source| FsOpError::Move {
        src: src.to_path_buf(),
        dst: dest.to_path_buf(),
        source,
    })
}
