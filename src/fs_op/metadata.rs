//! Metadata applied to freshly copied entries: an explicit mode and the
//! source's modification time.

use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_mtime, FileTime};

use crate::fs_op::mode::Mode;

/// Set exactly `mode` on `path`, independent of the process umask.
pub(crate) fn apply_mode(path: &Path, mode: Mode) -> io::Result<()> {
    fs::set_permissions(path, mode.permissions())
}

/// Apply `mode` to `dst` and give it the modification time of `src`.
///
/// Both steps are part of the copy contract, so errors propagate.
pub(crate) fn apply_copied_metadata(src: &Path, dst: &Path, mode: Mode) -> io::Result<()> {
    let mtime = FileTime::from_last_modification_time(&fs::metadata(src)?);
    apply_mode(dst, mode)?;
    set_file_mtime(dst, mtime)
}
