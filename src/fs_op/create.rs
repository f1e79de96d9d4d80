use std::fs::DirBuilder;
use std::ops::{Deref, DerefMut};
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

use tracing::debug;

use crate::fs_op::error::FsOpError;
use crate::fs_op::handle::{BindOptions, PathHandle};
use crate::fs_op::metadata::apply_mode;
use crate::fs_op::mode::Mode;

/// A handle on a directory that can also create it.
///
/// Derefs to [`PathHandle`] for every other operation; `create` is the one
/// capability a generic handle does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirHandle {
    inner: PathHandle,
}

impl DirHandle {
    /// Bind to `path`, creating it (and its parents) with mode `0755` when
    /// it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FsOpError> {
        Self::with_options(path, BindOptions::default())
    }

    /// Bind to `path` without creating anything.
    pub fn open(path: impl AsRef<Path>) -> Self {
        DirHandle {
            inner: PathHandle::new(path),
        }
    }

    pub fn with_options(path: impl AsRef<Path>, options: BindOptions) -> Result<Self, FsOpError> {
        let handle = Self::open(path);
        if options.create && !handle.exists() {
            handle.create(options.mode, true)?;
        }
        Ok(handle)
    }

    /// Create the directory if it does not exist yet.
    ///
    /// With `recursive` missing parents are created too (with the process
    /// default mode); the directory itself always ends up with exactly
    /// `mode`. An existing path is left alone.
    pub fn create(&self, mode: Mode, recursive: bool) -> Result<&Self, FsOpError> {
        if self.exists() {
            return Ok(self);
        }
        let path = self.current_path();
        debug!(path = %path.display(), %mode, recursive, "creating directory");
        create_dir_with_mode(path, mode, recursive)?;
        Ok(self)
    }

    pub fn into_inner(self) -> PathHandle {
        self.inner
    }
}

impl Deref for DirHandle {
    type Target = PathHandle;

    fn deref(&self) -> &PathHandle {
        &self.inner
    }
}

impl DerefMut for DirHandle {
    fn deref_mut(&mut self) -> &mut PathHandle {
        &mut self.inner
    }
}

/// `mkdir` with an explicit mode that ignores the umask.
pub(crate) fn create_dir_with_mode(path: &Path, mode: Mode, recursive: bool) -> Result<(), FsOpError> {
    let creation = |source: std::io::Error| FsOpError::Creation {
        path: path.to_path_buf(),
        mode,
        source,
    };
    DirBuilder::new()
        .recursive(recursive)
        .mode(mode.bits())
        .create(path)
        .map_err(creation)?;
    apply_mode(path, mode).map_err(creation)
}
