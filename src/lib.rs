//! Path and directory handles with tree-aware filesystem operations.
//!
//! ```no_run
//! use fstree::{DirHandle, Identity, Mode, PathHandle};
//!
//! let backups = DirHandle::new("/var/backups/site")?;
//! let site = PathHandle::new("/srv/site");
//! site.copy(backups.current_path().join("today"), Mode::new(0o750))?;
//! site.chgrp(&Identity::Name("www-data".into()), true)?;
//! println!("{} bytes", backups.size()?);
//! # Ok::<(), fstree::FsOpError>(())
//! ```

pub mod fs_op;
pub mod logging;
pub mod settings;

pub use crate::fs_op::{BindOptions, DirHandle, FsOpError, Identity, Mode, PathHandle, PermissionChange};
pub use crate::settings::{Settings, SettingsError};
