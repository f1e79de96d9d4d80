//! Path handles and the recursive filesystem operations behind them.

pub mod create;
pub mod error;
pub mod files;
pub mod handle;
pub mod identity;
pub mod mode;
pub mod mv;
pub mod path;
pub mod remove;
pub mod stat;

mod copy;
mod helpers;
mod metadata;
mod permissions;
mod size;

pub use create::DirHandle;
pub use error::FsOpError;
pub use handle::{BindOptions, PathHandle};
pub use identity::{Identity, PermissionChange};
pub use mode::{Mode, ParseModeError};
