//! Side-effect free queries on a path.
//!
//! None of these fail: an underlying stat or access error reads as `false`.

use std::fs;
use std::path::Path;

use nix::unistd::{access, AccessFlags};

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist (or could not be stat'ed).
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, device node, ...).
    Other,
}

impl PathType {
    /// Classify `path`, following symbolic links.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(meta) if meta.is_dir() => PathType::Directory,
            Ok(meta) if meta.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }

    /// Classify an entry met while walking a tree.
    ///
    /// A symbolic link to a regular file counts as [`PathType::File`]. A
    /// link to a directory is [`PathType::Other`], so walks never descend
    /// through links and cannot loop.
    pub fn of_entry<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::symlink_metadata(path) {
            Err(_) => PathType::NotFound,
            Ok(meta) if meta.file_type().is_symlink() => match PathType::of(path) {
                PathType::File => PathType::File,
                _ => PathType::Other,
            },
            Ok(meta) if meta.is_dir() => PathType::Directory,
            Ok(meta) if meta.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }
}

/// Return `true` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

/// Return `true` if `path` itself is a symbolic link (the link is not
/// followed).
pub fn is_symlink<P: AsRef<Path>>(path: P) -> bool {
    fs::symlink_metadata(path.as_ref())
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// `access(2)` with `R_OK` for the real user.
pub fn is_readable<P: AsRef<Path>>(path: P) -> bool {
    access(path.as_ref(), AccessFlags::R_OK).is_ok()
}

/// `access(2)` with `W_OK` for the real user.
pub fn is_writable<P: AsRef<Path>>(path: P) -> bool {
    access(path.as_ref(), AccessFlags::W_OK).is_ok()
}

/// `access(2)` with `X_OK` for the real user.
pub fn is_executable<P: AsRef<Path>>(path: P) -> bool {
    access(path.as_ref(), AccessFlags::X_OK).is_ok()
}
