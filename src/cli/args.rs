use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fstree::{Identity, Mode};

#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(about = "Copy, move, remove, chmod/chown/chgrp and size whole directory trees")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Settings file (defaults to $FSTREE_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every operation
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print what a path is and what the current user may do with it
    Stat { path: PathBuf },

    /// Print the total size in bytes of the files at or below a path
    Size { path: PathBuf },

    /// Copy a file or directory tree
    Copy {
        src: PathBuf,
        dst: PathBuf,
        /// Mode for every created entry (octal)
        #[arg(long)]
        mode: Option<Mode>,
    },

    /// Move (rename) a path
    Move {
        src: PathBuf,
        dst: PathBuf,
        /// Fail instead of replacing an existing destination
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Remove a file or a whole directory tree
    Remove { path: PathBuf },

    /// Change permission bits
    Chmod {
        mode: Mode,
        path: PathBuf,
        #[arg(long)]
        no_recursive: bool,
    },

    /// Change owner (user name or uid)
    Chown {
        user: Identity,
        path: PathBuf,
        #[arg(long)]
        no_recursive: bool,
    },

    /// Change group (group name or gid)
    Chgrp {
        group: Identity,
        path: PathBuf,
        #[arg(long)]
        no_recursive: bool,
    },

    /// Create a directory
    Mkdir {
        path: PathBuf,
        #[arg(long)]
        mode: Option<Mode>,
        /// Do not create missing parent directories
        #[arg(long)]
        no_parents: bool,
    },
}
