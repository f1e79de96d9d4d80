mod args;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fstree::fs_op::files;
use fstree::logging::{init_logging, Verbosity};
use fstree::settings::{load_settings, Settings};
use fstree::PathHandle;
use tracing::info;

use crate::args::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    init_logging(verbosity, &settings.log_level);

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Stat { path } => {
            print_stat(&PathHandle::new(&path));
        }
        Command::Size { path } => {
            let bytes = files::size(&path).with_context(|| format!("sizing {}", path.display()))?;
            println!("{bytes}");
        }
        Command::Copy { src, dst, mode } => {
            let mode = mode.unwrap_or(settings.mode);
            files::copy(&src, &dst, mode)
                .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
            info!(src = %src.display(), dst = %dst.display(), "copied");
        }
        Command::Move {
            src,
            dst,
            no_overwrite,
        } => {
            let overwrite = settings.overwrite && !no_overwrite;
            let moved = files::move_path(&src, &dst, overwrite)
                .with_context(|| format!("moving {} to {}", src.display(), dst.display()))?;
            info!(path = %moved.current_path().display(), "moved");
        }
        Command::Remove { path } => {
            files::remove(&path).with_context(|| format!("removing {}", path.display()))?;
            info!(path = %path.display(), "removed");
        }
        Command::Chmod {
            mode,
            path,
            no_recursive,
        } => {
            files::chmod(&path, mode, recursive(settings, no_recursive))
                .with_context(|| format!("changing mode of {}", path.display()))?;
        }
        Command::Chown {
            user,
            path,
            no_recursive,
        } => {
            files::chown(&path, &user, recursive(settings, no_recursive))
                .with_context(|| format!("changing owner of {}", path.display()))?;
        }
        Command::Chgrp {
            group,
            path,
            no_recursive,
        } => {
            files::chgrp(&path, &group, recursive(settings, no_recursive))
                .with_context(|| format!("changing group of {}", path.display()))?;
        }
        Command::Mkdir {
            path,
            mode,
            no_parents,
        } => {
            let mode = mode.unwrap_or(settings.mode);
            let dir = files::create_dir(&path, mode, recursive(settings, no_parents))
                .with_context(|| format!("creating {}", path.display()))?;
            info!(path = %dir.current_path().display(), %mode, "created");
        }
    }
    Ok(())
}

fn recursive(settings: &Settings, disabled: bool) -> bool {
    settings.recursive && !disabled
}

fn print_stat(handle: &PathHandle) {
    let path: &Path = handle.current_path();
    println!("path: {}", path.display());
    println!("exists: {}", handle.exists());
    println!("directory: {}", handle.is_dir());
    println!("file: {}", handle.is_file());
    println!("symlink: {}", handle.is_symlink());
    println!("readable: {}", handle.is_readable());
    println!("writable: {}", handle.is_writable());
    println!("executable: {}", handle.is_executable());
}
