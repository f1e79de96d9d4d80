//! Tracing setup for the `fstree` binary. The library itself only emits
//! events and never installs a subscriber.

use tracing_subscriber::EnvFilter;

/// How chatty the binary was asked to be on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Pick the filter directive: `-q`/`-v` win over the configured level.
pub fn filter_directive(verbosity: Verbosity, configured: &str) -> String {
    match verbosity {
        Verbosity::Quiet => "error".to_string(),
        Verbosity::Verbose => "debug".to_string(),
        Verbosity::Normal => configured.to_string(),
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` takes precedence over
/// everything else. Calling this twice is harmless; the second call is
/// ignored.
pub fn init_logging(verbosity: Verbosity, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(verbosity, configured)))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
