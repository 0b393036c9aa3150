//! Logging setup.
//!
//! All diagnostics go to stderr through `tracing`, so CSV or JSON written to
//! stdout is never interleaved with log lines. `RUST_LOG` takes precedence
//! over the verbosity flags when it is set.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a `-v` count. `--quiet` wins over any verbosity.
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn build_filter(verbosity: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)))
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_tracing(verbosity: u8, quiet: bool) {
    let _ = fmt()
        .with_env_filter(build_filter(verbosity, quiet))
        .with_target(verbosity >= 2)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
