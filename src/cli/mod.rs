//! Command-line interface: argument parsing (`args`) and runtime setup (`setup`).

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, LEXICON_ENV_VAR};
pub use setup::{configure_thread_pool, get_worker_count};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
