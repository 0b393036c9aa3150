//! Command-line argument definitions.

use crate::core::AggregationMode;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable consulted for the lexicon path when neither
/// `--lexicon` nor the config file names one.
pub const LEXICON_ENV_VAR: &str = "ANEW_LEXICON";

#[derive(Parser, Debug)]
#[command(name = "anew-sentiment")]
#[command(about = "Per-sentence valence, arousal and dominance scoring with the ANEW lexicon", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every sentence of one document or a directory of documents
    Analyze {
        /// Single text file to analyze
        #[arg(long, conflicts_with = "dir", required_unless_present = "dir")]
        file: Option<PathBuf>,

        /// Directory whose .txt files are analyzed
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Existing directory that receives the output files
        #[arg(long)]
        out: PathBuf,

        /// Aggregation of matched word scores (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<AggregationMode>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// ANEW lexicon CSV (falls back to the config file, then $ANEW_LEXICON)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Newline-separated stopword list replacing the built-in English list
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .anew.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = one per core)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Score sentences of each document in parallel
        #[arg(long)]
        parallel: bool,

        /// Disable colored terminal output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Suppress progress bars and all logging below errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default .anew.toml into the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
