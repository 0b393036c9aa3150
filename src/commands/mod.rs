//! CLI command implementations.
//!
//! - **analyze**: score the sentences of one document or a directory of documents
//! - **init**: write a default `.anew.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig, AnalyzeSummary, InputSource};
pub use init::init_config;
