//! Configuration for scoring runs.
//!
//! Settings come from an optional `.anew.toml`, found by walking up from the
//! working directory or given explicitly with `--config`. Command-line flags
//! override file values at the command layer.

mod core;
mod loader;
pub mod scoring;
pub mod validation;

pub use core::{AnewConfig, LexiconConfig, OutputConfig, StopwordsConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use scoring::ScoringConfig;
pub use validation::{validate_config, validate_config_result, ConfigValidation};

/// Default `.anew.toml` written by `anew-sentiment init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# anew-sentiment configuration

[scoring]
# "mean" or "median"
mode = "mean"
negation_window = 3
negation_markers = ["not", "no", "n't"]
negation_prefix = "neg-"
midpoint = 5.0
positive_threshold = 6.0
negative_threshold = 4.0

[lexicon]
# path = "lib/EnglishShortened.csv"

[output]
# "csv", "json" or "terminal"
format = "csv"
"#;
