use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::scoring::ScoringConfig;
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.anew.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnewConfig {
    /// Scoring pipeline parameters
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Lexicon resource location
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,

    /// Custom stopword list
    #[serde(default)]
    pub stopwords: Option<StopwordsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl AnewConfig {
    pub fn lexicon_path(&self) -> Option<&PathBuf> {
        self.lexicon.as_ref().and_then(|l| l.path.as_ref())
    }

    pub fn stopwords_path(&self) -> Option<&PathBuf> {
        self.stopwords.as_ref().and_then(|s| s.path.as_ref())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiconConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StopwordsConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}
