use crate::core::AggregationMode;
use serde::{Deserialize, Serialize};

/// Parameters of the per-sentence scoring pipeline.
///
/// Defaults reproduce the classic ANEW procedure: a three-token negation
/// window, reflection around 5 on the 1-9 scale, and a `[4, 6]` neutral band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub mode: AggregationMode,

    /// Number of raw tokens scanned backwards for a negation marker
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,

    #[serde(default = "default_negation_markers")]
    pub negation_markers: Vec<String>,

    /// Prefix added to negated words in the found-words list
    #[serde(default = "default_negation_prefix")]
    pub negation_prefix: String,

    /// Neutral point of the lexicon scale; negated scores are reflected across it
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,

    /// Valence strictly above this is positive
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    /// Valence strictly below this is negative
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::default(),
            negation_window: default_negation_window(),
            negation_markers: default_negation_markers(),
            negation_prefix: default_negation_prefix(),
            midpoint: default_midpoint(),
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

impl ScoringConfig {
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_negation_marker(&self, token: &str) -> bool {
        self.negation_markers.iter().any(|m| m == token)
    }
}

pub fn default_negation_window() -> usize {
    3
}

pub fn default_negation_markers() -> Vec<String> {
    vec!["not".to_string(), "no".to_string(), "n't".to_string()]
}

pub fn default_negation_prefix() -> String {
    "neg-".to_string()
}

pub fn default_midpoint() -> f64 {
    5.0
}

pub fn default_positive_threshold() -> f64 {
    6.0
}

pub fn default_negative_threshold() -> f64 {
    4.0
}
