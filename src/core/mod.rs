pub mod errors;

pub use errors::{Error, Result, ResultExt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the affective norms table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LexiconEntry {
    pub word: String,
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl LexiconEntry {
    pub fn new(word: impl Into<String>, valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            word: word.into(),
            valence,
            arousal,
            dominance,
        }
    }

    pub fn scores(&self) -> AffectScores {
        AffectScores {
            valence: self.valence,
            arousal: self.arousal,
            dominance: self.dominance,
        }
    }
}

/// Valence / arousal / dominance triple.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct AffectScores {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl AffectScores {
    /// Reflect every dimension across `midpoint`: `x' = midpoint - (x - midpoint)`.
    pub fn reflect(self, midpoint: f64) -> Self {
        Self {
            valence: reflect(self.valence, midpoint),
            arousal: reflect(self.arousal, midpoint),
            dominance: reflect(self.dominance, midpoint),
        }
    }
}

pub fn reflect(value: f64, midpoint: f64) -> f64 {
    midpoint - (value - midpoint)
}

/// Coarse part-of-speech category passed to the lemmatizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosHint {
    Noun,
    Verb,
}

impl PosHint {
    /// Derive the hint from a Penn-style tag. Only tags starting with `N` or `V` qualify.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next() {
            Some('N') => Some(PosHint::Noun),
            Some('V') => Some(PosHint::Verb),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggedToken {
    pub surface: String,
    pub pos: String,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }

    pub fn pos_hint(&self) -> Option<PosHint> {
        PosHint::from_tag(&self.pos)
    }
}

/// A token that matched the lexicon, with negation already applied to its scores.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredWord {
    pub lemma: String,
    pub negated: bool,
    pub scores: AffectScores,
}

impl ScoredWord {
    pub fn from_entry(lemma: &str, negated: bool, entry: &LexiconEntry, midpoint: f64) -> Self {
        let scores = if negated {
            entry.scores().reflect(midpoint)
        } else {
            entry.scores()
        };
        Self {
            lemma: lemma.to_string(),
            negated,
            scores,
        }
    }

    /// Form reported in the found-words list, e.g. `neg-happy`.
    pub fn display_form(&self, negation_prefix: &str) -> String {
        if self.negated {
            format!("{negation_prefix}{}", self.lemma)
        } else {
            self.lemma.clone()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Mean,
    Median,
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::Mean => write!(f, "mean"),
            AggregationMode::Median => write!(f, "median"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl SentimentLabel {
    /// Label a sentence valence. The neutral band is inclusive on both ends,
    /// so a valence exactly at either threshold is neutral.
    pub fn classify(sentiment: f64, positive_threshold: f64, negative_threshold: f64) -> Self {
        if sentiment > positive_threshold {
            SentimentLabel::Positive
        } else if sentiment < negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::NotAvailable => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentinel rendered for scores and labels of sentences without lexicon matches.
pub const NOT_AVAILABLE: &str = "N/A";

/// Scoring outcome for one sentence of a document.
///
/// `scores` is `None` exactly when no word matched the lexicon, in which case
/// `label` is [`SentimentLabel::NotAvailable`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SentenceResult {
    /// 1-based position of the sentence in its document.
    pub index: usize,
    pub sentence: String,
    pub all_words: Vec<String>,
    pub found_words: Vec<String>,
    pub scores: Option<AffectScores>,
    pub label: SentimentLabel,
}

impl SentenceResult {
    pub fn matched_count(&self) -> usize {
        self.found_words.len()
    }

    pub fn total_words(&self) -> usize {
        self.all_words.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.found_words.is_empty()
    }

    pub fn sentiment(&self) -> Option<f64> {
        self.scores.map(|s| s.valence)
    }

    pub fn arousal(&self) -> Option<f64> {
        self.scores.map(|s| s.arousal)
    }

    pub fn dominance(&self) -> Option<f64> {
        self.scores.map(|s| s.dominance)
    }

    /// `"<found> out of <total>"` when anything matched, otherwise `"0"`.
    pub fn words_found_summary(&self) -> String {
        if self.has_matches() {
            format!("{} out of {}", self.matched_count(), self.total_words())
        } else {
            "0".to_string()
        }
    }
}

/// Render an optional score, using the `N/A` sentinel when absent.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{value:?}"),
        None => NOT_AVAILABLE.to_string(),
    }
}
