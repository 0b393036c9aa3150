// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod document;
pub mod io;
pub mod lexicon;
pub mod nlp;
pub mod observability;
pub mod progress;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AffectScores, AggregationMode, Error, LexiconEntry, PosHint, Result, ScoredWord,
    SentenceResult, SentimentLabel, TaggedToken,
};

pub use crate::config::{AnewConfig, ScoringConfig};

pub use crate::document::{DocumentAnalyzer, DocumentOutcome};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::lexicon::Lexicon;

pub use crate::nlp::{
    Lemmatizer, RuleLemmatizer, RuleSentenceSplitter, RuleTagger, SentenceTokenizer,
    StopwordSet, Tagger,
};

pub use crate::scoring::SentenceScorer;
