//! Linguistic collaborators used by the scorer.
//!
//! The scorer only depends on the traits defined here. Each comes with a
//! lightweight rule-based default so the binary works without an external
//! NLP toolkit; callers with a better tokenizer, tagger or lemmatizer can
//! inject their own.

pub mod lemmatizer;
pub mod sentences;
pub mod stopwords;
pub mod tagger;

pub use lemmatizer::RuleLemmatizer;
pub use sentences::RuleSentenceSplitter;
pub use stopwords::StopwordSet;
pub use tagger::RuleTagger;

use crate::core::{PosHint, Result, TaggedToken};

/// Splits a document into sentences, preserving their original text.
pub trait SentenceTokenizer: Send + Sync {
    fn split(&self, text: &str) -> Result<Vec<String>>;
}

/// Tokenizes a sentence and assigns a Penn-style part-of-speech tag to each token.
pub trait Tagger: Send + Sync {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>>;
}

/// Maps an inflected form to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, surface: &str, hint: PosHint) -> Result<String>;
}
