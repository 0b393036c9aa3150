//! Per-sentence lexicon scoring.
//!
//! For every tagged token of a lower-cased sentence the scorer:
//!
//! 1. skips stopwords and tokens containing any non-alphabetic character,
//! 2. checks the negation window over the raw token sequence,
//! 3. lemmatizes nouns and verbs (other tokens are their own lemma),
//! 4. looks the lemma up in the lexicon, reflecting the scores of negated
//!    matches across the scale midpoint,
//!
//! then aggregates the matched scores with the configured mean or median and
//! labels the sentence from its valence.

pub mod aggregate;
pub mod negation;

use crate::config::ScoringConfig;
use crate::core::{AggregationMode, Result, ScoredWord, SentenceResult, SentimentLabel, TaggedToken};
use crate::lexicon::Lexicon;
use crate::nlp::{Lemmatizer, StopwordSet, Tagger};

/// Scores single sentences against a shared, read-only lexicon.
///
/// All collaborators are borrowed, so one scorer can be shared across rayon
/// workers without locking.
pub struct SentenceScorer<'a> {
    lexicon: &'a Lexicon,
    stopwords: &'a StopwordSet,
    tagger: &'a dyn Tagger,
    lemmatizer: &'a dyn Lemmatizer,
    config: ScoringConfig,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        stopwords: &'a StopwordSet,
        tagger: &'a dyn Tagger,
        lemmatizer: &'a dyn Lemmatizer,
    ) -> Self {
        Self {
            lexicon,
            stopwords,
            tagger,
            lemmatizer,
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Tag the lower-cased sentence and score it as sentence number `index`.
    pub fn score(&self, index: usize, sentence: &str) -> Result<SentenceResult> {
        let tokens = self.tagger.tag(&sentence.to_lowercase())?;
        self.score_tokens(index, sentence, &tokens)
    }

    /// Score an already tagged sentence. `sentence` is carried into the result verbatim.
    pub fn score_tokens(
        &self,
        index: usize,
        sentence: &str,
        tokens: &[TaggedToken],
    ) -> Result<SentenceResult> {
        let mut all_words = Vec::new();
        let mut matched: Vec<ScoredWord> = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            let surface = token.surface.as_str();
            if self.is_skipped(surface) {
                continue;
            }

            let negated = negation::is_negated(tokens, idx, self.config.negation_window, |t| {
                self.config.is_negation_marker(t)
            });

            let lemma = match token.pos_hint() {
                Some(hint) => self.lemmatizer.lemmatize(surface, hint)?,
                None => surface.to_string(),
            };

            if let Some(entry) = self.lexicon.lookup(&lemma) {
                matched.push(ScoredWord::from_entry(
                    &lemma,
                    negated,
                    entry,
                    self.config.midpoint,
                ));
            }
            all_words.push(lemma);
        }

        let scores = aggregate::aggregate_scores(&matched, self.config.mode);
        let label = scores.map_or(SentimentLabel::NotAvailable, |s| {
            SentimentLabel::classify(
                s.valence,
                self.config.positive_threshold,
                self.config.negative_threshold,
            )
        });

        Ok(SentenceResult {
            index,
            sentence: sentence.to_string(),
            all_words,
            found_words: matched
                .iter()
                .map(|w| w.display_form(&self.config.negation_prefix))
                .collect(),
            scores,
            label,
        })
    }

    fn is_skipped(&self, surface: &str) -> bool {
        self.stopwords.contains(surface) || !is_alphabetic(surface)
    }
}

/// True for non-empty words made only of alphabetic characters.
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
