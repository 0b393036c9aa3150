//! Document-level driver: sentence splitting, indexing and optional parallelism.

use crate::core::{Result, SentenceResult};
use crate::nlp::SentenceTokenizer;
use crate::scoring::SentenceScorer;
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of analyzing one document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    /// The document had no content; nothing was scored and nothing should be written.
    Empty,
    /// One result per sentence, indexed `1..=N` in input order.
    Scored(Vec<SentenceResult>),
}

impl DocumentOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, DocumentOutcome::Empty)
    }

    pub fn sentences(&self) -> &[SentenceResult] {
        match self {
            DocumentOutcome::Empty => &[],
            DocumentOutcome::Scored(results) => results,
        }
    }
}

pub struct DocumentAnalyzer<'a> {
    tokenizer: &'a dyn SentenceTokenizer,
    scorer: SentenceScorer<'a>,
    parallel: bool,
}

impl<'a> DocumentAnalyzer<'a> {
    pub fn new(tokenizer: &'a dyn SentenceTokenizer, scorer: SentenceScorer<'a>) -> Self {
        Self {
            tokenizer,
            scorer,
            parallel: false,
        }
    }

    /// Score sentences on the rayon pool. Output order and indices are unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Split `text` into sentences and score each of them.
    ///
    /// The first collaborator error aborts the document and is returned as is.
    pub fn analyze(&self, text: &str) -> Result<DocumentOutcome> {
        if text.is_empty() {
            info!("Empty document, skipping");
            return Ok(DocumentOutcome::Empty);
        }

        let sentences = self.tokenizer.split(text)?;
        debug!("Scoring {} sentences", sentences.len());

        let results = if self.parallel {
            sentences
                .par_iter()
                .enumerate()
                .map(|(i, sentence)| self.scorer.score(i + 1, sentence))
                .collect::<Result<Vec<_>>>()?
        } else {
            sentences
                .iter()
                .enumerate()
                .map(|(i, sentence)| self.scorer.score(i + 1, sentence))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(DocumentOutcome::Scored(results))
    }
}
