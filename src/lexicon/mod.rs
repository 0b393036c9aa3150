//! ANEW-style affective norms lexicon.
//!
//! The lexicon is read once at startup from a CSV resource with the columns
//! `Word, valence, arousal, dominance` and indexed by case-folded word, so a
//! lookup is a single hash probe instead of a scan over every row.
//!
//! When two rows fold to the same key, the first row wins and the later ones
//! are counted in [`Lexicon::duplicates`].

use crate::core::{Error, LexiconEntry, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct LexiconRow {
    #[serde(rename = "Word")]
    word: String,
    valence: f64,
    arousal: f64,
    dominance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    duplicates: usize,
}

/// Case-fold a word the way lexicon keys are folded.
pub fn fold_case(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Lexicon {
    /// Build a lexicon from in-memory entries. Duplicate keys keep the first entry.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut lexicon = Self::default();
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Load the lexicon from a CSV file. Any failure here is fatal for a run.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::lexicon(
                format!("cannot open {}: {}", path.display(), e),
                Some(path.to_path_buf()),
            )
        })?;

        let lexicon = Self::parse(file).map_err(|message| {
            Error::lexicon(
                format!("{}: {}", path.display(), message),
                Some(path.to_path_buf()),
            )
        })?;

        debug!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Load the lexicon from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::parse(reader).map_err(|message| Error::lexicon(message, None))
    }

    fn parse<R: Read>(reader: R) -> std::result::Result<Self, String> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut lexicon = Self::default();
        for row in csv_reader.deserialize::<LexiconRow>() {
            let row = row.map_err(|e| describe_csv_error(&e))?;
            lexicon.insert(LexiconEntry::new(
                row.word,
                row.valence,
                row.arousal,
                row.dominance,
            ));
        }

        if lexicon.is_empty() {
            return Err("lexicon contains no entries".to_string());
        }
        if lexicon.duplicates > 0 {
            warn!(
                "Lexicon contains {} duplicate word(s); keeping the first occurrence of each",
                lexicon.duplicates
            );
        }
        Ok(lexicon)
    }

    fn insert(&mut self, entry: LexiconEntry) {
        let key = fold_case(&entry.word);
        if self.entries.contains_key(&key) {
            self.duplicates += 1;
            return;
        }
        self.entries.insert(key, entry);
    }

    /// Case-insensitive lookup of a lemma.
    pub fn lookup(&self, lemma: &str) -> Option<&LexiconEntry> {
        self.entries.get(&fold_case(lemma))
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lookup(lemma).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows dropped because their key was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Case-folded keys, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn describe_csv_error(error: &csv::Error) -> String {
    match error.position() {
        Some(pos) => format!("line {}: {}", pos.line(), error),
        None => error.to_string(),
    }
}
