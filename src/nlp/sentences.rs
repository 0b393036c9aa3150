//! Rule-based sentence boundary detection.
//!
//! A boundary is placed after a run of `.`, `!` or `?` (plus any closing
//! quotes or brackets) when it is followed by whitespace and the next word does
//! not start with a lowercase letter. A single period after a known
//! abbreviation or a one-letter initial is never a boundary.

use super::SentenceTokenizer;
use crate::core::Result;
use std::collections::HashSet;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "e.g", "i.e",
    "inc", "ltd", "co", "corp", "dept", "est", "approx", "fig", "gen", "gov", "lt", "col", "sgt",
    "capt", "rev", "u.s", "u.k", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

#[derive(Debug, Clone)]
pub struct RuleSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for RuleSentenceSplitter {
    fn default() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }
}

impl RuleSentenceSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom abbreviation list. Entries are matched without their final period.
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminal(chars[i].1) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && is_terminal(chars[i].1) {
                i += 1;
            }
            let run_end = i;
            while i < chars.len() && is_closing(chars[i].1) {
                i += 1;
            }

            // "3.14", "e.g" and the like
            if i < chars.len() && !chars[i].1.is_whitespace() {
                continue;
            }

            let end = chars.get(i).map_or(text.len(), |&(byte, _)| byte);
            let run = &chars[run_start..run_end];
            if self.is_boundary(&text[start..chars[run_start].0], run, &chars[i..]) {
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    fn is_boundary(&self, before: &str, run: &[(usize, char)], rest: &[(usize, char)]) -> bool {
        let next = rest.iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
        let Some(next) = next else {
            return true;
        };
        if next.is_lowercase() {
            return false;
        }

        if run.len() == 1 && run[0].1 == '.' {
            let word = before
                .split_whitespace()
                .last()
                .unwrap_or("")
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if self.abbreviations.contains(&word) {
                return false;
            }
            let mut letters = word.chars();
            if let (Some(c), None) = (letters.next(), letters.next()) {
                if c.is_alphabetic() {
                    return false;
                }
            }
        }

        true
    }
}

impl SentenceTokenizer for RuleSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split_sentences(text))
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}')
}

fn push_sentence(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
