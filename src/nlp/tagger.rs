//! Penn-Treebank-style word tokenizer and heuristic part-of-speech tagger.
//!
//! Tokenization splits punctuation off words and detaches clitics the way the
//! Treebank does (`don't` -> `do n't`, `cannot` -> `can not`, `she's` -> `she 's`).
//! Tags come from closed-class word lists, then suffix heuristics with one
//! token of left context. Only the first letter of a tag matters to the scorer,
//! so the heuristics aim at getting nouns and verbs right.

use super::Tagger;
use crate::core::{Result, TaggedToken};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Words the Treebank writes as two tokens, with the split offset.
const FUSED_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

const CLOSED_CLASS: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "all", "both", "either", "neither", "another",
        ],
    ),
    (
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
            "off", "over", "under", "since", "until", "upon", "within", "without", "among",
            "toward", "towards", "across", "behind", "beyond", "near", "like", "than", "because",
            "although", "though", "while", "whereas", "if", "unless", "whether", "as",
        ],
    ),
    ("CC", &["and", "but", "or", "nor", "yet", "so"]),
    (
        "PRP",
        &[
            "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    ("WP", &["who", "whom", "what"]),
    ("WDT", &["which"]),
    ("WRB", &["when", "where", "why", "how"]),
    (
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca",
            "wo", "'ll", "'d",
        ],
    ),
    ("TO", &["to"]),
    (
        "RB",
        &[
            "not", "n't", "never", "very", "too", "also", "just", "only", "really", "quite",
            "rather", "almost", "always", "often", "sometimes", "here", "there", "now", "then",
            "again", "still", "even", "ever", "soon", "already",
        ],
    ),
    ("VB", &["be"]),
    ("VBP", &["am", "are", "have", "do", "'re", "'ve", "'m"]),
    ("VBZ", &["is", "has", "does"]),
    ("VBD", &["was", "were", "had", "did"]),
    ("VBN", &["been"]),
    ("VBG", &["being", "having", "doing"]),
    ("POS", &["'s"]),
    (
        "UH",
        &["oh", "wow", "yes", "hello", "hey", "ouch", "alas", "oops", "hooray"],
    ),
];

static CLOSED_CLASS_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    CLOSED_CLASS
        .iter()
        .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
        .collect()
});

// Cardinals, decimals, decades and ordinals: 42, 3.5, 1,000, 1990s, 21st
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:[.,]\d+)*(?:s|st|nd|rd|th)?$").expect("number pattern is valid")
});

const NOUN_SUFFIXES: &[&str] = &[
    "ness", "ment", "tion", "sion", "ity", "ship", "hood", "ism", "ance", "ence", "dom", "ist",
    "er", "or",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ical", "ic", "ish", "ary", "al", "ant", "ent",
    "y",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag_sentence(&self, sentence: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();
        for token in tokenize(sentence) {
            let tag = tag_word(&token, tagged.last());
            tagged.push(TaggedToken::new(token, tag));
        }
        tagged
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        Ok(self.tag_sentence(sentence))
    }
}

/// Split a sentence into Treebank-style tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in sentence.split_whitespace() {
        let chars: Vec<char> = chunk.chars().map(normalize_apostrophe).collect();
        for (start, end) in clause_segments(&chars) {
            tokenize_chunk(&chars[start..end], &mut tokens);
        }
    }

    tokens
}

fn tokenize_chunk(chars: &[char], tokens: &mut Vec<String>) {
    let mut lo = 0;
    let mut hi = chars.len();

    while lo < hi && !chars[lo].is_alphanumeric() {
        let end = run_end(chars, lo, hi);
        tokens.push(chars[lo..end].iter().collect());
        lo = end;
    }

    let mut trailing = Vec::new();
    while hi > lo && !chars[hi - 1].is_alphanumeric() {
        let start = run_start(chars, lo, hi);
        trailing.push(chars[start..hi].iter().collect::<String>());
        hi = start;
    }

    if lo < hi {
        let word: String = chars[lo..hi].iter().collect();
        split_clitics(&word, tokens);
    }
    tokens.extend(trailing.into_iter().rev());
}

fn is_clause_mark(c: char) -> bool {
    matches!(c, ',' | ';' | ':')
}

/// Ranges of `chars` separated at internal `,` `;` `:` runs, which become
/// ranges of their own. Runs with digits on both sides (`1,000`, `10:30`) stay.
fn clause_segments(chars: &[char]) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_clause_mark(chars[i]) || i == 0 {
            i += 1;
            continue;
        }
        let mut end = i;
        while end < chars.len() && is_clause_mark(chars[end]) {
            end += 1;
        }
        let internal = end < chars.len()
            && chars[i - 1].is_alphanumeric()
            && chars[end].is_alphanumeric()
            && !(chars[i - 1].is_ascii_digit() && chars[end].is_ascii_digit());
        if internal {
            segments.push((start, i));
            segments.push((i, end));
            start = end;
        }
        i = end;
    }

    segments.push((start, chars.len()));
    segments
}

fn normalize_apostrophe(c: char) -> char {
    if c == '\u{2019}' {
        '\''
    } else {
        c
    }
}

fn run_end(chars: &[char], from: usize, limit: usize) -> usize {
    let c = chars[from];
    let mut end = from;
    while end < limit && chars[end] == c {
        end += 1;
    }
    end
}

fn run_start(chars: &[char], limit: usize, to: usize) -> usize {
    let c = chars[to - 1];
    let mut start = to;
    while start > limit && chars[start - 1] == c {
        start -= 1;
    }
    start
}

fn split_clitics(word: &str, tokens: &mut Vec<String>) {
    if let Some(&(_, cut)) = FUSED_WORDS
        .iter()
        .find(|(fused, _)| word.eq_ignore_ascii_case(fused))
    {
        tokens.push(word[..cut].to_string());
        tokens.push(word[cut..].to_string());
        return;
    }

    let lower = word.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        tokens.push(word[..cut].to_string());
        tokens.push(word[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            tokens.push(word[..cut].to_string());
            tokens.push(word[cut..].to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}

fn tag_word(token: &str, prev: Option<&TaggedToken>) -> String {
    let lower = token.to_lowercase();

    if let Some(tag) = CLOSED_CLASS_TAGS.get(lower.as_str()) {
        return (*tag).to_string();
    }
    if token.chars().all(|c| !c.is_alphanumeric()) {
        return punctuation_tag(token).to_string();
    }
    if NUMBER.is_match(&lower) {
        return "CD".to_string();
    }

    open_class_tag(&lower, prev).to_string()
}

fn punctuation_tag(token: &str) -> &'static str {
    match token.chars().next() {
        Some('.' | '!' | '?') => ".",
        Some(',') => ",",
        Some(':' | ';' | '-') => ":",
        Some('(' | '[' | '{') => "-LRB-",
        Some(')' | ']' | '}') => "-RRB-",
        Some('"' | '\'' | '`') => "''",
        _ => "SYM",
    }
}

fn open_class_tag(word: &str, prev: Option<&TaggedToken>) -> &'static str {
    let len = word.chars().count();
    let prev_tag = prev.map(|p| p.pos.as_str()).unwrap_or("");

    if prev_tag == "TO" || prev_tag == "MD" {
        return "VB";
    }
    if len > 4 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        let after_auxiliary = prev.is_some_and(|p| {
            matches!(
                p.surface.as_str(),
                "be" | "been" | "being" | "is" | "are" | "was" | "were" | "am" | "has" | "have"
                    | "had" | "'s" | "'ve" | "'re"
            )
        });
        return if after_auxiliary { "VBN" } else { "VBD" };
    }
    if has_suffix(word, len, NOUN_SUFFIXES) {
        return "NN";
    }
    if has_suffix(word, len, ADJECTIVE_SUFFIXES) {
        return "JJ";
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        let after_subject = prev_tag == "PRP" || prev_tag.starts_with("NN");
        return if after_subject { "VBZ" } else { "NNS" };
    }
    "NN"
}

fn has_suffix(word: &str, len: usize, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.ends_with(suffix) && len > suffix.len() + 2)
}
