//! Morphy-style rule lemmatizer.
//!
//! Irregular forms are resolved from exception tables. Regular forms go through
//! suffix-detachment rules for the requested category, and a candidate only
//! survives when it is a known word in the vocabulary. The shortest survivor
//! wins; with no survivors the surface form is returned unchanged.

use super::Lemmatizer;
use crate::core::{PosHint, Result};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("selves", "self"),
    ("halves", "half"),
    ("thieves", "thief"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("made", "make"),
    ("said", "say"),
    ("felt", "feel"),
    ("got", "get"),
    ("gotten", "get"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("lost", "lose"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("won", "win"),
    ("ran", "run"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("heard", "hear"),
    ("held", "hold"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sent", "send"),
    ("spent", "spend"),
    ("built", "build"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("forgave", "forgive"),
    ("forgiven", "forgive"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("led", "lead"),
    ("meant", "mean"),
    ("rode", "ride"),
    ("ridden", "ride"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("slept", "sleep"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("struck", "strike"),
    ("swore", "swear"),
    ("sworn", "swear"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("wept", "weep"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("broke", "break"),
    ("broken", "break"),
    ("chose", "choose"),
    ("chosen", "choose"),
];

static NOUN_EXCEPTION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| NOUN_EXCEPTIONS.iter().copied().collect());

static VERB_EXCEPTION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| VERB_EXCEPTIONS.iter().copied().collect());

#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer {
    vocabulary: HashSet<String>,
}

impl RuleLemmatizer {
    /// A lemmatizer with no vocabulary only resolves irregular forms.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vocabulary: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn lemma(&self, surface: &str, hint: PosHint) -> String {
        let (exceptions, rules) = match hint {
            PosHint::Noun => (&*NOUN_EXCEPTION_MAP, NOUN_RULES),
            PosHint::Verb => (&*VERB_EXCEPTION_MAP, VERB_RULES),
        };

        let mut candidates: Vec<String> = Vec::new();
        if self.vocabulary.contains(surface) {
            candidates.push(surface.to_string());
        }

        if let Some(base) = exceptions.get(surface) {
            candidates.push((*base).to_string());
        } else {
            candidates.extend(
                apply_rules(surface, rules).filter(|form| self.vocabulary.contains(form)),
            );
        }

        // min_by_key returns the first of equally short candidates
        candidates
            .into_iter()
            .min_by_key(|c| c.chars().count())
            .unwrap_or_else(|| surface.to_string())
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, surface: &str, hint: PosHint) -> Result<String> {
        Ok(self.lemma(surface, hint))
    }
}

fn apply_rules<'a>(
    surface: &'a str,
    rules: &'a [(&'static str, &'static str)],
) -> impl Iterator<Item = String> + 'a {
    rules.iter().filter_map(move |(suffix, replacement)| {
        surface
            .strip_suffix(*suffix)
            .filter(|stem| !stem.is_empty())
            .map(|stem| format!("{stem}{replacement}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> RuleLemmatizer {
        RuleLemmatizer::with_vocabulary([
            "love", "puppy", "box", "church", "dance", "hope", "hop", "stop", "bus", "happy",
        ])
    }

    #[test]
    fn test_verb_rules_need_vocabulary_support() {
        let lem = lemmatizer();
        assert_eq!(lem.lemma("loved", PosHint::Verb), "love");
        assert_eq!(lem.lemma("dancing", PosHint::Verb), "dance");
        assert_eq!(lem.lemma("stops", PosHint::Verb), "stop");
    }

    #[test]
    fn test_shortest_candidate_wins() {
        // both "hope" (ing -> e) and "hop" (ing -> "") are known
        assert_eq!(lemmatizer().lemma("hoping", PosHint::Verb), "hop");
    }

    #[test]
    fn test_noun_rules() {
        let lem = lemmatizer();
        assert_eq!(lem.lemma("puppies", PosHint::Noun), "puppy");
        assert_eq!(lem.lemma("boxes", PosHint::Noun), "box");
        assert_eq!(lem.lemma("churches", PosHint::Noun), "church");
        assert_eq!(lem.lemma("bus", PosHint::Noun), "bus");
    }

    #[test]
    fn test_irregular_forms_without_vocabulary() {
        let lem = RuleLemmatizer::new();
        assert_eq!(lem.lemma("was", PosHint::Verb), "be");
        assert_eq!(lem.lemma("children", PosHint::Noun), "child");
        assert_eq!(lem.lemma("children", PosHint::Verb), "children");
    }

    #[test]
    fn test_unknown_word_is_returned_unchanged() {
        assert_eq!(lemmatizer().lemma("zorbled", PosHint::Verb), "zorbled");
        assert_eq!(RuleLemmatizer::new().lemma("cats", PosHint::Noun), "cats");
    }
}
