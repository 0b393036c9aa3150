//! Property-based tests for sentence scoring
//!
//! These tests verify invariants that should hold for all inputs:
//! - Reflecting a score twice returns the original value
//! - Mean and median agree on constant lists
//! - Labels depend only on the aggregated valence
//! - "N/A" appears exactly when nothing matched
//! - Sentence indices are contiguous from 1

use anew_sentiment::core::{reflect, SentimentLabel, TaggedToken};
use anew_sentiment::scoring::aggregate::{mean, median};
use anew_sentiment::{
    AggregationMode, DocumentAnalyzer, Lexicon, LexiconEntry, RuleLemmatizer,
    RuleSentenceSplitter, RuleTagger, SentenceScorer, StopwordSet,
};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn lexicon() -> Lexicon {
    Lexicon::from_entries(vec![
        LexiconEntry::new("joy", 8.6, 7.2, 6.9),
        LexiconEntry::new("grief", 1.7, 4.8, 3.2),
        LexiconEntry::new("table", 5.2, 2.9, 5.5),
        LexiconEntry::new("storm", 4.9, 6.8, 4.0),
    ])
}

/// Raw tokens mixing lexicon words, stopwords, negators, unknown words and punctuation
fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "joy", "grief", "table", "storm", "the", "i", "not", "no", "n't", "window", "bright",
        ",", "!", "42",
    ])
    .prop_map(str::to_string)
}

fn sentence_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["joy", "grief", "table", "storm", "window", "bright"])
}

proptest! {
    #[test]
    fn prop_reflection_is_involutive(x in 1.0f64..9.0) {
        prop_assert!((reflect(reflect(x, 5.0), 5.0) - x).abs() < EPSILON);
    }

    #[test]
    fn prop_mean_and_median_agree_on_constant_lists(x in 1.0f64..9.0, n in 1usize..20) {
        let values = vec![x; n];
        let mean = mean(&values).unwrap();
        let median = median(&values).unwrap();
        prop_assert!((mean - median).abs() < EPSILON);
    }

    #[test]
    fn prop_label_is_determined_by_valence(v in 0.0f64..10.0) {
        let expected = if v > 6.0 {
            SentimentLabel::Positive
        } else if v < 4.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(SentimentLabel::classify(v, 6.0, 4.0), expected);
    }

    #[test]
    fn prop_result_invariants_hold(
        words in prop::collection::vec(token(), 0..12),
        median_mode in any::<bool>(),
    ) {
        let lexicon = lexicon();
        let stopwords = StopwordSet::english();
        let tagger = RuleTagger::new();
        let lemmatizer = RuleLemmatizer::new();
        let mode = if median_mode { AggregationMode::Median } else { AggregationMode::Mean };
        let scorer = SentenceScorer::new(&lexicon, &stopwords, &tagger, &lemmatizer)
            .with_mode(mode);

        let tokens: Vec<TaggedToken> = words.iter().map(|w| TaggedToken::new(w.as_str(), "JJ")).collect();
        let result = scorer.score_tokens(1, &words.join(" "), &tokens).unwrap();

        prop_assert!(result.matched_count() <= result.total_words());
        prop_assert_eq!(result.matched_count(), result.found_words.len());
        prop_assert_eq!(result.total_words(), result.all_words.len());
        prop_assert_eq!(result.has_matches(), result.scores.is_some());
        prop_assert_eq!(
            result.label == SentimentLabel::NotAvailable,
            result.matched_count() == 0
        );

        if let Some(scores) = result.scores {
            prop_assert_eq!(result.label, SentimentLabel::classify(scores.valence, 6.0, 4.0));
            for value in [scores.valence, scores.arousal, scores.dominance] {
                prop_assert!((1.0..=9.0).contains(&value));
            }
        }
    }

    #[test]
    fn prop_indices_are_contiguous(
        sentences in prop::collection::vec(prop::collection::vec(sentence_word(), 1..5), 1..15),
        parallel in any::<bool>(),
    ) {
        let lexicon = lexicon();
        let stopwords = StopwordSet::english();
        let tagger = RuleTagger::new();
        let lemmatizer = RuleLemmatizer::with_vocabulary(lexicon.words());
        let splitter = RuleSentenceSplitter::new();
        let analyzer = DocumentAnalyzer::new(
            &splitter,
            SentenceScorer::new(&lexicon, &stopwords, &tagger, &lemmatizer),
        )
        .with_parallel(parallel);

        let text = sentences
            .iter()
            .map(|words| {
                let sentence = words.join(" ");
                let mut chars = sentence.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
                format!("{}{}.", first, chars.as_str())
            })
            .collect::<Vec<_>>()
            .join(" ");

        let outcome = analyzer.analyze(&text).unwrap();
        let indices: Vec<usize> = outcome.sentences().iter().map(|r| r.index).collect();
        let expected: Vec<usize> = (1..=sentences.len()).collect();
        prop_assert_eq!(indices, expected);
    }
}
