//! Sentence-level aggregation of matched word scores.

use crate::core::{AffectScores, AggregationMode, ScoredWord};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; an even-length list yields the average of its two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub fn aggregate(values: &[f64], mode: AggregationMode) -> Option<f64> {
    match mode {
        AggregationMode::Mean => mean(values),
        AggregationMode::Median => median(values),
    }
}

/// Aggregate each dimension independently. `None` when nothing matched.
pub fn aggregate_scores(words: &[ScoredWord], mode: AggregationMode) -> Option<AffectScores> {
    let valences: Vec<f64> = words.iter().map(|w| w.scores.valence).collect();
    let arousals: Vec<f64> = words.iter().map(|w| w.scores.arousal).collect();
    let dominances: Vec<f64> = words.iter().map(|w| w.scores.dominance).collect();

    Some(AffectScores {
        valence: aggregate(&valences, mode)?,
        arousal: aggregate(&arousals, mode)?,
        dominance: aggregate(&dominances, mode)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(valence: f64, arousal: f64, dominance: f64) -> ScoredWord {
        ScoredWord {
            lemma: "w".into(),
            negated: false,
            scores: AffectScores {
                valence,
                arousal,
                dominance,
            },
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[8.0, 2.0]), Some(5.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[8.0, 2.0, 6.0]), Some(6.0));
        assert_eq!(median(&[8.0, 2.0, 6.0, 3.0]), Some(4.5));
        assert_eq!(median(&[7.5]), Some(7.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mean_and_median_agree_on_constant_lists() {
        let values = [2.5; 5];
        assert_eq!(mean(&values), median(&values));
    }

    #[test]
    fn test_aggregate_scores_per_dimension() {
        let words = vec![word(8.0, 6.0, 5.0), word(2.0, 4.0, 7.0)];
        let scores = aggregate_scores(&words, AggregationMode::Mean).unwrap();
        assert_eq!(
            scores,
            AffectScores {
                valence: 5.0,
                arousal: 5.0,
                dominance: 6.0
            }
        );
        assert!(aggregate_scores(&[], AggregationMode::Median).is_none());
    }
}
