//! Configuration validation with error accumulation.
//!
//! Every check runs, and all failures are reported together so a user can fix
//! a config file in one pass.

use stillwater::{NonEmptyVec, Validation};

use super::scoring::ScoringConfig;
use super::AnewConfig;
use crate::core::{Error, Result};

/// Validation result carrying every problem found.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<String>>;

pub fn validate_scoring(scoring: &ScoringConfig) -> ConfigValidation<()> {
    let mut errors = Vec::new();

    if scoring.negation_window == 0 {
        errors.push("scoring.negation_window: must be at least 1".to_string());
    }
    if scoring.negation_markers.iter().all(|m| m.trim().is_empty()) {
        errors.push("scoring.negation_markers: at least one marker is required".to_string());
    }
    for (field, value) in [
        ("scoring.midpoint", scoring.midpoint),
        ("scoring.positive_threshold", scoring.positive_threshold),
        ("scoring.negative_threshold", scoring.negative_threshold),
    ] {
        if !value.is_finite() {
            errors.push(format!("{field}: must be a finite number (got: {value})"));
        }
    }
    if scoring.negative_threshold > scoring.positive_threshold {
        errors.push(format!(
            "scoring.negative_threshold: must not exceed positive_threshold (got: {} > {})",
            scoring.negative_threshold, scoring.positive_threshold
        ));
    }

    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

pub fn validate_config(config: &AnewConfig) -> ConfigValidation<()> {
    validate_scoring(&config.scoring)
}

/// `Result` wrapper joining all accumulated messages into one validation error.
pub fn validate_config_result(config: &AnewConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(Error::Validation(errors.into_vec().join("; "))),
    }
}
