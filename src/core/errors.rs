//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for anew-sentiment operations
#[derive(Debug, Error)]
pub enum Error {
    /// Lexicon could not be loaded. Always fatal for a run.
    #[error("Lexicon error: {message}")]
    Lexicon {
        message: String,
        path: Option<PathBuf>,
    },

    /// Failure reported by a tokenizer, tagger or lemmatizer
    #[error("{stage} failed: {message}")]
    Linguistic {
        stage: &'static str,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a lexicon error tied to the resource it came from
    pub fn lexicon(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Lexicon {
            message: message.into(),
            path,
        }
    }

    /// Create an error for a failing linguistic collaborator
    pub fn linguistic(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Linguistic {
            stage,
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_error_display() {
        let err = Error::lexicon("missing column `valence`", Some(PathBuf::from("anew.csv")));
        assert_eq!(err.to_string(), "Lexicon error: missing column `valence`");
    }

    #[test]
    fn test_linguistic_error_display() {
        let err = Error::linguistic("Tagger", "unsupported script");
        assert_eq!(err.to_string(), "Tagger failed: unsupported script");
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::Configuration("bad window".into()));
        let err = result.context("Loading .anew.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Loading .anew.toml: Configuration error: bad window"
        );
    }
}
