//! Negation window detection.
//!
//! The window looks back over raw token positions, so punctuation and
//! stopwords that the scorer skips still count toward the window length.

use crate::core::TaggedToken;

/// Whether any of the `window` tokens immediately before `idx` is a negation marker.
pub fn is_negated<F>(tokens: &[TaggedToken], idx: usize, window: usize, is_marker: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let end = idx.min(tokens.len());
    let start = end.saturating_sub(window);
    tokens[start..end]
        .iter()
        .rev()
        .any(|token| is_marker(&token.surface))
}
