use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a recommendation inference.
///
/// This is *not* a domain event. It is an insight that can be rendered or
/// stored by higher layers without touching circulation state, and its text
/// is best-effort natural language, not something correctness-critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Natural-language reply for the patron.
    pub text: String,

    /// Confidence in \[0, 1\] (recommended convention; not enforced).
    pub confidence: f64,

    /// Titles from the snapshot that backed the reply.
    pub matched_titles: Vec<String>,
}

impl Recommendation {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
            matched_titles: Vec::new(),
        }
    }

    pub fn with_matched_titles(mut self, matched_titles: Vec<String>) -> Self {
        self.matched_titles = matched_titles;
        self
    }
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}
