//! Confidence scores.
//!
//! A parse is only as trustworthy as its least certain token. Structural
//! matching is all-or-nothing (a pattern either consumes the input or it
//! does not), so a full match starts at [`Confidence::CERTAIN`] and is
//! pulled down by the lowest normalization confidence among the tokens it
//! consumed:
//!
//! ```text
//! confidence = min(structural, min(token.confidence for token in match))
//! ```
//!
//! The orchestrator then gates the result on a caller-chosen threshold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence score in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(pub f64);

impl Confidence {
    /// A full structural match with no normalized tokens.
    pub const CERTAIN: Confidence = Confidence(1.0);

    /// The default gate applied by [`crate::Parser`].
    pub const DEFAULT_THRESHOLD: Confidence = Confidence(0.7);

    pub fn new(value: f64) -> Self {
        Confidence(value.clamp(0.0, 1.0))
    }

    /// Combine two scores by taking the weaker one.
    pub fn min(self, other: Confidence) -> Confidence {
        if other.0 < self.0 { other } else { self }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this score clears `threshold`.
    pub fn passes(&self, threshold: Confidence) -> bool {
        self.0 >= threshold.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::CERTAIN
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The confidence of a structural match over `token_confidences`.
pub fn combine(token_confidences: impl IntoIterator<Item = f64>) -> Confidence {
    token_confidences
        .into_iter()
        .map(Confidence::new)
        .fold(Confidence::CERTAIN, Confidence::min)
}
