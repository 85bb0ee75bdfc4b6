//! Detector hit module - raw detector output before consensus resolution

use serde::{Deserialize, Serialize};

/// The raw output of one detector before merge
///
/// Hits are transient and never persisted; the consensus resolver turns
/// them into spans. Because the statistical detector is an untrusted
/// external collaborator, deserialization is tolerant: a missing `type`
/// defaults to `"unknown"`, a missing `confidence` to 0.5, and a missing
/// `text` is sliced from the source text by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorHit {
    /// Start offset (inclusive, bytes)
    pub start: usize,

    /// End offset (exclusive, bytes)
    pub end: usize,

    /// Entity category (e.g. "patristic", "person", "place")
    #[serde(rename = "type", default = "default_category")]
    pub category: String,

    /// Confidence score (0.0 to 1.0)
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// The matched text, if the detector reported it
    #[serde(default)]
    pub text: Option<String>,
}

fn default_category() -> String {
    "unknown".to_string()
}

fn default_confidence() -> f64 {
    0.5
}

impl DetectorHit {
    /// Create a new hit
    pub fn new(
        start: usize,
        end: usize,
        category: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            start,
            end,
            category: category.into(),
            confidence,
            text: None,
        }
    }

    /// Attach the matched text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether this hit shares at least one character with the interval
    ///
    /// Touching-but-not-overlapping intervals do not count.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Whether the hit describes a non-empty interval
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}
