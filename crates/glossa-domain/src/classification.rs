//! Sentence classification module - one tier per sentence of free text

use crate::error::DomainError;
use crate::tier::EpistemicTier;
use serde::{Deserialize, Serialize};

/// An epistemic classification attached to a single sentence
///
/// Produced fresh per classification call; the caller owns any subsequent
/// persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceClassification {
    /// The assigned epistemic tier
    pub tier: EpistemicTier,

    /// Confidence score (0.0 to 1.0) for the classification
    pub confidence: f64,

    /// The sentence this classification applies to
    pub content: String,

    /// Optional explanation for why this classification was chosen
    pub rationale: Option<String>,
}

impl SentenceClassification {
    /// Create a new classification, validating the confidence score
    pub fn new(
        tier: EpistemicTier,
        confidence: f64,
        content: impl Into<String>,
        rationale: Option<String>,
    ) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DomainError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            tier,
            confidence,
            content: content.into(),
            rationale,
        })
    }

    /// The content with the tier tag prepended, e.g. `"[FACTUAL] ..."`
    pub fn tagged(&self) -> String {
        format!("{} {}", self.tier.tag(), self.content)
    }

    /// Whether this classification requires human review
    ///
    /// Deferred always does; Interpretive does below 0.5 confidence.
    pub fn needs_review(&self) -> bool {
        match self.tier {
            EpistemicTier::Deferred => true,
            EpistemicTier::Interpretive => self.confidence < 0.5,
            EpistemicTier::Factual => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_confidence_validation() {
        let result = SentenceClassification::new(EpistemicTier::Factual, 1.5, "test", None);
        assert_eq!(result.unwrap_err(), DomainError::ConfidenceOutOfRange(1.5));
    }

    #[test]
    fn test_tagged_content() {
        let c = SentenceClassification::new(
            EpistemicTier::Factual,
            0.9,
            "Gadamer published Truth and Method in 1960.",
            None,
        )
        .unwrap();
        assert!(c.tagged().starts_with("[FACTUAL]"));
    }

    #[test]
    fn test_needs_review_deferred() {
        let c = SentenceClassification::new(
            EpistemicTier::Deferred,
            0.95,
            "This is the correct interpretation.",
            None,
        )
        .unwrap();
        assert!(c.needs_review());
    }

    #[test]
    fn test_needs_review_low_confidence_interpretive() {
        let c = SentenceClassification::new(
            EpistemicTier::Interpretive,
            0.3,
            "This might suggest a pattern.",
            None,
        )
        .unwrap();
        assert!(c.needs_review());
    }

    #[test]
    fn test_confident_interpretive_does_not_need_review() {
        let c =
            SentenceClassification::new(EpistemicTier::Interpretive, 0.8, "analysis", None)
                .unwrap();
        assert!(!c.needs_review());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = SentenceClassification::new(
            EpistemicTier::Interpretive,
            0.8,
            "This pattern suggests a connection.",
            Some("Contains interpretive language".to_string()),
        )
        .unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let parsed: SentenceClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
    }

    proptest! {
        #[test]
        fn prop_factual_never_needs_review(c in 0.0f64..=1.0) {
            let cls = SentenceClassification::new(EpistemicTier::Factual, c, "x", None).unwrap();
            prop_assert!(!cls.needs_review());
        }

        #[test]
        fn prop_deferred_always_needs_review(c in 0.0f64..=1.0) {
            let cls = SentenceClassification::new(EpistemicTier::Deferred, c, "x", None).unwrap();
            prop_assert!(cls.needs_review());
        }
    }
}
