//! Rule-based reference detection

use crate::patterns::reference_patterns;
use glossa_domain::{Detector, DetectorHit, DomainError, EpistemicTier, Span, SpanMethod};

/// Base confidence for a bare rule-based match
const BASE_CONFIDENCE: f64 = 0.75;

/// Confidence for a biblical match carrying a chapter/verse number
const BIBLICAL_NUMBERED_CONFIDENCE: f64 = 0.85;

/// Confidence for a confessional document reference
const CONFESSIONAL_CONFIDENCE: f64 = 0.80;

/// Deterministic pattern-matching detector over the reference library
///
/// Rules fire in library order, category block by category block; matches
/// are first-found, non-overlapping. A later pattern's match is discarded
/// if its interval intersects (even partially) any span already accepted.
#[derive(Debug, Default)]
pub struct RuleDetector;

impl RuleDetector {
    /// Create a new rule-based detector
    pub fn new() -> Self {
        Self
    }

    /// Detect reference spans in the given text
    ///
    /// Spans come back in pattern-library order, each with its preassigned
    /// confidence and tier, provenance `rule-based`, and `consensus` false.
    /// The consensus resolver re-sorts the final list by position.
    pub fn detect(&self, text: &str) -> Result<Vec<Span>, DomainError> {
        let mut spans: Vec<Span> = Vec::new();

        for pattern in reference_patterns() {
            for m in pattern.regex.find_iter(text) {
                let (start, end) = (m.start(), m.end());
                if spans.iter().any(|s| s.overlaps(start, end)) {
                    continue;
                }

                let matched = m.as_str().trim();
                let (confidence, tier) = base_confidence(pattern.category, matched);
                spans.push(Span::new(
                    start,
                    end,
                    matched,
                    pattern.category,
                    confidence,
                    tier,
                    vec![SpanMethod::RuleBased],
                    false,
                )?);
            }
        }

        Ok(spans)
    }
}

/// Preassign confidence and tier from the match quality alone
///
/// The numbers mirror the thresholds used for statistical-only spans: 0.85
/// and 0.80 map to Factual, the 0.75 base to Interpretive.
fn base_confidence(category: &str, matched: &str) -> (f64, EpistemicTier) {
    if category == "biblical" && matched.chars().any(|c| c.is_ascii_digit()) {
        (BIBLICAL_NUMBERED_CONFIDENCE, EpistemicTier::Factual)
    } else if category == "confessional" {
        (CONFESSIONAL_CONFIDENCE, EpistemicTier::Factual)
    } else {
        (BASE_CONFIDENCE, EpistemicTier::Interpretive)
    }
}

impl Detector for RuleDetector {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn hits(&self, text: &str) -> Vec<DetectorHit> {
        self.detect(text)
            .unwrap_or_default()
            .into_iter()
            .map(|s| DetectorHit::new(s.start, s.end, s.category.clone(), s.confidence).with_text(s.text))
            .collect()
    }
}
