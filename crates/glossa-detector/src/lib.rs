//! Glossa Detector
//!
//! Reference-span detection for corpus text: an ordered rule-based pattern
//! library, an optional externally supplied statistical detector, and the
//! consensus resolver that reconciles the two.
//!
//! # Overview
//!
//! ```text
//! Text → RuleDetector ─┐
//!                      ├─ resolve_consensus → Vec<Span> → JSON writer
//! External hits ───────┘
//! ```
//!
//! Each span carries its category, a fused confidence, an epistemic tier,
//! the detection methods that contributed, and a consensus flag. The whole
//! pipeline is synchronous and stateless; any I/O toward the statistical
//! detector happens in the caller.
//!
//! # Example
//!
//! ```
//! use glossa_detector::detect_references;
//! use glossa_domain::DetectorHit;
//!
//! let hits = vec![DetectorHit::new(4, 15, "patristic", 0.82)];
//! let spans = detect_references("See Augustinus in the letter.", Some(&hits)).unwrap();
//! assert!(spans[0].consensus);
//! ```

#![warn(missing_docs)]

mod consensus;
mod external;
mod markup;
mod patterns;
mod rule;

#[cfg(test)]
mod tests;

pub use consensus::resolve_consensus;
pub use external::ExternalHits;
pub use markup::strip_reference_tags;
pub use patterns::{reference_patterns, ReferencePattern};
pub use rule::RuleDetector;

use glossa_domain::{Detector, DetectorHit, DomainError, Span};

/// Detect references in corpus text, optionally reconciling external hits
///
/// Runs the rule-based detector, then - when external hits are supplied -
/// the consensus resolver. The returned list is sorted by start offset and
/// serializes directly to the corpus JSON span format.
pub fn detect_references(
    text: &str,
    external_hits: Option<&[DetectorHit]>,
) -> Result<Vec<Span>, DomainError> {
    let external = ExternalHits::new(external_hits.map(|hits| hits.to_vec()).unwrap_or_default());
    detect_references_with(text, &external)
}

/// Detect references, sourcing statistical hits from any `Detector`
pub fn detect_references_with(
    text: &str,
    statistical: &dyn Detector,
) -> Result<Vec<Span>, DomainError> {
    let rule_spans = RuleDetector::new().detect(text)?;
    resolve_consensus(text, rule_spans, &statistical.hits(text))
}
