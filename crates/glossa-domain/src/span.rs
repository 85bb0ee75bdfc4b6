//! Reference span module - detected character ranges with tier and provenance

use crate::error::DomainError;
use crate::tier::EpistemicTier;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Detection method that contributed to a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanMethod {
    /// Deterministic pattern matching over the reference library
    RuleBased,

    /// Externally supplied statistical detector (e.g. a CRF entity model)
    Statistical,
}

impl SpanMethod {
    /// Get the method name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanMethod::RuleBased => "rule-based",
            SpanMethod::Statistical => "statistical",
        }
    }
}

/// Round a confidence score to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A detected reference span
///
/// Spans are created by the rule-based detector or the consensus resolver
/// and are immutable once emitted. Invariants enforced at construction:
/// `start < end`, confidence within [0, 1] (stored rounded to two decimal
/// places), and at least one detection method.
///
/// Offsets are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,

    /// End offset (exclusive)
    pub end: usize,

    /// The matched text
    pub text: String,

    /// Reference category (e.g. "biblical", "patristic", "confessional")
    ///
    /// Categories are compared by equality across detectors, not by
    /// hierarchy.
    pub category: String,

    /// Confidence score, rounded to two decimal places
    pub confidence: f64,

    /// Epistemic tier assigned to this span
    pub tier: EpistemicTier,

    /// Detection methods that contributed, in fixed order (rule-based first)
    pub methods: Vec<SpanMethod>,

    /// Whether two independent detectors agreed on location and category
    pub consensus: bool,
}

impl Span {
    /// Create a new span, validating the domain invariants
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: usize,
        end: usize,
        text: impl Into<String>,
        category: impl Into<String>,
        confidence: f64,
        tier: EpistemicTier,
        methods: Vec<SpanMethod>,
        consensus: bool,
    ) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidInterval { start, end });
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DomainError::ConfidenceOutOfRange(confidence));
        }
        if methods.is_empty() {
            return Err(DomainError::NoMethods);
        }
        Ok(Self {
            start,
            end,
            text: text.into(),
            category: category.into(),
            confidence: round2(confidence),
            tier,
            methods,
            consensus,
        })
    }

    /// Whether this span shares at least one character with the interval
    ///
    /// Touching-but-not-overlapping intervals do not count.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// The combined method label, e.g. `"rule-based + statistical"`
    pub fn method_label(&self) -> String {
        self.methods
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let methods: Vec<&str> = self.methods.iter().map(|m| m.as_str()).collect();
        let mut state = serializer.serialize_struct("Span", 9)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("type", &self.category)?;
        state.serialize_field("confidence", &self.confidence)?;
        state.serialize_field("epistemic", &self.tier)?;
        state.serialize_field("methods", &methods)?;
        state.serialize_field("method", &self.method_label())?;
        state.serialize_field("consensus", &self.consensus)?;
        state.end()
    }
}
