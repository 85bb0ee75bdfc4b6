//! Epistemic tier module - confidence/provenance-based labels

use serde::{Deserialize, Serialize};

/// Epistemic tier assigned to a span or sentence
///
/// Tiers tell downstream consumers how much human verification a piece of
/// text requires:
/// - Factual: verifiable, citable against sources
/// - Interpretive: analysis requiring researcher verification (default middle tier)
/// - Deferred: matters requiring human judgment; review is mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EpistemicTier {
    /// Verifiable information that can be checked against sources
    Factual,

    /// Assisted analysis requiring researcher verification
    Interpretive,

    /// Matters requiring human judgment that no detector can settle
    Deferred,
}

impl EpistemicTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EpistemicTier::Factual => "FACTUAL",
            EpistemicTier::Interpretive => "INTERPRETIVE",
            EpistemicTier::Deferred => "DEFERRED",
        }
    }

    /// Get the inline tag form, e.g. `[FACTUAL]`
    pub fn tag(&self) -> String {
        format!("[{}]", self.as_str())
    }

    /// Parse a tier from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FACTUAL" => Some(EpistemicTier::Factual),
            "INTERPRETIVE" => Some(EpistemicTier::Interpretive),
            "DEFERRED" => Some(EpistemicTier::Deferred),
            _ => None,
        }
    }

    /// Parse a tier from its inline tag form, e.g. `[FACTUAL]`
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::parse(tag.trim_matches(|c| c == '[' || c == ']'))
    }

    /// Tier for a single-method detection at the given confidence
    ///
    /// Thresholds are boundary-inclusive: 0.85 and above is Factual, 0.70
    /// and above is Interpretive, anything lower is Deferred. The rule-based
    /// detector's preassigned tiers use the same numbers so the two code
    /// paths stay consistent.
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= 0.85 {
            EpistemicTier::Factual
        } else if confidence >= 0.70 {
            EpistemicTier::Interpretive
        } else {
            EpistemicTier::Deferred
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            EpistemicTier::Factual => {
                "Verifiable information that can be checked against sources"
            }
            EpistemicTier::Interpretive => {
                "AI-assisted analysis requiring researcher verification"
            }
            EpistemicTier::Deferred => {
                "Matters requiring human judgment that AI cannot determine"
            }
        }
    }

    /// Examples of content that falls under this tier
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            EpistemicTier::Factual => &[
                "Dates, names, bibliographic data",
                "Direct quotations with citations",
                "Definition of terms (from specified source)",
                "Historical events (with scholarly consensus)",
            ],
            EpistemicTier::Interpretive => &[
                "Connections between texts/concepts",
                "Thematic patterns across sources",
                "Structural analysis of arguments",
                "Comparative observations",
            ],
            EpistemicTier::Deferred => &[
                "Theological truth claims",
                "Value judgments about religious practices",
                "'Correct' interpretation of contested passages",
                "Assessment of spiritual significance",
            ],
        }
    }
}

impl std::str::FromStr for EpistemicTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid epistemic tier: {}", s))
    }
}

impl std::fmt::Display for EpistemicTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
