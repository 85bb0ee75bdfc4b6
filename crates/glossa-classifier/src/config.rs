//! Configuration for the sentence classifier

use glossa_domain::EpistemicTier;
use serde::{Deserialize, Serialize};

/// Read-only configuration for the sentence classifier
///
/// Configuration is plain input data: the classifier never mutates it, and
/// any number of classification calls may share one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Tier assigned when no cascade rule fires
    pub default_tier: EpistemicTier,

    /// External-score threshold at or above which a hit maps to FACTUAL
    pub high_confidence_threshold: f64,

    /// External-score threshold below which a mapping is flagged for review
    pub low_confidence_threshold: f64,
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.high_confidence_threshold) {
            return Err(format!(
                "high_confidence_threshold {} out of range [0.0, 1.0]",
                self.high_confidence_threshold
            ));
        }
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(format!(
                "low_confidence_threshold {} out of range [0.0, 1.0]",
                self.low_confidence_threshold
            ));
        }
        if self.low_confidence_threshold > self.high_confidence_threshold {
            return Err(
                "low_confidence_threshold cannot exceed high_confidence_threshold".to_string(),
            );
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClassifierConfig {
    /// Defaults: Interpretive fallback, 0.85 high / 0.5 low thresholds
    fn default() -> Self {
        Self {
            default_tier: EpistemicTier::Interpretive,
            high_confidence_threshold: 0.85,
            low_confidence_threshold: 0.5,
        }
    }
}
