//! Glossa Classifier
//!
//! Epistemic classification of free-form conversational text: every
//! sentence gets one of three tiers (FACTUAL / INTERPRETIVE / DEFERRED) so
//! downstream consumers can distinguish verifiable facts from interpretive
//! analysis from matters requiring human judgment.
//!
//! # Overview
//!
//! ```text
//! Text → split into sentences → per-sentence cascade → "[TIER] sentence ..."
//! ```
//!
//! The cascade is ordered and the first rule wins: citations, then
//! normative claims, then interpretive markers, then factual markers, then
//! a configured default. Everything is synchronous, stateless, and a pure
//! function of the input plus read-only configuration.
//!
//! # Example
//!
//! ```
//! use glossa_classifier::SentenceClassifier;
//!
//! let classifier = SentenceClassifier::default_config();
//! let tagged = classifier
//!     .classify_and_tag("Gadamer published Truth and Method in 1960.")
//!     .unwrap();
//! assert!(tagged.starts_with("[FACTUAL]"));
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod lexicon;

pub use classifier::{
    explain, map_external_confidence, split_sentences, SentenceClassifier,
};
pub use config::ClassifierConfig;
pub use lexicon::{
    citation_pattern, contains_normative_claim, date_pattern, score_markers,
    tier_tag_pattern, DEFERRED_MARKERS, FACTUAL_MARKERS, INTERPRETIVE_MARKERS,
};
