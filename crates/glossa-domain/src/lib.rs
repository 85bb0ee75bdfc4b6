//! Glossa Domain Layer
//!
//! This crate contains the core domain model for Glossa: epistemic tiers,
//! reference spans, sentence classifications, and detector hits. It defines
//! the value objects and trait interfaces that the detector and classifier
//! layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Epistemic Tier**: FACTUAL / INTERPRETIVE / DEFERRED - how much human
//!   verification a piece of text requires
//! - **Span**: a contiguous character range with category, confidence, tier,
//!   and the detection methods that produced it
//! - **Sentence Classification**: one tier per sentence of free text, with
//!   confidence and rationale
//! - **Detector Hit**: the raw output of one detector before consensus
//!
//! ## Architecture
//!
//! - Pure value objects and business rules only
//! - Detector implementations live in other crates
//! - Trait definition for all detector variants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classification;
pub mod error;
pub mod hit;
pub mod span;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use classification::SentenceClassification;
pub use error::DomainError;
pub use hit::DetectorHit;
pub use span::{round2, Span, SpanMethod};
pub use tier::EpistemicTier;
pub use traits::Detector;
