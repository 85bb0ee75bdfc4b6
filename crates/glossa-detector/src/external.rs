//! Externally supplied detector hits

use glossa_domain::{Detector, DetectorHit};
use tracing::warn;

/// A detector variant wrapping hits produced outside the core
///
/// The statistical detector (a CRF entity model behind some service) is an
/// external collaborator; the core only ever sees its output as a list of
/// hits. Wrapping that list behind the `Detector` trait keeps the consensus
/// resolver free of "were statistical hits provided" branches.
#[derive(Debug, Clone, Default)]
pub struct ExternalHits {
    hits: Vec<DetectorHit>,
}

impl ExternalHits {
    /// Wrap an externally produced hit list
    ///
    /// Hits describing an empty or inverted interval are dropped here with
    /// a warning; the external detector is untrusted and malformed entries
    /// must never abort a classification call.
    pub fn new(hits: Vec<DetectorHit>) -> Self {
        let hits = hits
            .into_iter()
            .filter(|h| {
                if !h.is_well_formed() {
                    warn!(
                        start = h.start,
                        end = h.end,
                        category = %h.category,
                        "dropping malformed external hit"
                    );
                    return false;
                }
                true
            })
            .collect();
        Self { hits }
    }
}

impl Detector for ExternalHits {
    fn name(&self) -> &'static str {
        "statistical"
    }

    fn hits(&self, _text: &str) -> Vec<DetectorHit> {
        self.hits.clone()
    }
}
