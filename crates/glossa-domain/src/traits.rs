//! Trait interfaces for detector implementations

use crate::hit::DetectorHit;

/// A detector produces candidate hits over a text
///
/// Two variants exist: the pattern-based detector in `glossa-detector`,
/// and a trivial wrapper over externally supplied hits (e.g. the output of
/// a CRF entity model). The consensus resolver works on hits alone and
/// never needs to know which variant produced them.
pub trait Detector {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Produce candidate hits for the given text
    fn hits(&self, text: &str) -> Vec<DetectorHit>;
}
