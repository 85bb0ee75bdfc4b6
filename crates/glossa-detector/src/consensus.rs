//! Consensus resolution between rule-based spans and statistical hits

use glossa_domain::{round2, DetectorHit, DomainError, EpistemicTier, Span, SpanMethod};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Confidence boost applied when two detectors agree on a span
const AGREEMENT_BOOST: f64 = 0.05;

/// Upper cap on fused confidence
const CONFIDENCE_CAP: f64 = 0.99;

/// Ceiling on confidence when detectors disagree on category
const DISAGREEMENT_CEILING: f64 = 0.65;

/// Merge rule-based spans with statistical hits into the final span list
///
/// Per rule-based span: hits overlapping its interval (shared character;
/// touching does not count) are filtered to those with an equal category.
/// The highest-confidence match - not the first - wins and produces a
/// consensus span with a boosted, capped confidence. An overlap with no
/// category match is a disagreement: the span is kept but demoted to
/// Deferred, since disagreement always forces human review regardless of
/// either detector's own confidence.
///
/// Hits not covered by any accepted span are emitted as statistical-only
/// spans with their tier mapped from confidence alone. The result is
/// sorted by start offset.
///
/// The external detector is untrusted, so its hits are sanitized here
/// rather than rejected: malformed intervals are dropped and out-of-range
/// confidences clamped into [0, 1], each with a warning. A bad hit must
/// never abort a classification call.
pub fn resolve_consensus(
    text: &str,
    rule_spans: Vec<Span>,
    hits: &[DetectorHit],
) -> Result<Vec<Span>, DomainError> {
    let hits = sanitize_hits(hits);
    let mut resolved: Vec<Span> = Vec::new();

    for span in rule_spans {
        let overlapping: Vec<&DetectorHit> = hits
            .iter()
            .filter(|h| h.overlaps(span.start, span.end))
            .collect();

        if overlapping.is_empty() {
            resolved.push(span);
            continue;
        }

        let best_match = overlapping
            .iter()
            .filter(|h| h.category == span.category)
            .max_by(|a, b| {
                a.confidence
                    .partial_cmp(&b.confidence)
                    .unwrap_or(Ordering::Equal)
            });

        let merged = match best_match {
            Some(best) => {
                let fused = round2(span.confidence.max(best.confidence) + AGREEMENT_BOOST)
                    .min(CONFIDENCE_CAP);
                Span::new(
                    span.start,
                    span.end,
                    span.text,
                    span.category,
                    fused,
                    EpistemicTier::Factual,
                    vec![SpanMethod::RuleBased, SpanMethod::Statistical],
                    true,
                )?
            }
            None => {
                debug!(
                    start = span.start,
                    end = span.end,
                    category = %span.category,
                    "detectors disagree on category, deferring to human review"
                );
                Span::new(
                    span.start,
                    span.end,
                    span.text,
                    span.category,
                    span.confidence.min(DISAGREEMENT_CEILING),
                    EpistemicTier::Deferred,
                    vec![SpanMethod::RuleBased, SpanMethod::Statistical],
                    false,
                )?
            }
        };
        resolved.push(merged);
    }

    // Statistical-only spans: hits not sharing a character with anything
    // already accepted (including statistical-only spans emitted earlier).
    for hit in &hits {
        if resolved.iter().any(|s| hit.overlaps(s.start, s.end)) {
            continue;
        }
        let hit_text = match &hit.text {
            Some(t) => t.clone(),
            None => text.get(hit.start..hit.end).unwrap_or_default().to_string(),
        };
        resolved.push(Span::new(
            hit.start,
            hit.end,
            hit_text,
            hit.category.clone(),
            hit.confidence,
            EpistemicTier::for_confidence(hit.confidence),
            vec![SpanMethod::Statistical],
            false,
        )?);
    }

    resolved.sort_by_key(|s| s.start);
    Ok(resolved)
}

/// Drop malformed external hits and clamp out-of-range confidences
fn sanitize_hits(hits: &[DetectorHit]) -> Vec<DetectorHit> {
    hits.iter()
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
        .map(|h| {
            let mut hit = h.clone();
            if !(0.0..=1.0).contains(&hit.confidence) {
                warn!(
                    confidence = hit.confidence,
                    category = %hit.category,
                    "clamping out-of-range external confidence"
                );
                hit.confidence = hit.confidence.clamp(0.0, 1.0);
            }
            hit
        })
        .collect()
}
