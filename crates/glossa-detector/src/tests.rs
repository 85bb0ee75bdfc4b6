//! Integration tests for the detection pipeline

use crate::{detect_references, detect_references_with, strip_reference_tags, ExternalHits};
use glossa_domain::{DetectorHit, EpistemicTier, SpanMethod};

#[test]
fn test_rule_only_numbered_biblical_reference() {
    let spans = detect_references("See Rom. 5,12 for explanation.", None).unwrap();
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.tier, EpistemicTier::Factual);
    assert_eq!(span.confidence, 0.85);
    assert_eq!(span.methods, vec![SpanMethod::RuleBased]);
    assert!(!span.consensus);
}

#[test]
fn test_agreeing_external_hit_yields_consensus() {
    let hits = vec![DetectorHit::new(4, 15, "patristic", 0.82).with_text("Augustinus")];
    let spans = detect_references("See Augustinus in the letter.", Some(&hits)).unwrap();
    let span = spans.iter().find(|s| s.category == "patristic").unwrap();
    assert!(span.consensus);
    assert_eq!(span.tier, EpistemicTier::Factual);
    assert_eq!(span.confidence, 0.87);
}

#[test]
fn test_disagreeing_external_hit_defers() {
    let hits = vec![DetectorHit::new(4, 15, "biblical", 0.80)];
    let spans = detect_references("See Augustinus in the letter.", Some(&hits)).unwrap();
    let span = spans.iter().find(|s| s.category == "patristic").unwrap();
    assert!(!span.consensus);
    assert_eq!(span.tier, EpistemicTier::Deferred);
    assert_eq!(span.confidence, 0.65);
}

#[test]
fn test_external_detector_injected_through_trait() {
    let external = ExternalHits::new(vec![DetectorHit::new(4, 15, "patristic", 0.82)]);
    let spans =
        detect_references_with("See Augustinus in the letter.", &external).unwrap();
    assert!(spans.iter().any(|s| s.consensus));
}

#[test]
fn test_untrusted_hit_with_bad_confidence_does_not_abort() {
    let hits = vec![DetectorHit::new(4, 15, "patristic", 1.2)];
    let spans = detect_references("See Augustinus in the letter.", Some(&hits)).unwrap();
    let span = spans.iter().find(|s| s.category == "patristic").unwrap();
    assert!(span.consensus);
    assert!(span.confidence <= 0.99);
}

#[test]
fn test_json_serialization_of_span_list() {
    let hits = vec![DetectorHit::new(4, 15, "patristic", 0.82)];
    let spans = detect_references("See Augustinus in the letter.", Some(&hits)).unwrap();
    let json = serde_json::to_value(&spans).unwrap();
    let first = &json[0];
    for field in [
        "start",
        "end",
        "text",
        "type",
        "confidence",
        "epistemic",
        "methods",
        "method",
        "consensus",
    ] {
        assert!(first.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(first["method"], "rule-based + statistical");
}

#[test]
fn test_detection_after_markup_stripping() {
    let raw = r#"ut <ref type="biblical">Rom. 5,12</ref> docet"#;
    let clean = strip_reference_tags(raw);
    let spans = detect_references(&clean, None).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].category, "biblical");
    assert_eq!(clean[spans[0].start..spans[0].end].trim(), "Rom. 5,12");
}

#[test]
fn test_mixed_categories_sorted_by_position() {
    let text = "Lutherus et Augustinus de gratia et Psalm. 23 disputant.";
    let spans = detect_references(text, None).unwrap();
    assert!(spans.len() >= 3);
    for pair in spans.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
    assert_eq!(spans[0].category, "reformation");
}
