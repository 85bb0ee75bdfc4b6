//! Sentence classification and inline tagging

use crate::config::ClassifierConfig;
use crate::lexicon::{
    citation_pattern, contains_normative_claim, date_pattern, score_markers, tier_tag_pattern,
    DEFERRED_MARKERS, FACTUAL_MARKERS, INTERPRETIVE_MARKERS,
};
use glossa_domain::{DomainError, EpistemicTier, SentenceClassification};
use tracing::debug;

/// Classifies free-text sentences and tags them with epistemic tiers
///
/// The classifier is an ordered cascade of heuristic rules; the first rule
/// that fires wins. It is deliberately rule-based: a production deployment
/// might put an LLM-based classifier behind the same interface for more
/// nuanced decisions.
#[derive(Debug, Clone, Default)]
pub struct SentenceClassifier {
    config: ClassifierConfig,
}

impl SentenceClassifier {
    /// Create a classifier with the given configuration
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Create a classifier with the default configuration
    pub fn default_config() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Classify conversational text and insert inline tier tags
    ///
    /// Splits the text into sentences, classifies each, and reassembles it
    /// with every sentence prefixed by its tier tag. Text that already
    /// carries a tier tag anywhere is returned verbatim, which makes the
    /// operation idempotent.
    pub fn classify_and_tag(&self, content: &str) -> Result<String, DomainError> {
        if tier_tag_pattern().is_match(content) {
            debug!("content already tagged");
            return Ok(content.to_string());
        }

        let mut tagged = Vec::new();
        for sentence in split_sentences(content) {
            if sentence.trim().is_empty() {
                tagged.push(sentence.to_string());
                continue;
            }
            let classification = self.classify_sentence(sentence)?;
            tagged.push(format!(
                "{} {}",
                classification.tier.tag(),
                sentence.trim()
            ));
        }

        Ok(tagged.join(" "))
    }

    /// Classify a single sentence
    ///
    /// Cascade, first match wins:
    /// 1. Citation or source attribution - Factual
    /// 2. Normative claim or two deferred markers - Deferred
    /// 3. Two interpretive markers - Interpretive
    /// 4. Two factual markers or a date - Factual
    /// 5. Configured default
    pub fn classify_sentence(
        &self,
        sentence: &str,
    ) -> Result<SentenceClassification, DomainError> {
        let lower = sentence.to_lowercase();

        if citation_pattern().is_match(sentence) {
            return SentenceClassification::new(
                EpistemicTier::Factual,
                0.9,
                sentence,
                Some("Contains citation or source reference".to_string()),
            );
        }

        if score_markers(&lower, DEFERRED_MARKERS) >= 2 || contains_normative_claim(&lower) {
            return SentenceClassification::new(
                EpistemicTier::Deferred,
                0.85,
                sentence,
                Some("Contains theological or normative content".to_string()),
            );
        }

        if score_markers(&lower, INTERPRETIVE_MARKERS) >= 2 {
            return SentenceClassification::new(
                EpistemicTier::Interpretive,
                0.8,
                sentence,
                Some("Contains interpretive language".to_string()),
            );
        }

        if score_markers(&lower, FACTUAL_MARKERS) >= 2 || date_pattern().is_match(sentence) {
            return SentenceClassification::new(
                EpistemicTier::Factual,
                0.75,
                sentence,
                Some("Contains factual markers or dates".to_string()),
            );
        }

        SentenceClassification::new(
            self.config.default_tier,
            0.5,
            sentence,
            Some("Default classification (no strong markers)".to_string()),
        )
    }

    /// Map an external detector's confidence score to a tier
    ///
    /// Uses the configured high/low thresholds; see
    /// [`map_external_confidence`] for the rules.
    pub fn map_external_score(&self, category: &str, confidence: f64) -> EpistemicTier {
        map_external_confidence(
            category,
            confidence,
            self.config.high_confidence_threshold,
            self.config.low_confidence_threshold,
        )
    }
}

/// Map an external confidence score to a tier given explicit thresholds
///
/// Factual at or above the high threshold, Interpretive otherwise. A score
/// below the low threshold is still Interpretive - never silently escalated
/// to Deferred by this path - but is logged so a reviewer can find it.
pub fn map_external_confidence(
    category: &str,
    confidence: f64,
    high_threshold: f64,
    low_threshold: f64,
) -> EpistemicTier {
    if confidence >= high_threshold {
        EpistemicTier::Factual
    } else {
        if confidence < low_threshold {
            debug!(category, confidence, "low confidence external annotation");
        }
        EpistemicTier::Interpretive
    }
}

/// Generate a human-readable explanation of a classification
pub fn explain(classification: &SentenceClassification) -> String {
    let mut explanation = format!("Classified as {}:\n", classification.tier);
    explanation.push_str(&format!(
        "  Confidence: {:.0}%\n",
        classification.confidence * 100.0
    ));
    explanation.push_str(&format!(
        "  Rationale: {}\n",
        classification
            .rationale
            .as_deref()
            .unwrap_or("No specific rationale")
    ));
    explanation.push_str(&format!(
        "  Description: {}\n",
        classification.tier.description()
    ));
    if classification.needs_review() {
        explanation.push_str("  Flagged for human review\n");
    }
    explanation
}

/// Split text into sentences at punctuation boundaries
///
/// Splits after `.`, `!` or `?` followed by whitespace, consuming the
/// whitespace run. This is a deliberately naive heuristic and incorrectly
/// splits on abbreviations ("Dr.", "cf."), scripture references
/// ("Gen. 1:1"), page references ("pp. 23-45") and decimals. That failure
/// mode is an accepted limitation of the tagging pipeline, not a bug to
/// fix here: a smarter splitter would silently change classification
/// output on existing corpora.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.') | Some('!') | Some('?')) {
            sentences.push(&text[start..i]);
            let mut next_start = i + c.len_utf8();
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_whitespace() {
                    break;
                }
                next_start = j + d.len_utf8();
                chars.next();
            }
            start = next_start;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SentenceClassifier {
        SentenceClassifier::default_config()
    }

    #[test]
    fn test_citation_classified_as_factual() {
        let c = classifier()
            .classify_sentence("According to Gadamer (1960), understanding is always historical.")
            .unwrap();
        assert_eq!(c.tier, EpistemicTier::Factual);
        assert_eq!(c.confidence, 0.9);
    }

    #[test]
    fn test_normative_claim_deferred() {
        let c = classifier()
            .classify_sentence("This is the correct interpretation of God's will.")
            .unwrap();
        assert_eq!(c.tier, EpistemicTier::Deferred);
        assert_eq!(c.confidence, 0.85);
    }

    #[test]
    fn test_interpretive_markers() {
        let c = classifier()
            .classify_sentence("This pattern suggests a connection between the two texts.")
            .unwrap();
        assert_eq!(c.tier, EpistemicTier::Interpretive);
        assert_eq!(c.confidence, 0.8);
    }

    #[test]
    fn test_factual_markers() {
        let c = classifier()
            .classify_sentence("He wrote the commentary and died at Bardejov, according to the register.")
            .unwrap();
        assert_eq!(c.tier, EpistemicTier::Factual);
        assert_eq!(c.confidence, 0.75);
    }

    #[test]
    fn test_default_fallback() {
        let c = classifier().classify_sentence("Greetings to you.").unwrap();
        assert_eq!(c.tier, EpistemicTier::Interpretive);
        assert_eq!(c.confidence, 0.5);
    }

    #[test]
    fn test_citation_rule_fires_before_normative() {
        // Contains both a citation and normative phrasing; citation wins.
        let c = classifier()
            .classify_sentence("Gadamer (1960) argues this is the correct interpretation.")
            .unwrap();
        assert_eq!(c.tier, EpistemicTier::Factual);
    }

    #[test]
    fn test_already_tagged_preserved() {
        let content = "[FACTUAL] This is already tagged.";
        let result = classifier().classify_and_tag(content).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_classify_and_tag_prefixes_each_sentence() {
        let result = classifier()
            .classify_and_tag("Greetings to you. This pattern suggests a connection.")
            .unwrap();
        assert!(result.starts_with("[INTERPRETIVE] Greetings to you."));
        assert!(result.contains("[INTERPRETIVE] This pattern suggests a connection."));
    }

    #[test]
    fn test_classify_and_tag_idempotent() {
        let classifier = classifier();
        let once = classifier
            .classify_and_tag("Greetings to you. Gadamer published Truth and Method in 1960.")
            .unwrap();
        let twice = classifier.classify_and_tag(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("First here. Second there! Third where?");
        assert_eq!(
            sentences,
            vec!["First here.", "Second there!", "Third where?"]
        );
    }

    #[test]
    fn test_split_sentences_known_abbreviation_limitation() {
        // Documented limitation: abbreviations split too.
        let sentences = split_sentences("Dr. Smith arrived.");
        assert_eq!(sentences, vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_split_sentences_no_boundary() {
        assert_eq!(split_sentences("no boundary at all"), vec!["no boundary at all"]);
    }

    #[test]
    fn test_map_external_confidence_high_is_factual() {
        let tier = map_external_confidence("person", 0.92, 0.85, 0.5);
        assert_eq!(tier, EpistemicTier::Factual);
    }

    #[test]
    fn test_map_external_confidence_low_stays_interpretive() {
        // Low confidence is flagged for review but never escalated to
        // Deferred by this path.
        let tier = map_external_confidence("concept", 0.45, 0.85, 0.5);
        assert_eq!(tier, EpistemicTier::Interpretive);
    }

    #[test]
    fn test_map_external_confidence_threshold_inclusive() {
        let tier = map_external_confidence("person", 0.85, 0.85, 0.5);
        assert_eq!(tier, EpistemicTier::Factual);
    }

    #[test]
    fn test_map_external_score_uses_config() {
        let tier = classifier().map_external_score("person", 0.92);
        assert_eq!(tier, EpistemicTier::Factual);
    }

    #[test]
    fn test_explain_includes_review_flag() {
        let c = classifier()
            .classify_sentence("This is the correct interpretation of God's will.")
            .unwrap();
        let text = explain(&c);
        assert!(text.contains("Classified as DEFERRED"));
        assert!(text.contains("Confidence: 85%"));
        assert!(text.contains("Flagged for human review"));
    }
}
