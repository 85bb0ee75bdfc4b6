//! Lexical marker tables and sentence-level patterns
//!
//! Keyword lists and compiled patterns backing the sentence cascade. All
//! tables are immutable; the regexes compile once at first use. Marker
//! scoring is substring containment over the lowercased sentence - each
//! distinct marker counts once, there is no weighting.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Markers suggesting verifiable, citable content
///
/// The bare "in" entry exists for year references ("in 1960") and is a
/// known-noisy marker; it only matters in combination, since two distinct
/// markers are required before the factual rule fires.
pub const FACTUAL_MARKERS: &[&str] = &[
    "published",
    "wrote",
    "in",
    "page",
    "p.",
    "pp.",
    "according to",
    "states",
    "defined as",
    "is called",
    "born",
    "died",
    "dated",
    "located",
    "isbn",
    "doi",
];

/// Markers suggesting interpretive, analysis-flavored content
pub const INTERPRETIVE_MARKERS: &[&str] = &[
    "suggests",
    "appears",
    "seems",
    "might",
    "could",
    "may",
    "possibly",
    "likely",
    "pattern",
    "connection",
    "theme",
    "similar",
    "relates",
    "resembles",
    "echoes",
    "parallels",
    "indicates",
    "implies",
    "analysis",
    "comparison",
];

/// Markers suggesting content that must be deferred to human judgment
pub const DEFERRED_MARKERS: &[&str] = &[
    "should",
    "ought",
    "must",
    "correct",
    "true",
    "false",
    "right",
    "wrong",
    "better",
    "worse",
    "sacred",
    "divine",
    "salvation",
    "sin",
    "holy",
    "righteous",
    "spiritual significance",
    "theological truth",
    "god's will",
    "meaning of life",
];

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid lexicon pattern {:?}: {}", pattern, e))
}

// Citation and date matching is case-sensitive: "PP. 12" is not a page
// reference and "5TH CENTURY" is not a date.
static CITATION: Lazy<Regex> = Lazy::new(|| {
    // (Author 2020), [1] / [Author 2020], p. 123 / pp. 123-456, bare years
    Regex::new(r"\([^)]*\d{4}[^)]*\)|\[[^\]]*\d+[^\]]*\]|p{1,2}\.\s*\d+|\d{4}[a-z]?")
        .unwrap_or_else(|e| panic!("invalid citation pattern: {}", e))
});

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{4}\b|\b\d{1,2}(st|nd|rd|th)\s+century\b")
        .unwrap_or_else(|e| panic!("invalid date pattern: {}", e))
});

// Tags are upper-case by contract, so this one is case-sensitive.
static TIER_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(FACTUAL|INTERPRETIVE|DEFERRED)\]")
        .unwrap_or_else(|e| panic!("invalid tier tag pattern: {}", e))
});

static NORMATIVE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bis\s+(true|false|correct|wrong)\b",
        r"\bshould\b.*\b(believe|accept|reject)\b",
        r"\bthe\s+correct\s+(interpretation|reading|understanding)\b",
        r"\bgod\s+(is|wants|desires|commands)\b",
        r"\bspiritual(ly)?\s+(true|significant|meaningful)\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

/// Citation-like pattern (parenthetical year, bracketed reference, page, year)
pub fn citation_pattern() -> &'static Regex {
    &CITATION
}

/// Date or century pattern
pub fn date_pattern() -> &'static Regex {
    &DATE
}

/// Inline epistemic tier tag pattern
pub fn tier_tag_pattern() -> &'static Regex {
    &TIER_TAG
}

/// Whether the (lowercased) text makes a normative or theological truth claim
pub fn contains_normative_claim(text: &str) -> bool {
    NORMATIVE.iter().any(|p| p.is_match(text))
}

/// Count how many distinct markers appear in the (lowercased) text
pub fn score_markers(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text.contains(*m)).count()
}
