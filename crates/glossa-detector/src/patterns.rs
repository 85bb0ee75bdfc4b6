//! Reference pattern library
//!
//! Ordered (pattern, category) rules for detecting named references in
//! early-modern print corpora. The library is compiled once at first use
//! and is immutable afterwards; the rule-based detector tries the rules in
//! exactly this sequence, category block by category block.
//!
//! The corpus the library was tuned on is OCR output of 16th-century
//! Latin print, so many rules carry OCR variants: long-s read as `f`
//! (`Pfalm` for `Psalm`), `fl`/`ft` ligature confusion (`Auguflinus`),
//! and both period and colon as citation separators (`Rom. 5` and
//! `Actor: 20`).

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A single rule: a compiled pattern and the category it detects
pub struct ReferencePattern {
    /// Compiled case-insensitive pattern
    pub regex: Regex,
    /// Category assigned to matches of this pattern
    pub category: &'static str,
}

fn rule(pattern: &str, category: &'static str) -> ReferencePattern {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid reference pattern {:?}: {}", pattern, e));
    ReferencePattern { regex, category }
}

static REFERENCE_PATTERNS: Lazy<Vec<ReferencePattern>> = Lazy::new(|| {
    let mut rules = Vec::new();

    // Biblical references - Old Testament
    rules.push(rule(r"\b(Gen(?:esis|es|ef)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Exod(?:us|i)?[.:]?\s*(?:X+V*I*V*X*[.:]?\s*\d*))", "biblical"));
    rules.push(rule(r"\b(Levit(?:icus)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Numer[.:]?\s*\d+)", "biblical"));
    rules.push(rule(
        r"\b(Deut(?:eronomij|eronom(?:ij)?)?[.:]?\s*(?:\d+|[XVI]+[.:]?))",
        "biblical",
    ));
    rules.push(rule(r"\b(Ios(?:ue)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Iudic(?:um)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Ruth[.:]?\s*\d+)", "biblical"));
    rules.push(rule(
        r"\b((?:1|2|I|II)[.:]?\s*(?:Sam(?:uel)?|Reg(?:um)?)[.:]?\s*\d+)",
        "biblical",
    ));
    rules.push(rule(r"\b((?:1|2|I|II)[.:]?\s*Paralip[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Esdr(?:ae)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Iob[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Psal(?:m|mo)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    // OCR variant: long-s read as f
    rules.push(rule(r"\b(Pfal(?:m|mo)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Prou(?:erb)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Eccles(?:iastes)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Cant(?:ica)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Isa(?:iae|ie)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Esai(?:ae|e)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Hierem(?:iae)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Ezech(?:iel(?:is|e)?)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Dan(?:iel(?:is)?)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Osee[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Ioel[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Amos[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Mich(?:aeae)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Zachar(?:iae)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Malach(?:iae)?[.:]?\s*\d+)", "biblical"));

    // Biblical references - New Testament
    rules.push(rule(r"\b(Matt?h?(?:aei|ei)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Marc(?:i)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Luc(?:ae|a)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Ioan(?:nis|nem|n)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Iohan(?:nis|nem|n)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Act(?:orum|or)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Aclorum[.:]?\s*(?:X+V*I*V*X*[.:]?\s*\d*))", "biblical"));
    rules.push(rule(r"\b(Rom(?:anos|an)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Ront[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Genef[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Genefi[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Efaie[.:]?\s*\d+)", "biblical"));
    // Roman numeral citations
    rules.push(rule(r"\b(Exodi\s+X+V*I*V*X*)", "biblical"));
    rules.push(rule(r"\b(Deuteronomij\s+\d+)", "biblical"));
    rules.push(rule(r"\b(Iohannis\s+\d+)", "biblical"));
    rules.push(rule(r"\b(Ioannis\s+\d+)", "biblical"));
    rules.push(rule(r"\b(Corint[bh][.:]?\s*\d+)", "biblical"));
    rules.push(rule(
        r"\b((?:1|2|I|II)[.:]?\s*Cor(?:inth)?[.:]?\s*\d+[\.,]?\s*\d*)",
        "biblical",
    ));
    rules.push(rule(r"\b(Galat(?:as)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Ephe[sf](?:ios|iis)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Philip(?:penses)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Colo[sf](?:senses)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(
        r"\b((?:1|2|I|II)[.:]?\s*Thess(?:alonicenses)?[.:]?\s*\d+)",
        "biblical",
    ));
    rules.push(rule(r"\b((?:1|2|I|II)[.:]?\s*Tim(?:otheum)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Tit(?:um)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Hebr(?:aeos)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));
    rules.push(rule(r"\b(Iacob(?:i)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(
        r"\b((?:1|2|I|II)[.:]?\s*Petr(?:i)?[.:]?\s*\d+[\.,]?\s*\d*)",
        "biblical",
    ));
    rules.push(rule(r"\b((?:1|2|3|I|II|III)[.:]?\s*Ioan(?:nis)?[.:]?\s*\d+)", "biblical"));
    rules.push(rule(r"\b(Apoc(?:al(?:ypsin)?)?[.:]?\s*\d+[\.,]?\s*\d*)", "biblical"));

    // Patristic references (plus classical authors cited alongside them)
    rules.push(rule(
        r"\b(August(?:inus|ini|ino)?\.?(?:\s+de\s+\w+(?:\s+\w+)?)?)",
        "patristic",
    ));
    rules.push(rule(r"\b(Auguf[lt](?:inus|ini|ino)?\.?)", "patristic"));
    rules.push(rule(r"\b(Hieronym(?:us|i|o)?\.?)", "patristic"));
    rules.push(rule(r"\b(Chrysostom(?:us|i|o)?\.?)", "patristic"));
    rules.push(rule(r"\b(Ambros(?:ius|ii|io)?\.?)", "patristic"));
    rules.push(rule(r"\b(Ambrof(?:ius|ij|io)?\.?)", "patristic"));
    rules.push(rule(r"\b(Cyprian(?:us|i|o)?\.?)", "patristic"));
    rules.push(rule(r"\b(Basilius\.?)", "patristic"));
    rules.push(rule(r"\b(Athanas(?:ius|ii|ij)?\.?)", "patristic"));
    rules.push(rule(r"\b(Origenes\.?)", "patristic"));
    rules.push(rule(r"\b(Tertullian(?:us|i)?\.?)", "patristic"));
    rules.push(rule(r"\b(Irena?e(?:us|i)?\.?)", "patristic"));
    rules.push(rule(r"\b(Plato(?:ne|nis)?)", "classical"));
    rules.push(rule(r"\b(Aristotel(?:es|is)?)", "classical"));
    rules.push(rule(r"\b(Cicero(?:nis)?)", "classical"));
    rules.push(rule(r"\b(Simonides)", "classical"));
    rules.push(rule(r"\b(Stoic(?:i|os|o|orum|is))", "classical"));
    rules.push(rule(r"\b(Epicur(?:eos|eorum|cos|corum))", "classical"));

    // Reformation references
    rules.push(rule(r"\b(Luther(?:us|i|o)?\.?)", "reformation"));
    rules.push(rule(r"\b(Melanchthon(?:is|em)?\.?)", "reformation"));
    rules.push(rule(r"\b(Caluin(?:us|i|o)?\.?)", "reformation"));
    rules.push(rule(r"\b(Zwingl(?:ius|ii)?\.?)", "reformation"));

    // Confessional document references
    rules.push(rule(
        r"\b((?:in\s+)?[Ssf]ymbolo\s+(?:Niceno|Athanasij|Atbanaftj|Ambrosij|Ambrofij|Apostolorum))",
        "confessional",
    ));
    rules.push(rule(
        r"\b(Confessio(?:nem|nis|ne)?\s+August(?:anam|anae)?)",
        "confessional",
    ));

    rules
});

/// The full ordered pattern library
pub fn reference_patterns() -> &'static [ReferencePattern] {
    &REFERENCE_PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_compiles_and_is_ordered() {
        let patterns = reference_patterns();
        assert!(patterns.len() > 70);
        // Category blocks appear in library order
        let first_patristic = patterns
            .iter()
            .position(|p| p.category == "patristic")
            .unwrap();
        let last_biblical = patterns
            .iter()
            .rposition(|p| p.category == "biblical")
            .unwrap();
        assert!(last_biblical < first_patristic);
    }

    #[test]
    fn test_biblical_chapter_verse_match() {
        let found = reference_patterns()
            .iter()
            .any(|p| p.regex.is_match("Rom. 5,12"));
        assert!(found);
    }

    #[test]
    fn test_ocr_variant_match() {
        let found = reference_patterns()
            .iter()
            .any(|p| p.category == "biblical" && p.regex.is_match("Pfalm. 23"));
        assert!(found);
    }
}
