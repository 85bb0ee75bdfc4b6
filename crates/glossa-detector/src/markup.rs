//! Corpus markup stripping

use once_cell::sync::Lazy;
use regex::Regex;

static REF_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<ref type="[^"]*">"#).unwrap_or_else(|e| panic!("ref-open pattern: {}", e))
});
static REF_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</ref>").unwrap_or_else(|e| panic!("ref-close pattern: {}", e)));
static CHAPTER_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!-- CHAPTER: [^>]* -->\n?")
        .unwrap_or_else(|e| panic!("chapter-comment pattern: {}", e))
});
static CHAPTER_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<chapter title="[^"]*">\n?"#)
        .unwrap_or_else(|e| panic!("chapter-open pattern: {}", e))
});

/// Remove pre-existing `<ref>` tags and chapter markup from corpus text
///
/// Earlier normalization passes leave inline reference tags behind; they
/// have to go before detection so the whole corpus is re-detected
/// uniformly and offsets refer to clean text.
pub fn strip_reference_tags(text: &str) -> String {
    let text = REF_OPEN.replace_all(text, "");
    let text = REF_CLOSE.replace_all(&text, "");
    let text = CHAPTER_COMMENT.replace_all(&text, "");
    CHAPTER_OPEN.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_tags_removed() {
        let text = r#"ut <ref type="biblical">Rom. 5,12</ref> docet"#;
        assert_eq!(strip_reference_tags(text), "ut Rom. 5,12 docet");
    }

    #[test]
    fn test_chapter_markup_removed() {
        let text = "<!-- CHAPTER: De Deo -->\n<chapter title=\"De Deo\">\nIn principio";
        assert_eq!(strip_reference_tags(text), "In principio");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "ut Rom. 5,12 docet";
        assert_eq!(strip_reference_tags(text), text);
    }
}
