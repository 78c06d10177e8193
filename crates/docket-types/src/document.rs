//! One case document's extracted text, in both layouts the parsers need.

/// Replace every newline run with a single space.
///
/// Many field labels and their values span line breaks in the source
/// layout, so several extractors match against the flattened text
/// instead of the original. Idempotent.
pub fn flatten(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            in_break = true;
        } else {
            if in_break {
                out.push(' ');
                in_break = false;
            }
            out.push(ch);
        }
    }
    if in_break {
        out.push(' ');
    }
    out
}

/// One case document: identifier plus its full text in both layouts.
///
/// `flat_text` is computed once at construction since every extractor
/// needs it; documents are immutable after creation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub full_text: String,
    pub flat_text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, full_text: impl Into<String>) -> Self {
        let full_text = full_text.into();
        let flat_text = flatten(&full_text);
        Self {
            id: id.into(),
            full_text,
            flat_text,
        }
    }

    /// True when text extraction produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn flatten_replaces_newlines_with_spaces() {
        assert_eq!(flatten("a\nb\nc"), "a b c");
        assert_eq!(flatten("a\r\nb"), "a b");
    }

    #[test]
    fn flatten_collapses_newline_runs() {
        assert_eq!(flatten("a\n\n\nb"), "a b");
    }

    #[test]
    fn document_caches_flat_text() {
        let doc = Document::new("d1", "County: 01\nCase Number: X");
        assert_eq!(doc.flat_text, "County: 01 Case Number: X");
    }

    #[test]
    fn empty_document_detected() {
        assert!(Document::new("d1", "  \n ").is_empty());
        assert!(!Document::new("d2", "text").is_empty());
    }

    proptest! {
        #[test]
        fn flatten_is_idempotent(s in "\\PC{0,200}") {
            let once = flatten(&s);
            prop_assert_eq!(flatten(&once), once);
        }

        #[test]
        fn flatten_output_has_no_newlines(s in "[a-z\\n\\r ]{0,100}") {
            prop_assert!(!flatten(&s).contains('\n'));
        }
    }
}
