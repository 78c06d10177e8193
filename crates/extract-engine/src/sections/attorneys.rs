//! Counsel-of-record rows.

use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::cap1;

lazy_static! {
    static ref ATTORNEYS_CHUNK: Regex = Regex::new(
        r"Type of Counsel Name Phone Email Attorney Code(.+)Warrant Issuance"
    )
    .unwrap();
    static ref WARRANT_TAIL: Regex = Regex::new(r"Warrant.+").unwrap();
    static ref LABEL_WORD: Regex = Regex::new(r"[A-Z][a-z]+").unwrap();
    static ref WS_COLON: Regex = Regex::new(r"[\s:]+").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttorneyRow {
    pub case_number: String,
    pub attorneys: String,
}

/// The counsel listing of one document, if present.
pub fn row(doc: &Document, case_number: &str) -> Option<AttorneyRow> {
    let chunk = cap1(&ATTORNEYS_CHUNK, &doc.flat_text)?;
    let chunk = WARRANT_TAIL.replace(&chunk, "");
    let chunk = LABEL_WORD.replace_all(&chunk, " ");
    let attorneys = WS_COLON.replace_all(&chunk, " ").trim().to_string();
    if attorneys.is_empty() {
        return None;
    }
    Some(AttorneyRow {
        case_number: case_number.to_string(),
        attorneys,
    })
}

impl Tabular for AttorneyRow {
    const COLUMNS: &'static [&'static str] = &["CaseNumber", "Attorneys"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            self.attorneys.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counsel_listing_is_scrubbed_of_labels() {
        let text = "Type of Counsel Name Phone Email Attorney Code RETAINED SMITH JOHN 2055551234 000123 Warrant Issuance";
        let doc = Document::new("t", text);
        let row = row(&doc, "01-CC-2021-000001.00").unwrap();
        assert_eq!(row.attorneys, "RETAINED SMITH JOHN 2055551234 000123");
    }

    #[test]
    fn missing_section_yields_no_row() {
        let doc = Document::new("t", "no counsel table");
        assert!(row(&doc, "x").is_none());
    }
}
