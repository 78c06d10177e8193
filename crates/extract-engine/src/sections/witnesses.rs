//! Witness list rows.

use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::cap1;

lazy_static! {
    static ref WITNESS_CHUNK: Regex = Regex::new(r"Witness(.+)Case Action Summary").unwrap();
    static ref HEADERS: Regex = Regex::new(
        r"# Date Served Service Type Attorney Issued Type|SJIS Witness List|Date Issued|Subpoena|List|Requesting Party Name Witness|Date: Time Code Comments|© Alacourt\.com \d\d?/\d\d?/\d\d\d\d|#"
    )
    .unwrap();
    static ref LABEL_WORD: Regex = Regex::new(r"[A-Z][a-z]+").unwrap();
    static ref WS_COLON: Regex = Regex::new(r"[\s:]+").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WitnessRow {
    pub case_number: String,
    pub witnesses: String,
}

/// The witness listing of one document, if present.
pub fn row(doc: &Document, case_number: &str) -> Option<WitnessRow> {
    let chunk = cap1(&WITNESS_CHUNK, &doc.flat_text)?;
    let chunk = HEADERS.replace_all(&chunk, "");
    let chunk = LABEL_WORD.replace_all(&chunk, " ");
    let witnesses = WS_COLON.replace_all(&chunk, " ").trim().to_string();
    if witnesses.is_empty() {
        return None;
    }
    Some(WitnessRow {
        case_number: case_number.to_string(),
        witnesses,
    })
}

impl Tabular for WitnessRow {
    const COLUMNS: &'static [&'static str] = &["CaseNumber", "Witnesses"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            self.witnesses.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn witness_listing_is_scrubbed_of_labels() {
        let text = "Witness SJIS Witness List DOE JANE 000456 Case Action Summary";
        let doc = Document::new("t", text);
        let row = row(&doc, "01-CC-2021-000001.00").unwrap();
        assert_eq!(row.witnesses, "DOE JANE 000456");
    }

    #[test]
    fn missing_section_yields_no_row() {
        let doc = Document::new("t", "nobody");
        assert!(row(&doc, "x").is_none());
    }
}
