//! Case action summary rows.
//!
//! The docket entries are kept as one free-text row per document;
//! the source system's column layout inside the section is not stable
//! enough to split further.

use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap, squeeze_ws};

lazy_static! {
    static ref CAS_CHUNK: Regex =
        Regex::new(r"(Case Action Summary)([^\\]*)(Images\s+?Pages)").unwrap();
    static ref HEADERS: Regex = Regex::new(
        r"© Alacourt\.com|Date: Description Doc# Title|Operator|Date: Time Code CommentsCase Action Summary"
    )
    .unwrap();
    static ref HAS_CONTENT: Regex = Regex::new(r"[A-Za-z0-9]").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseActionRow {
    pub case_number: String,
    pub case_action_summary: String,
}

/// The docket text of one document, if the section is present and
/// non-empty.
pub fn row(doc: &Document, case_number: &str) -> Option<CaseActionRow> {
    let chunk = cap(&CAS_CHUNK, &doc.full_text, 2)?;
    let chunk = squeeze_ws(&chunk);
    let text = HEADERS.replace_all(&chunk, "").trim().to_string();
    if !HAS_CONTENT.is_match(&text) {
        return None;
    }
    Some(CaseActionRow {
        case_number: case_number.to_string(),
        case_action_summary: text,
    })
}

impl Tabular for CaseActionRow {
    const COLUMNS: &'static [&'static str] = &["CaseNumber", "CaseActionSummary"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            self.case_action_summary.clone().into(),
        ]
    }
}
