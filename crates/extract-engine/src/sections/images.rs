//! Images (document scan index) rows.

use chrono::NaiveDate;
use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap, cap1, date_mdy};

lazy_static! {
    static ref IMAGES_CHUNK: Regex =
        Regex::new(r"(Images\s+?Pages)([^\\n]*)(END OF THE REPORT)").unwrap();
    static ref FOOTER: Regex = Regex::new(r"© Alacourt\.com").unwrap();
    static ref HAS_CONTENT: Regex = Regex::new(r"[A-Za-z0-9]").unwrap();
    static ref LABEL_WORD: Regex = Regex::new(r"[A-Z][a-z]+").unwrap();
    static ref WS_COLON: Regex = Regex::new(r"[\s:]+").unwrap();
    static ref DATE_TIME: Regex =
        Regex::new(r"(\d\d?/\d\d?/\d\d\d\d) (\d\d? \d\d? \d\d? [AP]M)").unwrap();
    static ref DOC_NUMBER: Regex = Regex::new(r"^\d\s.+?\s(\d)").unwrap();
    static ref TITLE: Regex = Regex::new(r"^\d\s(.+?)\s\d").unwrap();
    static ref DESCRIPTION: Regex =
        Regex::new(r"^\d\s.+?\s\d\s(.+?)\s\d\d?/\d\d?/\d\d\d\d").unwrap();
    static ref PAGES: Regex = Regex::new(r"^(\d)\s").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRow {
    pub case_number: String,
    pub date: Option<NaiveDate>,
    /// Time of day as printed, colons scrubbed.
    pub time: String,
    pub doc_number: Option<i64>,
    pub title: String,
    pub description: String,
    pub pages: Option<i64>,
}

/// Every scan-index line of one document, in source order.
pub fn rows(doc: &Document, case_number: &str) -> Vec<ImageRow> {
    let Some(chunk) = cap(&IMAGES_CHUNK, &doc.full_text, 2) else {
        return Vec::new();
    };
    FOOTER
        .replace_all(&chunk, "")
        .split('\n')
        .filter(|line| HAS_CONTENT.is_match(line))
        .map(|line| {
            let line = LABEL_WORD.replace_all(line, " ");
            let line = WS_COLON.replace_all(&line, " ").trim().to_string();
            ImageRow {
                case_number: case_number.to_string(),
                date: cap(&DATE_TIME, &line, 1).and_then(|d| date_mdy(&d)),
                time: cap(&DATE_TIME, &line, 2).unwrap_or_default(),
                doc_number: cap1(&DOC_NUMBER, &line).and_then(|n| n.parse().ok()),
                title: cap1(&TITLE, &line).unwrap_or_default(),
                description: cap1(&DESCRIPTION, &line).unwrap_or_default(),
                pages: cap1(&PAGES, &line).and_then(|p| p.parse().ok()),
            }
        })
        .collect()
}

impl Tabular for ImageRow {
    const COLUMNS: &'static [&'static str] = &[
        "CaseNumber",
        "Date",
        "Time",
        "Doc#",
        "Title",
        "Description",
        "Pages",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            Cell::from_opt_date(self.date),
            self.time.clone().into(),
            Cell::from_opt_int(self.doc_number),
            self.title.clone().into(),
            self.description.clone().into(),
            Cell::from_opt_int(self.pages),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scan_index_lines_become_rows() {
        let text = "Images   Pages\n2 WARRANT 1 ARREST 4/1/2021 9 05 12 AM\nEND OF THE REPORT";
        let doc = Document::new("t", text);
        let rows = rows(&doc, "01-CC-2021-000001.00");
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.pages, Some(2));
        assert_eq!(row.title, "WARRANT");
        assert_eq!(row.doc_number, Some(1));
        assert_eq!(row.date, chrono::NaiveDate::from_ymd_opt(2021, 4, 1));
        assert_eq!(row.time, "9 05 12 AM");
    }

    #[test]
    fn missing_section_yields_no_rows() {
        let doc = Document::new("t", "nothing here");
        assert!(rows(&doc, "x").is_empty());
    }
}
