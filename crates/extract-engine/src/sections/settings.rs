//! Court settings (hearing schedule) rows.

use chrono::NaiveDate;
use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap, cap1, date_mdy};

lazy_static! {
    static ref SETTINGS_CHUNK: Regex = Regex::new(r"(Settings)(.+)(Court Action)").unwrap();
    static ref LABELS: Regex = Regex::new(
        r"Settings|Date:|Que:|Time:|Description:|Disposition Charges   # Code Court Action Category Cite Court Action|Parties Party 1 - Plaintiff"
    )
    .unwrap();
    static ref COURT_ACTION_TAIL: Regex = Regex::new(r"Court Action.+").unwrap();
    // Mixed-case runs are field labels; the values are all uppercase.
    static ref LABEL_WORD: Regex = Regex::new(r"[A-Z][a-z]+").unwrap();
    static ref WS_COLON: Regex = Regex::new(r"[\s:]+").unwrap();
    static ref SETTING_NUMBER: Regex = Regex::new(r"^(\d)\s").unwrap();
    static ref SETTING_DATE: Regex = Regex::new(r"(\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref QUE: Regex = Regex::new(r"\s(\d\d\d)\s").unwrap();
    static ref DESCRIPTION: Regex = Regex::new(r"[AP]M (.+)").unwrap();
    static ref TIME: Regex = Regex::new(r"(\d\d \d\d [AP]M)").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingRow {
    pub case_number: String,
    pub number: Option<i64>,
    pub date: Option<NaiveDate>,
    pub que: String,
    /// Time of day as printed, colons scrubbed ("09 00 AM").
    pub time: String,
    pub description: String,
}

/// The settings row of one document, if the section is present.
pub fn row(doc: &Document, case_number: &str) -> Option<SettingRow> {
    let chunk = cap(&SETTINGS_CHUNK, &doc.flat_text, 2)?;
    let chunk = LABELS.replace_all(&chunk, "");
    let chunk = COURT_ACTION_TAIL.replace(&chunk, "");
    let chunk = LABEL_WORD.replace_all(chunk.trim(), " ");
    let settings = WS_COLON.replace_all(&chunk, " ").trim().to_string();
    if settings.is_empty() {
        return None;
    }
    Some(SettingRow {
        case_number: case_number.to_string(),
        number: cap1(&SETTING_NUMBER, &settings).and_then(|n| n.parse().ok()),
        date: cap1(&SETTING_DATE, &settings).and_then(|d| date_mdy(&d)),
        que: cap1(&QUE, &settings).unwrap_or_default(),
        time: cap1(&TIME, &settings).unwrap_or_default(),
        description: cap1(&DESCRIPTION, &settings).unwrap_or_default(),
    })
}

impl Tabular for SettingRow {
    const COLUMNS: &'static [&'static str] =
        &["CaseNumber", "#", "Date", "Que", "Time", "Description"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            Cell::from_opt_int(self.number),
            Cell::from_opt_date(self.date),
            self.que.clone().into(),
            self.time.clone().into(),
            self.description.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn settings_section_becomes_one_row() {
        let text =
            "Settings 1 Date: 04/15/2021 Que: 004 Time: 09:00 AM Description: ARRAIGNMENT Court Action";
        let doc = Document::new("t", text);
        let row = row(&doc, "01-CC-2021-000001.00").unwrap();
        assert_eq!(row.number, Some(1));
        assert_eq!(row.date, chrono::NaiveDate::from_ymd_opt(2021, 4, 15));
        assert_eq!(row.que, "004");
        assert_eq!(row.time, "09 00 AM");
        assert_eq!(row.description, "ARRAIGNMENT");
    }

    #[test]
    fn missing_section_yields_no_row() {
        let doc = Document::new("t", "no schedule here");
        assert!(row(&doc, "x").is_none());
    }
}
