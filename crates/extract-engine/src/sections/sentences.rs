//! Sentencing blocks.
//!
//! A document carries zero or more `Sentence N ... Linked Cases`
//! blocks in its flattened text. Only the structurally significant
//! fields are lifted out; the block's free-form checkbox grid is not
//! reproduced column for column.

use chrono::NaiveDate;
use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap1, date_mdy};

lazy_static! {
    static ref SENTENCE_BLOCK: Regex = Regex::new(r"Sentence\s\d\s.+?Linked Cases").unwrap();
    static ref NUMBER: Regex = Regex::new(r"Sentence\s(\d)\s").unwrap();
    static ref LAST_UPDATE: Regex =
        Regex::new(r"Last Update:\s(\d\d?/\d\d?/\d\d\d\d)\sUpdated By: [A-Z]{3}").unwrap();
    static ref UPDATED_BY: Regex =
        Regex::new(r"Last Update:\s\d\d?/\d\d?/\d\d\d\d\sUpdated By: ([A-Z]{3})").unwrap();
    static ref PROBATION_REVOKE: Regex =
        Regex::new(r"Probation Revoke:(.+?) (Sentence|License)").unwrap();
    static ref LICENSE_SUSP: Regex =
        Regex::new(r"License Susp Period: (\d+ Years, \d+ Months, \d+ Days\.)").unwrap();
    static ref JAIL_CREDIT: Regex =
        Regex::new(r"Days\.\s*(\d+ Years, \d+ Months, \d+ Days\.)\s+").unwrap();
    static ref PROBATION_PERIOD: Regex =
        Regex::new(r"Probation Period: (\d+ Years, \d+ Months, \d+ Days\.)").unwrap();
    static ref PROVISIONS: Regex = Regex::new(r"Sentence Provisions: ([YN])").unwrap();
    // Spelled the way the source system spells it.
    static ref REQUIREMENTS: Regex = Regex::new(r"Requrements Completed: (YES|NO)").unwrap();
    static ref SENTENCE_DATE: Regex =
        Regex::new(r"Sentence Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref START_DATE: Regex =
        Regex::new(r"Sentence Start Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref END_DATE: Regex =
        Regex::new(r"Sentence End Date: .{0,40}? (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref JAIL_FEE: Regex = Regex::new(r"Jail Fee:(.+?)Costs").unwrap();
    static ref FEE_MARKER: Regex = Regex::new(r"[A-Z]-\$").unwrap();
    static ref COSTS: Regex = Regex::new(r"Costs: (.+?)Fine:").unwrap();
    static ref FINE: Regex = Regex::new(r"Fine:(.+?)Crime Victims").unwrap();
    static ref CRIME_VICTIMS: Regex = Regex::new(r"Crime Victims Fee:(.+?)Monetary").unwrap();
    static ref FINE_SUSPENDED: Regex =
        Regex::new(r"Fine Suspended: (.+?)Immigration Fine").unwrap();
    static ref FINE_IMPOSED: Regex = Regex::new(r"Fine Imposed: (.+?) Alias Warrant").unwrap();
    static ref IMPOSED_CONFINEMENT: Regex =
        Regex::new(r"Imposed Confinement Period: (\d+ Years, \d+ Months, \d+ Days\.)").unwrap();
    static ref TOTAL_CONFINEMENT: Regex =
        Regex::new(r"Total Confinement Period: (\d+ Years, \d+ Months, \d+ Days\.)").unwrap();
    static ref SUSPENDED_CONFINEMENT: Regex =
        Regex::new(r"Suspended Confinement Period (\d+ Years, \d+ Months, \d+ Days\.)").unwrap();
    static ref SPLIT: Regex = Regex::new(r"Split: (.+?) (Concurrent|Confinement)").unwrap();
    static ref CONCURRENT: Regex = Regex::new(r"Concurrent Sentence:\s+([A-Z]?)\s").unwrap();
    static ref CONSECUTIVE: Regex = Regex::new(r"Consecutive Sentence:\s+([A-Z]?)\s").unwrap();
    static ref DEATH: Regex = Regex::new(r"Death:\s+(X?)").unwrap();
    static ref LIFE: Regex = Regex::new(r"Life:\s+(X?)").unwrap();
    static ref HABITUAL: Regex = Regex::new(r"Habitual Offender: (.+?)Sex Offender").unwrap();
    static ref DRUG_VOLUME: Regex = Regex::new(r"(\d+\.\d\d)\sDrug Volume:").unwrap();
    static ref DRUG_CODE: Regex =
        Regex::new(r"Drug Code: (.+?)Habitual Offender Number").unwrap();
    static ref VICTIM_DOB: Regex =
        Regex::new(r"Victim DOB:\s+(\d?\d?/?\d?\d?/?\d?\d?\d?\d?)").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRow {
    pub case_number: String,
    pub number: i64,
    pub last_update: Option<NaiveDate>,
    pub updated_by: String,
    pub probation_revoke: String,
    pub license_susp_period: String,
    pub jail_credit_period: String,
    pub probation_period: String,
    pub provisions: String,
    pub requirements_completed: String,
    pub sentence_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub jail_fee: Option<f64>,
    pub costs: String,
    pub fine: String,
    pub crime_victims_fee: String,
    pub fine_suspended: String,
    pub fine_imposed: Option<f64>,
    pub imposed_confinement_period: String,
    pub total_confinement_period: String,
    pub suspended_confinement_period: String,
    pub split: String,
    pub concurrent_sentence: String,
    pub consecutive_sentence: String,
    pub death: String,
    pub life: String,
    pub habitual_offender: String,
    pub drug_volume: Option<f64>,
    pub drug_code: Option<i64>,
    pub victim_dob: Option<NaiveDate>,
}

impl SentenceRow {
    /// Parse one sentencing block. Blocks without a sentence number
    /// are dropped.
    pub fn parse(block: &str, case_number: &str) -> Option<Self> {
        let number = cap1(&NUMBER, block)?.parse().ok()?;
        Some(Self {
            case_number: case_number.to_string(),
            number,
            last_update: cap1(&LAST_UPDATE, block).and_then(|d| date_mdy(&d)),
            updated_by: cap1(&UPDATED_BY, block).unwrap_or_default(),
            probation_revoke: cap1(&PROBATION_REVOKE, block).unwrap_or_default(),
            license_susp_period: cap1(&LICENSE_SUSP, block).unwrap_or_default(),
            jail_credit_period: cap1(&JAIL_CREDIT, block).unwrap_or_default(),
            probation_period: cap1(&PROBATION_PERIOD, block).unwrap_or_default(),
            provisions: cap1(&PROVISIONS, block).unwrap_or_default(),
            requirements_completed: cap1(&REQUIREMENTS, block).unwrap_or_default(),
            sentence_date: cap1(&SENTENCE_DATE, block).and_then(|d| date_mdy(&d)),
            start_date: cap1(&START_DATE, block).and_then(|d| date_mdy(&d)),
            end_date: cap1(&END_DATE, block).and_then(|d| date_mdy(&d)),
            jail_fee: cap1(&JAIL_FEE, block)
                .map(|f| FEE_MARKER.replace(&f, "").trim().to_string())
                .and_then(|f| f.parse().ok()),
            costs: cap1(&COSTS, block).unwrap_or_default(),
            fine: cap1(&FINE, block).unwrap_or_default(),
            crime_victims_fee: cap1(&CRIME_VICTIMS, block).unwrap_or_default(),
            fine_suspended: cap1(&FINE_SUSPENDED, block).unwrap_or_default(),
            fine_imposed: cap1(&FINE_IMPOSED, block).and_then(|f| f.trim().parse().ok()),
            imposed_confinement_period: cap1(&IMPOSED_CONFINEMENT, block).unwrap_or_default(),
            total_confinement_period: cap1(&TOTAL_CONFINEMENT, block).unwrap_or_default(),
            suspended_confinement_period: cap1(&SUSPENDED_CONFINEMENT, block)
                .unwrap_or_default(),
            split: cap1(&SPLIT, block).unwrap_or_default(),
            concurrent_sentence: cap1(&CONCURRENT, block).unwrap_or_default(),
            consecutive_sentence: cap1(&CONSECUTIVE, block).unwrap_or_default(),
            death: cap1(&DEATH, block).unwrap_or_default(),
            life: cap1(&LIFE, block).unwrap_or_default(),
            habitual_offender: cap1(&HABITUAL, block).unwrap_or_default(),
            drug_volume: cap1(&DRUG_VOLUME, block).and_then(|v| v.parse().ok()),
            drug_code: cap1(&DRUG_CODE, block).and_then(|c| c.trim().parse().ok()),
            victim_dob: cap1(&VICTIM_DOB, block).and_then(|d| date_mdy(&d)),
        })
    }
}

/// Every sentencing block of one document, in source order. Works on
/// the flattened text because the source system wraps these blocks
/// mid-field.
pub fn rows(doc: &Document, case_number: &str) -> Vec<SentenceRow> {
    SENTENCE_BLOCK
        .find_iter(&doc.flat_text)
        .filter_map(|m| SentenceRow::parse(m.as_str(), case_number))
        .collect()
}

impl Tabular for SentenceRow {
    const COLUMNS: &'static [&'static str] = &[
        "CaseNumber",
        "Number",
        "LastUpdate",
        "UpdatedBy",
        "ProbationRevoke",
        "LicenseSuspPeriod",
        "JailCreditPeriod",
        "ProbationPeriod",
        "Provisions",
        "RequirementsCompleted",
        "SentenceDate",
        "StartDate",
        "EndDate",
        "JailFee",
        "Costs",
        "Fine",
        "CrimeVictimsFee",
        "FineSuspended",
        "FineImposed",
        "ImposedConfinementPeriod",
        "TotalConfinementPeriod",
        "SuspendedConfinementPeriod",
        "Split",
        "ConcurrentSentence",
        "ConsecutiveSentence",
        "Death",
        "Life",
        "HabitualOffender",
        "DrugVolume",
        "DrugCode",
        "VictimDOB",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            self.number.into(),
            Cell::from_opt_date(self.last_update),
            self.updated_by.clone().into(),
            self.probation_revoke.clone().into(),
            self.license_susp_period.clone().into(),
            self.jail_credit_period.clone().into(),
            self.probation_period.clone().into(),
            self.provisions.clone().into(),
            self.requirements_completed.clone().into(),
            Cell::from_opt_date(self.sentence_date),
            Cell::from_opt_date(self.start_date),
            Cell::from_opt_date(self.end_date),
            Cell::from_opt_float(self.jail_fee),
            self.costs.clone().into(),
            self.fine.clone().into(),
            self.crime_victims_fee.clone().into(),
            self.fine_suspended.clone().into(),
            Cell::from_opt_float(self.fine_imposed),
            self.imposed_confinement_period.clone().into(),
            self.total_confinement_period.clone().into(),
            self.suspended_confinement_period.clone().into(),
            self.split.clone().into(),
            self.concurrent_sentence.clone().into(),
            self.consecutive_sentence.clone().into(),
            self.death.clone().into(),
            self.life.clone().into(),
            self.habitual_offender.clone().into(),
            Cell::from_opt_float(self.drug_volume),
            Cell::from_opt_int(self.drug_code),
            Cell::from_opt_date(self.victim_dob),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentence_block_parses_core_fields() {
        let text = "prefix Sentence 1 Requrements Completed: YES Sentence Date: 06/10/2019 \
                    Probation Period: 2 Years, 0 Months, 0 Days. Sentence Provisions: Y \
                    Sentence Start Date: 07/01/2019 Last Update: 08/01/2019 Updated By: ABC \
                    Linked Cases suffix";
        let doc = Document::new("t", text);
        let rows = rows(&doc, "01-CC-2019-000009.00");
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.number, 1);
        assert_eq!(row.requirements_completed, "YES");
        assert_eq!(row.provisions, "Y");
        assert_eq!(
            row.sentence_date,
            chrono::NaiveDate::from_ymd_opt(2019, 6, 10)
        );
        assert_eq!(row.probation_period, "2 Years, 0 Months, 0 Days.");
        assert_eq!(row.updated_by, "ABC");
        assert_eq!(
            row.last_update,
            chrono::NaiveDate::from_ymd_opt(2019, 8, 1)
        );
    }

    #[test]
    fn block_without_number_is_dropped() {
        let doc = Document::new("t", "no sentences here");
        assert!(rows(&doc, "x").is_empty());
    }

    #[test]
    fn cells_len_matches_column_layout() {
        let text = "Sentence 1 anything Linked Cases";
        let doc = Document::new("t", text);
        let rows = rows(&doc, "x");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells().len(), SentenceRow::COLUMNS.len());
    }
}
