//! One classified row per charge line.
//!
//! A charge line is one entry of a case document's filing or
//! disposition table, already isolated by the section exploder. The
//! layout differs between the two: disposition lines carry the court
//! action and date before the cite and the description after it,
//! filing lines the reverse. The presence of a date is what tells
//! them apart.

use chrono::NaiveDate;
use docket_types::{Cell, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap1, date_mdy, find, slice_from, slice_range, squeeze_ws};
use crate::classify::{codes, fillers};

lazy_static! {
    static ref ANY_DATE: Regex = Regex::new(r"(\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref CITE: Regex = Regex::new(
        r"[A-Z0-9]{3}-[A-Z0-9]{3}-[A-Z0-9]{3}\(?[A-Z]?\)?\.?\d?"
    )
    .unwrap();
    static ref COURT_ACTION: Regex = Regex::new(
        r"(BOUND|GUILTY PLEA|WAIVED TO GJ|DISMISSED|TIME LAPSED|NOL PROSS|CONVICTED|INDICTED|DISMISSED|FORFEITURE|TRANSFER|REMANDED|WAIVED|ACQUITTED|WITHDRAWN|PETITION|PRETRIAL|COND\. FORF\.)"
    )
    .unwrap();
    // Lazy throughout so the optional subsection suffix stays in the
    // remainder, same as the cite-anchored line split.
    static ref CITE_SPLIT: Regex = Regex::new(
        r"[A-Z0-9]{3}\s*?-[A-Z0-9]{3}\s*?-[A-Z0-9]{3}\(*?[A-Z]*?\)*?\(*?[A-Z0-9]*?\)*?\.*?\d*?"
    )
    .unwrap();
    static ref TYPE_DESCRIPTION: Regex = Regex::new(
        r"(TRAFFIC MISDEMEANOR|BOND|FELONY|MISDEMEANOR|OTHER|TRAFFIC|VIOLATION)"
    )
    .unwrap();
    static ref CATEGORY: Regex = Regex::new(
        r"(ALCOHOL|BOND|CONSERVATION|DOCKET|DRUG|GOVERNMENT|HEALTH|MUNICIPAL|OTHER|PERSONAL|PROPERTY|SEX|TRAFFIC)"
    )
    .unwrap();
    static ref INCHOATE: Regex =
        Regex::new(r"(A ATT|ATTEMPT|S SOLICIT|CONSP|SOLICITATION|COMPLICITY)").unwrap();
    static ref ID_MARKER: Regex = Regex::new(r"\s(A|S|C|P)\s").unwrap();
    static ref DESC_LEADING_DOT: Regex = Regex::new(r"^\.\d?\s").unwrap();
    static ref MID_MARKER: Regex = Regex::new(r"\s[ASC]\s").unwrap();
    static ref LEADING_MARKER: Regex = Regex::new(r"^[ASC]\s").unwrap();
    static ref TRAILING_COMMA: Regex = Regex::new(r",$").unwrap();
    static ref DOUBLED_DOT: Regex = Regex::new(r"\.\s\.\s").unwrap();
}

/// Case-level values every charge row inherits.
#[derive(Debug, Clone, Copy)]
pub struct ChargeContext<'a> {
    pub name: &'a str,
    pub case_number: &'a str,
    pub total_balance: f64,
    pub d999: f64,
}

/// A fully classified charge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeRow {
    pub name: String,
    pub case_number: String,
    pub num: String,
    pub code: String,
    pub cite: String,
    pub id: String,
    pub description: String,
    pub type_description: String,
    pub category: String,
    pub court_action: String,
    pub court_action_date: Option<NaiveDate>,
    pub total_balance: f64,
    pub payment_to_restore: Option<f64>,
    pub conviction: bool,
    pub felony: bool,
    pub cerv_disq_charge: bool,
    pub cerv_disq_conviction: bool,
    pub pardon_disq_charge: bool,
    pub pardon_disq_conviction: bool,
    pub permanent_disq_charge: bool,
    pub permanent_disq_conviction: bool,
    pub filing: bool,
    pub disposition: bool,
    pub charges_summary: String,
}

impl ChargeRow {
    /// Parse and classify one charge line. Returns `None` for rows the
    /// pipeline drops: a number column without a digit zero, or a line
    /// whose type description cannot be read.
    pub fn parse(line: &str, ctx: ChargeContext<'_>) -> Option<Self> {
        let num = slice_range(line, 0, 3);
        if !num.contains('0') {
            return None;
        }
        let num = num.trim().to_string();
        let code = slice_range(line, 4, 4).trim().to_string();

        let raw_date = cap1(&ANY_DATE, line);
        let disposition = raw_date.is_some();
        let filing = !disposition;

        let mut split = CITE_SPLIT.split(line);
        let before_cite = split.next().unwrap_or("");
        let after_cite = split.next().unwrap_or("");

        let (raw_desc, seg2) = if disposition {
            (after_cite.to_string(), slice_from(before_cite, 19))
        } else {
            (slice_from(before_cite, 9), after_cite.to_string())
        };
        let raw_desc = raw_desc
            .replacen("-   -", "", 1)
            .replacen("1STS", "1ST", 1)
            .trim()
            .to_string();

        let type_description = match cap1(&TYPE_DESCRIPTION, &seg2)? {
            t if t == "TRAFFIC MISDEMEANOR" => "MISDEMEANOR".to_string(),
            t => t,
        };
        let category = cap1(&CATEGORY, &seg2).unwrap_or_default();
        let court_action = cap1(&COURT_ACTION, line).unwrap_or_default();

        let felony = line.contains("FELONY");
        let conviction = line.contains("GUILTY PLEA") || line.contains("CONVICTED");
        // Attempt, solicitation and conspiracy counts do not carry the
        // underlying offense's disqualification.
        let completed = !INCHOATE.is_match(&raw_desc);

        let cerv_match = codes::is_cerv_code(&code);
        let pardon_match = codes::is_pardon_code(&code);
        let perm_match = codes::is_permanent_line(line);

        let cerv_disq_charge = cerv_match && felony && completed;
        let cerv_disq_conviction = cerv_disq_charge && conviction;
        let pardon_disq_charge = pardon_match && felony && completed;
        let pardon_disq_conviction = pardon_disq_charge && conviction;
        let permanent_disq_charge = perm_match && felony && completed;
        let permanent_disq_conviction = permanent_disq_charge && conviction;

        let disqualifying_conviction =
            cerv_disq_conviction || pardon_disq_conviction || permanent_disq_conviction;
        let payment_to_restore =
            disqualifying_conviction.then(|| ctx.total_balance - ctx.d999);

        let mut description = raw_desc;
        let mut cite = find(&CITE, line).unwrap_or_default();
        if let Some((filled_desc, filled_cite)) = fillers::lookup(&code) {
            description = filled_desc.to_string();
            cite = filled_cite.to_string();
        }
        if code == "VIM1" {
            if description.is_empty() {
                description = "IMITATION DRUG MANUF/DIST".to_string();
            }
            if cite.is_empty() {
                cite = "020-002-143(A)".to_string();
            }
        }

        let mut id = cap1(&ID_MARKER, line).unwrap_or_default();
        if id == "A" && !line.contains("ATTEMPT") {
            id.clear();
        }

        let summary = format!(
            "{} - {} {} {} {} {} {}",
            ctx.case_number,
            num,
            cite,
            description,
            type_description,
            court_action,
            raw_date.clone().unwrap_or_default(),
        );
        let summary = TRAILING_COMMA.replace(summary.trim(), "");
        let summary = squeeze_ws(&summary);
        let summary = DOUBLED_DOT.replace(&summary, ".");
        let charges_summary = MID_MARKER.replace(&summary, " ").into_owned();

        let description = DESC_LEADING_DOT.replace(&description, "");
        let description = MID_MARKER.replace(&description, " ");
        let description = LEADING_MARKER.replace(&description, "").into_owned();

        if line.contains("WILLFUL FAILURE TO RETURN TO P") {
            id.clear();
        }

        Some(Self {
            name: ctx.name.to_string(),
            case_number: ctx.case_number.to_string(),
            num,
            code,
            cite,
            id,
            description,
            type_description,
            category,
            court_action,
            court_action_date: raw_date.as_deref().and_then(date_mdy),
            total_balance: ctx.total_balance,
            payment_to_restore,
            conviction,
            felony,
            cerv_disq_charge,
            cerv_disq_conviction,
            pardon_disq_charge,
            pardon_disq_conviction,
            permanent_disq_charge,
            permanent_disq_conviction,
            filing,
            disposition,
            charges_summary,
        })
    }
}

impl Tabular for ChargeRow {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "CaseNumber",
        "Num",
        "Code",
        "Cite",
        "ID",
        "Description",
        "TypeDescription",
        "Category",
        "CourtAction",
        "CourtActionDate",
        "TotalBalance",
        "PaymentToRestore",
        "Conviction",
        "Felony",
        "CERVDisqCharge",
        "CERVDisqConviction",
        "PardonDisqCharge",
        "PardonDisqConviction",
        "PermanentDisqCharge",
        "PermanentDisqConviction",
        "Filing",
        "Disposition",
        "ChargesSummary",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.clone().into(),
            self.case_number.clone().into(),
            self.num.clone().into(),
            self.code.clone().into(),
            self.cite.clone().into(),
            self.id.clone().into(),
            self.description.clone().into(),
            self.type_description.clone().into(),
            self.category.clone().into(),
            self.court_action.clone().into(),
            Cell::from_opt_date(self.court_action_date),
            self.total_balance.into(),
            Cell::from_opt_float(self.payment_to_restore),
            self.conviction.into(),
            self.felony.into(),
            self.cerv_disq_charge.into(),
            self.cerv_disq_conviction.into(),
            self.pardon_disq_charge.into(),
            self.pardon_disq_conviction.into(),
            self.permanent_disq_charge.into(),
            self.permanent_disq_conviction.into(),
            self.filing.into(),
            self.disposition.into(),
            self.charges_summary.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx() -> ChargeContext<'static> {
        ChargeContext {
            name: "DOE JOHN",
            case_number: "01-CC-2017-000001.00",
            total_balance: 700.0,
            d999: 100.0,
        }
    }

    const DISPOSITION_LINE: &str =
        "001 ROB1 GUILTY PLEA CONVICTED FELONY PROPERTY 03/15/2017 13A-008-041 ROBBERY 1ST";
    const FILING_LINE: &str = "002 UPCS POSS. CONTR. SUBS 13A-012-212(A) FELONY DRUG";

    #[test]
    fn disposition_line_is_classified_as_conviction() {
        let row = ChargeRow::parse(DISPOSITION_LINE, ctx()).unwrap();
        assert_eq!(row.num, "001");
        assert_eq!(row.code, "ROB1");
        assert!(row.disposition);
        assert!(!row.filing);
        assert!(row.conviction);
        assert!(row.felony);
        assert_eq!(row.court_action, "GUILTY PLEA");
        assert_eq!(
            row.court_action_date,
            chrono::NaiveDate::from_ymd_opt(2017, 3, 15)
        );
        assert_eq!(row.type_description, "FELONY");
        assert_eq!(row.category, "PROPERTY");
        assert!(row.cerv_disq_charge);
        assert!(row.cerv_disq_conviction);
        assert!(!row.pardon_disq_charge);
        assert!(!row.permanent_disq_charge);
        assert_eq!(row.payment_to_restore, Some(600.0));
    }

    #[test]
    fn filing_line_has_no_conviction_flags() {
        let row = ChargeRow::parse(FILING_LINE, ctx()).unwrap();
        assert!(row.filing);
        assert!(!row.disposition);
        assert!(!row.conviction);
        assert_eq!(row.court_action, "");
        assert_eq!(row.court_action_date, None);
        assert_eq!(row.description, "POSS. CONTR. SUBS");
        assert_eq!(row.cite, "13A-012-212(A)");
        assert_eq!(row.category, "DRUG");
        assert_eq!(row.payment_to_restore, None);
    }

    #[test]
    fn filing_and_disposition_are_mutually_exclusive() {
        for line in [DISPOSITION_LINE, FILING_LINE] {
            let row = ChargeRow::parse(line, ctx()).unwrap();
            assert!(row.filing != row.disposition);
        }
    }

    #[test]
    fn num_without_zero_is_dropped() {
        assert!(ChargeRow::parse("X11 ROB1 whatever", ctx()).is_none());
    }

    #[test]
    fn unreadable_type_description_is_dropped() {
        assert!(ChargeRow::parse("001 ZZZZ no usable segments here", ctx()).is_none());
    }

    #[test]
    fn attempt_blocks_disqualification() {
        let line =
            "003 ROB1 GUILTY PLEA FELONY PROPERTY 03/15/2017 13A-008-041 ATTEMPT ROBBERY 1ST";
        let row = ChargeRow::parse(line, ctx()).unwrap();
        assert!(row.felony && row.conviction);
        assert!(!row.cerv_disq_charge);
        assert!(!row.cerv_disq_conviction);
        assert_eq!(row.payment_to_restore, None);
    }

    #[test]
    fn capital_murder_marker_is_permanent() {
        let line =
            "001 CM02 GUILTY PLEA FELONY PERSONAL 01/10/2015 13A-005-040(A) MURDER CAPITAL-ROBBERY";
        let row = ChargeRow::parse(line, ctx()).unwrap();
        assert!(row.permanent_disq_charge);
        assert!(row.permanent_disq_conviction);
        assert_eq!(row.description, "MURDER CAPITAL-ROBBERY");
        assert_eq!(row.cite, "13A-005-040(A)");
    }

    #[test]
    fn filler_backfills_description_and_cite() {
        // Bond forfeiture rows print without a description or cite;
        // the code book supplies both.
        let line = "004 FORF BOND FORFEITURE FELONY BOND 05/01/2018";
        let row = ChargeRow::parse(line, ctx()).unwrap();
        assert_eq!(row.description, "BOND FORF-FELONY");
        assert_eq!(row.cite, "- -BOND FORT");
    }

    #[test]
    fn summary_includes_join_key_and_charge_facts() {
        let row = ChargeRow::parse(DISPOSITION_LINE, ctx()).unwrap();
        assert!(row.charges_summary.starts_with("01-CC-2017-000001.00 - 001"));
        assert!(row.charges_summary.contains("ROBBERY 1ST"));
        assert!(row.charges_summary.contains("GUILTY PLEA 03/15/2017"));
    }
}
