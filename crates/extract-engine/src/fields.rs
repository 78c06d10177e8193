//! Per-case scalar field extractors.
//!
//! Each function is a pure function of one document's text and returns
//! the field's zero value (empty string, `None` date, `0.0` total) when
//! its pattern does not match. Fields are independent of one another,
//! so they may run in any order.
//!
//! Several categorical fields strip one fixed trailing character (the
//! `T` on Judge, the `J` on Defendant Status, ...). These strips are
//! layout quirks of the source system's export and are applied only to
//! the fields that exhibit them.

use chrono::NaiveDate;
use docket_types::Document;
use lazy_static::lazy_static;
use regex::Regex;

use crate::capture::{cap, cap1, date_mdy, find, find_all, money, squeeze_ws};

lazy_static! {
    // Identity
    static ref COUNTY_CODE: Regex = Regex::new(r"County: (\d{2})").unwrap();
    static ref SHORT_CASE_NUMBER: Regex = Regex::new(r"(\w{2}-\d{4}-\d{6}\.\d{2})").unwrap();
    static ref NAME: Regex =
        Regex::new(r"(?:VS\.|V\.| VS | V | VS: |-VS-)([A-Z\s]{10,100})(Case Number)*").unwrap();
    static ref NAME_LABEL: Regex = Regex::new(r"Case Number:").unwrap();
    static ref ALIAS: Regex = Regex::new(r"SSN:(.{0,100})Alias 1").unwrap();
    static ref ALIAS_JUNK: Regex = Regex::new(r"SSN|Alias|:").unwrap();
    static ref DOB: Regex = Regex::new(r"(\d{2}/\d{2}/\d{4})(?:.{0,5}DOB:)").unwrap();
    static ref PHONE: Regex = Regex::new(r"Phone: (.+)").unwrap();
    static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
    static ref RACE_SEX: Regex = Regex::new(r"(B|W|H|A)/(F|M)").unwrap();
    static ref SSN: Regex = Regex::new(r"SSN: ([X\d]{3}-[X\d]{2}-[X\d]{4})").unwrap();
    static ref STATE_ID: Regex = Regex::new(r"([A-Z0-9]{11}) State ID:").unwrap();
    static ref DRIVER_LICENSE: Regex = Regex::new("Driver License N°: ([A-Z0-9]+)").unwrap();
    static ref WEIGHT: Regex = Regex::new(r"Weight: (\d*)").unwrap();
    static ref EYES_HAIR: Regex = Regex::new(r"Eyes/Hair: (\w{3})/(\w{3})").unwrap();

    // Address
    static ref ADDRESS_1: Regex = Regex::new(r"Address 1:(.+)").unwrap();
    static ref ADDRESS_1_TAIL: Regex = Regex::new(r"Phone.+").unwrap();
    static ref ADDRESS_2: Regex = Regex::new(r"Address 2:(.+)").unwrap();
    static ref STREET_JUNK: Regex =
        Regex::new(r"JID: \w{3} Hardship.*|Defendant Information.*").unwrap();
    static ref CITY_STATE: Regex = Regex::new(r"City: (.*)State: (.*)").unwrap();
    static ref ZIP: Regex = Regex::new(r"Zip: (.+)").unwrap();
    static ref ZIP_JUNK: Regex = Regex::new(r"[A-Za-z:\s]+").unwrap();
    static ref COUNTRY: Regex = Regex::new(r"Country: (\w*)").unwrap();
    static ref COUNTRY_JUNK: Regex = Regex::new(r"Enforcement|Party").unwrap();

    // Monetary totals
    static ref TOTAL_ROW: Regex = Regex::new(r"Total:.+\$[^\n]*").unwrap();
    static ref TOTAL_ROW_JUNK: Regex = Regex::new(r"[^0-9|\.|\s|\$]").unwrap();
    static ref DOLLAR_FIGURE: Regex = Regex::new(r"\$\d+\.\d{2}").unwrap();
    static ref D999_ROW: Regex = Regex::new(r"ACTIVE[^\n]+D999[^\n]+").unwrap();
    static ref FEE_CODE_FIGURE: Regex = Regex::new(r"\$\d+\.\d{2}").unwrap();

    // Dates and case detail
    static ref RELATED_CASES: Regex = Regex::new(r"(\w{2}\d{12})").unwrap();
    static ref FILING_DATE: Regex = Regex::new(r"Filing Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref CASE_INITIATION_DATE: Regex =
        Regex::new(r"Case Initiation Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref ARREST_DATE: Regex = Regex::new(r"Arrest Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref OFFENSE_DATE: Regex = Regex::new(r"Offense Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref INDICTMENT_DATE: Regex =
        Regex::new(r"Indictment Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref YOUTHFUL_DATE: Regex =
        Regex::new(r"Youthful Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref RETRIEVED: Regex = Regex::new(r"Alacourt\.com (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref JURY_DEMAND: Regex = Regex::new(r"Jury Demand: ([A-Z]+)").unwrap();
    static ref INPATIENT: Regex = Regex::new(r"Inpatient Treatment Ordered: (YES|NO)").unwrap();
    static ref TRIAL_TYPE: Regex = Regex::new(r"Trial Type: ([A-Z]+)").unwrap();
    static ref TRIAL_TYPE_TAIL: Regex = Regex::new(r"[SN]$").unwrap();
    static ref COUNTY_NAME: Regex = Regex::new(r"Case Number: (\d\d-\w+) County:").unwrap();
    static ref JUDGE: Regex = Regex::new(r"Judge: ([A-Z\-\.\s]+)").unwrap();
    static ref PROBATION_OFFICE_NUMBER: Regex =
        Regex::new(r"Probation Office \#: ([0-9\-]+)").unwrap();
    static ref DEFENDANT_STATUS: Regex = Regex::new(r"Defendant Status: ([A-Z\s]+)").unwrap();
    static ref ARRESTING_AGENCY_TYPE: Regex =
        Regex::new(r"([^0-9]+) Arresting Agency Type:").unwrap();
    static ref AGENCY_TYPE_DASH: Regex = Regex::new(r"^-.+").unwrap();
    static ref AGENCY_TYPE_LABELS: Regex = Regex::new(
        r"County:|Defendant Status:|Judge:|Trial Type:|Probation Office \#:"
    )
    .unwrap();
    static ref ARRESTING_OFFICER: Regex = Regex::new(r"Arresting Officer: ([A-Z\s]+)").unwrap();
    static ref TRAILING_INITIAL: Regex = Regex::new(r"[\s\n]+[A-Z0-9]$").unwrap();
    static ref PROBATION_OFFICE_NAME: Regex =
        Regex::new(r"Probation Office Name: ([A-Z0-9]+)").unwrap();
    static ref TRAFFIC_CITATION: Regex = Regex::new(r"Traffic Citation \#: ([A-Z0-9]+)").unwrap();
    static ref PREVIOUS_DUI: Regex = Regex::new(r"Previous DUI Convictions: (\d{3})").unwrap();
    static ref CASE_INITIATION_TYPE: Regex =
        Regex::new(r"Case Initiation Type: ([A-Z\s]+)").unwrap();
    static ref DOMESTIC_VIOLENCE: Regex = Regex::new(r"Domestic Violence: (YES|NO)").unwrap();
    static ref AGENCY_ORI: Regex = Regex::new(r"Agency ORI: ([A-Z\s]+)").unwrap();

    // Warrants
    static ref WARRANT_ISSUANCE_DATE: Regex =
        Regex::new(r"(\d\d?/\d\d?/\d\d\d\d) Warrant Issuance Date:").unwrap();
    static ref WARRANT_ACTION_DATE: Regex =
        Regex::new(r"Warrant Action Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref WARRANT_ISSUANCE_STATUS: Regex =
        Regex::new(r"Warrant Issuance Status: (\w+)").unwrap();
    static ref WARRANT_ACTION_STATUS: Regex = Regex::new(r"Warrant Action Status: (\w+)").unwrap();
    static ref WARRANT_LOCATION_STATUS: Regex =
        Regex::new(r"Warrant Location Status: (\w+)").unwrap();
    static ref STATUS_JUNK: Regex = Regex::new(r"Description").unwrap();
    static ref NUMBER_OF_WARRANTS: Regex =
        Regex::new(r"Number Of Warrants: (\d{3}\s\d{3})").unwrap();

    // Bond
    static ref BOND_TYPE: Regex = Regex::new(r"Bond Type: (\w+)").unwrap();
    static ref BOND_TYPE_DESC: Regex = Regex::new(r"Bond Type Desc: ([A-Z\s]+)").unwrap();
    static ref BOND_AMT: Regex = Regex::new(r"([\d\.]+) Bond Amount:").unwrap();
    static ref BOND_COMPANY: Regex = Regex::new(r"Bond Company: ([A-Z0-9]+)").unwrap();
    static ref SURETY_CODE: Regex = Regex::new(r"Surety Code: ([A-Z0-9]{4})").unwrap();
    static ref BOND_RELEASE_DATE: Regex =
        Regex::new(r"Release Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref FAILED_TO_APPEAR_DATE: Regex =
        Regex::new(r"Failed to Appear Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref BONDSMAN_ISSUANCE: Regex =
        Regex::new(r"Bondsman Process Issuance: ([^\n]*?) Bondsman Process Return:").unwrap();

    // Appeal
    static ref APPEAL_DATE: Regex = Regex::new(r"([\n\s/\d]*?) Appeal Court:").unwrap();
    static ref APPEAL_COURT: Regex = Regex::new(r"([A-Z\-\s]+) Appeal Case Number").unwrap();
    static ref ORIGIN_OF_APPEAL: Regex = Regex::new(r"Orgin Of Appeal: ([A-Z\-\s]+)").unwrap();
    static ref APPEAL_TO_DESC: Regex = Regex::new(r"Appeal To Desc: ([A-Z\-\s]+)").unwrap();
    static ref APPEAL_STATUS: Regex = Regex::new(r"Appeal Status: ([A-Z\-\s]+)").unwrap();
    static ref APPEAL_TO: Regex = Regex::new(r"Appeal To: (\w*) Appeal").unwrap();

    // Administrative
    static ref NUMBER_OF_SUBPOENAS: Regex =
        Regex::new(r"Number of Subponeas: (\d{3})").unwrap();
    static ref ADMIN_UPDATED_BY: Regex = Regex::new(r"Updated By: (\w{3})").unwrap();
    static ref TRANSFER_DESC: Regex =
        Regex::new(r"Transfer Desc: ([A-Z\s]{0,15} \d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref TBNV1: Regex =
        Regex::new(r"Date Trial Began but No Verdict \(TBNV1\): ([^\n]+)").unwrap();
    static ref TBNV2: Regex =
        Regex::new(r"Date Trial Began but No Verdict \(TBNV2\): ([^\n]+)").unwrap();
    static ref TBNV2_JUNK: Regex = Regex::new(r"Financial").unwrap();

    // Enforcement
    static ref TURNOVER_DATE: Regex =
        Regex::new(r"TurnOver Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref TURNOVER_AMT: Regex = Regex::new(r"TurnOver Amt: \$(\d+\.\d\d)").unwrap();
    static ref FREQUENCY_AMT: Regex = Regex::new(r"Frequency Amt: \$(\d+\.\d\d)").unwrap();
    static ref DUE_DATE: Regex = Regex::new(r"Due Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref LAST_PAID_DATE: Regex =
        Regex::new(r"Last Paid Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref PAYOR: Regex = Regex::new(r"Payor: ([A-Z0-9]{4})").unwrap();
    static ref ENFORCEMENT_STATUS: Regex =
        Regex::new(r"Enforcement Status: ([A-Z:,\s]+)").unwrap();
    static ref ENFORCEMENT_STATUS_TAIL: Regex = Regex::new(r" F$").unwrap();
    static ref FREQUENCY: Regex = Regex::new(r"Frequency: (W|M)").unwrap();
    static ref PLACEMENT_STATUS: Regex = Regex::new(r"Placement Status: (.+)").unwrap();
    static ref PRETRIAL: Regex = Regex::new(r"PreTrial: (YES|NO)").unwrap();
    static ref PRETRIAL_DATE: Regex = Regex::new(r"PreTrail Date: (.+)PreTrial").unwrap();
    static ref PRETRIAL_TERMS: Regex = Regex::new(r"PreTrial Terms: (YES|NO)").unwrap();
    static ref PRE_TERMS_DATE: Regex =
        Regex::new(r"Pre Terms Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref DELINQUENT: Regex = Regex::new(r"Delinquent: (YES|NO)").unwrap();
    static ref DELINQUENT_DATE: Regex =
        Regex::new(r"Delinquent Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref DA_MAILER: Regex = Regex::new(r"DA Mailer: (YES|NO)").unwrap();
    static ref DA_MAILER_DATE: Regex =
        Regex::new(r"DA Mailer Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref WARRANT_MAILER: Regex = Regex::new(r"Warrant Mailer: (YES|NO)").unwrap();
    static ref WARRANT_MAILER_DATE: Regex =
        Regex::new(r"Warrant Mailer Date: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref ENFORCEMENT_LAST_UPDATE: Regex =
        Regex::new(r"Last Update: (\d\d?/\d\d?/\d\d\d\d)").unwrap();
    static ref ENFORCEMENT_UPDATED_BY: Regex = Regex::new(r"Updated By: ([A-Z]{3})").unwrap();
}

// ---------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------

/// 2-digit county code joined to the case-number token. Either half
/// may come back empty; the composite is the join key for every child
/// table and must be deterministic per document.
pub fn case_number(doc: &Document) -> String {
    let county = cap1(&COUNTY_CODE, &doc.full_text).unwrap_or_default();
    let short = cap1(&SHORT_CASE_NUMBER, &doc.full_text).unwrap_or_default();
    format!("{county}-{short}")
}

pub fn short_case_number(doc: &Document) -> String {
    cap1(&SHORT_CASE_NUMBER, &doc.full_text).unwrap_or_default()
}

pub fn county_code(doc: &Document) -> String {
    cap1(&COUNTY_CODE, &doc.full_text).unwrap_or_default()
}

pub fn name(doc: &Document) -> String {
    cap1(&NAME, &doc.full_text)
        .map(|n| {
            NAME_LABEL
                .replace_all(&n, "")
                .trim_end_matches('C')
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

pub fn alias(doc: &Document) -> String {
    cap1(&ALIAS, &doc.flat_text)
        .map(|a| ALIAS_JUNK.replace_all(&a, "").trim().to_string())
        .unwrap_or_default()
}

pub fn dob(doc: &Document) -> Option<NaiveDate> {
    cap1(&DOB, &doc.full_text).and_then(|d| date_mdy(&d))
}

/// Digits-only, first ten; the court system's `2050000000` filler and
/// too-short fragments are treated as absent.
pub fn phone(doc: &Document) -> String {
    let Some(raw) = cap1(&PHONE, &doc.full_text) else {
        return String::new();
    };
    let digits: String = NON_DIGIT.replace_all(&raw, "").chars().take(10).collect();
    if digits.len() < 7 || digits == "2050000000" {
        String::new()
    } else {
        digits
    }
}

pub fn race(doc: &Document) -> String {
    cap(&RACE_SEX, &doc.full_text, 1).unwrap_or_default()
}

pub fn sex(doc: &Document) -> String {
    cap(&RACE_SEX, &doc.full_text, 2).unwrap_or_default()
}

pub fn ssn(doc: &Document) -> String {
    cap1(&SSN, &doc.full_text).unwrap_or_default()
}

pub fn state_id(doc: &Document) -> String {
    match cap1(&STATE_ID, &doc.full_text) {
        Some(id) if id == "AL000000000" => String::new(),
        Some(id) => id,
        None => String::new(),
    }
}

pub fn driver_license_no(doc: &Document) -> String {
    match cap1(&DRIVER_LICENSE, &doc.full_text) {
        Some(dl) if dl == "AL" => String::new(),
        Some(dl) => dl,
        None => String::new(),
    }
}

pub fn weight(doc: &Document) -> Option<i64> {
    cap1(&WEIGHT, &doc.full_text).and_then(|w| w.parse().ok())
}

pub fn eyes(doc: &Document) -> String {
    cap(&EYES_HAIR, &doc.full_text, 1).unwrap_or_default()
}

pub fn hair(doc: &Document) -> String {
    cap(&EYES_HAIR, &doc.full_text, 2).unwrap_or_default()
}

// ---------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------

pub fn address_1(doc: &Document) -> String {
    cap1(&ADDRESS_1, &doc.full_text)
        .map(|a| ADDRESS_1_TAIL.replace(&a, "").trim().to_string())
        .unwrap_or_default()
}

pub fn address_2(doc: &Document) -> String {
    cap1(&ADDRESS_2, &doc.full_text).unwrap_or_default()
}

pub fn street_address(doc: &Document) -> String {
    let joined = format!("{} {}", address_1(doc), address_2(doc));
    STREET_JUNK.replace_all(&joined, "").trim().to_string()
}

pub fn city(doc: &Document) -> String {
    cap(&CITY_STATE, &doc.full_text, 1).unwrap_or_default()
}

pub fn state(doc: &Document) -> String {
    cap(&CITY_STATE, &doc.full_text, 2).unwrap_or_default()
}

pub fn zip_code(doc: &Document) -> String {
    cap1(&ZIP, &doc.full_text)
        .map(|z| ZIP_JUNK.replace_all(&z, "").trim().to_string())
        .unwrap_or_default()
}

pub fn country(doc: &Document) -> String {
    cap1(&COUNTRY, &doc.full_text)
        .map(|c| COUNTRY_JUNK.replace_all(&c, "").trim().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------
// Monetary totals
// ---------------------------------------------------------------------

/// The four `$` figures on the `Total:` line, in source order
/// (due, paid, balance, hold). Missing line or figure means `0.0`.
fn total_row(doc: &Document) -> Vec<f64> {
    let Some(row) = find(&TOTAL_ROW, &doc.full_text) else {
        return vec![0.0; 4];
    };
    let cleaned = TOTAL_ROW_JUNK.replace_all(&row, "");
    let mut figures: Vec<f64> = find_all(&DOLLAR_FIGURE, &cleaned)
        .iter()
        .filter_map(|f| money(f))
        .collect();
    figures.resize(4, 0.0);
    figures
}

pub fn total_amt_due(doc: &Document) -> f64 {
    total_row(doc)[0]
}

pub fn total_amt_paid(doc: &Document) -> f64 {
    total_row(doc)[1]
}

pub fn total_balance(doc: &Document) -> f64 {
    total_row(doc)[2]
}

pub fn total_amt_hold(doc: &Document) -> f64 {
    total_row(doc)[3]
}

/// Last `$` figure on the `ACTIVE ... D999 ...` line; `0.0` when no
/// such line exists.
pub fn d999(doc: &Document) -> f64 {
    find(&D999_ROW, &doc.full_text)
        .and_then(|row| {
            find_all(&DOLLAR_FIGURE, &row)
                .last()
                .and_then(|f| money(f))
        })
        .unwrap_or(0.0)
}

pub fn payment_to_restore(doc: &Document) -> f64 {
    total_balance(doc) - d999(doc)
}

/// Sum of the `$` figure at `column` over every `ACTIVE ... <code> ...`
/// fee line; `None` when the case has no line for the code.
fn by_fee_code(doc: &Document, code: &str, column: FeeColumn) -> Option<f64> {
    let pat = format!("ACTIVE[^\n]+{}[^\n]+", regex::escape(code));
    let re = Regex::new(&pat).ok()?;
    let rows = find_all(&re, &doc.full_text);
    if rows.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for row in &rows {
        let figures = find_all(&FEE_CODE_FIGURE, row);
        let figure = match column {
            FeeColumn::AmtDue => figures.first(),
            FeeColumn::AmtPaid => figures.get(1),
            FeeColumn::AmtHold => figures.get(2),
            FeeColumn::Balance => figures.last(),
        };
        if let Some(v) = figure.and_then(|f| money(f)) {
            total += v;
        }
    }
    Some(total)
}

#[derive(Clone, Copy)]
enum FeeColumn {
    AmtDue,
    AmtPaid,
    AmtHold,
    Balance,
}

pub fn amt_due_by_fee_code(doc: &Document, code: &str) -> Option<f64> {
    by_fee_code(doc, code, FeeColumn::AmtDue)
}

pub fn amt_paid_by_fee_code(doc: &Document, code: &str) -> Option<f64> {
    by_fee_code(doc, code, FeeColumn::AmtPaid)
}

pub fn amt_hold_by_fee_code(doc: &Document, code: &str) -> Option<f64> {
    by_fee_code(doc, code, FeeColumn::AmtHold)
}

pub fn balance_by_fee_code(doc: &Document, code: &str) -> Option<f64> {
    by_fee_code(doc, code, FeeColumn::Balance)
}

// ---------------------------------------------------------------------
// Case detail
// ---------------------------------------------------------------------

pub fn related_cases(doc: &Document) -> String {
    find_all(&RELATED_CASES, &doc.full_text).join("/")
}

fn date_field(re: &Regex, text: &str) -> Option<NaiveDate> {
    cap1(re, text).and_then(|d| date_mdy(&d))
}

pub fn filing_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&FILING_DATE, &doc.full_text)
}

pub fn case_initiation_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&CASE_INITIATION_DATE, &doc.full_text)
}

pub fn arrest_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&ARREST_DATE, &doc.full_text)
}

pub fn offense_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&OFFENSE_DATE, &doc.full_text)
}

pub fn indictment_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&INDICTMENT_DATE, &doc.full_text)
}

pub fn youthful_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&YOUTHFUL_DATE, &doc.full_text)
}

pub fn retrieved(doc: &Document) -> Option<NaiveDate> {
    date_field(&RETRIEVED, &doc.full_text)
}

pub fn jury_demand(doc: &Document) -> String {
    cap1(&JURY_DEMAND, &doc.full_text).unwrap_or_default()
}

pub fn inpatient_treatment_ordered(doc: &Document) -> String {
    cap1(&INPATIENT, &doc.full_text).unwrap_or_default()
}

pub fn trial_type(doc: &Document) -> String {
    cap1(&TRIAL_TYPE, &doc.full_text)
        .map(|t| TRIAL_TYPE_TAIL.replace(&t, "").trim().to_string())
        .unwrap_or_default()
}

pub fn county(doc: &Document) -> String {
    cap1(&COUNTY_NAME, &doc.full_text).unwrap_or_default()
}

pub fn judge(doc: &Document) -> String {
    cap1(&JUDGE, &doc.full_text)
        .map(|j| j.trim_end_matches('T').trim().to_string())
        .unwrap_or_default()
}

/// The probation-office number line; the all-zero sentinel reads as
/// absent.
pub fn probation_office_number(doc: &Document) -> String {
    match cap1(&PROBATION_OFFICE_NUMBER, &doc.full_text) {
        Some(n) if n == "0-000000-00" => String::new(),
        Some(n) => n,
        None => String::new(),
    }
}

pub fn defendant_status(doc: &Document) -> String {
    cap1(&DEFENDANT_STATUS, &doc.full_text)
        .map(|s| squeeze_ws(s.trim_end_matches('J')))
        .unwrap_or_default()
}

pub fn arresting_agency_type(doc: &Document) -> String {
    cap1(&ARRESTING_AGENCY_TYPE, &doc.full_text)
        .map(|a| {
            let a = AGENCY_TYPE_DASH.replace(&a, "");
            AGENCY_TYPE_LABELS.replace_all(&a, "").trim().to_string()
        })
        .unwrap_or_default()
}

pub fn arresting_officer(doc: &Document) -> String {
    cap1(&ARRESTING_OFFICER, &doc.full_text)
        .map(|o| TRAILING_INITIAL.replace(&o, "").trim().to_string())
        .unwrap_or_default()
}

pub fn probation_office_name(doc: &Document) -> String {
    cap1(&PROBATION_OFFICE_NAME, &doc.full_text).unwrap_or_default()
}

pub fn traffic_citation_number(doc: &Document) -> String {
    cap1(&TRAFFIC_CITATION, &doc.full_text).unwrap_or_default()
}

pub fn previous_dui_convictions(doc: &Document) -> Option<i64> {
    cap1(&PREVIOUS_DUI, &doc.full_text).and_then(|n| n.parse().ok())
}

pub fn case_initiation_type(doc: &Document) -> String {
    cap1(&CASE_INITIATION_TYPE, &doc.full_text)
        .map(|t| t.trim_end_matches('J').trim().to_string())
        .unwrap_or_default()
}

pub fn domestic_violence(doc: &Document) -> String {
    cap1(&DOMESTIC_VIOLENCE, &doc.full_text).unwrap_or_default()
}

pub fn agency_ori(doc: &Document) -> String {
    cap1(&AGENCY_ORI, &doc.full_text)
        .map(|a| squeeze_ws(a.trim_end_matches('C')))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------
// Warrants
// ---------------------------------------------------------------------

pub fn warrant_issuance_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&WARRANT_ISSUANCE_DATE, &doc.full_text)
}

pub fn warrant_action_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&WARRANT_ACTION_DATE, &doc.full_text)
}

pub fn warrant_issuance_status(doc: &Document) -> String {
    cap1(&WARRANT_ISSUANCE_STATUS, &doc.full_text)
        .map(|s| STATUS_JUNK.replace(&s, "").trim().to_string())
        .unwrap_or_default()
}

pub fn warrant_action_status(doc: &Document) -> String {
    cap1(&WARRANT_ACTION_STATUS, &doc.full_text)
        .map(|s| STATUS_JUNK.replace(&s, "").trim().to_string())
        .unwrap_or_default()
}

pub fn warrant_location_status(doc: &Document) -> String {
    cap1(&WARRANT_LOCATION_STATUS, &doc.full_text)
        .map(|s| STATUS_JUNK.replace(&s, "").trim().to_string())
        .unwrap_or_default()
}

pub fn number_of_warrants(doc: &Document) -> String {
    cap1(&NUMBER_OF_WARRANTS, &doc.full_text).unwrap_or_default()
}

// ---------------------------------------------------------------------
// Bond
// ---------------------------------------------------------------------

pub fn bond_type(doc: &Document) -> String {
    cap1(&BOND_TYPE, &doc.full_text)
        .map(|b| b.replace("Bond", "").trim().to_string())
        .unwrap_or_default()
}

pub fn bond_type_desc(doc: &Document) -> String {
    cap1(&BOND_TYPE_DESC, &doc.full_text).unwrap_or_default()
}

pub fn bond_amt(doc: &Document) -> Option<f64> {
    cap1(&BOND_AMT, &doc.full_text).and_then(|a| a.parse().ok())
}

pub fn bond_company(doc: &Document) -> String {
    cap1(&BOND_COMPANY, &doc.full_text)
        .map(|c| c.trim_end_matches('S').to_string())
        .unwrap_or_default()
}

pub fn surety_code(doc: &Document) -> String {
    cap1(&SURETY_CODE, &doc.full_text).unwrap_or_default()
}

pub fn bond_release_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&BOND_RELEASE_DATE, &doc.full_text)
}

pub fn failed_to_appear_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&FAILED_TO_APPEAR_DATE, &doc.full_text)
}

pub fn bondsman_process_issuance(doc: &Document) -> Option<NaiveDate> {
    cap1(&BONDSMAN_ISSUANCE, &doc.full_text).and_then(|d| date_mdy(&d))
}

// ---------------------------------------------------------------------
// Appeal
// ---------------------------------------------------------------------

pub fn appeal_date(doc: &Document) -> Option<NaiveDate> {
    cap1(&APPEAL_DATE, &doc.full_text).and_then(|d| date_mdy(&d))
}

pub fn appeal_court(doc: &Document) -> String {
    cap1(&APPEAL_COURT, &doc.full_text).unwrap_or_default()
}

pub fn origin_of_appeal(doc: &Document) -> String {
    cap1(&ORIGIN_OF_APPEAL, &doc.full_text)
        .map(|o| o.trim_end_matches('L').trim().to_string())
        .unwrap_or_default()
}

pub fn appeal_to_desc(doc: &Document) -> String {
    cap1(&APPEAL_TO_DESC, &doc.full_text)
        .map(|a| {
            TRAILING_INITIAL
                .replace(&a, "")
                .trim_end_matches('O')
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

pub fn appeal_status(doc: &Document) -> String {
    cap1(&APPEAL_STATUS, &doc.full_text)
        .map(|a| a.trim_end_matches('A').replace('\n', "").trim().to_string())
        .unwrap_or_default()
}

pub fn appeal_to(doc: &Document) -> String {
    cap1(&APPEAL_TO, &doc.full_text).unwrap_or_default()
}

// ---------------------------------------------------------------------
// Administrative
// ---------------------------------------------------------------------

pub fn number_of_subpoenas(doc: &Document) -> Option<i64> {
    cap1(&NUMBER_OF_SUBPOENAS, &doc.full_text).and_then(|n| n.parse().ok())
}

pub fn admin_updated_by(doc: &Document) -> String {
    cap1(&ADMIN_UPDATED_BY, &doc.full_text).unwrap_or_default()
}

pub fn transfer_desc(doc: &Document) -> String {
    cap1(&TRANSFER_DESC, &doc.full_text).unwrap_or_default()
}

pub fn tbnv1(doc: &Document) -> Option<NaiveDate> {
    cap1(&TBNV1, &doc.full_text).and_then(|d| date_mdy(&d))
}

pub fn tbnv2(doc: &Document) -> Option<NaiveDate> {
    cap1(&TBNV2, &doc.full_text)
        .map(|d| TBNV2_JUNK.replace(&d, "").trim().to_string())
        .and_then(|d| date_mdy(&d))
}

// ---------------------------------------------------------------------
// Enforcement
// ---------------------------------------------------------------------

pub fn turnover_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&TURNOVER_DATE, &doc.full_text)
}

pub fn turnover_amt(doc: &Document) -> Option<f64> {
    cap1(&TURNOVER_AMT, &doc.full_text).and_then(|a| a.parse().ok())
}

pub fn frequency_amt(doc: &Document) -> Option<f64> {
    cap1(&FREQUENCY_AMT, &doc.full_text).and_then(|a| a.parse().ok())
}

pub fn due_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&DUE_DATE, &doc.full_text)
}

pub fn last_paid_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&LAST_PAID_DATE, &doc.full_text)
}

pub fn payor(doc: &Document) -> String {
    cap1(&PAYOR, &doc.full_text).unwrap_or_default()
}

pub fn enforcement_status(doc: &Document) -> String {
    cap1(&ENFORCEMENT_STATUS, &doc.full_text)
        .map(|s| {
            let s = squeeze_ws(&s);
            ENFORCEMENT_STATUS_TAIL.replace(&s, "").trim().to_string()
        })
        .unwrap_or_default()
}

pub fn frequency(doc: &Document) -> String {
    cap1(&FREQUENCY, &doc.full_text).unwrap_or_default()
}

pub fn placement_status(doc: &Document) -> String {
    cap1(&PLACEMENT_STATUS, &doc.full_text).unwrap_or_default()
}

pub fn pretrial(doc: &Document) -> String {
    cap1(&PRETRIAL, &doc.full_text).unwrap_or_default()
}

pub fn pretrial_date(doc: &Document) -> Option<NaiveDate> {
    cap1(&PRETRIAL_DATE, &doc.full_text).and_then(|d| date_mdy(&d))
}

pub fn pretrial_terms(doc: &Document) -> String {
    cap1(&PRETRIAL_TERMS, &doc.full_text).unwrap_or_default()
}

pub fn pre_terms_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&PRE_TERMS_DATE, &doc.full_text)
}

pub fn delinquent(doc: &Document) -> String {
    cap1(&DELINQUENT, &doc.full_text).unwrap_or_default()
}

pub fn delinquent_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&DELINQUENT_DATE, &doc.full_text)
}

pub fn da_mailer(doc: &Document) -> String {
    cap1(&DA_MAILER, &doc.full_text).unwrap_or_default()
}

pub fn da_mailer_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&DA_MAILER_DATE, &doc.full_text)
}

pub fn warrant_mailer(doc: &Document) -> String {
    cap1(&WARRANT_MAILER, &doc.full_text).unwrap_or_default()
}

pub fn warrant_mailer_date(doc: &Document) -> Option<NaiveDate> {
    date_field(&WARRANT_MAILER_DATE, &doc.full_text)
}

pub fn enforcement_last_update(doc: &Document) -> Option<NaiveDate> {
    date_field(&ENFORCEMENT_LAST_UPDATE, &doc.full_text)
}

pub fn enforcement_updated_by(doc: &Document) -> String {
    cap1(&ENFORCEMENT_UPDATED_BY, &doc.full_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> Document {
        Document::new("test", text)
    }

    #[test]
    fn standalone_detail_extractors_read_their_labels() {
        let d = doc(
            "County: 01 CC-2020-000123.00\n\
             CC202000012345 CC202000045678\n\
             Youthful Date: 02/03/2015\n\
             Probation Office Name: PROBAT01\n\
             Traffic Citation #: A123456\n",
        );
        assert_eq!(county_code(&d), "01");
        assert_eq!(short_case_number(&d), "CC-2020-000123.00");
        assert_eq!(related_cases(&d), "CC202000012345/CC202000045678");
        assert_eq!(
            youthful_date(&d),
            chrono::NaiveDate::from_ymd_opt(2015, 2, 3)
        );
        assert_eq!(probation_office_name(&d), "PROBAT01");
        assert_eq!(traffic_citation_number(&d), "A123456");
    }

    #[test]
    fn case_number_concatenates_county_and_token() {
        let d = doc("County: 01\nCase Number CV-2020-000123.00 etc");
        assert_eq!(case_number(&d), "01-CV-2020-000123.00");
    }

    #[test]
    fn case_number_is_deterministic() {
        let d = doc("County: 39 DC-2021-001234.00");
        assert_eq!(case_number(&d), case_number(&d));
        let d2 = doc("County: 39 DC-2021-001234.00");
        assert_eq!(case_number(&d), case_number(&d2));
    }

    #[test]
    fn case_number_with_missing_halves() {
        assert_eq!(case_number(&doc("no match here")), "-");
        assert_eq!(case_number(&doc("County: 01 only")), "01-");
    }

    #[test]
    fn name_strips_label_and_trailing_c() {
        let d = doc("STATE OF ALABAMA VS. JOHN QUINCY DOE Case Number: x");
        assert_eq!(name(&d), "JOHN QUINCY DOE");
    }

    #[test]
    fn dob_parses_near_label() {
        let d = doc("something 01/15/1985 DOB: more");
        assert_eq!(dob(&d), chrono::NaiveDate::from_ymd_opt(1985, 1, 15));
        assert_eq!(dob(&doc("no date")), None);
    }

    #[test]
    fn phone_filters_filler_numbers() {
        assert_eq!(phone(&doc("Phone: (205) 555-1234")), "2055551234");
        assert_eq!(phone(&doc("Phone: 205-000-0000")), "");
        assert_eq!(phone(&doc("Phone: 12345")), "");
        assert_eq!(phone(&doc("nothing")), "");
    }

    #[test]
    fn race_and_sex_from_slash_pair() {
        let d = doc("info B/F more");
        assert_eq!(race(&d), "B");
        assert_eq!(sex(&d), "F");
    }

    #[test]
    fn totals_default_to_zero_when_row_absent() {
        let d = doc("no totals line");
        assert_eq!(total_amt_due(&d), 0.0);
        assert_eq!(total_balance(&d), 0.0);
        assert_eq!(d999(&d), 0.0);
        assert_eq!(payment_to_restore(&d), 0.0);
    }

    #[test]
    fn totals_parse_in_source_order() {
        let d = doc("Total: $100.00 $25.00 $75.00 $0.00");
        assert_eq!(total_amt_due(&d), 100.0);
        assert_eq!(total_amt_paid(&d), 25.0);
        assert_eq!(total_balance(&d), 75.0);
        assert_eq!(total_amt_hold(&d), 0.0);
    }

    #[test]
    fn payment_to_restore_subtracts_d999() {
        let d = doc("Total: $100.00 $25.00 $75.00 $0.00\nACTIVE fee D999 x $25.00");
        assert_eq!(d999(&d), 25.0);
        assert_eq!(payment_to_restore(&d), 50.0);
    }

    #[test]
    fn fee_code_aggregation_sums_matching_lines() {
        let text = "ACTIVE x D001 y $10.00 $5.00 $0.00 $5.00\nACTIVE z D001 w $20.00 $0.00 $0.00 $20.00";
        let d = doc(text);
        assert_eq!(amt_due_by_fee_code(&d, "D001"), Some(30.0));
        assert_eq!(balance_by_fee_code(&d, "D001"), Some(25.0));
        assert_eq!(amt_due_by_fee_code(&d, "ZZZZ"), None);
    }

    #[test]
    fn judge_strips_trailing_marker() {
        let d = doc("Judge: MARY SMITHT\n");
        assert_eq!(judge(&d), "MARY SMITH");
    }

    #[test]
    fn probation_office_sentinel_reads_as_absent() {
        assert_eq!(probation_office_number(&doc("Probation Office #: 0-000000-00")), "");
        assert_eq!(
            probation_office_number(&doc("Probation Office #: 1-234567-89")),
            "1-234567-89"
        );
    }

    #[test]
    fn driver_license_and_state_id_sentinels() {
        assert_eq!(driver_license_no(&doc("Driver License N°: AL ")), "");
        assert_eq!(state_id(&doc("AL000000000 State ID:")), "");
        assert_eq!(state_id(&doc("AB123456789 State ID:")), "AB123456789");
    }

    #[test]
    fn date_fields_default_to_none() {
        let d = doc("Filing Date: garbage");
        assert_eq!(filing_date(&d), None);
        let d = doc("Filing Date: 6/30/2021");
        assert_eq!(filing_date(&d), chrono::NaiveDate::from_ymd_opt(2021, 6, 30));
    }

    #[test]
    fn enforcement_status_cleanup() {
        let d = doc("Enforcement Status: PRETRIAL: ACTIVE F\n");
        assert_eq!(enforcement_status(&d), "PRETRIAL: ACTIVE");
    }
}
