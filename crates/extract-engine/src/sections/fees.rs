//! Fee sheet rows.
//!
//! Each fee line is either an `ACTIVE` entry for one fee code or the
//! sheet's `Total:` footer; the footer is kept as a row of its own
//! with the `Total` column set.

use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{cap1, find_all, money};

lazy_static! {
    static ref FEE_LINE: Regex = Regex::new(
        r"ACTIVE [^\(\n]+\$[^\(\n]+ACTIVE[^\(\n]+[^\n]|Total:.+\$[^\n]*"
    )
    .unwrap();
    static ref FEE_JUNK: Regex = Regex::new(r"[^A-Z0-9|\.|\s|\$|\n]").unwrap();
    static ref DOLLAR_FIGURE: Regex = Regex::new(r"\$\d+\.\d{2}").unwrap();
    static ref PAYOR: Regex = Regex::new(r"(\w00\d)").unwrap();
    static ref PAYEE: Regex = Regex::new(r"\s(\d\d\d)\s").unwrap();
    static ref ADMIN_FEE: Regex = Regex::new(r"\s(Y|N)\s").unwrap();
}

/// All fee lines of a document, cleaned and in source order.
pub fn explode(doc: &Document) -> Vec<String> {
    FEE_LINE
        .find_iter(&doc.full_text)
        .map(|m| FEE_JUNK.replace_all(m.as_str(), " ").trim().to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRow {
    pub case_number: String,
    pub total: String,
    pub fee_status: String,
    pub admin_fee: String,
    pub fee_code: String,
    pub payor: String,
    pub payee: String,
    pub amt_due: f64,
    pub amt_paid: Option<f64>,
    pub balance: Option<f64>,
    pub amt_hold: Option<f64>,
}

impl FeeRow {
    /// Parse one cleaned fee line. Lines without an amount-due figure
    /// are dropped.
    pub fn parse(line: &str, case_number: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let amounts: Vec<f64> = find_all(&DOLLAR_FIGURE, line)
            .iter()
            .filter_map(|f| money(f))
            .collect();
        let amt_due = *amounts.first()?;
        let status1 = tokens.first().copied().unwrap_or("");
        let total_row = status1 != "ACTIVE";

        let amt_paid = amounts.get(1).copied();
        let amt_hold = if total_row {
            amounts.last().copied()
        } else {
            amounts.get(2).copied()
        };

        Some(Self {
            case_number: case_number.to_string(),
            total: if total_row { "Total:" } else { "" }.to_string(),
            fee_status: if total_row { "" } else { status1 }.to_string(),
            admin_fee: cap1(&ADMIN_FEE, line).unwrap_or_default(),
            fee_code: tokens.get(5).copied().unwrap_or_default().to_string(),
            payor: cap1(&PAYOR, line).unwrap_or_default(),
            payee: cap1(&PAYEE, line).unwrap_or_default(),
            amt_due,
            amt_paid,
            balance: amt_paid.map(|p| amt_due - p),
            amt_hold,
        })
    }
}

/// Every fee row of one document.
pub fn rows(doc: &Document, case_number: &str) -> Vec<FeeRow> {
    explode(doc)
        .iter()
        .filter_map(|line| FeeRow::parse(line, case_number))
        .collect()
}

impl Tabular for FeeRow {
    const COLUMNS: &'static [&'static str] = &[
        "CaseNumber",
        "Total",
        "FeeStatus",
        "AdminFee",
        "FeeCode",
        "Payor",
        "Payee",
        "AmtDue",
        "AmtPaid",
        "Balance",
        "AmtHold",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            self.total.clone().into(),
            self.fee_status.clone().into(),
            self.admin_fee.clone().into(),
            self.fee_code.clone().into(),
            self.payor.clone().into(),
            self.payee.clone().into(),
            self.amt_due.into(),
            Cell::from_opt_float(self.amt_paid),
            Cell::from_opt_float(self.balance),
            Cell::from_opt_float(self.amt_hold),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ACTIVE_LINE: &str = "ACTIVE 11 22 N 333 D999 R001 $100.00 $25.00 $0.00 ACTIVE";
    const TOTAL_LINE: &str = "Total: $500.00 $100.00 $400.00 $0.00";

    #[test]
    fn active_line_splits_into_fee_columns() {
        let row = FeeRow::parse(ACTIVE_LINE, "01-CC-2017-000001.00").unwrap();
        assert_eq!(row.fee_status, "ACTIVE");
        assert_eq!(row.total, "");
        assert_eq!(row.fee_code, "D999");
        assert_eq!(row.payor, "R001");
        assert_eq!(row.payee, "333");
        assert_eq!(row.admin_fee, "N");
        assert_eq!(row.amt_due, 100.0);
        assert_eq!(row.amt_paid, Some(25.0));
        assert_eq!(row.balance, Some(75.0));
        assert_eq!(row.amt_hold, Some(0.0));
    }

    #[test]
    fn total_line_keeps_last_figure_as_hold() {
        let row = FeeRow::parse(TOTAL_LINE, "x").unwrap();
        assert_eq!(row.total, "Total:");
        assert_eq!(row.fee_status, "");
        assert_eq!(row.amt_due, 500.0);
        assert_eq!(row.amt_hold, Some(0.0));
    }

    #[test]
    fn line_without_amount_is_dropped() {
        assert!(FeeRow::parse("ACTIVE no figures here", "x").is_none());
    }

    #[test]
    fn explode_picks_up_fee_and_total_lines() {
        let text = "header\nACTIVE 11 22 N 333 D999 R001 $10.00 $5.00 $0.00 ACTIVE extra\nTotal: $10.00 $5.00 $5.00 $0.00\n";
        let doc = Document::new("t", text);
        let lines = explode(&doc);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ACTIVE"));
        assert!(lines[1].starts_with("Total:"));
    }
}
