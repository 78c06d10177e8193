//! Financial history transactions.

use chrono::NaiveDate;
use docket_types::{Cell, Document, Tabular};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capture::{date_mdy, money};

lazy_static! {
    // The transaction register prints fixed-width rows; every column
    // has to be present for the row to count.
    static ref TRANSACTION: Regex = Regex::new(
        r"(?P<date>\d\d/\d\d/\d\d\d\d)\s(?P<desc>RECEIPT|CREDIT)\s(?P<amount>\$\d+\.\d\d)\s(?P<from>\w\d\d\d)\s(?P<to>\d\d\d)\s(?P<admin>\w)\s(?P<account>[A-Z][A-Z0-9]{3})\s(?P<receipt>\d{8})\s(?P<batch>\d{7})\s(?P<operator>\w{3})"
    )
    .unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    pub case_number: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub disbursement_account: String,
    pub transaction_batch: String,
    pub receipt_number: String,
    pub amount: f64,
    pub from_party: String,
    pub to_party: String,
    pub admin_fee: String,
    pub operator: String,
}

/// Every complete transaction row of one document, in register order.
pub fn rows(doc: &Document, case_number: &str) -> Vec<TransactionRow> {
    TRANSACTION
        .captures_iter(&doc.full_text)
        .filter_map(|c| {
            Some(TransactionRow {
                case_number: case_number.to_string(),
                transaction_date: date_mdy(&c["date"])?,
                description: c["desc"].to_string(),
                disbursement_account: c["account"].to_string(),
                transaction_batch: c["batch"].to_string(),
                receipt_number: c["receipt"].to_string(),
                amount: money(&c["amount"])?,
                from_party: c["from"].to_string(),
                to_party: c["to"].to_string(),
                admin_fee: c["admin"].to_string(),
                operator: c["operator"].to_string(),
            })
        })
        .collect()
}

impl Tabular for TransactionRow {
    const COLUMNS: &'static [&'static str] = &[
        "CaseNumber",
        "TransactionDate",
        "Description",
        "DisbursementAccount",
        "TransactionBatch",
        "ReceiptNumber",
        "Amount",
        "FromParty",
        "ToParty",
        "AdminFee",
        "Operator",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.case_number.clone().into(),
            Cell::Date(self.transaction_date),
            self.description.clone().into(),
            self.disbursement_account.clone().into(),
            self.transaction_batch.clone().into(),
            self.receipt_number.clone().into(),
            self.amount.into(),
            self.from_party.clone().into(),
            self.to_party.clone().into(),
            self.admin_fee.clone().into(),
            self.operator.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn complete_rows_parse_with_all_columns() {
        let text = "Financial History\n\
                    01/15/2020 RECEIPT $50.00 R001 333 N CASH 12345678 1234567 ABC\n\
                    02/20/2020 CREDIT $25.00 R002 444 Y JB01 87654321 7654321 XYZ\n";
        let doc = Document::new("t", text);
        let rows = rows(&doc, "01-CC-2017-000001.00");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "RECEIPT");
        assert_eq!(rows[0].amount, 50.0);
        assert_eq!(rows[0].disbursement_account, "CASH");
        assert_eq!(rows[0].operator, "ABC");
        assert_eq!(
            rows[1].transaction_date,
            chrono::NaiveDate::from_ymd_opt(2020, 2, 20).unwrap()
        );
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        // Missing the trailing operator and batch columns.
        let doc = Document::new("t", "01/15/2020 RECEIPT $50.00 R001 333\n");
        assert!(rows(&doc, "x").is_empty());
    }
}
