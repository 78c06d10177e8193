//! Per-entity table builders.
//!
//! Each builder walks the document set once and materializes one named
//! [`Table`]. Document order is preserved, so rows for the same case
//! stay contiguous and repeated runs over the same archive produce
//! identical output.

use docket_types::{Document, Table};
use extract_engine::sections;
use extract_engine::{fields, CaseRecord, ChargeContext, ChargeRow};
use rayon::prelude::*;
use tracing::debug;

/// One `CaseRecord` per document, in document order.
pub fn case_records(docs: &[Document]) -> Vec<CaseRecord> {
    docs.par_iter().map(CaseRecord::from_document).collect()
}

pub fn cases(docs: &[Document]) -> Table {
    let records = case_records(docs);
    debug!(rows = records.len(), "built cases table");
    Table::from_rows("cases", &records)
}

/// Every parseable charge line across the document set. Lines that do
/// not carry a readable charge number or type are dropped, so the row
/// count is data-dependent rather than one-per-line.
pub fn charge_rows(docs: &[Document]) -> Vec<ChargeRow> {
    docs.par_iter()
        .flat_map_iter(|doc| {
            let name = fields::name(doc);
            let case_number = fields::case_number(doc);
            let ctx = ChargeContext {
                name: &name,
                case_number: &case_number,
                total_balance: fields::total_balance(doc),
                d999: fields::d999(doc),
            };
            sections::charges::explode(doc)
                .iter()
                .filter_map(|line| ChargeRow::parse(line, ctx))
                .collect::<Vec<_>>()
                .into_iter()
        })
        .collect()
}

pub fn charges(docs: &[Document]) -> Table {
    let rows = charge_rows(docs);
    debug!(rows = rows.len(), "built charges table");
    Table::from_rows("charges", &rows)
}

/// Charges without a court action date. Mutually exclusive with the
/// disposition table.
pub fn filing_charges(docs: &[Document]) -> Table {
    let rows: Vec<ChargeRow> = charge_rows(docs).into_iter().filter(|r| r.filing).collect();
    Table::from_rows("filing-charges", &rows)
}

/// Charges that carry a court action date.
pub fn disposition_charges(docs: &[Document]) -> Table {
    let rows: Vec<ChargeRow> = charge_rows(docs)
        .into_iter()
        .filter(|r| r.disposition)
        .collect();
    Table::from_rows("disposition-charges", &rows)
}

pub fn fees(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .flat_map_iter(|doc| {
            let case_number = sections::case_number(doc);
            sections::fees::rows(doc, &case_number).into_iter()
        })
        .collect();
    Table::from_rows("fees", &rows)
}

pub fn financial_history(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .flat_map_iter(|doc| {
            let case_number = sections::case_number(doc);
            sections::financial_history::rows(doc, &case_number).into_iter()
        })
        .collect();
    Table::from_rows("financial-history", &rows)
}

pub fn sentences(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .flat_map_iter(|doc| {
            let case_number = sections::case_number(doc);
            sections::sentences::rows(doc, &case_number).into_iter()
        })
        .collect();
    Table::from_rows("sentences", &rows)
}

pub fn settings(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .filter_map(|doc| {
            let case_number = sections::case_number(doc);
            sections::settings::row(doc, &case_number)
        })
        .collect();
    Table::from_rows("settings", &rows)
}

pub fn case_action_summary(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .filter_map(|doc| {
            let case_number = sections::case_number(doc);
            sections::case_action::row(doc, &case_number)
        })
        .collect();
    Table::from_rows("case-action-summary", &rows)
}

pub fn witnesses(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .filter_map(|doc| {
            let case_number = sections::case_number(doc);
            sections::witnesses::row(doc, &case_number)
        })
        .collect();
    Table::from_rows("witnesses", &rows)
}

pub fn attorneys(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .filter_map(|doc| {
            let case_number = sections::case_number(doc);
            sections::attorneys::row(doc, &case_number)
        })
        .collect();
    Table::from_rows("attorneys", &rows)
}

pub fn images(docs: &[Document]) -> Table {
    let rows: Vec<_> = docs
        .par_iter()
        .flat_map_iter(|doc| {
            let case_number = sections::case_number(doc);
            sections::images::rows(doc, &case_number).into_iter()
        })
        .collect();
    Table::from_rows("images", &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC_A: &str = "County: 01\n\
        Case Number CC-2017-000001.00\n\
        STATE OF ALABAMA VS. DOE JOHN ADAM Case Number: x\n\
        Total: $500.00 $100.00 $400.00 $0.00\n\
        001 ROB1 GUILTY PLEA CONVICTED FELONY PROPERTY 03/15/2017 13A-008-041 ROBBERY 1ST\n\
        002 UPCS POSS. CONTR. SUBS 13A-012-212(A) FELONY DRUG\n";

    const DOC_B: &str = "County: 39\n\
        Case Number DC-2021-001234.00\n\
        STATE OF ALABAMA VS. ROE JANE Case Number: x\n";

    fn docs() -> Vec<Document> {
        vec![Document::new("a", DOC_A), Document::new("b", DOC_B)]
    }

    #[test]
    fn cases_table_has_one_row_per_document() {
        let t = cases(&docs());
        assert_eq!(t.row_count(), 2);
        assert_eq!(
            t.column("CaseNumber").unwrap().cells[0].to_string(),
            "01-CC-2017-000001.00"
        );
        assert_eq!(
            t.column("CaseNumber").unwrap().cells[1].to_string(),
            "39-DC-2021-001234.00"
        );
    }

    #[test]
    fn filing_and_disposition_partition_the_charges() {
        let d = docs();
        let all = charges(&d);
        let filing = filing_charges(&d);
        let disposition = disposition_charges(&d);
        assert_eq!(all.row_count(), 2);
        assert_eq!(filing.row_count() + disposition.row_count(), all.row_count());
        assert_eq!(
            disposition.column("Code").unwrap().cells[0].to_string(),
            "ROB1"
        );
        assert_eq!(filing.column("Code").unwrap().cells[0].to_string(), "UPCS");
    }

    #[test]
    fn charge_rows_keep_document_order() {
        let d = docs();
        let rows = charge_rows(&d);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].num, "001");
        assert_eq!(rows[1].num, "002");
        assert!(rows.iter().all(|r| r.case_number == "01-CC-2017-000001.00"));
    }

    #[test]
    fn section_tables_reflect_present_sections_only() {
        let d = docs();
        // The Total: footer in DOC_A is itself a fee row.
        let f = fees(&d);
        assert_eq!(f.row_count(), 1);
        assert_eq!(f.column("Total").unwrap().cells[0].to_string(), "Total:");
        assert_eq!(witnesses(&d).row_count(), 0);
        assert_eq!(images(&d).row_count(), 0);
    }
}
