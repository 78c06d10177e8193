//! Run orchestration.
//!
//! `Pipeline` owns the run configuration and dispatches table
//! selections to the builders in [`crate::tables`]. Documents are
//! independent, so every builder fans out per document and joins into
//! one table; nothing here holds shared mutable state.

use docket_types::{Config, Document, Table, TableSelection};
use tracing::info;

use crate::export::{self, ExportError};
use crate::pairs::{self, PairRow};
use crate::{tables, vrr};

/// Every concrete export, in output order.
const EXPORTS: &[TableSelection] = &[
    TableSelection::Cases,
    TableSelection::Charges,
    TableSelection::FilingCharges,
    TableSelection::DispositionCharges,
    TableSelection::Fees,
    TableSelection::FinancialHistory,
    TableSelection::Sentences,
    TableSelection::Settings,
    TableSelection::CaseActionSummary,
    TableSelection::Witnesses,
    TableSelection::Attorneys,
    TableSelection::Images,
];

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The table one selection names. `All` resolves to the cases
    /// table; callers wanting every export use
    /// [`Pipeline::all_tables`].
    pub fn table(&self, docs: &[Document], selection: TableSelection) -> Table {
        match selection {
            TableSelection::All | TableSelection::Cases => tables::cases(docs),
            TableSelection::Charges => tables::charges(docs),
            TableSelection::FilingCharges => tables::filing_charges(docs),
            TableSelection::DispositionCharges => tables::disposition_charges(docs),
            TableSelection::Fees => tables::fees(docs),
            TableSelection::FinancialHistory => tables::financial_history(docs),
            TableSelection::Sentences => tables::sentences(docs),
            TableSelection::Settings => tables::settings(docs),
            TableSelection::CaseActionSummary => tables::case_action_summary(docs),
            TableSelection::Witnesses => tables::witnesses(docs),
            TableSelection::Attorneys => tables::attorneys(docs),
            TableSelection::Images => tables::images(docs),
        }
    }

    pub fn all_tables(&self, docs: &[Document]) -> Vec<Table> {
        EXPORTS.iter().map(|s| self.table(docs, *s)).collect()
    }

    /// The blank identity-pairing sheet for this document set.
    pub fn pairs_template(&self, docs: &[Document]) -> Table {
        pairs::template(&tables::case_records(docs))
    }

    /// The voting-rights roll-up, keyed by a filled-in pairing sheet.
    pub fn vrr_summary(&self, docs: &[Document], pairing: &[PairRow]) -> Table {
        let cases = tables::case_records(docs);
        let charges = tables::charge_rows(docs);
        vrr::summary(&cases, &charges, pairing)
    }

    /// Build the configured selection and, when an output path is set,
    /// write it out. A single-table run writes to the path itself; an
    /// `All` run treats the path as a directory of per-table CSVs.
    pub fn run(&self, docs: &[Document]) -> Result<Vec<Table>, ExportError> {
        info!(
            docs = docs.len(),
            table = self.config.table.name(),
            "assembling tables"
        );
        let built = match self.config.table {
            TableSelection::All => self.all_tables(docs),
            selection => vec![self.table(docs, selection)],
        };
        if let Some(path) = &self.config.output_path {
            if let [table] = built.as_slice() {
                export::write_table(table, path, self.config.overwrite)?;
            } else {
                std::fs::create_dir_all(path)?;
                for table in &built {
                    let dest = path.join(format!("{}.csv", table.name));
                    export::write_table(table, &dest, self.config.overwrite)?;
                }
            }
        }
        Ok(built)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "County: 01\n\
        Case Number CC-2017-000001.00\n\
        STATE OF ALABAMA VS. DOE JOHN Case Number: x\n\
        001 ROB1 GUILTY PLEA CONVICTED FELONY PROPERTY 03/15/2017 13A-008-041 ROBBERY 1ST\n";

    fn docs() -> Vec<Document> {
        vec![Document::new("a", DOC)]
    }

    #[test]
    fn all_tables_covers_every_export() {
        let pipeline = Pipeline::default();
        let built = pipeline.all_tables(&docs());
        let names: Vec<&str> = built.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "cases",
                "charges",
                "filing-charges",
                "disposition-charges",
                "fees",
                "financial-history",
                "sentences",
                "settings",
                "case-action-summary",
                "witnesses",
                "attorneys",
                "images",
            ]
        );
    }

    #[test]
    fn dispatch_builds_the_named_table() {
        let pipeline = Pipeline::default();
        let t = pipeline.table(&docs(), TableSelection::DispositionCharges);
        assert_eq!(t.name, "disposition-charges");
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.column("Code").unwrap().cells[0].to_string(), "ROB1");
    }

    #[test]
    fn run_returns_tables_without_an_output_path() {
        let pipeline = Pipeline::new(Config {
            table: TableSelection::Cases,
            ..Config::default()
        });
        let built = pipeline.run(&docs()).unwrap();
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].name, "cases");
        assert_eq!(built[0].row_count(), 1);
    }

    #[test]
    fn pairs_and_vrr_connect_end_to_end() {
        let pipeline = Pipeline::default();
        let d = docs();
        let template = pipeline.pairs_template(&d);
        assert_eq!(template.row_count(), 1);
        assert_eq!(
            template.column("Name").unwrap().cells[0].to_string(),
            "DOE JOHN"
        );
        let summary = pipeline.vrr_summary(&d, &[]);
        assert_eq!(summary.row_count(), 1);
        assert_eq!(
            summary
                .column("ConvictionCount")
                .unwrap()
                .cells[0]
                .to_string(),
            "1"
        );
    }
}
