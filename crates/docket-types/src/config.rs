//! Typed run configuration.
//!
//! The recognized options are enumerated here rather than carried in a
//! loose key-value bag; callers construct one `Config` per run and pass
//! it by reference.

use std::path::PathBuf;

/// Which output table a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TableSelection {
    All,
    Cases,
    Charges,
    FilingCharges,
    DispositionCharges,
    Fees,
    FinancialHistory,
    Sentences,
    Settings,
    CaseActionSummary,
    Witnesses,
    Attorneys,
    Images,
}

impl TableSelection {
    /// The export name used for sheet/file naming.
    pub fn name(&self) -> &'static str {
        match self {
            TableSelection::All => "all",
            TableSelection::Cases => "cases",
            TableSelection::Charges => "charges",
            TableSelection::FilingCharges => "filing-charges",
            TableSelection::DispositionCharges => "disposition-charges",
            TableSelection::Fees => "fees",
            TableSelection::FinancialHistory => "financial-history",
            TableSelection::Sentences => "sentences",
            TableSelection::Settings => "settings",
            TableSelection::CaseActionSummary => "case-action-summary",
            TableSelection::Witnesses => "witnesses",
            TableSelection::Attorneys => "attorneys",
            TableSelection::Images => "images",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub log_enabled: bool,
    pub debug: bool,
    pub overwrite: bool,
    pub output_path: Option<PathBuf>,
    pub table: TableSelection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_enabled: true,
            debug: false,
            overwrite: false,
            output_path: None,
            table: TableSelection::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_names_match_export_names() {
        assert_eq!(TableSelection::Cases.name(), "cases");
        assert_eq!(TableSelection::FilingCharges.name(), "filing-charges");
        assert_eq!(
            TableSelection::CaseActionSummary.name(),
            "case-action-summary"
        );
    }

    #[test]
    fn default_config_selects_all_tables() {
        let cfg = Config::default();
        assert_eq!(cfg.table, TableSelection::All);
        assert!(!cfg.overwrite);
    }
}
