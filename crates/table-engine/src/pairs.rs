//! Identity-pairing template.
//!
//! Court records carry no stable person identifier, only names. The
//! template groups cases by defendant name and leaves the
//! `AIS / Unique ID` column blank for an analyst to fill in by hand;
//! the completed sheet is the pairing input to the voting-rights
//! roll-up.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use docket_types::{Cell, Table, Tabular};
use extract_engine::CaseRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRow {
    pub ais_id: String,
    pub name: String,
    pub alias: String,
    pub dob: Option<NaiveDate>,
    pub case_count: i64,
    pub cases: String,
}

impl Tabular for PairRow {
    const COLUMNS: &'static [&'static str] =
        &["AIS / Unique ID", "Name", "Alias", "DOB", "CaseCount", "Cases"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.ais_id.clone().into(),
            self.name.clone().into(),
            self.alias.clone().into(),
            Cell::from_opt_date(self.dob),
            self.case_count.into(),
            self.cases.clone().into(),
        ]
    }
}

/// One row per distinct defendant name, sorted by name. Alias and DOB
/// come from the first case seen for that name.
pub fn template_rows(records: &[CaseRecord]) -> Vec<PairRow> {
    let mut groups: BTreeMap<&str, Vec<&CaseRecord>> = BTreeMap::new();
    for rec in records {
        groups.entry(rec.name.as_str()).or_default().push(rec);
    }
    groups
        .into_iter()
        .map(|(name, recs)| PairRow {
            ais_id: String::new(),
            name: name.to_string(),
            alias: recs[0].alias.clone(),
            dob: recs[0].dob,
            case_count: recs.len() as i64,
            cases: recs
                .iter()
                .map(|r| r.case_number.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn template(records: &[CaseRecord]) -> Table {
    Table::from_rows("pairs-template", &template_rows(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(name: &str, case_number: &str, alias: &str) -> CaseRecord {
        CaseRecord {
            name: name.to_string(),
            case_number: case_number.to_string(),
            alias: alias.to_string(),
            ..CaseRecord::default()
        }
    }

    #[test]
    fn one_row_per_name_with_joined_cases() {
        let records = vec![
            rec("DOE JOHN", "01-CC-2017-000001.00", "DOE JOHNNY"),
            rec("ROE JANE", "01-DC-2019-000002.00", ""),
            rec("DOE JOHN", "01-CC-2018-000003.00", ""),
        ];
        let rows = template_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "DOE JOHN");
        assert_eq!(rows[0].case_count, 2);
        assert_eq!(
            rows[0].cases,
            "01-CC-2017-000001.00, 01-CC-2018-000003.00"
        );
        assert_eq!(rows[0].alias, "DOE JOHNNY");
        assert_eq!(rows[1].name, "ROE JANE");
        assert_eq!(rows[1].case_count, 1);
    }

    #[test]
    fn identifier_column_starts_blank() {
        let rows = template_rows(&[rec("DOE JOHN", "x", "")]);
        assert_eq!(rows[0].ais_id, "");
        let t = template(&[rec("DOE JOHN", "x", "")]);
        assert_eq!(t.column_names()[0], "AIS / Unique ID");
    }
}
