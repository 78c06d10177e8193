//! Voting-rights restoration roll-up.
//!
//! Collapses per-charge classification flags to one row per paired
//! identity. Names missing from the pairing sheet fall into a single
//! blank-identity group rather than being dropped, so the roll-up
//! never loses charges.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use docket_types::{Cell, Table, Tabular};
use extract_engine::capture::squeeze_ws;
use extract_engine::{CaseRecord, ChargeRow};
use serde::{Deserialize, Serialize};

use crate::pairs::PairRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VrrRow {
    pub ais_id: String,
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub race: String,
    pub sex: String,
    pub payment_to_restore: Option<f64>,
    pub conviction_count: i64,
    pub cerv_charges_count: i64,
    pub cerv_conviction_count: i64,
    pub pardon_charges_count: i64,
    pub pardon_conviction_count: i64,
    pub permanent_charges_count: i64,
    pub permanent_conviction_count: i64,
    pub disqualifying_convictions: String,
    pub convictions: String,
    pub filing_charges: String,
    pub cases: String,
}

impl Tabular for VrrRow {
    const COLUMNS: &'static [&'static str] = &[
        "AIS / Unique ID",
        "Name",
        "DOB",
        "Race",
        "Sex",
        "PaymentToRestore",
        "ConvictionCount",
        "CERVChargesCount",
        "CERVConvictionCount",
        "PardonToVoteChargesCount",
        "PardonToVoteConvictionCount",
        "PermanentDisqChargesCount",
        "PermanentDisqConvictionCount",
        "DisqualifyingConvictions",
        "Convictions",
        "FilingCharges",
        "Cases",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.ais_id.clone().into(),
            self.name.clone().into(),
            Cell::from_opt_date(self.dob),
            self.race.clone().into(),
            self.sex.clone().into(),
            Cell::from_opt_float(self.payment_to_restore),
            self.conviction_count.into(),
            self.cerv_charges_count.into(),
            self.cerv_conviction_count.into(),
            self.pardon_charges_count.into(),
            self.pardon_conviction_count.into(),
            self.permanent_charges_count.into(),
            self.permanent_conviction_count.into(),
            self.disqualifying_convictions.clone().into(),
            self.convictions.clone().into(),
            self.filing_charges.clone().into(),
            self.cases.clone().into(),
        ]
    }
}

#[derive(Default)]
struct Group {
    name: String,
    dob: Option<NaiveDate>,
    race: String,
    sex: String,
    have_identity: bool,
    cases: Vec<String>,
    cerv_charges: i64,
    pardon_charges: i64,
    permanent_charges: i64,
    filing_summaries: Vec<String>,
    conviction_count: i64,
    cerv_convictions: i64,
    pardon_convictions: i64,
    permanent_convictions: i64,
    payments: Vec<f64>,
    conviction_summaries: Vec<String>,
    disqualifying_summaries: Vec<String>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn join_clean(items: &[String]) -> String {
    let joined = items.join(", ").replace("null,", "").replace("null", "");
    let joined = squeeze_ws(&joined);
    joined.trim().trim_end_matches(',').trim().to_string()
}

/// One roll-up row per identity, sorted by name. `pairing` is the
/// filled-in template from [`crate::pairs`]; the identity key is `None`
/// for names the sheet does not pair.
pub fn summary_rows(
    cases: &[CaseRecord],
    charges: &[ChargeRow],
    pairing: &[PairRow],
) -> Vec<VrrRow> {
    let ais: BTreeMap<&str, &str> = pairing
        .iter()
        .map(|p| (p.name.as_str(), p.ais_id.as_str()))
        .collect();
    let key = |name: &str| ais.get(name).map(|a| a.to_string());

    let mut groups: BTreeMap<Option<String>, Group> = BTreeMap::new();
    for p in pairing {
        groups.entry(Some(p.ais_id.clone())).or_default();
    }

    for ch in charges {
        let g = groups.entry(key(&ch.name)).or_default();
        if ch.filing {
            g.cerv_charges += i64::from(ch.cerv_disq_charge);
            g.pardon_charges += i64::from(ch.pardon_disq_charge);
            g.permanent_charges += i64::from(ch.permanent_disq_charge);
            g.filing_summaries.push(ch.charges_summary.clone());
        }
        if ch.disposition && ch.conviction {
            g.conviction_count += 1;
            g.cerv_convictions += i64::from(ch.cerv_disq_conviction);
            g.pardon_convictions += i64::from(ch.pardon_disq_conviction);
            g.permanent_convictions += i64::from(ch.permanent_disq_conviction);
            if let Some(p) = ch.payment_to_restore {
                g.payments.push(p);
            }
            g.conviction_summaries.push(ch.charges_summary.clone());
        }
        if ch.cerv_disq_conviction || ch.pardon_disq_conviction || ch.permanent_disq_conviction {
            g.disqualifying_summaries.push(ch.charges_summary.clone());
        }
    }

    for rec in cases {
        let g = groups.entry(key(&rec.name)).or_default();
        if !g.have_identity {
            g.name = rec.name.clone();
            g.dob = rec.dob;
            g.race = rec.race.clone();
            g.sex = rec.sex.clone();
            g.have_identity = true;
        }
        g.cases.push(rec.case_number.clone());
    }
    // Paired identities with no case rows keep the name from the sheet.
    for p in pairing {
        if let Some(g) = groups.get_mut(&Some(p.ais_id.clone())) {
            if !g.have_identity {
                g.name = p.name.clone();
                g.dob = p.dob;
                g.have_identity = true;
            }
        }
    }

    let mut rows: Vec<VrrRow> = groups
        .into_iter()
        .map(|(ais_id, g)| VrrRow {
            ais_id: ais_id.unwrap_or_default(),
            name: g.name,
            dob: g.dob,
            race: g.race,
            sex: g.sex,
            payment_to_restore: mean(&g.payments),
            conviction_count: g.conviction_count,
            cerv_charges_count: g.cerv_charges,
            cerv_conviction_count: g.cerv_convictions,
            pardon_charges_count: g.pardon_charges,
            pardon_conviction_count: g.pardon_convictions,
            permanent_charges_count: g.permanent_charges,
            permanent_conviction_count: g.permanent_convictions,
            disqualifying_convictions: join_clean(&g.disqualifying_summaries),
            convictions: join_clean(&g.conviction_summaries),
            filing_charges: join_clean(&g.filing_summaries),
            cases: join_clean(&g.cases),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

pub fn summary(cases: &[CaseRecord], charges: &[ChargeRow], pairing: &[PairRow]) -> Table {
    Table::from_rows("vrr-summary", &summary_rows(cases, charges, pairing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn case(name: &str, case_number: &str) -> CaseRecord {
        CaseRecord {
            name: name.to_string(),
            case_number: case_number.to_string(),
            race: "B".to_string(),
            sex: "M".to_string(),
            ..CaseRecord::default()
        }
    }

    fn conviction(name: &str, summary_text: &str, payment: f64) -> ChargeRow {
        ChargeRow {
            name: name.to_string(),
            disposition: true,
            conviction: true,
            felony: true,
            cerv_disq_charge: true,
            cerv_disq_conviction: true,
            payment_to_restore: Some(payment),
            charges_summary: summary_text.to_string(),
            ..ChargeRow::default()
        }
    }

    fn filing(name: &str, summary_text: &str) -> ChargeRow {
        ChargeRow {
            name: name.to_string(),
            filing: true,
            felony: true,
            cerv_disq_charge: true,
            charges_summary: summary_text.to_string(),
            ..ChargeRow::default()
        }
    }

    fn pair(ais: &str, name: &str) -> PairRow {
        PairRow {
            ais_id: ais.to_string(),
            name: name.to_string(),
            alias: String::new(),
            dob: None,
            case_count: 1,
            cases: String::new(),
        }
    }

    #[test]
    fn paired_names_collapse_to_one_identity() {
        let cases = vec![case("DOE JOHN", "01-CC-2017-000001.00"), case("DOE JOHN A", "01-CC-2018-000002.00")];
        let charges = vec![
            conviction("DOE JOHN", "summary one", 400.0),
            conviction("DOE JOHN A", "summary two", 200.0),
        ];
        let pairing = vec![pair("A123", "DOE JOHN"), pair("A123", "DOE JOHN A")];
        let rows = summary_rows(&cases, &charges, &pairing);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ais_id, "A123");
        assert_eq!(rows[0].conviction_count, 2);
        assert_eq!(rows[0].cerv_conviction_count, 2);
        assert_eq!(rows[0].payment_to_restore, Some(300.0));
        assert_eq!(rows[0].convictions, "summary one, summary two");
        assert_eq!(
            rows[0].cases,
            "01-CC-2017-000001.00, 01-CC-2018-000002.00"
        );
    }

    #[test]
    fn unpaired_names_land_in_the_blank_group() {
        let cases = vec![case("ROE JANE", "01-DC-2019-000001.00")];
        let charges = vec![filing("ROE JANE", "jane filing")];
        let rows = summary_rows(&cases, &charges, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ais_id, "");
        assert_eq!(rows[0].name, "ROE JANE");
        assert_eq!(rows[0].cerv_charges_count, 1);
        assert_eq!(rows[0].conviction_count, 0);
        assert_eq!(rows[0].payment_to_restore, None);
        assert_eq!(rows[0].filing_charges, "jane filing");
    }

    #[test]
    fn conviction_counts_never_exceed_charge_flags() {
        let charges = vec![
            filing("DOE JOHN", "f1"),
            filing("DOE JOHN", "f2"),
            conviction("DOE JOHN", "c1", 100.0),
        ];
        let rows = summary_rows(&[case("DOE JOHN", "x")], &charges, &[]);
        assert_eq!(rows[0].cerv_charges_count, 2);
        assert!(rows[0].cerv_conviction_count <= rows[0].conviction_count);
    }

    #[test]
    fn paired_identity_without_charges_still_appears() {
        let pairing = vec![pair("B456", "SMITH SAM")];
        let rows = summary_rows(&[], &[], &pairing);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ais_id, "B456");
        assert_eq!(rows[0].name, "SMITH SAM");
        assert_eq!(rows[0].conviction_count, 0);
    }

    #[test]
    fn summary_join_scrubs_null_tokens_and_commas() {
        assert_eq!(
            join_clean(&["null".to_string(), "real entry".to_string()]),
            "real entry"
        );
        assert_eq!(join_clean(&["a".to_string(), "null,".to_string()]), "a");
        assert_eq!(join_clean(&[]), "");
    }

    #[test]
    fn output_is_sorted_by_name() {
        let cases = vec![case("ZED ZANE", "z"), case("ABLE ANN", "a")];
        let pairing = vec![pair("Z9", "ZED ZANE"), pair("A1", "ABLE ANN")];
        let rows = summary_rows(&cases, &[], &pairing);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "ABLE ANN");
        assert_eq!(rows[1].name, "ZED ZANE");
    }

    #[test]
    fn all_unpaired_names_share_one_blank_group() {
        let cases = vec![case("ZED ZANE", "z"), case("ABLE ANN", "a")];
        let rows = summary_rows(&cases, &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ais_id, "");
        assert_eq!(rows[0].cases, "z, a");
    }
}
