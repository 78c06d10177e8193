//! One row per case document.

use chrono::NaiveDate;
use docket_types::{Cell, Document, Tabular};
use serde::{Deserialize, Serialize};

use crate::fields;

/// Every scalar field extracted from a case detail document. Column
/// order here is the order the cases table is exported in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseRecord {
    pub retrieved: Option<NaiveDate>,
    pub case_number: String,
    pub name: String,
    pub alias: String,
    pub dob: Option<NaiveDate>,
    pub race: String,
    pub sex: String,
    pub total_amt_due: f64,
    pub total_amt_paid: f64,
    pub total_balance: f64,
    pub total_amt_hold: f64,
    pub d999: f64,
    pub bond_amt: Option<f64>,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub county: String,
    pub country: String,
    pub ssn: String,
    pub weight: Option<i64>,
    pub eyes: String,
    pub hair: String,
    pub filing_date: Option<NaiveDate>,
    pub case_initiation_date: Option<NaiveDate>,
    pub arrest_date: Option<NaiveDate>,
    pub offense_date: Option<NaiveDate>,
    pub indictment_date: Option<NaiveDate>,
    pub jury_demand: String,
    pub inpatient_treatment_ordered: String,
    pub trial_type: String,
    pub judge: String,
    pub defendant_status: String,
    pub arresting_agency_type: String,
    pub arresting_officer: String,
    pub probation_office_name: String,
    pub previous_dui_convictions: Option<i64>,
    pub case_initiation_type: String,
    pub domestic_violence: String,
    pub agency_ori: String,
    pub warrant_issuance_date: Option<NaiveDate>,
    pub warrant_action_date: Option<NaiveDate>,
    pub warrant_issuance_status: String,
    pub warrant_action_status: String,
    pub warrant_location_status: String,
    pub number_of_warrants: String,
    pub bond_type: String,
    pub bond_type_desc: String,
    pub bond_company: String,
    pub surety_code: String,
    pub bond_release_date: Option<NaiveDate>,
    pub failed_to_appear_date: Option<NaiveDate>,
    pub bondsman_process_issuance: Option<NaiveDate>,
    pub appeal_date: Option<NaiveDate>,
    pub appeal_court: String,
    pub origin_of_appeal: String,
    pub appeal_to_desc: String,
    pub appeal_status: String,
    pub appeal_to: String,
    pub number_of_subpoenas: Option<i64>,
    pub admin_updated_by: String,
    pub transfer_desc: String,
    pub tbnv1: Option<NaiveDate>,
    pub tbnv2: Option<NaiveDate>,
    pub driver_license_no: String,
    pub state_id: String,
    pub turnover_date: Option<NaiveDate>,
    pub turnover_amt: Option<f64>,
    pub frequency_amt: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub last_paid_date: Option<NaiveDate>,
    pub payor: String,
    pub enforcement_status: String,
    pub frequency: String,
    pub placement_status: String,
    pub pretrial: String,
    pub pretrial_date: Option<NaiveDate>,
    pub pretrial_terms: String,
    pub pre_terms_date: Option<NaiveDate>,
    pub delinquent: String,
    pub delinquent_date: Option<NaiveDate>,
    pub da_mailer: String,
    pub da_mailer_date: Option<NaiveDate>,
    pub warrant_mailer: String,
    pub warrant_mailer_date: Option<NaiveDate>,
    pub enforcement_last_update: Option<NaiveDate>,
    pub enforcement_updated_by: String,
}

impl CaseRecord {
    /// Run every field extractor against one document. Infallible:
    /// text the patterns do not recognize leaves the field at its
    /// zero value.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            retrieved: fields::retrieved(doc),
            case_number: fields::case_number(doc),
            name: fields::name(doc),
            alias: fields::alias(doc),
            dob: fields::dob(doc),
            race: fields::race(doc),
            sex: fields::sex(doc),
            total_amt_due: fields::total_amt_due(doc),
            total_amt_paid: fields::total_amt_paid(doc),
            total_balance: fields::total_balance(doc),
            total_amt_hold: fields::total_amt_hold(doc),
            d999: fields::d999(doc),
            bond_amt: fields::bond_amt(doc),
            phone: fields::phone(doc),
            street_address: fields::street_address(doc),
            city: fields::city(doc),
            state: fields::state(doc),
            zip_code: fields::zip_code(doc),
            county: fields::county(doc),
            country: fields::country(doc),
            ssn: fields::ssn(doc),
            weight: fields::weight(doc),
            eyes: fields::eyes(doc),
            hair: fields::hair(doc),
            filing_date: fields::filing_date(doc),
            case_initiation_date: fields::case_initiation_date(doc),
            arrest_date: fields::arrest_date(doc),
            offense_date: fields::offense_date(doc),
            indictment_date: fields::indictment_date(doc),
            jury_demand: fields::jury_demand(doc),
            inpatient_treatment_ordered: fields::inpatient_treatment_ordered(doc),
            trial_type: fields::trial_type(doc),
            judge: fields::judge(doc),
            defendant_status: fields::defendant_status(doc),
            arresting_agency_type: fields::arresting_agency_type(doc),
            arresting_officer: fields::arresting_officer(doc),
            // The source system prints the office number where the name
            // belongs; the exported column keeps the historical header.
            probation_office_name: fields::probation_office_number(doc),
            previous_dui_convictions: fields::previous_dui_convictions(doc),
            case_initiation_type: fields::case_initiation_type(doc),
            domestic_violence: fields::domestic_violence(doc),
            agency_ori: fields::agency_ori(doc),
            warrant_issuance_date: fields::warrant_issuance_date(doc),
            warrant_action_date: fields::warrant_action_date(doc),
            warrant_issuance_status: fields::warrant_issuance_status(doc),
            warrant_action_status: fields::warrant_action_status(doc),
            warrant_location_status: fields::warrant_location_status(doc),
            number_of_warrants: fields::number_of_warrants(doc),
            bond_type: fields::bond_type(doc),
            bond_type_desc: fields::bond_type_desc(doc),
            bond_company: fields::bond_company(doc),
            surety_code: fields::surety_code(doc),
            bond_release_date: fields::bond_release_date(doc),
            failed_to_appear_date: fields::failed_to_appear_date(doc),
            bondsman_process_issuance: fields::bondsman_process_issuance(doc),
            appeal_date: fields::appeal_date(doc),
            appeal_court: fields::appeal_court(doc),
            origin_of_appeal: fields::origin_of_appeal(doc),
            appeal_to_desc: fields::appeal_to_desc(doc),
            appeal_status: fields::appeal_status(doc),
            appeal_to: fields::appeal_to(doc),
            number_of_subpoenas: fields::number_of_subpoenas(doc),
            admin_updated_by: fields::admin_updated_by(doc),
            transfer_desc: fields::transfer_desc(doc),
            tbnv1: fields::tbnv1(doc),
            tbnv2: fields::tbnv2(doc),
            driver_license_no: fields::driver_license_no(doc),
            state_id: fields::state_id(doc),
            turnover_date: fields::turnover_date(doc),
            turnover_amt: fields::turnover_amt(doc),
            frequency_amt: fields::frequency_amt(doc),
            due_date: fields::due_date(doc),
            last_paid_date: fields::last_paid_date(doc),
            payor: fields::payor(doc),
            enforcement_status: fields::enforcement_status(doc),
            frequency: fields::frequency(doc),
            placement_status: fields::placement_status(doc),
            pretrial: fields::pretrial(doc),
            pretrial_date: fields::pretrial_date(doc),
            pretrial_terms: fields::pretrial_terms(doc),
            pre_terms_date: fields::pre_terms_date(doc),
            delinquent: fields::delinquent(doc),
            delinquent_date: fields::delinquent_date(doc),
            da_mailer: fields::da_mailer(doc),
            da_mailer_date: fields::da_mailer_date(doc),
            warrant_mailer: fields::warrant_mailer(doc),
            warrant_mailer_date: fields::warrant_mailer_date(doc),
            enforcement_last_update: fields::enforcement_last_update(doc),
            enforcement_updated_by: fields::enforcement_updated_by(doc),
        }
    }
}

impl Tabular for CaseRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Retrieved",
        "CaseNumber",
        "Name",
        "Alias",
        "DOB",
        "Race",
        "Sex",
        "TotalAmtDue",
        "TotalAmtPaid",
        "TotalBalance",
        "TotalAmtHold",
        "D999",
        "BondAmt",
        "Phone",
        "StreetAddress",
        "City",
        "State",
        "ZipCode",
        "County",
        "Country",
        "SSN",
        "Weight",
        "Eyes",
        "Hair",
        "FilingDate",
        "CaseInitiationDate",
        "ArrestDate",
        "OffenseDate",
        "IndictmentDate",
        "JuryDemand",
        "InpatientTreatmentOrdered",
        "TrialType",
        "Judge",
        "DefendantStatus",
        "ArrestingAgencyType",
        "ArrestingOfficer",
        "ProbationOfficeName",
        "PreviousDUIConvictions",
        "CaseInitiationType",
        "DomesticViolence",
        "AgencyORI",
        "WarrantIssuanceDate",
        "WarrantActionDate",
        "WarrantIssuanceStatus",
        "WarrantActionStatus",
        "WarrantLocationStatus",
        "NumberOfWarrants",
        "BondType",
        "BondTypeDesc",
        "BondCompany",
        "SuretyCode",
        "BondReleaseDate",
        "FailedToAppearDate",
        "BondsmanProcessIssuance",
        "AppealDate",
        "AppealCourt",
        "OriginOfAppeal",
        "AppealToDesc",
        "AppealStatus",
        "AppealTo",
        "NumberOfSubpoenas",
        "AdminUpdatedBy",
        "TransferDesc",
        "TBNV1",
        "TBNV2",
        "DriverLicenseNo",
        "StateID",
        "TurnOverDate",
        "TurnOverAmt",
        "FrequencyAmt",
        "DueDate",
        "LastPaidDate",
        "Payor",
        "EnforcementStatus",
        "Frequency",
        "PlacementStatus",
        "PreTrial",
        "PreTrialDate",
        "PreTrialTerms",
        "PreTermsDate",
        "Delinquent",
        "DelinquentDate",
        "DAMailer",
        "DAMailerDate",
        "WarrantMailer",
        "WarrantMailerDate",
        "EnforcementLastUpdate",
        "EnforcementUpdatedBy",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from_opt_date(self.retrieved),
            self.case_number.clone().into(),
            self.name.clone().into(),
            self.alias.clone().into(),
            Cell::from_opt_date(self.dob),
            self.race.clone().into(),
            self.sex.clone().into(),
            self.total_amt_due.into(),
            self.total_amt_paid.into(),
            self.total_balance.into(),
            self.total_amt_hold.into(),
            self.d999.into(),
            Cell::from_opt_float(self.bond_amt),
            self.phone.clone().into(),
            self.street_address.clone().into(),
            self.city.clone().into(),
            self.state.clone().into(),
            self.zip_code.clone().into(),
            self.county.clone().into(),
            self.country.clone().into(),
            self.ssn.clone().into(),
            Cell::from_opt_int(self.weight),
            self.eyes.clone().into(),
            self.hair.clone().into(),
            Cell::from_opt_date(self.filing_date),
            Cell::from_opt_date(self.case_initiation_date),
            Cell::from_opt_date(self.arrest_date),
            Cell::from_opt_date(self.offense_date),
            Cell::from_opt_date(self.indictment_date),
            self.jury_demand.clone().into(),
            self.inpatient_treatment_ordered.clone().into(),
            self.trial_type.clone().into(),
            self.judge.clone().into(),
            self.defendant_status.clone().into(),
            self.arresting_agency_type.clone().into(),
            self.arresting_officer.clone().into(),
            self.probation_office_name.clone().into(),
            Cell::from_opt_int(self.previous_dui_convictions),
            self.case_initiation_type.clone().into(),
            self.domestic_violence.clone().into(),
            self.agency_ori.clone().into(),
            Cell::from_opt_date(self.warrant_issuance_date),
            Cell::from_opt_date(self.warrant_action_date),
            self.warrant_issuance_status.clone().into(),
            self.warrant_action_status.clone().into(),
            self.warrant_location_status.clone().into(),
            self.number_of_warrants.clone().into(),
            self.bond_type.clone().into(),
            self.bond_type_desc.clone().into(),
            self.bond_company.clone().into(),
            self.surety_code.clone().into(),
            Cell::from_opt_date(self.bond_release_date),
            Cell::from_opt_date(self.failed_to_appear_date),
            Cell::from_opt_date(self.bondsman_process_issuance),
            Cell::from_opt_date(self.appeal_date),
            self.appeal_court.clone().into(),
            self.origin_of_appeal.clone().into(),
            self.appeal_to_desc.clone().into(),
            self.appeal_status.clone().into(),
            self.appeal_to.clone().into(),
            Cell::from_opt_int(self.number_of_subpoenas),
            self.admin_updated_by.clone().into(),
            self.transfer_desc.clone().into(),
            Cell::from_opt_date(self.tbnv1),
            Cell::from_opt_date(self.tbnv2),
            self.driver_license_no.clone().into(),
            self.state_id.clone().into(),
            Cell::from_opt_date(self.turnover_date),
            Cell::from_opt_float(self.turnover_amt),
            Cell::from_opt_float(self.frequency_amt),
            Cell::from_opt_date(self.due_date),
            Cell::from_opt_date(self.last_paid_date),
            self.payor.clone().into(),
            self.enforcement_status.clone().into(),
            self.frequency.clone().into(),
            self.placement_status.clone().into(),
            self.pretrial.clone().into(),
            Cell::from_opt_date(self.pretrial_date),
            self.pretrial_terms.clone().into(),
            Cell::from_opt_date(self.pre_terms_date),
            self.delinquent.clone().into(),
            Cell::from_opt_date(self.delinquent_date),
            self.da_mailer.clone().into(),
            Cell::from_opt_date(self.da_mailer_date),
            self.warrant_mailer.clone().into(),
            Cell::from_opt_date(self.warrant_mailer_date),
            Cell::from_opt_date(self.enforcement_last_update),
            self.enforcement_updated_by.clone().into(),
        ]
    }
}
