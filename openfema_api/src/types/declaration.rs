use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed layout of `declarationDate` and the other timestamp fields,
/// e.g. `2021-01-01T00:00:00.000Z`.
pub const DECLARATION_DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One disaster declaration, as documented by the FEMA Data Fields section
/// of the Disaster Declarations Summaries v2 dataset.
///
/// See <https://www.fema.gov/openfema-data-page/disaster-declarations-summaries-v2>.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DisasterDeclarationsElement {
    /// Concatenation of declaration type, disaster number and state code,
    /// e.g. `DR-4393-NC`.
    pub fema_declaration_string: String,

    /// Sequentially assigned number designating the declared event.
    pub disaster_number: i64,

    /// U.S. state, district, or territory code.
    pub state: String,

    /// Two character code: major disaster, fire management, or emergency.
    pub declaration_type: String,

    /// Date the disaster was declared, in [`DECLARATION_DATE_LAYOUT`].
    pub declaration_date: String,

    /// Fiscal year in which the disaster was declared.
    #[serde(rename = "fyDeclared")]
    pub fiscal_year_declared: i64,

    /// Type of incident such as fire or flood.
    pub incident_type: String,

    pub declaration_title: String,

    /// Whether the Individuals and Households program was declared.
    #[serde(rename = "ihProgramDeclared")]
    pub individual_and_household_program_declared: bool,

    /// Whether the Individual Assistance program was declared.
    #[serde(rename = "iaProgramDeclared")]
    pub individual_assistance_program_declared: bool,

    /// Whether the Public Assistance program was declared.
    #[serde(rename = "paProgramDeclared")]
    pub public_assistance_program_declared: bool,

    /// Whether the Hazard Mitigation program was declared.
    #[serde(rename = "hmProgramDeclared")]
    pub hazard_mitigation_program_declared: bool,

    pub incident_begin_date: Option<String>,

    pub incident_end_date: Option<String>,

    pub disaster_closeout_date: Option<String>,

    pub fips_state_code: String,

    pub fips_county_code: String,

    pub place_code: String,

    pub designated_area: String,

    pub declaration_request_number: String,

    pub hash: String,

    pub last_refresh: String,

    pub id: String,
}

impl DisasterDeclarationsElement {
    /// Parses `declarationDate` under the fixed layout. A date that does not
    /// match the layout is a hard error for the record.
    pub fn parsed_declaration_date(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.declaration_date, DECLARATION_DATE_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_declaration_date() {
        let element = DisasterDeclarationsElement {
            declaration_date: "2021-01-01T00:00:00.000Z".to_string(),
            ..Default::default()
        };
        let parsed = element.parsed_declaration_date().unwrap();
        assert_eq!(parsed.date().to_string(), "2021-01-01");
    }

    #[test]
    fn rejects_date_outside_fixed_layout() {
        let element = DisasterDeclarationsElement {
            declaration_date: "2021/01/01".to_string(),
            ..Default::default()
        };
        assert!(element.parsed_declaration_date().is_err());
    }
}
