use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which lookup key produced a [`CaseResult`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Lookup by the portal-assigned case record number.
    #[serde(rename = "CNR")]
    Cnr,
    /// Lookup by court, case type, number and year.
    #[serde(rename = "DETAILS")]
    Details,
}

/// The composite key used by a case-details search.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseDetailsKey {
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
}

impl CaseDetailsKey {
    pub fn new(case_type: &str, case_number: &str, case_year: &str) -> Self {
        Self {
            case_type: case_type.to_string(),
            case_number: case_number.to_string(),
            case_year: case_year.to_string(),
        }
    }

    /// Renders the key as `type/number/year`, the identifier reported in results.
    pub fn case_id(&self) -> String {
        format!("{}/{}/{}", self.case_type, self.case_number, self.case_year)
    }
}

/// A case status panel interpreted against an evaluation date.
///
/// `found` is true only when the hearing date parsed and fell on the
/// evaluation date or the day after; `listed_today` and `listed_tomorrow`
/// never both hold.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CaseResult {
    pub case_id: String,
    pub search_type: SearchType,
    pub found: bool,
    pub listed_today: bool,
    pub listed_tomorrow: bool,
    pub serial_number: Option<String>,
    pub court_name: Option<String>,
    /// Raw value of the hearing-date row, normally `dd-mm-yyyy`.
    pub next_hearing_date: Option<String>,
    pub case_status: Option<String>,
    /// Every label/value row of the panel, keyed by lowercased label.
    pub details: BTreeMap<String, String>,
    /// Set for [`SearchType::Details`] lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_details: Option<CaseDetailsKey>,
}

impl CaseResult {
    /// An empty, not-found result for `case_id`.
    pub fn new(case_id: &str, search_type: SearchType) -> Self {
        Self {
            case_id: case_id.to_string(),
            search_type,
            found: false,
            listed_today: false,
            listed_tomorrow: false,
            serial_number: None,
            court_name: None,
            next_hearing_date: None,
            case_status: None,
            details: BTreeMap::new(),
            case_details: None,
        }
    }
}
