use super::PortalForm;

/// Body for a lookup by case record number. State and district narrow the
/// search when known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CnrSearchForm {
    pub cnr: String,
    pub state_code: Option<String>,
    pub district_code: Option<String>,
}

impl CnrSearchForm {
    pub fn new(cnr: &str) -> Self {
        Self {
            cnr: cnr.to_string(),
            ..Default::default()
        }
    }

    pub fn with_state_code(mut self, state_code: &str) -> Self {
        self.state_code = Some(state_code.to_string());
        self
    }

    pub fn with_district_code(mut self, district_code: &str) -> Self {
        self.district_code = Some(district_code.to_string());
        self
    }
}

impl PortalForm for CnrSearchForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("cnr", self.cnr.clone())];
        if let Some(state_code) = &self.state_code {
            pairs.push(("state_code", state_code.clone()));
        }
        if let Some(district_code) = &self.district_code {
            pairs.push(("dist_code", district_code.clone()));
        }
        pairs
    }
}

/// Body for a lookup by court, case type, number and year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseDetailsForm {
    pub state_code: String,
    pub district_code: String,
    pub court_code: String,
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
}

impl CaseDetailsForm {
    pub fn new(
        state_code: &str,
        district_code: &str,
        court_code: &str,
        case_type: &str,
        case_number: &str,
        case_year: &str,
    ) -> Self {
        Self {
            state_code: state_code.to_string(),
            district_code: district_code.to_string(),
            court_code: court_code.to_string(),
            case_type: case_type.to_string(),
            case_number: case_number.to_string(),
            case_year: case_year.to_string(),
        }
    }
}

impl PortalForm for CaseDetailsForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state_code", self.state_code.clone()),
            ("dist_code", self.district_code.clone()),
            ("court_code", self.court_code.clone()),
            ("case_type", self.case_type.clone()),
            ("case_no", self.case_number.clone()),
            ("case_year", self.case_year.clone()),
        ]
    }
}
