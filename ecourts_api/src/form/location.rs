use super::PortalForm;

/// Body for the district list of a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistrictForm {
    pub state_code: String,
}

impl DistrictForm {
    pub fn new(state_code: &str) -> Self {
        Self {
            state_code: state_code.to_string(),
        }
    }
}

impl PortalForm for DistrictForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("state_code", self.state_code.clone())]
    }
}

/// Body for the court complexes of a district.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourtComplexForm {
    pub state_code: String,
    pub district_code: String,
}

impl CourtComplexForm {
    pub fn new(state_code: &str, district_code: &str) -> Self {
        Self {
            state_code: state_code.to_string(),
            district_code: district_code.to_string(),
        }
    }
}

impl PortalForm for CourtComplexForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state_code", self.state_code.clone()),
            ("dist_code", self.district_code.clone()),
        ]
    }
}

/// Body for the individual courts of a court complex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourtForm {
    pub state_code: String,
    pub district_code: String,
    pub court_complex_code: String,
}

impl CourtForm {
    pub fn new(state_code: &str, district_code: &str, court_complex_code: &str) -> Self {
        Self {
            state_code: state_code.to_string(),
            district_code: district_code.to_string(),
            court_complex_code: court_complex_code.to_string(),
        }
    }
}

impl PortalForm for CourtForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state_code", self.state_code.clone()),
            ("dist_code", self.district_code.clone()),
            ("court_complex_code", self.court_complex_code.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_forms() {
        insta::assert_snapshot!(DistrictForm::new("7").encode(), @"state_code=7");
        insta::assert_snapshot!(
            CourtComplexForm::new("7", "12").encode(),
            @"state_code=7&dist_code=12"
        );
        insta::assert_snapshot!(
            CourtForm::new("7", "12", "1070012").encode(),
            @"state_code=7&dist_code=12&court_complex_code=1070012"
        );
    }
}
