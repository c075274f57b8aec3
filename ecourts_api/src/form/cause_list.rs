use super::PortalForm;

/// Body for the cause list of a court complex (optionally one court) on a date.
/// Shared by the HTML listing and the PDF download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CauseListForm {
    pub state_code: String,
    pub district_code: String,
    pub court_complex_code: String,
    pub court_code: Option<String>,
    /// `dd-mm-yyyy`
    pub date: String,
}

impl CauseListForm {
    pub fn new(state_code: &str, district_code: &str, court_complex_code: &str, date: &str) -> Self {
        Self {
            state_code: state_code.to_string(),
            district_code: district_code.to_string(),
            court_complex_code: court_complex_code.to_string(),
            court_code: None,
            date: date.to_string(),
        }
    }

    pub fn with_court_code(mut self, court_code: &str) -> Self {
        self.court_code = Some(court_code.to_string());
        self
    }

    /// File name for the PDF rendition:
    /// `cause_list_{state}_{district}_{complex}_{ddmmyyyy}.pdf`.
    pub fn document_file_name(&self) -> String {
        format!(
            "cause_list_{}_{}_{}_{}.pdf",
            self.state_code,
            self.district_code,
            self.court_complex_code,
            self.date.replace('-', "")
        )
    }
}

impl PortalForm for CauseListForm {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("state_code", self.state_code.clone()),
            ("dist_code", self.district_code.clone()),
            ("court_complex_code", self.court_complex_code.clone()),
            ("date", self.date.clone()),
        ];
        if let Some(court_code) = &self.court_code {
            pairs.push(("court_code", court_code.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_list_form() {
        insta::assert_snapshot!(
            CauseListForm::new("7", "12", "1070012", "19-10-2026").encode(),
            @"state_code=7&dist_code=12&court_complex_code=1070012&date=19-10-2026"
        );
        insta::assert_snapshot!(
            CauseListForm::new("7", "12", "1070012", "19-10-2026")
                .with_court_code("3")
                .encode(),
            @"state_code=7&dist_code=12&court_complex_code=1070012&date=19-10-2026&court_code=3"
        );
    }

    #[test]
    fn document_file_name_drops_date_dashes() {
        let form = CauseListForm::new("7", "12", "1070012", "19-10-2026").with_court_code("3");
        assert_eq!(form.document_file_name(), "cause_list_7_12_1070012_19102026.pdf");
    }
}
