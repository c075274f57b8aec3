//! Fixed portal endpoints.

use std::fmt;

/// A page or AJAX handler on the portal. Paths are relative to the configured base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The cause-list landing page; carries the `state_code` select.
    CauseListPage,
    Districts,
    CourtComplexes,
    Courts,
    CaseByCnr,
    CaseByDetails,
    CauseList,
    /// Binary (PDF) rendition of a cause list.
    CauseListDocument,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::CauseListPage => "/?p=cause_list/",
            Endpoint::Districts => "/ajax/get_district.php",
            Endpoint::CourtComplexes => "/ajax/get_court_complex.php",
            Endpoint::Courts => "/ajax/get_court.php",
            Endpoint::CaseByCnr => "/ajax/search_case_cnr.php",
            Endpoint::CaseByDetails => "/ajax/search_case_details.php",
            Endpoint::CauseList => "/ajax/get_cause_list.php",
            Endpoint::CauseListDocument => "/ajax/download_cause_list_pdf.php",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Endpoint::CauseListPage => "cause list page",
            Endpoint::Districts => "districts",
            Endpoint::CourtComplexes => "court complexes",
            Endpoint::Courts => "courts",
            Endpoint::CaseByCnr => "CNR search",
            Endpoint::CaseByDetails => "case details search",
            Endpoint::CauseList => "cause list",
            Endpoint::CauseListDocument => "cause list document",
        };
        f.write_str(label)
    }
}
