mod common;
pub use self::common::PortalForm;
mod location;
pub use self::location::{CourtComplexForm, CourtForm, DistrictForm};

mod search;
pub use self::search::{CaseDetailsForm, CnrSearchForm};

mod cause_list;
pub use self::cause_list::CauseListForm;
