mod client;
mod config;
mod endpoint;
mod errors;
mod form;
pub mod types;
pub use self::client::Client;
pub use self::config::{PortalConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::form::{
    CaseDetailsForm, CauseListForm, CnrSearchForm, CourtComplexForm, CourtForm, DistrictForm,
    PortalForm,
};
