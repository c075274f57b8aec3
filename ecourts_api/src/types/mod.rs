mod location;
pub use self::location::LocationEntry;

mod case;
pub use self::case::{CaseDetailsKey, CaseResult, SearchType};

mod cause_list;
pub use self::cause_list::{CauseList, CauseListDocument, CauseListEntry, CauseListMetadata};

mod response;
pub use self::response::{PortalResponse, PDF_MIME_TYPE};
