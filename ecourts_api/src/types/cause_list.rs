use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One hearing on a court's daily docket.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CauseListEntry {
    pub serial_number: String,
    pub case_number: String,
    pub parties: String,
    #[serde(default)]
    pub advocate: String,
    #[serde(default)]
    pub purpose: String,
}

/// Where and when a cause list was fetched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CauseListMetadata {
    pub state_code: String,
    pub district_code: String,
    pub court_complex_code: String,
    pub court_code: Option<String>,
    /// Requested date, `dd-mm-yyyy`.
    pub date: String,
    pub fetched_at: DateTime<Utc>,
}

/// A court's docket in source row order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CauseList {
    pub total_cases: usize,
    pub cases: Vec<CauseListEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CauseListMetadata>,
}

impl CauseList {
    pub fn from_entries(cases: Vec<CauseListEntry>) -> Self {
        Self {
            total_cases: cases.len(),
            cases,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: CauseListMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// A downloaded cause-list document. Storing it is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CauseListDocument {
    pub bytes: Vec<u8>,
    pub content_type: String,
    /// Suggested file name, e.g. `cause_list_7_12_1070012_19102026.pdf`.
    pub file_name: String,
}
