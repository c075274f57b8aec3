use serde::{Deserialize, Serialize};

/// One level of the location hierarchy (state, district, court complex or
/// court) as listed in a portal option fragment. Identity is `code`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationEntry {
    pub code: String,
    pub name: String,
}

impl LocationEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
