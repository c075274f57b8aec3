//! Location hierarchy resolution: state → district → court complex → court.

use ecourts_api::types::LocationEntry;

use crate::extract;

/// `id`/`name` of the state select on the cause-list page.
pub const STATE_FIELD: &str = "state_code";

/// Used when the portal yields no states at all.
const DEFAULT_STATES: [(&str, &str); 10] = [
    ("1", "Delhi"),
    ("2", "Maharashtra"),
    ("3", "Karnataka"),
    ("4", "Tamil Nadu"),
    ("5", "Gujarat"),
    ("6", "Rajasthan"),
    ("7", "West Bengal"),
    ("8", "Uttar Pradesh"),
    ("9", "Madhya Pradesh"),
    ("10", "Punjab"),
];

/// The built-in state list.
pub fn default_states() -> Vec<LocationEntry> {
    DEFAULT_STATES
        .iter()
        .map(|(code, name)| LocationEntry::new(*code, *name))
        .collect()
}

fn to_entries(pairs: Vec<(String, String)>) -> Vec<LocationEntry> {
    pairs
        .into_iter()
        .map(|(code, name)| LocationEntry { code, name })
        .collect()
}

/// States from the cause-list page. Reads the `state_code` select when the
/// page has one, otherwise any options present. Zero states, whatever the
/// reason, yields [`default_states`]; portal and fallback entries are never mixed.
pub fn resolve_states(html: &str) -> Vec<LocationEntry> {
    let pairs = extract::extract_select_options(html, STATE_FIELD)
        .unwrap_or_else(|| extract::extract_options(html));
    let states = to_entries(pairs);
    if states.is_empty() {
        tracing::debug!("no state options in response, using built-in state list");
        return default_states();
    }
    states
}

pub fn resolve_districts(html: &str) -> Vec<LocationEntry> {
    to_entries(extract::extract_options(html))
}

pub fn resolve_complexes(html: &str) -> Vec<LocationEntry> {
    to_entries(extract::extract_options(html))
}

pub fn resolve_courts(html: &str) -> Vec<LocationEntry> {
    to_entries(extract::extract_options(html))
}
