//! Interpretation of cause-list tables.

use ecourts_api::types::{CauseList, CauseListEntry};

use crate::extract;

/// Serial, case number, parties and advocate. Shorter rows are spacers or footers.
const MIN_CELLS: usize = 4;

/// Builds a [`CauseList`] from the first table in `html`, in docket order.
/// Metadata is left unset for the caller to attach.
pub fn interpret(html: &str) -> CauseList {
    let cases: Vec<CauseListEntry> = extract::extract_table(html)
        .into_iter()
        .filter_map(entry_from_cells)
        .collect();
    tracing::debug!(count = cases.len(), "interpreted cause list");
    CauseList::from_entries(cases)
}

fn entry_from_cells(cells: Vec<String>) -> Option<CauseListEntry> {
    if cells.len() < MIN_CELLS {
        return None;
    }
    let mut cells = cells.into_iter();
    Some(CauseListEntry {
        serial_number: cells.next()?,
        case_number: cells.next()?,
        parties: cells.next()?,
        advocate: cells.next().unwrap_or_default(),
        purpose: cells.next().unwrap_or_default(),
    })
}
