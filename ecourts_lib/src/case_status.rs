//! Interpretation of case status panels into [`CaseResult`]s.
//!
//! A status panel is a two-column table of label/value rows. Labels vary
//! between courts, so fields are picked by case-insensitive substring
//! rules. Every rule that matches a row fires ("Court Status" sets both the
//! court name and the status), and a later row overwrites an earlier one.

use chrono::NaiveDate;
use ecourts_api::types::{CaseResult, SearchType};

use crate::dates::{self, HearingDay};
use crate::extract;

type Apply = fn(&mut CaseResult, &str, NaiveDate);

struct LabelRule {
    /// Lowercase substrings; any one matching selects the rule.
    needles: &'static [&'static str],
    apply: Apply,
}

impl LabelRule {
    fn matches(&self, label: &str) -> bool {
        self.needles.iter().any(|needle| label.contains(needle))
    }
}

const RULES: &[LabelRule] = &[
    LabelRule {
        needles: &["hearing date", "next date"],
        apply: set_hearing_date,
    },
    LabelRule {
        needles: &["court"],
        apply: set_court_name,
    },
    LabelRule {
        needles: &["serial", "sr."],
        apply: set_serial_number,
    },
    LabelRule {
        needles: &["status"],
        apply: set_case_status,
    },
];

/// Builds a [`CaseResult`] from a status panel, classifying the hearing date
/// against `today`. Never fails: a panel with nothing recognisable gives an
/// empty, not-found result.
pub fn interpret(html: &str, case_id: &str, search_type: SearchType, today: NaiveDate) -> CaseResult {
    let mut result = CaseResult::new(case_id, search_type);
    for (label, value) in extract::extract_key_value_rows(html) {
        let label = label.to_lowercase();
        for rule in RULES.iter().filter(|rule| rule.matches(&label)) {
            (rule.apply)(&mut result, &value, today);
        }
        result.details.insert(label, value);
    }
    tracing::debug!(
        case_id,
        rows = result.details.len(),
        found = result.found,
        "interpreted case status"
    );
    result
}

/// The value is always kept verbatim. Only a today or tomorrow date touches
/// the flags, and it replaces any earlier classification, so the flags stay
/// mutually exclusive. Other dates and unparseable text leave them as they are.
fn set_hearing_date(result: &mut CaseResult, value: &str, today: NaiveDate) {
    result.next_hearing_date = Some(value.to_string());
    match dates::classify(value, today) {
        Some(HearingDay::Today) => {
            result.found = true;
            result.listed_today = true;
            result.listed_tomorrow = false;
        }
        Some(HearingDay::Tomorrow) => {
            result.found = true;
            result.listed_today = false;
            result.listed_tomorrow = true;
        }
        None => {}
    }
}

fn set_court_name(result: &mut CaseResult, value: &str, _today: NaiveDate) {
    result.court_name = Some(value.to_string());
}

fn set_serial_number(result: &mut CaseResult, value: &str, _today: NaiveDate) {
    result.serial_number = Some(value.to_string());
}

fn set_case_status(result: &mut CaseResult, value: &str, _today: NaiveDate) {
    result.case_status = Some(value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn panel(rows: &[(&str, &str)]) -> String {
        let body: String = rows
            .iter()
            .map(|(label, value)| format!("<tr><td>{}</td><td>{}</td></tr>", label, value))
            .collect();
        format!("<table class=\"case_details_table\">{}</table>", body)
    }

    fn interpret_cnr(html: &str) -> CaseResult {
        interpret(html, "DLCT010012342023", SearchType::Cnr, today())
    }

    #[test]
    fn hearing_today_is_found_and_listed_today() {
        let result = interpret_cnr(&panel(&[("Next Date of Hearing", "19-10-2026")]));
        assert!(result.found);
        assert!(result.listed_today);
        assert!(!result.listed_tomorrow);
        assert_eq!(result.next_hearing_date.as_deref(), Some("19-10-2026"));
    }

    #[test]
    fn hearing_tomorrow_is_found_and_listed_tomorrow() {
        let result = interpret_cnr(&panel(&[("Next Hearing Date", "20-10-2026")]));
        assert!(result.found);
        assert!(result.listed_tomorrow);
        assert!(!result.listed_today);
    }

    #[test]
    fn other_dates_are_not_found() {
        let result = interpret_cnr(&panel(&[("Next Hearing Date", "21-10-2026")]));
        assert!(!result.found);
        assert!(!result.listed_today);
        assert!(!result.listed_tomorrow);
        assert_eq!(result.next_hearing_date.as_deref(), Some("21-10-2026"));
    }

    #[test]
    fn unparseable_date_is_kept_raw_and_unclassified() {
        let result = interpret_cnr(&panel(&[("Next Date", "next Monday")]));
        assert_eq!(result.next_hearing_date.as_deref(), Some("next Monday"));
        assert!(!result.found);
        assert!(!result.listed_today);
        assert!(!result.listed_tomorrow);
    }

    #[test]
    fn fields_are_picked_by_label_substrings() {
        let html = panel(&[
            ("Case Type", "CS DJ ADJ"),
            ("Sr. No.", "14"),
            ("Court Number and Judge", "3-District Judge"),
            ("Case Status", "Pending"),
            ("First Hearing Date", "02-01-2024"),
        ]);
        let result = interpret_cnr(&html);
        assert_eq!(result.serial_number.as_deref(), Some("14"));
        assert_eq!(result.court_name.as_deref(), Some("3-District Judge"));
        assert_eq!(result.case_status.as_deref(), Some("Pending"));
        assert_eq!(result.next_hearing_date.as_deref(), Some("02-01-2024"));
        assert_eq!(result.details.len(), 5);
        assert_eq!(result.details["case type"], "CS DJ ADJ");
        assert_eq!(result.details["sr. no."], "14");
    }

    #[test]
    fn one_label_can_match_several_rules() {
        let result = interpret_cnr(&panel(&[("Court Status", "Disposed")]));
        assert_eq!(result.court_name.as_deref(), Some("Disposed"));
        assert_eq!(result.case_status.as_deref(), Some("Disposed"));
    }

    #[test]
    fn serial_rule_accepts_either_spelling() {
        let result = interpret_cnr(&panel(&[("Serial Number", "7")]));
        assert_eq!(result.serial_number.as_deref(), Some("7"));
    }

    #[test]
    fn duplicate_labels_are_last_write_wins() {
        let html = panel(&[
            ("Case Status", "Pending"),
            ("Stage of Case", "Evidence"),
            ("Case Status", "Disposed"),
        ]);
        let result = interpret_cnr(&html);
        assert_eq!(result.case_status.as_deref(), Some("Disposed"));
        assert_eq!(result.details["case status"], "Disposed");
    }

    #[test]
    fn later_hearing_row_replaces_classification() {
        let html = panel(&[
            ("Next Hearing Date", "19-10-2026"),
            ("Next Date (Purpose)", "20-10-2026"),
        ]);
        let result = interpret_cnr(&html);
        assert!(result.found);
        assert!(result.listed_tomorrow);
        assert!(!result.listed_today);
        assert_eq!(result.next_hearing_date.as_deref(), Some("20-10-2026"));
    }

    #[test]
    fn unparseable_later_row_keeps_earlier_match() {
        let html = panel(&[
            ("Next Hearing Date", "19-10-2026"),
            ("Next Date (Purpose)", "to be fixed"),
        ]);
        let result = interpret_cnr(&html);
        assert!(result.found);
        assert!(result.listed_today);
        assert!(!result.listed_tomorrow);
        assert_eq!(result.next_hearing_date.as_deref(), Some("to be fixed"));
    }

    #[test]
    fn other_date_in_later_row_keeps_earlier_match() {
        let html = panel(&[
            ("Next Hearing Date", "20-10-2026"),
            ("Last Hearing Date", "02-01-2024"),
        ]);
        let result = interpret_cnr(&html);
        assert!(result.found);
        assert!(result.listed_tomorrow);
        assert!(!result.listed_today);
        assert_eq!(result.next_hearing_date.as_deref(), Some("02-01-2024"));
    }

    #[test]
    fn unrecognised_panel_is_empty_not_found() {
        let result = interpret_cnr(&panel(&[("Filing Number", "1234/2023")]));
        assert!(!result.found);
        assert_eq!(result.serial_number, None);
        assert_eq!(result.court_name, None);
        assert_eq!(result.next_hearing_date, None);
        assert_eq!(result.case_status, None);
        assert_eq!(result.details.len(), 1);
    }

    #[test]
    fn malformed_html_gives_empty_result() {
        for html in ["", "<table><tr><td>broken", "This case does not exist"] {
            let result = interpret_cnr(html);
            assert_eq!(result, CaseResult::new("DLCT010012342023", SearchType::Cnr));
        }
    }

    #[test]
    fn interpretation_is_deterministic() {
        let html = panel(&[
            ("Next Hearing Date", "20-10-2026"),
            ("Court Number and Judge", "5-ADJ"),
        ]);
        let first = interpret(&html, "CS/612/2021", SearchType::Details, today());
        let second = interpret(&html, "CS/612/2021", SearchType::Details, today());
        assert_eq!(first, second);
        assert_eq!(first.case_id, "CS/612/2021");
        assert_eq!(first.search_type, SearchType::Details);
    }
}
