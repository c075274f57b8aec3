//! Portal date handling and hearing-day classification.

use chrono::NaiveDate;

/// The one date format the portal uses for hearing and cause-list dates.
pub const PORTAL_DATE_FORMAT: &str = "%d-%m-%Y";

/// Where a hearing falls relative to the evaluation date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HearingDay {
    Today,
    Tomorrow,
}

/// Parses `dd-mm-yyyy`. Anything else is `None`.
pub fn parse_portal_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), PORTAL_DATE_FORMAT).ok()
}

pub fn format_portal_date(date: NaiveDate) -> String {
    date.format(PORTAL_DATE_FORMAT).to_string()
}

/// `Today` when `date` is `today`, `Tomorrow` when it is the next calendar day.
pub fn hearing_day(date: NaiveDate, today: NaiveDate) -> Option<HearingDay> {
    if date == today {
        Some(HearingDay::Today)
    } else if today.succ_opt() == Some(date) {
        Some(HearingDay::Tomorrow)
    } else {
        None
    }
}

/// Parses a raw hearing-date value and classifies it. Unparseable values and
/// dates outside today/tomorrow are both `None`.
pub fn classify(value: &str, today: NaiveDate) -> Option<HearingDay> {
    hearing_day(parse_portal_date(value)?, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_portal_date("19-10-2026"), Some(date(2026, 10, 19)));
        assert_eq!(parse_portal_date(" 01-02-2025 "), Some(date(2025, 2, 1)));
    }

    #[test]
    fn rejects_other_formats() {
        assert_eq!(parse_portal_date("2026-10-19"), None);
        assert_eq!(parse_portal_date("19/10/2026"), None);
        assert_eq!(parse_portal_date("next Monday"), None);
        assert_eq!(parse_portal_date("31-02-2026"), None);
        assert_eq!(parse_portal_date(""), None);
    }

    #[test]
    fn formats_with_leading_zeros() {
        assert_eq!(format_portal_date(date(2026, 3, 5)), "05-03-2026");
    }

    #[test]
    fn classifies_today_and_tomorrow_only() {
        let today = date(2026, 10, 19);
        assert_eq!(hearing_day(today, today), Some(HearingDay::Today));
        assert_eq!(hearing_day(date(2026, 10, 20), today), Some(HearingDay::Tomorrow));
        assert_eq!(hearing_day(date(2026, 10, 18), today), None);
        assert_eq!(hearing_day(date(2026, 10, 21), today), None);
    }

    #[test]
    fn tomorrow_crosses_month_and_year() {
        assert_eq!(
            classify("01-01-2027", date(2026, 12, 31)),
            Some(HearingDay::Tomorrow)
        );
        assert_eq!(
            classify("01-03-2028", date(2028, 2, 29)),
            Some(HearingDay::Tomorrow)
        );
    }

    #[test]
    fn classify_ignores_unparseable() {
        assert_eq!(classify("adjourned sine die", date(2026, 10, 19)), None);
    }
}
