use crate::dates;
use crate::error::EcourtsError;

pub const MAX_CODE_LENGTH: usize = 32;
pub const MAX_CASE_FIELD_LENGTH: usize = 64;
pub const CNR_LENGTH: usize = 16;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, EcourtsError> {
    if input.len() > max_len {
        return Err(EcourtsError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(EcourtsError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a location code (state, district, complex or court). Codes are
/// opaque to us, so only emptiness, length and control characters are checked.
pub fn validate_code(kind: &str, input: &str) -> Result<String, EcourtsError> {
    sanitize_text(input, MAX_CODE_LENGTH)
        .map_err(|e| EcourtsError::InvalidInput(format!("{} '{}': {}", kind, input, e)))
}

/// Validate an optional code: `None`, empty and whitespace-only all mean "not given".
pub fn validate_optional_code(kind: &str, input: Option<&str>) -> Result<Option<String>, EcourtsError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => validate_code(kind, code).map(Some),
        None => Ok(None),
    }
}

/// Validate a case record number: 16 ASCII letters and digits, uppercased.
pub fn validate_cnr(input: &str) -> Result<String, EcourtsError> {
    let upper = input.trim().to_ascii_uppercase();
    if upper.len() != CNR_LENGTH || !upper.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EcourtsError::InvalidInput(format!(
            "CNR '{}' must be {} letters and digits (e.g. DLCT010012342023)",
            input, CNR_LENGTH
        )));
    }
    Ok(upper)
}

/// Validate a case type or case number as typed by the user.
pub fn validate_case_field(kind: &str, input: &str) -> Result<String, EcourtsError> {
    sanitize_text(input, MAX_CASE_FIELD_LENGTH)
        .map_err(|e| EcourtsError::InvalidInput(format!("{} '{}': {}", kind, input, e)))
}

/// Validate a four-digit case registration year.
pub fn validate_case_year(input: &str) -> Result<String, EcourtsError> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(EcourtsError::InvalidInput(format!(
            "case year '{}' must be a four-digit year",
            input
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a cause-list date. It must be a real `dd-mm-yyyy` date; the
/// trimmed input is returned as given.
pub fn validate_cause_list_date(input: &str) -> Result<String, EcourtsError> {
    let trimmed = input.trim();
    if dates::parse_portal_date(trimmed).is_none() {
        return Err(EcourtsError::InvalidInput(format!(
            "date '{}' must be a valid dd-mm-yyyy date",
            input
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_text(" 12\t\n", 10).unwrap(), "12");
        assert_eq!(sanitize_text("a\u{0}b", 10).unwrap(), "ab");
        assert!(sanitize_text("\n\t", 10).is_err());
        assert!(sanitize_text("12345678901", 10).is_err());
    }

    #[test]
    fn codes_are_trimmed() {
        assert_eq!(validate_code("state code", " 7 ").unwrap(), "7");
        let err = validate_code("district code", "").unwrap_err();
        assert!(err.to_string().contains("district code"));
    }

    #[test]
    fn optional_codes_treat_blank_as_absent() {
        assert_eq!(validate_optional_code("court code", None).unwrap(), None);
        assert_eq!(validate_optional_code("court code", Some("  ")).unwrap(), None);
        assert_eq!(
            validate_optional_code("court code", Some(" 3 ")).unwrap(),
            Some("3".to_string())
        );
    }

    #[test]
    fn cnr_is_uppercased_and_length_checked() {
        assert_eq!(validate_cnr(" dlct010012342023 ").unwrap(), "DLCT010012342023");
        assert!(validate_cnr("DLCT01001234").is_err());
        assert!(validate_cnr("DLCT-10012342023").is_err());
        assert!(validate_cnr("").is_err());
    }

    #[test]
    fn case_year_must_be_four_digits() {
        assert_eq!(validate_case_year("2021").unwrap(), "2021");
        assert!(validate_case_year("21").is_err());
        assert!(validate_case_year("20x1").is_err());
    }

    #[test]
    fn case_fields_allow_spaces() {
        assert_eq!(validate_case_field("case type", " CS DJ ADJ ").unwrap(), "CS DJ ADJ");
        assert!(validate_case_field("case number", " ").is_err());
    }

    #[test]
    fn cause_list_date_must_parse() {
        assert_eq!(validate_cause_list_date(" 19-10-2026").unwrap(), "19-10-2026");
        assert!(validate_cause_list_date("2026-10-19").is_err());
        assert!(validate_cause_list_date("30-02-2026").is_err());
    }
}
