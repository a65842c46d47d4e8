use chrono::NaiveDate;

use crate::{LedgerError, LedgerResult};

/// Structural check only: digits and dashes in `YYYY-MM-DD` positions.
/// Calendar validity is a separate, stricter concern (`parse_iso_date_strict`);
/// year/month bucketing keys off shape alone.
pub fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

/// First four characters of a well-formed date, empty otherwise. A malformed
/// date therefore only matches wildcard year filters and never lands in a
/// monthly bucket.
pub fn extract_year(date: &str) -> &str {
    if looks_like_iso_date(date) { &date[..4] } else { "" }
}

/// Characters 5..7 of a well-formed date, empty otherwise.
pub fn extract_month(date: &str) -> &str {
    if looks_like_iso_date(date) {
        &date[5..7]
    } else {
        ""
    }
}

/// `YYYY-MM` bucket key, or None when the date fails structural extraction.
pub fn month_bucket(date: &str) -> Option<String> {
    let year = extract_year(date);
    let month = extract_month(date);
    if year.is_empty() || month.is_empty() {
        return None;
    }
    Some(format!("{year}-{month}"))
}

pub fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> LedgerResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(LedgerError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        LedgerError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with valid calendar values."),
            Some(command),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{extract_month, extract_year, month_bucket, parse_iso_date_strict};

    #[test]
    fn extraction_uses_fixed_offsets_on_well_formed_dates() {
        assert_eq!(extract_year("2024-01-15"), "2024");
        assert_eq!(extract_month("2024-01-15"), "01");
        assert_eq!(month_bucket("2024-01-15"), Some("2024-01".to_string()));
    }

    #[test]
    fn extraction_is_empty_for_malformed_dates() {
        for malformed in ["", "2024", "2024/01/15", "15-01-2024x", "not-a-date"] {
            assert_eq!(extract_year(malformed), "", "input: {malformed}");
            assert_eq!(extract_month(malformed), "", "input: {malformed}");
            assert_eq!(month_bucket(malformed), None, "input: {malformed}");
        }
    }

    #[test]
    fn extraction_does_not_require_calendar_validity() {
        // Shape-only contract: an impossible month still buckets.
        assert_eq!(extract_month("2024-99-15"), "99");
        assert_eq!(month_bucket("2024-99-15"), Some("2024-99".to_string()));
    }

    #[test]
    fn strict_parse_rejects_impossible_calendar_dates() {
        assert!(parse_iso_date_strict("2026-02-31", "date", "txn add").is_err());
        assert!(parse_iso_date_strict("2026-13-01", "date", "txn add").is_err());
        assert!(parse_iso_date_strict("2026-2-1", "date", "txn add").is_err());
        assert!(parse_iso_date_strict("2026-02-28", "date", "txn add").is_ok());
    }

    #[test]
    fn strict_parse_names_the_offending_field() {
        let result = parse_iso_date_strict("bad", "date", "txn edit");
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains("`date`"));
        }
    }
}
