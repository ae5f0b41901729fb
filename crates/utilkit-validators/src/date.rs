use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` for a real calendar date written exactly as `YYYY-MM-DD`.
///
/// ```
/// use utilkit_validators::is_valid_date;
///
/// assert!(is_valid_date("2023-09-05"));
/// assert!(!is_valid_date("2023-02-30"));
/// assert!(!is_valid_date("2023-9-5"));
/// ```
pub fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|parsed| parsed.format(DATE_FORMAT).to_string() == date)
        .unwrap_or(false)
}
