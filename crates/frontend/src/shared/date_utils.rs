/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::NaiveDate;

/// Format a date as "Jan 10, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format ISO date string as "Jan 10, 2024"; unparseable input is returned unchanged
pub fn format_date_str(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date_str("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
        assert_eq!(format_date_str("invalid"), "invalid");
    }
}
