use chrono::NaiveDate;

use crate::error::AppError;

/// Parses an ISO "YYYY-MM-DD" date from a request field.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - The string is not a valid ISO date
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Validates a wall-clock time in "HH:MM" form and returns it normalized.
///
/// Accepts "7:30" and returns "07:30" so string comparison of times stays
/// consistent across handlers.
///
/// # Returns
/// - `Ok(String)` - Zero-padded "HH:MM"
/// - `Err(AppError::BadRequest)` - Not a valid time of day
pub fn parse_time(value: &str) -> Result<String, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value));

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2026-03-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_date("02/03/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn normalizes_time() {
        assert_eq!(parse_time("7:30").unwrap(), "07:30");
        assert_eq!(parse_time("19:05").unwrap(), "19:05");
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
    }
}
