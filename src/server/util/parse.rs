use chrono::{NaiveDate, NaiveTime};

use crate::server::{error::AppError, model::ride::DateRange};

/// Date format accepted by ride history queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date pair into a half-open UTC time window covering both days.
///
/// The window starts at 00:00:00 on `start` and ends at 00:00:00 on the day after `end`
/// (exclusive), so a ride that finishes any time on the end date is included.
///
/// # Arguments
/// - `start` - First day of the window
/// - `end` - Last day of the window
///
/// # Returns
/// - `Ok(DateRange)` - Parsed window
/// - `Err(AppError::BadRequest)` - A date is malformed or `start` is after `end`
pub fn parse_date_range(start: &str, end: &str) -> Result<DateRange, AppError> {
    let start_date = parse_date("start_time", start)?;
    let end_date = parse_date("end_time", end)?;

    if start_date > end_date {
        return Err(AppError::BadRequest(
            "start_time must not be after end_time".to_string(),
        ));
    }

    let day_after_end = end_date.succ_opt().ok_or_else(|| {
        AppError::BadRequest(format!("end_time '{}' is out of range", end))
    })?;

    Ok(DateRange {
        start: start_date.and_time(NaiveTime::MIN).and_utc(),
        end: day_after_end.and_time(NaiveTime::MIN).and_utc(),
    })
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid {} '{}', expected format YYYY-MM-DD",
            field, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn covers_whole_end_day() {
        let range = parse_date_range("2025-03-01", "2025-03-02").unwrap();

        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn single_day_window() {
        let range = parse_date_range("2025-03-01", "2025-03-01").unwrap();

        assert!(range.start < range.end);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(
            parse_date_range("03/01/2025", "2025-03-02"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_date_range("2025-03-01", "2025-13-40"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(matches!(
            parse_date_range("2025-03-05", "2025-03-01"),
            Err(AppError::BadRequest(_))
        ));
    }
}
