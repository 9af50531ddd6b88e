use chrono::NaiveDate;

use crate::errors::{Error, Result};
use crate::model::SleepReport;

pub const MINUTES_MIN: i64 = 0;
pub const MINUTES_MAX: i64 = 1440;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a report date strictly as YYYY-MM-DD
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| Error::InvalidDate(date.to_string()))
}

/// Validates a sleep report before it goes on the wire
pub fn validate(report: &SleepReport) -> Result<()> {
    // Validate minutes range (a full day is 1440 minutes)
    if report.sleep_minutes < MINUTES_MIN || report.sleep_minutes > MINUTES_MAX {
        return Err(Error::MinutesOutOfRange {
            got: report.sleep_minutes,
            min: MINUTES_MIN,
            max: MINUTES_MAX,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(minutes: i64) -> SleepReport {
        SleepReport {
            device_id: "device-abc".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            sleep_minutes: minutes,
        }
    }

    #[test]
    fn test_valid_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_invalid_calendar_date() {
        // Month 13, day 40
        let err = parse_date("2024-13-40").unwrap_err();
        assert!(err.to_string().contains("2024-13-40"));
    }

    #[test]
    fn test_wrong_date_order() {
        assert!(parse_date("15-01-2024").is_err());
    }

    #[test]
    fn test_non_date_string() {
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_valid_minutes() {
        assert!(validate(&report(480)).is_ok());
    }

    #[test]
    fn test_minutes_boundaries() {
        assert!(validate(&report(MINUTES_MIN)).is_ok());
        assert!(validate(&report(MINUTES_MAX)).is_ok());
    }

    #[test]
    fn test_negative_minutes() {
        let err = validate(&report(-1)).unwrap_err();
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_minutes_above_full_day() {
        let err = validate(&report(1441)).unwrap_err();
        assert!(err.to_string().contains("1441"));
    }
}
