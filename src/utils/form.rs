//! Small helpers for turning form input into typed values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use validator::ValidationError;

use crate::error::{AppError, AppResult};

/// Validator hook: rejects empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn parse_f64(text: &str, message: &str) -> AppResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::validation(message))
}

pub fn parse_i64(text: &str, message: &str) -> AppResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(message))
}

/// Hour/minute picked on a form, as entered in the time spinners.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn on(self, date: NaiveDate) -> AppResult<NaiveDateTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .map(|t| date.and_time(t))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid time {:02}:{:02}",
                    self.hour, self.minute
                ))
            })
    }
}

impl std::str::FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Expected HH:MM, got '{}'", s))?;
        let hour = h.parse::<u32>().map_err(|_| format!("Invalid hour in '{}'", s))?;
        let minute = m.parse::<u32>().map_err(|_| format!("Invalid minute in '{}'", s))?;
        if hour > 23 || minute > 59 {
            return Err(format!("Time out of range: '{}'", s));
        }
        Ok(Self { hour, minute })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

pub const DEFAULT_START: ClockTime = ClockTime::new(9, 0);
pub const DEFAULT_END: ClockTime = ClockTime::new(17, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn numbers_from_text() {
        assert_eq!(parse_f64(" 2500.75 ", "bad").unwrap(), 2500.75);
        assert!(parse_f64("lots", "bad").is_err());
        assert!(parse_f64("NaN", "bad").is_err());
        assert_eq!(parse_i64("12", "bad").unwrap(), 12);
        assert!(parse_i64("1.5", "bad").is_err());
    }

    #[test]
    fn clock_time_parsing() {
        assert_eq!("09:30".parse::<ClockTime>().unwrap(), ClockTime::new(9, 30));
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("9".parse::<ClockTime>().is_err());
        assert_eq!(ClockTime::new(7, 5).to_string(), "07:05");
    }

    #[test]
    fn clock_time_on_date() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let at = DEFAULT_END.on(d).unwrap();
        assert_eq!(at.to_string(), "2024-02-29 17:00:00");
        assert!(ClockTime::new(25, 0).on(d).is_err());
    }
}
