//! Date utilities: period strings for list/export filters.

use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - `YYYY`       → whole year
/// - `YYYY-MM`    → whole month
/// - `YYYY-MM-DD` → single day
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_period() {
        let (a, b) = period_bounds("2025-03-15").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn month_period() {
        let (a, b) = period_bounds("2024-02").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn year_period() {
        let (a, b) = period_bounds("2025").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(period_bounds("last-week").is_err());
        assert!(period_bounds("2025-13").is_err());
    }
}
