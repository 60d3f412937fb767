//! Resolution of report periods into concrete date ranges.
//!
//! All calendar boundaries are computed in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

/// Named or explicit window a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// The last 7 days up to now
    Weekly,
    /// The current calendar month
    Monthly,
    /// The current calendar year
    Yearly,
    /// Caller-supplied start and end
    Custom,
}

/// Inclusive `[start, end]` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Midnight UTC on the first day of the given month
fn first_instant(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// First instant of the month containing `now` and of the month after it.
pub fn month_bounds(now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = first_instant(now.year(), now.month())?;
    let next = if now.month() == 12 {
        first_instant(now.year() + 1, 1)?
    } else {
        first_instant(now.year(), now.month() + 1)?
    };
    Some((start, next))
}

fn year_bounds(now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((first_instant(now.year(), 1)?, first_instant(now.year() + 1, 1)?))
}

/// Turn a period (and, for `custom`, explicit bounds) into an inclusive range.
/// Calendar periods end on the last millisecond before the next period starts.
pub fn resolve_range(
    period: ReportPeriod,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateRange, AppError> {
    let last_millisecond = Duration::milliseconds(1);
    let out_of_range = || AppError::ValidationError("Date is out of supported range".to_string());

    match period {
        ReportPeriod::Weekly => Ok(DateRange {
            start: now - Duration::days(7),
            end: now,
        }),
        ReportPeriod::Monthly => {
            let (start, next) = month_bounds(now).ok_or_else(out_of_range)?;
            Ok(DateRange {
                start,
                end: next - last_millisecond,
            })
        }
        ReportPeriod::Yearly => {
            let (start, next) = year_bounds(now).ok_or_else(out_of_range)?;
            Ok(DateRange {
                start,
                end: next - last_millisecond,
            })
        }
        ReportPeriod::Custom => match (start, end) {
            (Some(start), Some(end)) if start > end => Err(AppError::ValidationError(
                "Start date must not be after end date".to_string(),
            )),
            (Some(start), Some(end)) => Ok(DateRange { start, end }),
            _ => Err(AppError::ValidationError(
                "Start and end dates are required for custom period".to_string(),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_weekly_is_last_seven_days() {
        let now = at(2024, 3, 10, 15, 30, 0);
        let range = resolve_range(ReportPeriod::Weekly, None, None, now).unwrap();
        assert_eq!(range.start, at(2024, 3, 3, 15, 30, 0));
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_monthly_covers_calendar_month() {
        let now = at(2024, 2, 14, 9, 0, 0);
        let range = resolve_range(ReportPeriod::Monthly, None, None, now).unwrap();
        assert_eq!(range.start, at(2024, 2, 1, 0, 0, 0));
        assert_eq!(
            range.end,
            at(2024, 2, 29, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_monthly_in_december_rolls_year() {
        let now = at(2023, 12, 31, 23, 0, 0);
        let range = resolve_range(ReportPeriod::Monthly, None, None, now).unwrap();
        assert_eq!(range.start, at(2023, 12, 1, 0, 0, 0));
        assert_eq!(
            range.end,
            at(2023, 12, 31, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_yearly_covers_calendar_year() {
        let now = at(2025, 6, 1, 12, 0, 0);
        let range = resolve_range(ReportPeriod::Yearly, None, None, now).unwrap();
        assert_eq!(range.start, at(2025, 1, 1, 0, 0, 0));
        assert_eq!(
            range.end,
            at(2025, 12, 31, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_custom_requires_both_dates() {
        let now = at(2024, 1, 1, 0, 0, 0);
        for (start, end) in [(None, None), (Some(now), None), (None, Some(now))] {
            let result = resolve_range(ReportPeriod::Custom, start, end, now);
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[test]
    fn test_custom_rejects_inverted_range() {
        let start = at(2024, 5, 2, 0, 0, 0);
        let end = at(2024, 5, 1, 0, 0, 0);
        let result = resolve_range(ReportPeriod::Custom, Some(start), Some(end), start);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_custom_range_is_inclusive() {
        let start = at(2024, 5, 1, 0, 0, 0);
        let end = at(2024, 5, 31, 12, 0, 0);
        let range = resolve_range(ReportPeriod::Custom, Some(start), Some(end), end).unwrap();
        assert_eq!(range, DateRange { start, end });
    }

    #[test]
    fn test_month_bounds_half_open() {
        let (start, next) = month_bounds(at(2024, 11, 5, 8, 0, 0)).unwrap();
        assert_eq!(start, at(2024, 11, 1, 0, 0, 0));
        assert_eq!(next, at(2024, 12, 1, 0, 0, 0));
    }

    #[test]
    fn test_period_parses_lowercase() {
        let period: ReportPeriod = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(period, ReportPeriod::Yearly);
        assert!(serde_json::from_str::<ReportPeriod>("\"daily\"").is_err());
    }
}
