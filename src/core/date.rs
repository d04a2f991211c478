//! Date range enumeration.
//!
//! Expands a start/end pair into every day, week or month boundary between
//! them (inclusive), formatted with the period's label format.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::config::date_format;
use crate::core::error::DateRangeError;

/// Granularity of a date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Days,
    Weeks,
    Months,
}

impl Period {
    /// Display format of each boundary (`YYYY-MM-DD`, `YYYY-WW`, `YYYY-MM`).
    pub fn format_label(&self) -> &'static str {
        match self {
            Self::Days => date_format::DAYS,
            Self::Weeks => date_format::WEEKS,
            Self::Months => date_format::MONTHS,
        }
    }

    /// Parse an input date written in this period's format.
    ///
    /// Weeks are read as the Monday of ISO week `WW` in year `YYYY`; months
    /// as the first day of the month.
    pub fn parse_date(&self, value: &str) -> Result<NaiveDate, DateRangeError> {
        let value = value.trim();
        let parsed = match self {
            Self::Days => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
            Self::Months => NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok(),
            Self::Weeks => value.split_once('-').and_then(|(year, week)| {
                let year = year.parse::<i32>().ok()?;
                let week = week.parse::<u32>().ok()?;
                NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            }),
        };

        parsed.ok_or_else(|| DateRangeError::InvalidDate {
            value: value.to_string(),
            format: self.format_label(),
        })
    }

    /// Format a boundary date.
    ///
    /// Week labels pair the calendar year with the ISO week number, so the
    /// last days of December can render as week `01` of the same year.
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self {
            Self::Days => date.format("%Y-%m-%d").to_string(),
            Self::Weeks => format!("{:04}-{:02}", date.year(), date.iso_week().week()),
            Self::Months => date.format("%Y-%m").to_string(),
        }
    }

    /// The `n`th boundary after `start`, or `None` on calendar overflow.
    fn nth_after(&self, start: NaiveDate, n: u32) -> Option<NaiveDate> {
        match self {
            Self::Days => start.checked_add_days(Days::new(u64::from(n))),
            Self::Weeks => start.checked_add_days(Days::new(7 * u64::from(n))),
            Self::Months => start.checked_add_months(Months::new(n)),
        }
    }
}

impl FromStr for Period {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(DateRangeError::MissingPeriod),
            "days" | "d" => Ok(Self::Days),
            "weeks" | "w" => Ok(Self::Weeks),
            "months" | "m" => Ok(Self::Months),
            other => Err(DateRangeError::UnknownPeriod(other.to_string())),
        }
    }
}

/// List every period boundary from `start` to `end`, inclusive.
///
/// `period` is one of `days`/`d`, `weeks`/`w`, `months`/`m`. An empty period
/// is [`DateRangeError::MissingPeriod`]; anything else unrecognized is
/// [`DateRangeError::UnknownPeriod`].
pub fn date_range(start: &str, end: &str, period: &str) -> Result<Vec<String>, DateRangeError> {
    date_range_by(start, end, period.parse()?)
}

/// Typed form of [`date_range`].
pub fn date_range_by(start: &str, end: &str, period: Period) -> Result<Vec<String>, DateRangeError> {
    let start = period.parse_date(start)?;
    let end = period.parse_date(end)?;

    Ok((0u32..)
        .map_while(|n| period.nth_after(start, n))
        .take_while(|date| *date <= end)
        .map(|date| period.format_date(date))
        .collect())
}
