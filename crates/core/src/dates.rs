//! Calendar helpers shared by the grid and the console.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO calendar date layout used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const HOURS_PER_DAY: u8 = 24;

/// Parses an ISO calendar date. Blank input yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Inclusive range of calendar dates. `start > end` is representable and
/// simply covers no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both bounds must parse; their order is not checked here.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// The calendar month containing `date`, used as the default range when
    /// the caller has none.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, zero when the range is inverted.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    /// Every date from `start` to `end` inclusive, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(|day| *day <= end).collect()
    }
}

/// Expands two ISO date strings into the inclusive list of dates between
/// them. Missing, unparseable or inverted bounds give an empty list.
pub fn expand_date_range(start: &str, end: &str) -> Vec<NaiveDate> {
    DateRange::parse(start, end)
        .map(|range| range.days())
        .unwrap_or_default()
}

/// Hour columns of a full day, `0..=23`.
pub fn hour_range() -> Vec<u8> {
    (0..HOURS_PER_DAY).collect()
}

pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%a)").to_string()
}

pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}")
}
