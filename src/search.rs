//! Date-window narrowing for already-loaded notes.
//!
//! Filters operate on notes the store has handed out; nothing here reads
//! the backing file. The recognized filter literals are `today`, `week`
//! (last 7 days inclusive), `month` (last 30 days inclusive), an exact
//! `YYYY-MM-DD` day, a `YYYY-MM` month, and a `YYYY` year. Anything else
//! matches no notes at all.

use crate::note::Note;
use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime};

/// A parsed date-filter literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Today,
    Week,
    Month,
    Day(NaiveDate),
    YearMonth { year: i32, month: u32 },
    Year(i32),
}

impl DateFilter {
    /// Parses a filter literal, or `None` for anything outside the
    /// grammar. Literal dates are told apart by length alone, as in the
    /// user-facing help text.
    pub fn parse(raw: &str) -> Option<DateFilter> {
        match raw {
            "today" => Some(DateFilter::Today),
            "week" => Some(DateFilter::Week),
            "month" => Some(DateFilter::Month),
            _ => match raw.len() {
                10 => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(DateFilter::Day),
                7 => {
                    let (year, month) = raw.split_once('-')?;
                    Some(DateFilter::YearMonth {
                        year: year.parse().ok()?,
                        month: month.parse().ok()?,
                    })
                }
                4 => raw.parse().ok().map(DateFilter::Year),
                _ => None,
            },
        }
    }

    /// Whether a creation date falls inside this filter's window,
    /// relative to `today`.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            DateFilter::Today => date == today,
            DateFilter::Week => date >= today - Days::new(7),
            DateFilter::Month => date >= today - Days::new(30),
            DateFilter::Day(day) => date == day,
            DateFilter::YearMonth { year, month } => {
                date.year() == year && date.month() == month
            }
            DateFilter::Year(year) => date.year() == year,
        }
    }
}

/// Narrows `notes` to those created inside the window `raw` describes,
/// preserving their order.
///
/// An unrecognized literal yields an empty result, and notes whose
/// `created_at` does not parse as a naive ISO-8601 datetime are skipped
/// silently rather than treated as an error.
pub fn filter_by_date(notes: Vec<Note>, raw: &str) -> Vec<Note> {
    let Some(filter) = DateFilter::parse(raw) else {
        return Vec::new();
    };

    let today = Local::now().date_naive();

    notes
        .into_iter()
        .filter(|note| {
            note.created_at
                .parse::<NaiveDateTime>()
                .map(|created| filter.matches(created.date(), today))
                .unwrap_or(false)
        })
        .collect()
}
