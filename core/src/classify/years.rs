use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::YearsConfig;

lazy_static! {
    static ref YEAR_TOKEN: Regex = Regex::new(r"\b[0-9]{4}\b").unwrap();
}

/// Dated cues before this are not treated as calendar years.
pub const EARLIEST_YEAR: i32 = 1900;

/// Past and present year ranges around a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    reference: i32,
    past_window: i32,
    future_window: i32,
}

impl YearWindow {
    pub fn new(reference: i32, past_window: u32, future_window: u32) -> Self {
        Self {
            reference,
            past_window: i32::try_from(past_window).unwrap_or(i32::MAX),
            future_window: i32::try_from(future_window).unwrap_or(i32::MAX),
        }
    }

    pub fn for_date(today: NaiveDate, cfg: &YearsConfig) -> Self {
        Self::new(today.year(), cfg.past_window, cfg.future_window)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference
    }

    pub fn past(&self) -> RangeInclusive<i32> {
        self.reference.saturating_sub(self.past_window)..=self.reference - 1
    }

    pub fn present(&self) -> RangeInclusive<i32> {
        self.reference..=self.reference.saturating_add(self.future_window)
    }

    pub fn is_outdated(&self, year: i32) -> bool {
        self.past().contains(&year)
    }

    pub fn is_present(&self, year: i32) -> bool {
        self.present().contains(&year)
    }

    /// Any plausible calendar year before the reference year, regardless of
    /// the configured past window.
    pub fn is_before_reference(&self, year: i32) -> bool {
        (EARLIEST_YEAR..self.reference).contains(&year)
    }
}

pub fn year_tokens(text: &str) -> impl Iterator<Item = i32> + '_ {
    year_token_spans(text).map(|(_, year)| year)
}

/// Year tokens with the byte offset where each one ends.
pub fn year_token_spans(text: &str) -> impl Iterator<Item = (usize, i32)> + '_ {
    YEAR_TOKEN.find_iter(text).filter_map(|m| {
        let year = m.as_str().parse::<i32>().ok()?;
        Some((m.end(), year))
    })
}

/// Distinct years in `text` accepted by `keep`, ascending.
pub fn years_matching(text: &str, keep: impl Fn(i32) -> bool) -> Vec<i32> {
    year_tokens(text)
        .filter(|y| keep(*y))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn join_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
