//! Year and freshness heuristics shared by both hooks.
//!
//! Everything here is a pure function of the text, the keyword lists and the
//! reference date handed to [`Classifier::new`].

pub mod findings;
pub mod keywords;
pub mod signals;
pub mod years;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::config::AppConfig;
use crate::error::HookError;

pub use findings::Finding;
pub use keywords::{dated_markers, staleness_pattern, KeywordSet, WordSet};
pub use signals::QuerySignals;
pub use years::{join_years, year_token_spans, year_tokens, years_matching, YearWindow};

#[derive(Debug, Clone)]
pub struct Classifier {
    window: YearWindow,
    historical: KeywordSet,
    time_sensitive: KeywordSet,
    freshness: WordSet,
    staleness: Option<Regex>,
}

impl Classifier {
    pub fn new(cfg: &AppConfig, today: NaiveDate) -> Result<Self, HookError> {
        if !(1000..=9999).contains(&today.year()) {
            return Err(HookError::ReferenceYear(today.year()));
        }
        Ok(Self {
            window: YearWindow::for_date(today, &cfg.years),
            historical: KeywordSet::new(&cfg.keywords.historical),
            time_sensitive: KeywordSet::new(&cfg.keywords.time_sensitive),
            freshness: WordSet::new("freshness", &cfg.keywords.freshness)?,
            staleness: staleness_pattern(&cfg.keywords.staleness_cues)?,
        })
    }

    pub fn window(&self) -> &YearWindow {
        &self.window
    }

    pub fn reference_year(&self) -> i32 {
        self.window.reference_year()
    }

    pub fn classify_query(&self, query: &str) -> QuerySignals {
        let w = &self.window;
        QuerySignals {
            historical: owned(self.historical.hits(query)),
            time_sensitive: owned(self.time_sensitive.hits(query)),
            outdated_years: years_matching(query, |y| w.is_outdated(y)),
            present_years: years_matching(query, |y| w.is_present(y)),
        }
    }

    /// Findings in the order: outdated years, dated markers, undated
    /// freshness claims.
    pub fn scan_result(&self, text: &str) -> Vec<Finding> {
        let w = &self.window;
        let mut findings = Vec::new();

        let outdated = years_matching(text, |y| w.is_outdated(y));
        if !outdated.is_empty() {
            findings.push(Finding::OutdatedYears(outdated));
        }

        if let Some(re) = &self.staleness {
            let mut seen: Vec<String> = Vec::new();
            for (marker, year) in dated_markers(re, text) {
                if !w.is_before_reference(year) {
                    continue;
                }
                let phrase = collapse_whitespace(marker);
                if seen.contains(&phrase) {
                    continue;
                }
                seen.push(phrase.clone());
                findings.push(Finding::StaleMarker { phrase, year });
            }
        }

        let words = self.freshness.hits(text);
        let reference = w.reference_year();
        if !words.is_empty() && !year_tokens(text).any(|y| y == reference) {
            findings.push(Finding::UndatedFreshness {
                words,
                reference_year: reference,
            });
        }

        findings
    }
}

fn owned(hits: Vec<&str>) -> Vec<String> {
    hits.into_iter().map(str::to_string).collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
