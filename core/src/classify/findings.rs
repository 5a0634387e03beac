use std::fmt;

use super::years::join_years;

/// One reason a search result may be out of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Years from the outdated window appear somewhere in the text.
    OutdatedYears(Vec<i32>),
    /// A date stamp such as "Copyright 2019" or "Updated: 2021".
    StaleMarker { phrase: String, year: i32 },
    /// Freshness wording with no mention of the reference year.
    UndatedFreshness { words: Vec<String>, reference_year: i32 },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::OutdatedYears(years) => {
                write!(f, "Mentions outdated year(s): {}", join_years(years))
            }
            Finding::StaleMarker { phrase, year } => {
                write!(f, "Content appears dated {year}: \"{phrase}\"")
            }
            Finding::UndatedFreshness {
                words,
                reference_year,
            } => write!(
                f,
                "Claims freshness ({}) but never mentions {reference_year}",
                words.join(", ")
            ),
        }
    }
}
