use regex::Regex;

use super::years::year_token_spans;
use crate::error::HookError;

/// Most characters allowed between a cue word and the year it dates.
pub const CUE_YEAR_GAP: usize = 20;

/// Case-insensitive substring matcher.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    pub fn new(terms: &[String]) -> Self {
        let terms = terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn hits(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|t| lower.contains(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Case-insensitive whole-word matcher.
#[derive(Debug, Clone)]
pub struct WordSet {
    pattern: Option<Regex>,
}

impl WordSet {
    pub fn new(list: &'static str, words: &[String]) -> Result<Self, HookError> {
        let pattern = match alternation(words) {
            Some(alt) => Some(
                Regex::new(&format!(r"(?i)\b(?:{alt})\b"))
                    .map_err(|source| HookError::Pattern { list, source })?,
            ),
            None => None,
        };
        Ok(Self { pattern })
    }

    /// Distinct matched words, lowercased, in order of first appearance.
    pub fn hits(&self, text: &str) -> Vec<String> {
        let Some(re) = &self.pattern else {
            return vec![];
        };
        let mut out: Vec<String> = Vec::new();
        for m in re.find_iter(text) {
            let w = m.as_str().to_lowercase();
            if !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }
}

/// Case-insensitive whole-word matcher for the staleness cue words.
pub fn staleness_pattern(cues: &[String]) -> Result<Option<Regex>, HookError> {
    let Some(alt) = alternation(cues) else {
        return Ok(None);
    };
    Regex::new(&format!(r"(?i)\b(?:{alt})\b"))
        .map(Some)
        .map_err(|source| HookError::Pattern {
            list: "staleness_cues",
            source,
        })
}

/// Every year that follows a cue word on the same line within
/// [`CUE_YEAR_GAP`] characters, paired with the text from the cue through
/// that year.
pub fn dated_markers<'t>(cues: &Regex, text: &'t str) -> Vec<(&'t str, i32)> {
    let mut out = Vec::new();
    for cue in cues.find_iter(text) {
        let rest = &text[cue.end()..];
        let line = rest.split('\n').next().unwrap_or_default();
        for (end, year) in year_token_spans(line) {
            let gap = line[..end - 4].chars().count();
            if gap > CUE_YEAR_GAP {
                break;
            }
            out.push((&text[cue.start()..cue.end() + end], year));
        }
    }
    out
}

fn alternation(words: &[String]) -> Option<String> {
    let parts: Vec<String> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keyword_set_matches_substrings_ignoring_case() {
        let set = KeywordSet::new(&list(&["History", "best practice", "  "]));
        assert_eq!(set.hits("Brief HISTORY of Rust"), vec!["history"]);
        assert_eq!(set.hits("React best practices"), vec!["best practice"]);
        assert!(set.hits("nothing here").is_empty());
    }

    #[test]
    fn word_set_requires_whole_words() {
        let set = WordSet::new("freshness", &list(&["new", "latest"])).unwrap();
        assert_eq!(set.hits("News renewed"), Vec::<String>::new());
        assert_eq!(set.hits("The NEW and latest, new again"), vec!["new", "latest"]);
    }

    #[test]
    fn empty_word_set_never_matches() {
        let set = WordSet::new("freshness", &[]).unwrap();
        assert!(set.hits("latest new current").is_empty());
    }

    fn markers<'t>(cues: &[&str], text: &'t str) -> Vec<(&'t str, i32)> {
        let re = staleness_pattern(&list(cues)).unwrap().unwrap();
        dated_markers(&re, text)
    }

    #[test]
    fn cue_dates_nearby_year() {
        assert_eq!(
            markers(&["copyright"], "Copyright 2019 Acme Corp"),
            vec![("Copyright 2019", 2019)]
        );
        assert_eq!(
            markers(&["last modified"], "Last modified: March 3, 2021"),
            vec![("Last modified: March 3, 2021", 2021)]
        );
    }

    #[test]
    fn every_year_inside_the_gap_is_reported() {
        assert_eq!(
            markers(&["updated"], "Updated 2025, originally 2019"),
            vec![("Updated 2025", 2025), ("Updated 2025, originally 2019", 2019)]
        );
    }

    #[test]
    fn distant_or_next_line_years_are_ignored() {
        assert!(markers(&["published"], "published by a very long publisher name in 2020").is_empty());
        assert!(markers(&["published"], "published\n2020").is_empty());
        assert!(markers(&["updated"], "updated2020").is_empty());
    }

    #[test]
    fn cue_words_are_escaped() {
        let re = staleness_pattern(&list(&["(c)"])).unwrap();
        assert!(re.is_some());
    }
}
