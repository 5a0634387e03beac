use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub years: YearsConfig,

    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years.past_window == 0 {
            return Err(ConfigError::Validation(
                "years.past_window must be at least 1".to_string(),
            ));
        }
        if self.policy.tools.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "policy.tools must name at least one tool".to_string(),
            ));
        }
        Ok(())
    }

    pub fn recognizes_tool(&self, name: &str) -> bool {
        self.policy.tools.iter().any(|t| t == name)
    }
}

/// Decision rule applied to queries that mention an outdated year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Annotate and suggest, never block.
    #[default]
    Lenient,
    /// Block queries that pin an outdated year.
    Strict,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Lenient => "lenient",
            PolicyKind::Strict => "strict",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(PolicyKind::Lenient),
            "strict" => Ok(PolicyKind::Strict),
            other => Err(ConfigError::Validation(format!(
                "unknown policy '{other}' (expected lenient or strict)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub kind: PolicyKind,

    /// Strict only: let queries with historical intent through even when
    /// they carry an outdated year.
    #[serde(default = "default_honor_historical_intent")]
    pub honor_historical_intent: bool,

    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
}

fn default_honor_historical_intent() -> bool {
    true
}

fn default_tools() -> Vec<String> {
    vec!["WebSearch".to_string(), "WebFetch".to_string()]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            kind: PolicyKind::default(),
            honor_historical_intent: default_honor_historical_intent(),
            tools: default_tools(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearsConfig {
    /// How many years before the reference year count as outdated.
    #[serde(default = "default_past_window")]
    pub past_window: u32,

    /// How many years after the reference year still count as present.
    #[serde(default = "default_future_window")]
    pub future_window: u32,
}

fn default_past_window() -> u32 {
    5
}

fn default_future_window() -> u32 {
    4
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            past_window: default_past_window(),
            future_window: default_future_window(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Substrings that mark a query as deliberately retrospective.
    #[serde(default = "default_historical")]
    pub historical: Vec<String>,

    /// Substrings that mark a query as wanting fresh information.
    #[serde(default = "default_time_sensitive")]
    pub time_sensitive: Vec<String>,

    /// Whole words in a result that claim freshness.
    #[serde(default = "default_freshness")]
    pub freshness: Vec<String>,

    /// Words that introduce a date stamp in a result.
    #[serde(default = "default_staleness_cues")]
    pub staleness_cues: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_historical() -> Vec<String> {
    // "old" and "past" are left out: as substrings they fire on "hold",
    // "folder", "paste". "older" still covers the common case.
    strings(&[
        "history",
        "historical",
        "changelog",
        "change log",
        "release",
        "version",
        "deprecated",
        "legacy",
        "archive",
        "evolution",
        "timeline",
        "vs",
        "versus",
        "compared to",
        "comparison",
        "difference",
        "migration",
        "previous",
        "older",
        "former",
        "earlier",
        "review",
        "what happened",
        "retrospective",
    ])
}

fn default_time_sensitive() -> Vec<String> {
    strings(&[
        "latest",
        "current",
        "recent",
        "new",
        "update",
        "today",
        "modern",
        "best practice",
        "state of the art",
        "up to date",
        "up-to-date",
        "this year",
        "documentation",
        "docs",
        "guide",
        "tutorial",
    ])
}

fn default_freshness() -> Vec<String> {
    strings(&["latest", "current", "recent", "new", "updated"])
}

fn default_staleness_cues() -> Vec<String> {
    strings(&[
        "updated",
        "published",
        "last modified",
        "copyright",
        "posted",
    ])
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            historical: default_historical(),
            time_sensitive: default_time_sensitive(),
            freshness: default_freshness(),
            staleness_cues: default_staleness_cues(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// When set, logs go to a daily file here instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}
