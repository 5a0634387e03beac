use chrono::NaiveDate;
use freshcheck_core::api as core_api;
use freshcheck_core::api::Decision;

use super::{historical_note, screen};

/// Never blocks. Explains outdated years and proposes a dated query when the
/// search is time-sensitive or carries no current year.
pub struct LenientQueryPlugin {
    config: core_api::AppConfig,
}

impl LenientQueryPlugin {
    pub fn new(config: core_api::AppConfig) -> Self {
        Self { config }
    }
}

impl core_api::QueryValidatorPlugin for LenientQueryPlugin {
    fn name(&self) -> &str {
        "lenient"
    }

    fn validate(
        &self,
        today: NaiveDate,
        invocation: &core_api::ToolInvocation,
    ) -> Result<Decision, core_api::HookError> {
        let Some(screened) = screen(&self.config, today, invocation)? else {
            return Ok(Decision::pass());
        };
        let s = &screened.signals;
        let year = screened.reference_year;

        if s.mentions_outdated_year() {
            let years = core_api::join_years(&s.outdated_years);
            if s.has_historical_intent() {
                tracing::info!(tool = %invocation.name, %years, "historical query allowed");
                return Ok(Decision::advise(historical_note(&s.outdated_years, year)));
            }
            tracing::info!(tool = %invocation.name, %years, "outdated year in query");
            return Ok(Decision::advise(format!(
                "Query mentions outdated year(s) {years}; the current year is {year}. \
                 Add \"historical\" to the query if past information is intended, \
                 otherwise consider searching for {year} instead."
            )));
        }

        if !s.has_historical_intent() && (s.is_time_sensitive() || !s.mentions_present_year()) {
            let suggested = format!("{} {}", screened.query, year);
            let message = if s.is_time_sensitive() {
                format!(
                    "Time-sensitive query ({}). Consider including the current year: \"{}\"",
                    s.time_sensitive.join(", "),
                    suggested
                )
            } else {
                format!("No year in query. For current results consider: \"{suggested}\"")
            };
            tracing::info!(tool = %invocation.name, %suggested, "suggesting dated query");
            return Ok(Decision::suggest(message, suggested));
        }

        Ok(Decision::pass())
    }
}

#[cfg(test)]
mod tests {
    use freshcheck_core::api::QueryValidatorPlugin;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn run(name: &str, query: &str) -> Decision {
        let plugin = LenientQueryPlugin::new(core_api::AppConfig::default());
        let inv = core_api::ToolInvocation {
            name: name.to_string(),
            parameters: json!({ "query": query }),
        };
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        plugin.validate(today, &inv).unwrap()
    }

    #[test]
    fn outdated_year_without_history_warns_but_allows() {
        let d = run("WebSearch", "React hooks best practices 2022");
        assert!(d.proceed);
        let msg = d.message.unwrap();
        assert!(msg.contains("2022"));
        assert!(msg.contains("historical"));
        assert_eq!(d.reason, None);
    }

    #[test]
    fn historical_query_keeps_years() {
        let d = run("WebSearch", "history of Python 2 to 3 migration 2021");
        assert!(d.proceed);
        assert!(d.message.unwrap().contains("2021"));
        assert_eq!(d.suggested_query, None);
    }

    #[test]
    fn undated_time_sensitive_query_gets_suggestion() {
        let d = run("WebFetch", "latest Kubernetes documentation");
        assert!(d.proceed);
        assert_eq!(
            d.suggested_query.as_deref(),
            Some("latest Kubernetes documentation 2025")
        );
        let msg = d.message.unwrap();
        assert!(msg.contains("latest"));
        assert!(msg.contains("latest Kubernetes documentation 2025"));
    }

    #[test]
    fn undated_plain_query_also_gets_suggestion() {
        let d = run("WebSearch", "tokio select macro");
        assert_eq!(d.suggested_query.as_deref(), Some("tokio select macro 2025"));
    }

    #[test]
    fn time_sensitive_query_with_current_year_still_gets_suggestion() {
        let d = run("WebSearch", "latest rust 2025");
        assert!(d.proceed);
        assert_eq!(d.suggested_query.as_deref(), Some("latest rust 2025 2025"));
        assert!(d.message.unwrap().contains("latest"));
    }

    #[test]
    fn dated_plain_query_is_silent() {
        assert_eq!(run("WebSearch", "axum middleware example 2025"), Decision::pass());
    }

    #[test]
    fn undated_historical_query_is_silent() {
        assert_eq!(run("WebSearch", "history of the borrow checker"), Decision::pass());
    }

    #[test]
    fn unknown_tool_passes_through() {
        assert_eq!(run("Bash", "React hooks 2022"), Decision::pass());
    }
}
