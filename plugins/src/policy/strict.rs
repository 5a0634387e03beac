use chrono::NaiveDate;
use freshcheck_core::api as core_api;
use freshcheck_core::api::Decision;

use super::{historical_note, screen};

/// Blocks searches pinned to an outdated year.
pub struct StrictQueryPlugin {
    config: core_api::AppConfig,
}

impl StrictQueryPlugin {
    pub fn new(config: core_api::AppConfig) -> Self {
        Self { config }
    }
}

impl core_api::QueryValidatorPlugin for StrictQueryPlugin {
    fn name(&self) -> &str {
        "strict"
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
            if s.has_historical_intent() && self.config.policy.honor_historical_intent {
                tracing::info!(tool = %invocation.name, "historical query allowed");
                return Ok(Decision::advise(historical_note(&s.outdated_years, year)));
            }
            let years = core_api::join_years(&s.outdated_years);
            tracing::info!(tool = %invocation.name, %years, "blocking outdated query");
            return Ok(Decision::block(format!(
                "Query contains outdated year(s): {years}. The current year is {year}; \
                 search with {year} or drop the year."
            )));
        }

        if s.is_time_sensitive() && !s.mentions_present_year() {
            return Ok(Decision::advise(format!(
                "Reminder: the current year is {year}. Time-sensitive searches ({}) \
                 return better results with the year included.",
                s.time_sensitive.join(", ")
            )));
        }

        Ok(Decision::pass())
    }
}
