//! Pre-call query policies.
//!
//! Both policies share [`screen`] for tool gating and classification and only
//! differ in how they turn [`QuerySignals`] into a decision.

pub mod lenient;
pub mod strict;

use chrono::NaiveDate;
use freshcheck_core::api as core_api;
use freshcheck_core::api::{Classifier, QuerySignals};

pub use lenient::LenientQueryPlugin;
pub use strict::StrictQueryPlugin;

pub(crate) struct Screened<'a> {
    pub query: &'a str,
    pub reference_year: i32,
    pub signals: QuerySignals,
}

/// Returns `None` when the invocation is out of scope: unknown tool or no
/// query to look at.
pub(crate) fn screen<'a>(
    cfg: &core_api::AppConfig,
    today: NaiveDate,
    invocation: &'a core_api::ToolInvocation,
) -> Result<Option<Screened<'a>>, core_api::HookError> {
    if !cfg.recognizes_tool(&invocation.name) {
        tracing::debug!(tool = %invocation.name, "tool not gated, passing through");
        return Ok(None);
    }
    let Some(query) = invocation.query() else {
        tracing::debug!(tool = %invocation.name, "no query, passing through");
        return Ok(None);
    };

    let classifier = Classifier::new(cfg, today)?;
    let signals = classifier.classify_query(query);
    tracing::debug!(tool = %invocation.name, ?signals, "query classified");

    Ok(Some(Screened {
        query,
        reference_year: classifier.reference_year(),
        signals,
    }))
}

pub(crate) fn historical_note(years: &[i32], reference_year: i32) -> String {
    format!(
        "Historical search detected; keeping year(s) {} as written (current year is {}).",
        core_api::join_years(years),
        reference_year
    )
}
