use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use super::types::{Decision, ToolInvocation, ToolResult};
use crate::error::HookError;
use crate::validator::{QueryValidatorPlugin, ResultValidatorPlugin};

pub fn run_pre_hook(plugin: &dyn QueryValidatorPlugin, today: NaiveDate, raw: &str) -> Decision {
    guarded(plugin.name(), raw, |inv: ToolInvocation| {
        plugin.validate(today, &inv)
    })
}

pub fn run_post_hook(plugin: &dyn ResultValidatorPlugin, today: NaiveDate, raw: &str) -> Decision {
    guarded(plugin.name(), raw, |res: ToolResult| plugin.validate(today, &res))
}

/// Parses the payload and evaluates it. Nothing that goes wrong in here may
/// escape as anything other than a pass-through decision.
fn guarded<T, F>(plugin: &str, raw: &str, f: F) -> Decision
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Result<Decision, HookError>,
{
    if raw.trim().is_empty() {
        tracing::debug!(plugin, "empty hook input");
        return Decision::pass();
    }

    let input: T = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            let err = HookError::InvalidJson(e);
            tracing::warn!(plugin, error = %describe(&err), "unparseable hook input");
            return degraded(&err);
        }
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(input)))
        .unwrap_or_else(|payload| Err(HookError::Aborted(panic_message(&*payload))));

    match outcome {
        Ok(decision) => decision,
        Err(err) => {
            tracing::warn!(plugin, error = %describe(&err), "validation failed");
            degraded(&err)
        }
    }
}

pub fn degraded(err: &HookError) -> Decision {
    Decision::advise(format!(
        "Date validation skipped: {}. The tool call continues unchanged.",
        describe(err)
    ))
}

fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(src) = cur {
        out.push_str(": ");
        out.push_str(&src.to_string());
        cur = src.source();
    }
    out
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic during classification".to_string()
    }
}
