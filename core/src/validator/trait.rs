use chrono::NaiveDate;

use crate::error::HookError;
use crate::hook::{Decision, ToolInvocation, ToolResult};

pub trait QueryValidatorPlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Pre-call: decide whether an outgoing search may proceed.
    ///
    /// `today` is the reference date every year comparison is made against.
    fn validate(&self, today: NaiveDate, invocation: &ToolInvocation)
        -> Result<Decision, HookError>;
}

pub trait ResultValidatorPlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Post-call: annotate a finished search. Implementations never block.
    fn validate(&self, today: NaiveDate, result: &ToolResult) -> Result<Decision, HookError>;
}
