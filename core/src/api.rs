//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `freshcheck_core::api` instead of reaching into internal modules.

pub use crate::classify::{join_years, Classifier, Finding, QuerySignals, YearWindow};
pub use crate::config::{
    AppConfig, KeywordsConfig, LoggingConfig, PolicyConfig, PolicyKind, YearsConfig,
};
pub use crate::error::{ConfigError, HookError};
pub use crate::hook::{
    degraded, exit_code, run_post_hook, run_pre_hook, Decision, DecisionKind, ToolInvocation,
    ToolResult, EXIT_BLOCK, EXIT_OK,
};
pub use crate::validator::{QueryValidatorPlugin, ResultValidatorPlugin};
