pub mod exit;
pub mod run;
pub mod types;

pub use exit::{exit_code, EXIT_BLOCK, EXIT_OK};
pub use run::{degraded, run_post_hook, run_pre_hook};
pub use types::{Decision, DecisionKind, ToolInvocation, ToolResult};
