use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use freshcheck_core::api::PolicyKind;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Lenient,
    Strict,
}

impl From<PolicyArg> for PolicyKind {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Lenient => PolicyKind::Lenient,
            PolicyArg::Strict => PolicyKind::Strict,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Flags outdated years in web search queries and results")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: $FRESHCHECK_CONFIG, ./freshcheck.toml, ~/.freshcheck/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured query policy.
    #[arg(long, value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Reference date (YYYY-MM-DD) instead of the local clock.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a tool invocation before it runs.
    Pre(HookArgs),
    /// Annotate a tool result after it ran.
    Post(HookArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HookArgs {
    /// Read the hook payload from a file instead of stdin.
    #[arg(long)]
    pub input_file: Option<PathBuf>,
}
