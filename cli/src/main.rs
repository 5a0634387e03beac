use clap::Parser;
use freshcheck_core::api::AppConfig;

mod commands;
mod logging;
mod stdio;

use commands::cli;
use commands::hook::{handle_hook, HookPhase};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let (cfg, cfg_err) = commands::config::resolve_config(&args);
    let guard = logging::init(&cfg.logging);
    if let Some(e) = cfg_err {
        tracing::warn!(error = %e, "config unusable, falling back to defaults");
    }

    let exit = dispatch(&args, &cfg)?;
    drop(guard);
    std::process::exit(exit);
}

fn dispatch(args: &cli::Args, cfg: &AppConfig) -> anyhow::Result<i32> {
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match &args.command {
        cli::Commands::Pre(hook_args) => handle_hook(HookPhase::Pre, hook_args, cfg, today),
        cli::Commands::Post(hook_args) => handle_hook(HookPhase::Post, hook_args, cfg, today),
        cli::Commands::Config => commands::config::handle_show(cfg),
    }
}
