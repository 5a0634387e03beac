use anyhow::Context;
use freshcheck_core::api::{AppConfig, ConfigError};
use freshcheck_core::config;

use crate::commands::cli::Args;

/// Effective config for this run. A broken config never stops the hook: the
/// error is handed back so it can be logged once logging is up, and defaults
/// are used instead.
pub fn resolve_config(args: &Args) -> (AppConfig, Option<ConfigError>) {
    let (mut cfg, err) = match config::load_default(args.config.as_deref()) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(policy) = args.policy {
        cfg.policy.kind = policy.into();
    }
    (cfg, err)
}

pub fn handle_show(cfg: &AppConfig) -> anyhow::Result<i32> {
    let rendered = toml::to_string_pretty(cfg).context("render config as toml")?;
    print!("{rendered}");
    Ok(0)
}
