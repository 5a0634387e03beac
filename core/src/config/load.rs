use std::path::{Path, PathBuf};

use super::types::{AppConfig, PolicyKind};
use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "FRESHCHECK_CONFIG";
pub const POLICY_ENV: &str = "FRESHCHECK_POLICY";

const LOCAL_CONFIG_FILE: &str = "freshcheck.toml";

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Picks the config file to read: explicit path, `FRESHCHECK_CONFIG`,
/// `./freshcheck.toml`, then `~/.freshcheck/config.toml`.
///
/// An explicit or env-provided path must exist; the implicit locations are
/// skipped when absent.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<Option<PathBuf>, ConfigError> {
    let requested = explicit.map(Path::to_path_buf).or_else(|| {
        env(CONFIG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });
    if let Some(path) = requested {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        return Ok(Some(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(dirs::home_dir()
        .map(|home| home.join(".freshcheck").join("config.toml"))
        .filter(|p| p.exists()))
}

pub fn apply_env_overrides(
    cfg: &mut AppConfig,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(v) = env(POLICY_ENV) {
        if !v.trim().is_empty() {
            cfg.policy.kind = v.parse::<PolicyKind>().map_err(|_| ConfigError::EnvInvalid {
                key: POLICY_ENV.to_string(),
                value: v.clone(),
            })?;
        }
    }
    Ok(())
}

pub fn load_with_env(
    explicit: Option<&Path>,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut cfg = match resolve_config_path(explicit, env)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_from_path(&path)?
        }
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, env)?;
    Ok(cfg)
}

pub fn load_default(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env(explicit, &|key: &str| std::env::var(key).ok())
}
