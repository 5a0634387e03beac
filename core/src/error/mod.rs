mod config_error;
mod hook_error;

pub use config_error::ConfigError;
pub use hook_error::HookError;
