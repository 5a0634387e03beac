use freshcheck_core::api::{AppConfig, PolicyKind, QueryValidatorPlugin, ResultValidatorPlugin};

use crate::policy::{LenientQueryPlugin, StrictQueryPlugin};
use crate::result::FreshnessResultPlugin;

pub fn build_query_validator(cfg: &AppConfig) -> Box<dyn QueryValidatorPlugin> {
    match cfg.policy.kind {
        PolicyKind::Lenient => Box::new(LenientQueryPlugin::new(cfg.clone())),
        PolicyKind::Strict => Box::new(StrictQueryPlugin::new(cfg.clone())),
    }
}

pub fn build_result_validator(cfg: &AppConfig) -> Box<dyn ResultValidatorPlugin> {
    Box::new(FreshnessResultPlugin::new(cfg.clone()))
}
