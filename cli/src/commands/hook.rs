use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use freshcheck_core::api as core_api;
use freshcheck_core::api::Decision;
use freshcheck_plugins::factory;

use crate::commands::cli::HookArgs;
use crate::stdio::read_hook_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Pre,
    Post,
}

pub fn handle_hook(
    phase: HookPhase,
    args: &HookArgs,
    cfg: &core_api::AppConfig,
    today: NaiveDate,
) -> anyhow::Result<i32> {
    let decision = match read_hook_input(args.input_file.as_deref()) {
        Ok(raw) => evaluate(phase, cfg, today, &raw),
        Err(e) => {
            let err = core_api::HookError::Input(e);
            tracing::warn!(error = %err, "cannot read hook input");
            core_api::degraded(&err)
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_decision(&mut out, &decision)?;

    Ok(core_api::exit_code(&decision))
}

pub fn evaluate(
    phase: HookPhase,
    cfg: &core_api::AppConfig,
    today: NaiveDate,
    raw: &str,
) -> Decision {
    let decision = match phase {
        HookPhase::Pre => {
            let plugin = factory::build_query_validator(cfg);
            core_api::run_pre_hook(plugin.as_ref(), today, raw)
        }
        HookPhase::Post => {
            let plugin = factory::build_result_validator(cfg);
            core_api::run_post_hook(plugin.as_ref(), today, raw)
        }
    };
    tracing::debug!(?phase, decision = ?decision.decision, "hook finished");
    decision
}

pub fn write_decision(out: &mut impl Write, decision: &Decision) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, decision).context("serialize decision")?;
    writeln!(out).context("write decision")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use freshcheck_core::api::{AppConfig, PolicyKind, EXIT_BLOCK};
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn strict_pre_hook_blocks_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pre.json");
        std::fs::write(
            &path,
            r#"{"name":"WebSearch","parameters":{"query":"React hooks best practices 2022"}}"#,
        )
        .unwrap();

        let mut cfg = AppConfig::default();
        cfg.policy.kind = PolicyKind::Strict;
        let args = HookArgs {
            input_file: Some(path),
        };
        let code = handle_hook(HookPhase::Pre, &args, &cfg, today()).unwrap();
        assert_eq!(code, EXIT_BLOCK);
    }

    #[test]
    fn missing_input_file_degrades_to_continue() {
        let args = HookArgs {
            input_file: Some("/nonexistent/payload.json".into()),
        };
        let code = handle_hook(HookPhase::Post, &args, &AppConfig::default(), today()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn decision_is_one_json_line() {
        let d = evaluate(
            HookPhase::Post,
            &AppConfig::default(),
            today(),
            r#"{"name":"WebSearch","result":"Copyright 2019 Acme Corp"}"#,
        );
        let mut buf = Vec::new();
        write_decision(&mut buf, &d).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.trim_end().lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["continue"], true);
        assert!(v["message"].as_str().unwrap().contains("2019"));
    }
}
