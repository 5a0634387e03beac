use chrono::NaiveDate;
use freshcheck_core::api as core_api;
use freshcheck_core::api::{Classifier, Decision, Finding};

pub struct FreshnessResultPlugin {
    config: core_api::AppConfig,
}

impl FreshnessResultPlugin {
    pub fn new(config: core_api::AppConfig) -> Self {
        Self { config }
    }
}

impl core_api::ResultValidatorPlugin for FreshnessResultPlugin {
    fn name(&self) -> &str {
        "freshness"
    }

    fn validate(
        &self,
        today: NaiveDate,
        result: &core_api::ToolResult,
    ) -> Result<Decision, core_api::HookError> {
        if !self.config.recognizes_tool(&result.name) {
            return Ok(Decision::pass());
        }
        if result.has_error() {
            tracing::debug!(tool = %result.name, "tool reported an error, skipping");
            return Ok(Decision::pass());
        }
        let Some(text) = result.text() else {
            return Ok(Decision::pass());
        };

        let classifier = Classifier::new(&self.config, today)?;
        let findings = classifier.scan_result(&text);
        if findings.is_empty() {
            return Ok(Decision::pass());
        }

        tracing::info!(tool = %result.name, count = findings.len(), "result freshness warnings");
        Ok(Decision::advise(render_warnings(
            &findings,
            classifier.reference_year(),
        )))
    }
}

fn render_warnings(findings: &[Finding], reference_year: i32) -> String {
    let mut out = String::from("Search result freshness warnings:\n");
    for f in findings {
        out.push_str("- ");
        out.push_str(&f.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "Consider refining the search with {reference_year} to get current information."
    ));
    out
}

#[cfg(test)]
mod tests {
    use freshcheck_core::api::ResultValidatorPlugin;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn run(name: &str, result: Value, error: Value) -> Decision {
        let plugin = FreshnessResultPlugin::new(core_api::AppConfig::default());
        let res = core_api::ToolResult {
            name: name.to_string(),
            result,
            error,
        };
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        plugin.validate(today, &res).unwrap()
    }

    #[test]
    fn copyright_footer_is_flagged() {
        let d = run("WebSearch", json!("Copyright 2019 Acme Corp"), Value::Null);
        assert!(d.proceed);
        assert_eq!(
            d.message.as_deref(),
            Some(
                "Search result freshness warnings:\n\
                 - Content appears dated 2019: \"Copyright 2019\"\n\
                 Consider refining the search with 2026 to get current information."
            )
        );
    }

    #[test]
    fn each_finding_is_one_bullet() {
        let d = run(
            "WebFetch",
            json!({"snippets": ["The latest guide (2023)", "Published: 2021"]}),
            Value::Null,
        );
        let msg = d.message.unwrap();
        let bullets: Vec<&str> = msg.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].contains("2021, 2023"));
        assert!(bullets[1].contains("Published: 2021"));
        assert!(bullets[2].contains("latest"));
    }

    #[test]
    fn errored_calls_pass_through() {
        let d = run("WebSearch", json!("Copyright 2019"), json!("HTTP 500"));
        assert_eq!(d, Decision::pass());
    }

    #[test]
    fn zero_error_code_still_scans() {
        let d = run("WebSearch", json!("Copyright 2019"), json!(0));
        assert!(d.message.unwrap().contains("2019"));
    }

    #[test]
    fn empty_result_passes_silently() {
        assert_eq!(run("WebSearch", Value::Null, Value::Null), Decision::pass());
        assert_eq!(run("WebSearch", json!(""), Value::Null), Decision::pass());
    }

    #[test]
    fn current_results_pass_silently() {
        let d = run("WebSearch", json!("Rust 1.90 released in 2026"), Value::Null);
        assert_eq!(d, Decision::pass());
    }

    #[test]
    fn unknown_tool_passes_through() {
        let d = run("Read", json!("Copyright 2019"), Value::Null);
        assert_eq!(d, Decision::pass());
    }
}
