use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload handed to the pre-call hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolInvocation {
    #[serde(default, alias = "tool_name")]
    pub name: String,

    #[serde(default, alias = "tool_input")]
    pub parameters: Value,
}

impl ToolInvocation {
    /// The search query, if one was sent and it has visible content.
    pub fn query(&self) -> Option<&str> {
        self.parameters
            .get("query")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Payload handed to the post-call hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResult {
    #[serde(default, alias = "tool_name")]
    pub name: String,

    #[serde(default, alias = "tool_response")]
    pub result: Value,

    #[serde(default)]
    pub error: Value,
}

impl ToolResult {
    /// `false` and numeric zero are treated like an absent error.
    pub fn has_error(&self) -> bool {
        match &self.error {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            other => !is_blank(other),
        }
    }

    /// Result flattened to text for scanning. Strings are used verbatim,
    /// anything else is serialized.
    pub fn text(&self) -> Option<String> {
        if is_blank(&self.result) {
            return None;
        }
        match &self.result {
            Value::String(s) => Some(s.clone()),
            other => serde_json::to_string(other).ok(),
        }
    }
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Continue,
    Block,
}

/// What the hook tells the host to do with the tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "continue")]
    pub proceed: bool,

    pub decision: DecisionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_query: Option<String>,
}

impl Decision {
    pub fn pass() -> Self {
        Self {
            proceed: true,
            decision: DecisionKind::Continue,
            message: None,
            reason: None,
            suggested_query: None,
        }
    }

    pub fn advise(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::pass()
        }
    }

    pub fn suggest(message: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            suggested_query: Some(query.into()),
            ..Self::advise(message)
        }
    }

    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            proceed: false,
            decision: DecisionKind::Block,
            message: None,
            reason: Some(reason.into()),
            suggested_query: None,
        }
    }

    pub fn is_block(&self) -> bool {
        self.decision == DecisionKind::Block
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn invocation_accepts_host_aliases() {
        let inv: ToolInvocation = serde_json::from_value(json!({
            "tool_name": "WebSearch",
            "tool_input": {"query": "  rust async  "}
        }))
        .unwrap();
        assert_eq!(inv.name, "WebSearch");
        assert_eq!(inv.query(), Some("rust async"));
    }

    #[test]
    fn non_string_or_blank_query_is_absent() {
        let inv: ToolInvocation =
            serde_json::from_value(json!({"name": "WebSearch", "parameters": {"query": 42}}))
                .unwrap();
        assert_eq!(inv.query(), None);

        let inv: ToolInvocation =
            serde_json::from_value(json!({"name": "WebSearch", "parameters": {"query": "   "}}))
                .unwrap();
        assert_eq!(inv.query(), None);

        let inv: ToolInvocation = serde_json::from_value(json!({"name": "WebSearch"})).unwrap();
        assert_eq!(inv.query(), None);
    }

    #[test]
    fn empty_error_values_do_not_count() {
        for err in [
            json!(null),
            json!(""),
            json!(false),
            json!({}),
            json!([]),
            json!(0),
            json!(0.0),
        ] {
            let res = ToolResult {
                error: err,
                ..Default::default()
            };
            assert!(!res.has_error());
        }
        for err in [json!("timeout"), json!(true), json!(1), json!(-2.5)] {
            let res = ToolResult {
                error: err,
                ..Default::default()
            };
            assert!(res.has_error());
        }
    }

    #[test]
    fn result_text_serializes_structured_values() {
        let res = ToolResult {
            result: json!({"title": "Release 2021"}),
            ..Default::default()
        };
        assert_eq!(res.text().as_deref(), Some(r#"{"title":"Release 2021"}"#));

        let res = ToolResult {
            result: json!("plain text"),
            ..Default::default()
        };
        assert_eq!(res.text().as_deref(), Some("plain text"));
        assert_eq!(ToolResult::default().text(), None);
    }

    #[test]
    fn decision_wire_shape() {
        let v = serde_json::to_value(Decision::pass()).unwrap();
        assert_eq!(v, json!({"continue": true, "decision": "continue"}));

        let v = serde_json::to_value(Decision::block("old year")).unwrap();
        assert_eq!(
            v,
            json!({"continue": false, "decision": "block", "reason": "old year"})
        );
    }
}
