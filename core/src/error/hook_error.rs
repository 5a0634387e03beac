use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("hook input unreadable")]
    Input(#[source] std::io::Error),

    #[error("invalid hook input json")]
    InvalidJson(#[source] serde_json::Error),

    #[error("keyword pattern invalid: {list}")]
    Pattern {
        list: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("reference year out of range: {0}")]
    ReferenceYear(i32),

    #[error("classification aborted: {0}")]
    Aborted(String),
}
