use serde::Deserialize;
use serde_json::Value;

/// Result of running one audit check.
///
/// The scanner records `null` for a check that completed and an error value otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<Value>")]
pub enum CheckOutcome {
    Completed,
    Failed(String),
}

impl From<Option<Value>> for CheckOutcome {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Completed,
            Some(Value::String(detail)) => Self::Failed(detail),
            Some(Value::Object(map)) if map.is_empty() => Self::Failed("unknown error".to_string()),
            Some(other) => Self::Failed(other.to_string()),
        }
    }
}

impl CheckOutcome {
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
