use serde::Deserialize;
use serde_json::Value;
use crate::enums::severity::Severity;
use crate::helpers::serde_helper::null_as_default;

/// A security finding produced by the scanner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    #[serde(rename = "ID", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "Name", alias = "name", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Severity", alias = "severity", default)]
    pub severity: Severity,

    #[serde(rename = "Description", alias = "description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "Remediation", alias = "remediation", default, deserialize_with = "null_as_default")]
    pub remediation: String,

    #[serde(rename = "CWEs", alias = "cwes", default, deserialize_with = "null_as_default")]
    pub cwes: Vec<u32>,

    #[serde(rename = "Resources", alias = "resources", default, deserialize_with = "null_as_default")]
    pub resources: Vec<Value>,
}

impl Issue {
    /// Resource descriptors as display text; strings are kept as-is, anything else is shown as JSON.
    pub fn resource_labels(&self) -> Vec<String> {
        self.resources
            .iter()
            .map(|resource| match resource {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}
