use std::collections::HashMap;
use serde::Deserialize;

/// Human readable names for check identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CheckCatalog(pub HashMap<String, String>);

impl CheckCatalog {
    /// Display name for a check, falling back to the identifier itself.
    pub fn display_name<'a>(&'a self, check_id: &'a str) -> &'a str {
        self.0
            .get(check_id)
            .map_or(check_id, String::as_str)
    }
}
