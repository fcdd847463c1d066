use std::collections::BTreeMap;
use serde::Deserialize;

type RawSummary = BTreeMap<String, Option<BTreeMap<String, Option<Vec<String>>>>>;

/// user → permission → resources holding that permission. Sparse.
///
/// `null` users or resource lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSummary")]
pub struct PermissionSummary(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl From<RawSummary> for PermissionSummary {
    fn from(raw: RawSummary) -> Self {
        Self(
            raw.into_iter()
                .map(|(user, permissions)| {
                    let permissions = permissions
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(permission, resources)| (permission, resources.unwrap_or_default()))
                        .collect();
                    (user, permissions)
                })
                .collect(),
        )
    }
}

impl PermissionSummary {
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.0.values().flat_map(|permissions| permissions.keys().map(String::as_str))
    }

    pub fn resources(&self, user: &str, permission: &str) -> Option<&[String]> {
        self.0
            .get(user)
            .and_then(|permissions| permissions.get(permission))
            .map(Vec::as_slice)
    }
}
