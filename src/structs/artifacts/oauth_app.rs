use serde::Deserialize;
use crate::enums::oauth_app_state::OAuthAppState;
use crate::helpers::serde_helper::null_as_default;

/// A third-party OAuth application known to the organization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthApp {
    #[serde(rename = "ID", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(rename = "Name", alias = "name", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Description", alias = "description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "State", alias = "state", default, deserialize_with = "null_as_default")]
    pub state: i64,

    #[serde(rename = "RequestedBy", alias = "requested_by", default, deserialize_with = "null_as_default")]
    pub requested_by: String,
}

impl OAuthApp {
    pub const fn state(&self) -> OAuthAppState {
        OAuthAppState::from_code(self.state)
    }
}
