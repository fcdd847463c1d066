use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OAuthAppView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub requested_by: String,
    pub state: &'static str,
}
