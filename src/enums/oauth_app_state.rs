/// Lifecycle state of a third-party OAuth application's access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthAppState {
    Requested,
    Approved,
    Denied,
    Unknown,
}

impl OAuthAppState {
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Requested,
            2 => Self::Approved,
            3 => Self::Denied,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::Approved => "Approved",
            Self::Denied => "Denied",
            Self::Unknown => "Unknown",
        }
    }
}
