use serde::Deserialize;

/// Issue severity as reported by the scanner.
///
/// Decodes from the scanner's ordinal (`0..=4`) or from the severity name.
/// `null` is treated as informational. Anything else is kept verbatim in
/// [`Severity::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<RawSeverity>")]
pub enum Severity {
    #[default]
    Informational,
    Low,
    Medium,
    High,
    Critical,
    Unrecognized(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeverity {
    Ordinal(i64),
    Name(String),
}

impl From<Option<RawSeverity>> for Severity {
    fn from(raw: Option<RawSeverity>) -> Self {
        match raw {
            Some(RawSeverity::Ordinal(ordinal)) => Self::from_ordinal(ordinal),
            Some(RawSeverity::Name(name)) => Self::from_name(&name),
            None => Self::default(),
        }
    }
}

impl Severity {
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            0 => Self::Informational,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            4 => Self::Critical,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "Informational" => Self::Informational,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Critical" => Self::Critical,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Informational => "Informational",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unrecognized(text) => text,
        }
    }
}
