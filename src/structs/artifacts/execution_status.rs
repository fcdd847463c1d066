use std::collections::HashMap;
use serde::Deserialize;
use crate::enums::check_outcome::CheckOutcome;

/// Outcome of every check the scanner executed, keyed by check identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExecutionStatus(pub HashMap<String, CheckOutcome>);
