//! CLI response types returned as JSON by `qalog` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MutationOutcome;

/// Response from `qalog answer` and `qalog delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MutationResponse {
    pub id: i64,
    pub outcome: MutationOutcome,
}

/// Response from `qalog export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub rows: u64,
}
