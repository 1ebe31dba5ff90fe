use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::AgeGroup;

/// Request to run an analysis
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "session_id", rename = "sessionId")]
    pub session_id: String,
    /// Use the deterministic sample profile instead of a random draw
    #[serde(default)]
    #[serde(alias = "sample_mode", rename = "sampleMode")]
    pub sample_mode: bool,
    #[serde(default)]
    #[serde(alias = "age_group", rename = "ageGroup")]
    pub age_group: AgeGroup,
    /// Optional RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Query parameters for fetching outfits
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OutfitQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "session_id", rename = "sessionId")]
    pub session_id: String,
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "all".to_string()
}

/// Query parameters for session lookups
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "session_id", rename = "sessionId")]
    pub session_id: String,
}
