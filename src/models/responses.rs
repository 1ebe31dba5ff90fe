use serde::{Deserialize, Serialize};

use crate::models::domain::{AnalysisReport, OutfitRecommendation};

/// Response for a completed analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
    #[serde(rename = "bodyTypeLabel")]
    pub body_type_label: String,
    #[serde(rename = "scansUsed")]
    pub scans_used: u32,
    #[serde(rename = "scansRemaining")]
    pub scans_remaining: u32,
}

/// Response for the outfits endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitsResponse {
    pub filter: String,
    pub outfits: Vec<OutfitRecommendation>,
    #[serde(rename = "totalEntries")]
    pub total_entries: usize,
}

/// Response for session quota lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "scansUsed")]
    pub scans_used: u32,
    #[serde(rename = "scansRemaining")]
    pub scans_remaining: u32,
    #[serde(rename = "hasReport")]
    pub has_report: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
