use std::time::Duration;

use thiserror::Error;

use crate::core::filter_outfits;
use crate::models::{AnalysisReport, OutfitFilter, OutfitRecommendation};

/// Errors surfaced by session handling
///
/// Quota exhaustion is a policy rejection, not a fault: it leaves the
/// session unchanged and never runs the pipeline.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Free tier limit reached ({limit} scans/day). Upgrade for unlimited access!")]
    QuotaExceeded { limit: u32 },

    #[error("No analysis has been run for this session yet")]
    NoAnalysis,
}

/// Per-session state threaded explicitly through the handlers
///
/// Exactly one report is "current" at a time; a completed analysis
/// replaces profile, body type, sizes and outfit list together.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub scan_count: u32,
    pub current: Option<AnalysisReport>,
    pub filter: OutfitFilter,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            scan_count: 0,
            current: None,
            filter: OutfitFilter::All,
            created_at: chrono::Utc::now(),
        }
    }
}

impl SessionState {
    /// Reject the run before any pipeline work when the quota is spent
    pub fn check_quota(&self, limit: u32) -> Result<(), SessionError> {
        if self.scan_count >= limit {
            return Err(SessionError::QuotaExceeded { limit });
        }
        Ok(())
    }

    /// Record a completed (non-rejected) analysis
    ///
    /// The counter increments only here, after the pipeline has finished,
    /// so rejected runs never consume quota.
    pub fn record_analysis(&mut self, report: AnalysisReport) {
        self.scan_count += 1;
        self.current = Some(report);
    }

    pub fn set_filter(&mut self, filter: OutfitFilter) {
        self.filter = filter;
    }

    /// Outfits from the current report visible under the session filter
    pub fn visible_outfits(&self) -> Result<Vec<OutfitRecommendation>, SessionError> {
        let report = self.current.as_ref().ok_or(SessionError::NoAnalysis)?;
        Ok(filter_outfits(&report.outfits, self.filter))
    }

    pub fn scans_remaining(&self, limit: u32) -> u32 {
        limit.saturating_sub(self.scan_count)
    }
}

/// In-memory session store with per-session TTL
///
/// Sessions expire after the configured lifetime, which is what scopes the
/// quota to a session/day. One logical actor per session; read-modify-write
/// through get/insert is sufficient.
pub struct SessionStore {
    sessions: moka::future::Cache<String, SessionState>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Fetch a session, or a fresh default for unknown ids
    ///
    /// The default is not inserted; only completed operations write back.
    pub async fn load(&self, session_id: &str) -> SessionState {
        match self.sessions.get(session_id).await {
            Some(state) => state,
            None => {
                tracing::debug!("New session: {}", session_id);
                SessionState::default()
            }
        }
    }

    pub async fn store(&self, session_id: &str, state: SessionState) {
        self.sessions.insert(session_id.to_string(), state).await;
    }

    pub fn active_sessions(&self) -> u64 {
        self.sessions.entry_count()
    }
}
