use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Estimator, StdUniform, SynthesisMode};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse, OutfitFilter, OutfitQuery,
    OutfitsResponse, SessionQuery, SessionResponse,
};
use crate::services::{SessionError, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub estimator: Estimator,
    pub daily_limit: u32,
    pub delay_ms: u64,
}

/// Configure all analysis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analysis/run", web::post().to(run_analysis))
        .route("/analysis/report", web::get().to(get_report))
        .route("/analysis/outfits", web::get().to(get_outfits))
        .route("/analysis/session", web::get().to(get_session));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::debug!("Health check ({} active sessions)", state.sessions.active_sessions());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run an analysis
///
/// POST /api/v1/analysis/run
///
/// Request body:
/// ```json
/// {
///   "sessionId": "string",
///   "sampleMode": false,
///   "ageGroup": "adult",
///   "seed": 42
/// }
/// ```
///
/// Quota exhaustion is rejected with 429 before any pipeline work runs;
/// the session is left untouched by the rejection.
async fn run_analysis(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for run_analysis request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let session_id = &req.session_id;
    let mut session = state.sessions.load(session_id).await;

    if let Err(e) = session.check_quota(state.daily_limit) {
        tracing::info!(
            "Quota rejection for session {} ({}/{} scans used)",
            session_id,
            session.scan_count,
            state.daily_limit
        );
        return HttpResponse::TooManyRequests().json(ErrorResponse {
            error: "Quota exceeded".to_string(),
            message: e.to_string(),
            status_code: 429,
        });
    }

    tracing::info!(
        "Running analysis for session {} (sample: {}, age group: {:?})",
        session_id,
        req.sample_mode,
        req.age_group
    );

    // Simulated processing latency, mirroring the original product feel.
    // No cancellation semantics; a second request on the same session is
    // governed only by the quota check above.
    tokio::time::sleep(std::time::Duration::from_millis(state.delay_ms)).await;

    let mut rng = match req.seed {
        Some(seed) => StdUniform::seeded(seed),
        None => StdUniform::from_entropy(),
    };
    let mode = if req.sample_mode {
        SynthesisMode::Sample
    } else {
        SynthesisMode::Random {
            age_group: req.age_group,
        }
    };

    let report = state.estimator.analyze(mode, &mut rng);
    session.record_analysis(report.clone());
    let scans_used = session.scan_count;
    let scans_remaining = session.scans_remaining(state.daily_limit);
    state.sessions.store(session_id, session).await;

    tracing::info!(
        "Analysis {} complete for session {}: {} ({}/{})",
        report.analysis_id,
        session_id,
        report.body_type.label(),
        scans_used,
        state.daily_limit
    );

    HttpResponse::Ok().json(AnalyzeResponse {
        body_type_label: report.body_type.label().to_string(),
        report,
        scans_used,
        scans_remaining,
    })
}

/// Fetch the current report for a session
///
/// GET /api/v1/analysis/report?sessionId={sessionId}
async fn get_report(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let session = state.sessions.load(&query.session_id).await;

    match session.current {
        Some(report) => HttpResponse::Ok().json(report),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "No analysis".to_string(),
            message: SessionError::NoAnalysis.to_string(),
            status_code: 404,
        }),
    }
}

/// Fetch the visible outfit subset, updating the session filter
///
/// GET /api/v1/analysis/outfits?sessionId={sessionId}&filter=weekend
async fn get_outfits(state: web::Data<AppState>, query: web::Query<OutfitQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filter = match OutfitFilter::parse(&query.filter) {
        Some(filter) => filter,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid filter".to_string(),
                message: "Filter must be one of: all, work, evening, weekend, event".to_string(),
                status_code: 400,
            });
        }
    };

    let mut session = state.sessions.load(&query.session_id).await;
    session.set_filter(filter);

    match session.visible_outfits() {
        Ok(outfits) => {
            let total_entries = session
                .current
                .as_ref()
                .map(|r| r.outfits.len())
                .unwrap_or(0);
            state.sessions.store(&query.session_id, session).await;

            HttpResponse::Ok().json(OutfitsResponse {
                filter: filter.as_str().to_string(),
                outfits,
                total_entries,
            })
        }
        Err(e) => HttpResponse::NotFound().json(ErrorResponse {
            error: "No analysis".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
    }
}

/// Session quota lookup
///
/// GET /api/v1/analysis/session?sessionId={sessionId}
async fn get_session(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let session = state.sessions.load(&query.session_id).await;

    HttpResponse::Ok().json(SessionResponse {
        session_id: query.session_id.clone(),
        scans_used: session.scan_count,
        scans_remaining: session.scans_remaining(state.daily_limit),
        has_report: session.current.is_some(),
    })
}
