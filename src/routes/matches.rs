use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{JitterFactory, Matcher};
use crate::error::MatchError;
use crate::models::{
    Candidate, ErrorResponse, HealthResponse, MatchResult, RankRequest, RankResponse,
    SeekerProfile, TopMatchesRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub jitter: JitterFactory,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/top", web::post().to(top_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank every candidate
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "seeker": { "skills": ["Python"], "interestedDomains": ["Data Science"] },
///   "candidates": [{ "id": "1", "name": "string", "skill": "string",
///                    "currentJob": "string", "yearsOfExperience": 5,
///                    "contactReference": "string" }]
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {}", errors);
        return validation_error(errors.to_string());
    }

    let RankRequest { seeker, candidates } = req.into_inner();
    let total = candidates.len();

    run_ranking(&state, seeker, candidates, None, total).await
}

/// Best few candidates
///
/// POST /api/v1/matches/top
///
/// Same body as `/matches/rank` plus an optional `limit` (default from
/// configuration, capped at the configured maximum).
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top matches request: {}", errors);
        return validation_error(errors.to_string());
    }

    let limit = req.effective_limit(state.matching.default_limit, state.matching.max_limit);
    let TopMatchesRequest { seeker, candidates, .. } = req.into_inner();
    let total = candidates.len();

    run_ranking(&state, seeker, candidates, Some(limit), total).await
}

async fn run_ranking(
    state: &AppState,
    seeker: SeekerProfile,
    candidates: Vec<Candidate>,
    limit: Option<usize>,
    total: usize,
) -> HttpResponse {
    let ranking_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Ranking {} candidates (ranking_id: {}, limit: {:?})",
        total,
        ranking_id,
        limit
    );

    let matcher = state.matcher.clone();
    let factory = state.jitter;

    // Ranking is CPU-bound; keep it off the async workers
    let result = web::block(move || -> Result<Vec<MatchResult>, MatchError> {
        let mut jitter = factory.create();
        match limit {
            Some(n) => matcher.top_n(&seeker, &candidates, n, &mut jitter),
            None => matcher.rank(&seeker, &candidates, &mut jitter),
        }
    })
    .await;

    match result {
        Ok(Ok(matches)) => {
            tracing::info!(
                "Returning {} matches (ranking_id: {}, from {} candidates)",
                matches.len(),
                ranking_id,
                total
            );
            HttpResponse::Ok().json(RankResponse {
                ranking_id,
                matches: matches.into_iter().map(Into::into).collect(),
                total_candidates: total,
            })
        }
        Ok(Err(e)) => {
            tracing::info!("Ranking rejected (ranking_id: {}): {}", ranking_id, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.kind().to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(e) => {
            tracing::error!("Ranking task failed (ranking_id: {}): {}", ranking_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "ranking_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn validation_error(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}
