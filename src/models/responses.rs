use serde::{Deserialize, Serialize};

use crate::models::domain::{Candidate, MatchResult};

/// One entry of a ranking response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub score: u8,
    pub explanation: String,
    pub candidate: Candidate,
}

impl From<MatchResult> for RankedMatch {
    fn from(result: MatchResult) -> Self {
        Self {
            candidate_id: result.candidate.id.clone(),
            score: result.score,
            explanation: result.explanation,
            candidate: result.candidate,
        }
    }
}

/// Response for the ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "rankingId")]
    pub ranking_id: String,
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
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
