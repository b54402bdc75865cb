use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, SeekerProfile};

/// Request to rank every candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub seeker: SeekerProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Request for the best few candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[serde(default)]
    pub seeker: SeekerProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Zero or negative limits return no matches
    #[serde(default)]
    pub limit: Option<i64>,
}

impl TopMatchesRequest {
    /// Effective limit after applying the default and the cap
    pub fn effective_limit(&self, default_limit: usize, max_limit: usize) -> usize {
        match self.limit {
            None => default_limit.min(max_limit),
            Some(limit) if limit <= 0 => 0,
            Some(limit) => usize::try_from(limit).unwrap_or(max_limit).min(max_limit),
        }
    }
}
