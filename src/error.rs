use thiserror::Error;

/// Errors surfaced by the ranking engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid candidate {id}: {reason}")]
    InvalidCandidate { id: String, reason: String },

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid jitter configuration: {0}")]
    InvalidJitter(String),
}

impl MatchError {
    /// Short machine-readable error kind for API responses
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::InvalidCandidate { .. } => "invalid_candidate",
            MatchError::InvalidWeights(_) => "invalid_weights",
            MatchError::InvalidJitter(_) => "invalid_jitter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::InvalidCandidate {
            id: "42".to_string(),
            reason: "years of experience must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid candidate 42: years of experience must not be negative"
        );
        assert_eq!(err.kind(), "invalid_candidate");
    }
}
