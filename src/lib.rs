//! Mentor Match - ranks alumni mentors against a student profile
//!
//! This library provides the matching engine behind the mentorship service.
//! Free-text skills and jobs are classified into categories, compared with
//! set and keyword similarity, combined into a weighted score with bounded
//! jitter, and explained in a short sentence.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{FixedJitter, JitterFactory, JitterSource, Matcher, UniformJitter};
pub use error::MatchError;
pub use models::{Candidate, MatchFeatures, MatchResult, ScoringWeights, SeekerProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::default();
        let results = matcher
            .rank(&SeekerProfile::default(), &[], &mut FixedJitter::neutral())
            .unwrap();
        assert!(results.is_empty());
    }
}
