// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, MatchFeatures, MatchResult, ScoringWeights, SeekerProfile};
pub use requests::{RankRequest, TopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, RankedMatch};
