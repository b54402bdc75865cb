use crate::core::jitter::{clamp_factor, JitterSource};
use crate::models::{MatchFeatures, ScoringWeights};

/// Lowest user-facing match percentage
pub const SCORE_FLOOR: u8 = 35;

/// Width of the user-facing band; the highest percentage is 35 + 63 = 98
pub const SCORE_SPAN: f64 = 63.0;

/// Combines per-candidate features into a user-facing match percentage
///
/// Scoring formula:
/// raw = (
///     skill_category * 0.30 +      # Jaccard over skill categories
///     industry_category * 0.25 +   # Jaccard over industry categories
///     direct_skill * 0.20 +        # Seeker skills/domains found in skill + job
///     domain_alignment * 0.15 +    # Seeker domains/academics found in job + skill
///     experience * 0.10            # Experience step function
/// )
/// final = min(raw * jitter, 1.0), jitter in [0.95, 1.05]
/// percentage = round(35 + final * 63)
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator {
    weights: ScoringWeights,
}

impl ScoreAggregator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Weighted feature sum before jitter, clamped to 0-1
    #[inline]
    pub fn raw_score(&self, features: &MatchFeatures) -> f64 {
        let w = &self.weights;
        let raw = w.skill_category * features.skill_category
            + w.industry_category * features.industry_category
            + w.direct_skill * features.direct_skill
            + w.domain_alignment * features.domain_alignment
            + w.experience * features.experience;

        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    /// Score one candidate, consuming exactly one jitter draw
    pub fn score<J: JitterSource + ?Sized>(&self, features: &MatchFeatures, jitter: &mut J) -> u8 {
        let factor = clamp_factor(jitter.next_factor());
        let adjusted = (self.raw_score(features) * factor).min(1.0);
        to_percentage(adjusted)
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Rescale a normalized score into the [35, 98] band
#[inline]
pub fn to_percentage(normalized: f64) -> u8 {
    let normalized = if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    };
    (f64::from(SCORE_FLOOR) + normalized * SCORE_SPAN).round() as u8
}
