use validator::Validate;

use crate::core::{
    categories::{classify, classify_all, industry_categories, skill_categories, CategoryDictionary},
    experience::experience_weight,
    explanation::{match_reasons, render_explanation, CategoryProfile},
    jitter::JitterSource,
    scoring::ScoreAggregator,
    similarity::{jaccard_similarity, keyword_overlap},
};
use crate::error::MatchError;
use crate::models::{Candidate, MatchFeatures, MatchResult, ScoringWeights, SeekerProfile};

/// Ranking orchestrator - scores every candidate against one seeker
///
/// # Pipeline Stages
/// 1. Validate candidates
/// 2. Classify the seeker once
/// 3. Per candidate: features, jittered score, explanation
/// 4. Stable sort by score, descending
///
/// The matcher holds only immutable configuration, so one instance can serve
/// concurrent calls. Jitter sources are passed per call.
#[derive(Debug, Clone)]
pub struct Matcher {
    aggregator: ScoreAggregator,
    skill_categories: &'static CategoryDictionary,
    industry_categories: &'static CategoryDictionary,
}

/// Seeker data derived once per ranking call
struct SeekerContext<'s> {
    seeker: &'s SeekerProfile,
    categories: CategoryProfile<'static>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            aggregator: ScoreAggregator::new(weights),
            skill_categories: skill_categories(),
            industry_categories: industry_categories(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        self.aggregator.weights()
    }

    /// Rank every candidate against the seeker
    ///
    /// Results are sorted by score, highest first; equal scores keep their
    /// input order. All candidates are validated before anything is scored,
    /// so an invalid candidate consumes no jitter draws.
    ///
    /// # Arguments
    /// * `seeker` - The student profile
    /// * `candidates` - All potential mentors
    /// * `jitter` - Jitter source for this call only
    pub fn rank<J>(
        &self,
        seeker: &SeekerProfile,
        candidates: &[Candidate],
        jitter: &mut J,
    ) -> Result<Vec<MatchResult>, MatchError>
    where
        J: JitterSource + ?Sized,
    {
        validate_candidates(candidates)?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let context = self.seeker_context(seeker);

        tracing::debug!(
            "Ranking {} candidates (seeker skill categories: {:?}, industry categories: {:?})",
            candidates.len(),
            context.categories.skills.names().collect::<Vec<_>>(),
            context.categories.industries.names().collect::<Vec<_>>(),
        );

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            results.push(self.score_candidate(&context, candidate, jitter)?);
        }

        // sort_by is stable, ties keep input order
        results.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(results)
    }

    /// The `n` best candidates, or fewer if the pool is smaller
    pub fn top_n<J>(
        &self,
        seeker: &SeekerProfile,
        candidates: &[Candidate],
        n: usize,
        jitter: &mut J,
    ) -> Result<Vec<MatchResult>, MatchError>
    where
        J: JitterSource + ?Sized,
    {
        if n == 0 {
            validate_candidates(candidates)?;
            return Ok(Vec::new());
        }

        let mut ranked = self.rank(seeker, candidates, jitter)?;
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Feature vector for one candidate, without jitter
    pub fn features(
        &self,
        seeker: &SeekerProfile,
        candidate: &Candidate,
    ) -> Result<MatchFeatures, MatchError> {
        let years = candidate_years(candidate)?;
        let context = self.seeker_context(seeker);
        let candidate_categories = self.candidate_categories(candidate);
        Ok(compute_features(&context, candidate, &candidate_categories, years))
    }

    /// Un-jittered weighted score for one candidate (0-1)
    pub fn raw_score(
        &self,
        seeker: &SeekerProfile,
        candidate: &Candidate,
    ) -> Result<f64, MatchError> {
        let features = self.features(seeker, candidate)?;
        Ok(self.aggregator.raw_score(&features))
    }

    fn seeker_context<'s>(&self, seeker: &'s SeekerProfile) -> SeekerContext<'s> {
        let categories = CategoryProfile {
            skills: classify_all(&seeker.skills, self.skill_categories),
            industries: classify_all(
                seeker
                    .preferred_industries
                    .iter()
                    .chain(&seeker.interested_domains),
                self.industry_categories,
            ),
        };

        SeekerContext { seeker, categories }
    }

    fn candidate_categories(&self, candidate: &Candidate) -> CategoryProfile<'static> {
        CategoryProfile {
            skills: classify(&candidate.skill, self.skill_categories),
            industries: classify(&candidate.current_job, self.industry_categories),
        }
    }

    fn score_candidate<J>(
        &self,
        context: &SeekerContext<'_>,
        candidate: &Candidate,
        jitter: &mut J,
    ) -> Result<MatchResult, MatchError>
    where
        J: JitterSource + ?Sized,
    {
        let years = candidate_years(candidate)?;
        let candidate_categories = self.candidate_categories(candidate);
        let features = compute_features(context, candidate, &candidate_categories, years);
        let score = self.aggregator.score(&features, jitter);

        tracing::trace!(
            candidate_id = %candidate.id,
            score,
            ?features,
            "Scored candidate"
        );

        let reasons = match_reasons(
            context.seeker,
            &context.categories,
            candidate,
            &candidate_categories,
            years,
        );

        Ok(MatchResult {
            candidate: candidate.clone(),
            score,
            explanation: render_explanation(score, &reasons),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn compute_features(
    context: &SeekerContext<'_>,
    candidate: &Candidate,
    candidate_categories: &CategoryProfile<'_>,
    years: u32,
) -> MatchFeatures {
    let seeker = context.seeker;

    let skill_category =
        jaccard_similarity(&context.categories.skills, &candidate_categories.skills);
    let industry_category =
        jaccard_similarity(&context.categories.industries, &candidate_categories.industries);

    let direct_skill = keyword_overlap(
        seeker.skills.iter().chain(&seeker.interested_domains),
        &format!("{} {}", candidate.skill, candidate.current_job),
    );

    // Same overlap measure as direct_skill, queried with domains and academic
    // interests against job-first text
    let domain_alignment = keyword_overlap(
        seeker
            .interested_domains
            .iter()
            .chain(&seeker.academic_interests),
        &format!("{} {}", candidate.current_job, candidate.skill),
    );

    MatchFeatures {
        skill_category,
        industry_category,
        direct_skill,
        domain_alignment,
        experience: experience_weight(years),
    }
}

fn validate_candidates(candidates: &[Candidate]) -> Result<(), MatchError> {
    for candidate in candidates {
        candidate
            .validate()
            .map_err(|errors| MatchError::InvalidCandidate {
                id: candidate.id.clone(),
                reason: errors.to_string(),
            })?;
    }
    Ok(())
}

fn candidate_years(candidate: &Candidate) -> Result<u32, MatchError> {
    candidate.years().ok_or_else(|| MatchError::InvalidCandidate {
        id: candidate.id.clone(),
        reason: format!(
            "years of experience out of range: {}",
            candidate.years_of_experience
        ),
    })
}
