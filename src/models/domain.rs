use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Student profile that mentors are ranked against
///
/// Every collection defaults to an empty set when absent from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerProfile {
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(rename = "interestedDomains", alias = "interested_domains", default)]
    pub interested_domains: BTreeSet<String>,
    #[serde(rename = "academicInterests", alias = "academic_interests", default)]
    pub academic_interests: BTreeSet<String>,
    #[serde(rename = "preferredIndustries", alias = "preferred_industries", default)]
    pub preferred_industries: BTreeSet<String>,
}

impl SeekerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interested_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interested_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_academic_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.academic_interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_industries<I, S>(mut self, industries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_industries = industries.into_iter().map(Into::into).collect();
        self
    }
}

/// Alumni record that can be recommended as a mentor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Candidate {
    /// Opaque identifier; numeric ids are kept as their decimal string
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub skill: String,
    #[serde(rename = "currentJob", alias = "current_job")]
    pub current_job: String,
    #[validate(range(min = 0, message = "years of experience must not be negative"))]
    #[serde(rename = "yearsOfExperience", alias = "years_of_experience")]
    pub years_of_experience: i64,
    /// Opaque contact URL, passed through untouched
    #[serde(rename = "contactReference", alias = "linkedin_search_url", default)]
    pub contact_reference: String,
}

impl Candidate {
    /// Years of experience, `None` when negative
    ///
    /// Values beyond `u32::MAX` saturate; they fall in the lowest experience band anyway.
    pub fn years(&self) -> Option<u32> {
        if self.years_of_experience < 0 {
            return None;
        }
        Some(u32::try_from(self.years_of_experience).unwrap_or(u32::MAX))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// One ranked, explained candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: Candidate,
    /// Percentage in [35, 98]
    pub score: u8,
    pub explanation: String,
}

/// Per-candidate feature vector, every value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFeatures {
    pub skill_category: f64,
    pub industry_category: f64,
    pub direct_skill: f64,
    pub domain_alignment: f64,
    pub experience: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill_category: f64,
    pub industry_category: f64,
    pub direct_skill: f64,
    pub domain_alignment: f64,
    pub experience: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill_category
            + self.industry_category
            + self.direct_skill
            + self.domain_alignment
            + self.experience
    }

    fn values(&self) -> [f64; 5] {
        [
            self.skill_category,
            self.industry_category,
            self.direct_skill,
            self.domain_alignment,
            self.experience,
        ]
    }

    /// Weights must be finite, non-negative and sum to 1
    pub fn validate(&self) -> Result<(), crate::error::MatchError> {
        if self.values().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(crate::error::MatchError::InvalidWeights(format!(
                "weights must be finite and non-negative: {:?}",
                self
            )));
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(crate::error::MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                sum
            )));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_category: 0.30,
            industry_category: 0.25,
            direct_skill: 0.20,
            domain_alignment: 0.15,
            experience: 0.10,
        }
    }
}
