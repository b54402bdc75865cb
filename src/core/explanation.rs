use crate::core::categories::{normalize_text, CategorySet};
use crate::models::{Candidate, SeekerProfile};

/// Maximum number of reasons shown in one explanation
pub const MAX_REASONS: usize = 3;

/// Years of experience from which experience is worth mentioning
const NOTABLE_EXPERIENCE_YEARS: u32 = 5;

const FALLBACK_REASONS: [&str; 2] = ["complementary skill set", "relevant industry background"];

/// Skill and industry categories of one side of a match
#[derive(Debug, Clone, Default)]
pub struct CategoryProfile<'d> {
    pub skills: CategorySet<'d>,
    pub industries: CategorySet<'d>,
}

/// Ordered reasons for a match, at most [`MAX_REASONS`]
///
/// Reasons are checked in priority order: shared skill category, shared
/// industry category, interested domain found in the candidate's job or
/// skill, then notable experience. When none apply, two generic reasons are
/// used instead.
pub fn match_reasons(
    seeker: &SeekerProfile,
    seeker_categories: &CategoryProfile<'_>,
    candidate: &Candidate,
    candidate_categories: &CategoryProfile<'_>,
    years: u32,
) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_REASONS + 1);

    if let Some(category) = seeker_categories
        .skills
        .first_shared(&candidate_categories.skills)
    {
        reasons.push(format!("strong alignment in {} skills", display_name(category)));
    }

    if let Some(category) = seeker_categories
        .industries
        .first_shared(&candidate_categories.industries)
    {
        reasons.push(format!("{} career path", display_name(category)));
    }

    if matches_domain_interest(&seeker.interested_domains, candidate) {
        reasons.push("matching domain interests".to_string());
    }

    if years >= NOTABLE_EXPERIENCE_YEARS {
        reasons.push(format!("{} years of industry experience", years));
    }

    if reasons.is_empty() {
        reasons.extend(FALLBACK_REASONS.iter().map(|r| r.to_string()));
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Full user-facing sentence: `"<score>% match due to <reasons>."`
pub fn render_explanation(score: u8, reasons: &[String]) -> String {
    format!("{}% match due to {}.", score, reasons.join(", "))
}

/// Whether the first word of any interested domain appears in the
/// candidate's current job or skill
fn matches_domain_interest<'a, I>(domains: I, candidate: &Candidate) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let job = normalize_text(&candidate.current_job);
    let skill = normalize_text(&candidate.skill);

    domains.into_iter().any(|domain| {
        let normalized = normalize_text(domain);
        match normalized.split_whitespace().next() {
            Some(first) => job.contains(first) || skill.contains(first),
            None => false,
        }
    })
}

#[inline]
fn display_name(category: &str) -> String {
    category.replace('_', " ")
}
