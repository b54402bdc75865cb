// Unit tests for Mentor Match

use mentor_match::core::{
    categories::{classify, classify_all, industry_categories, skill_categories, CategoryDictionary},
    experience::experience_weight,
    explanation::{match_reasons, render_explanation, CategoryProfile, MAX_REASONS},
    scoring::{to_percentage, ScoreAggregator},
    similarity::{jaccard_similarity, keyword_overlap},
    FixedJitter,
};
use mentor_match::models::{Candidate, MatchFeatures, SeekerProfile};

fn candidate(skill: &str, job: &str, years: i64) -> Candidate {
    Candidate {
        id: "c".to_string(),
        name: "Candidate".to_string(),
        skill: skill.to_string(),
        current_job: job.to_string(),
        years_of_experience: years,
        contact_reference: String::new(),
    }
}

#[test]
fn test_builtin_dictionaries() {
    assert_eq!(skill_categories().len(), 10);
    assert_eq!(industry_categories().len(), 8);

    let names: Vec<_> = industry_categories()
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names[0], "software");
    assert_eq!(names[7], "finance");
}

#[test]
fn test_custom_dictionary() {
    let dict = CategoryDictionary::from_static(&[
        ("trades", &["plumb", "electric"]),
        ("care", &["nurse", "carer"]),
    ]);

    let set = classify("Master Plumber", &dict);
    assert_eq!(set.names().collect::<Vec<_>>(), vec!["trades"]);
    assert!(classify("Software Engineer", &dict).is_empty());
}

#[test]
fn test_classify_devops_job() {
    let set = classify("DevOps Engineer", industry_categories());
    assert!(set.contains("software"));
    assert!(set.contains("devops"));
    assert!(!set.contains("finance"));
}

#[test]
fn test_jaccard_symmetry() {
    let a = classify_all(["Python", "Docker"], skill_categories());
    let b = classify_all(["Linux", "SQL"], skill_categories());

    let ab = jaccard_similarity(&a, &b);
    let ba = jaccard_similarity(&b, &a);
    assert_eq!(ab, ba);
    assert!((0.0..=1.0).contains(&ab));
}

#[test]
fn test_keyword_overlap_saturates() {
    let score = keyword_overlap(
        ["python django flask", "backend api design"],
        "Python Django Backend Developer",
    );
    assert_eq!(score, 1.0);
}

#[test]
fn test_experience_weight_bands() {
    assert_eq!(experience_weight(5), 1.0);
    assert_eq!(experience_weight(8), 0.9);
    assert_eq!(experience_weight(9), 0.8);
    assert_eq!(experience_weight(1), 0.7);
    assert_eq!(experience_weight(20), 0.7);
}

#[test]
fn test_aggregator_floor_and_ceiling() {
    let aggregator = ScoreAggregator::default();
    let zero = MatchFeatures {
        skill_category: 0.0,
        industry_category: 0.0,
        direct_skill: 0.0,
        domain_alignment: 0.0,
        experience: 0.0,
    };
    let full = MatchFeatures {
        skill_category: 1.0,
        industry_category: 1.0,
        direct_skill: 1.0,
        domain_alignment: 1.0,
        experience: 1.0,
    };

    assert_eq!(aggregator.score(&zero, &mut FixedJitter::new(1.05)), 35);
    assert_eq!(aggregator.score(&full, &mut FixedJitter::new(1.05)), 98);
    assert_eq!(to_percentage(0.5), 67);
}

#[test]
fn test_explanation_priority_order() {
    let seeker = SeekerProfile::new()
        .with_skills(["Docker"])
        .with_interested_domains(["Cloud Computing"]);
    let c = candidate("Kubernetes", "Cloud Architect", 8);

    let seeker_categories = CategoryProfile {
        skills: classify_all(&seeker.skills, skill_categories()),
        industries: classify_all(
            seeker.preferred_industries.iter().chain(&seeker.interested_domains),
            industry_categories(),
        ),
    };
    let candidate_categories = CategoryProfile {
        skills: classify(&c.skill, skill_categories()),
        industries: classify(&c.current_job, industry_categories()),
    };

    let reasons = match_reasons(&seeker, &seeker_categories, &c, &candidate_categories, 8);
    assert_eq!(
        reasons,
        vec![
            "strong alignment in devops skills",
            "devops career path",
            "matching domain interests",
        ]
    );
    assert!(reasons.len() <= MAX_REASONS);

    let text = render_explanation(90, &reasons);
    assert_eq!(
        text,
        "90% match due to strong alignment in devops skills, devops career path, matching domain interests."
    );
}
