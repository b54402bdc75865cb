use mentor_match::core::{
    categories::{classify_all, skill_categories},
    similarity::{jaccard_similarity, keyword_overlap},
    FixedJitter, Matcher, UniformJitter,
};
use mentor_match::models::{Candidate, SeekerProfile};
use proptest::prelude::*;

const SKILLS: &[&str] = &[
    "Python", "Java", "SQL", "Excel", "Docker", "Linux", "Selenium", "Machine Learning",
    "Figma", "Network Security", "Jira", "Plumbing", "Carpentry", "",
];

const JOBS: &[&str] = &[
    "Software Engineer", "Data Scientist", "Data Analyst", "Cloud Engineer", "QA Specialist",
    "IT Administrator", "Product Manager", "Finance Associate", "Plumber", "Chef", "",
];

const DOMAINS: &[&str] = &[
    "Data Science", "Web Development", "Cloud Computing", "Cyber Security", "Finance",
    "Artificial Intelligence", "Cooking", "   ",
];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(|s| s.to_string())
}

fn seeker_strategy() -> impl Strategy<Value = SeekerProfile> {
    (
        prop::collection::btree_set(pick(SKILLS), 0..5),
        prop::collection::btree_set(pick(DOMAINS), 0..3),
        prop::collection::btree_set(pick(DOMAINS), 0..3),
        prop::collection::btree_set(pick(JOBS), 0..3),
    )
        .prop_map(|(skills, domains, academics, industries)| SeekerProfile {
            skills,
            interested_domains: domains,
            academic_interests: academics,
            preferred_industries: industries,
        })
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec((pick(SKILLS), pick(JOBS), 0i64..40), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (skill, job, years))| Candidate {
                id: i.to_string(),
                name: format!("Alumni {}", i),
                skill,
                current_job: job,
                years_of_experience: years,
                contact_reference: String::new(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn scores_stay_in_band(seeker in seeker_strategy(), pool in candidates_strategy(), seed in any::<u64>()) {
        let matcher = Matcher::with_default_weights();
        let results = matcher.rank(&seeker, &pool, &mut UniformJitter::seeded(seed)).unwrap();

        prop_assert_eq!(results.len(), pool.len());
        for r in &results {
            prop_assert!((35..=98).contains(&r.score), "score {} out of band", r.score);
            prop_assert!(r.explanation.ends_with('.'));
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(seeker in seeker_strategy(), pool in candidates_strategy()) {
        let matcher = Matcher::with_default_weights();
        let results = matcher.rank(&seeker, &pool, &mut FixedJitter::neutral()).unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                // ids are input positions
                let a: usize = pair[0].candidate.id.parse().unwrap();
                let b: usize = pair[1].candidate.id.parse().unwrap();
                prop_assert!(a < b, "tie broke input order: {} before {}", a, b);
            }
        }
    }

    #[test]
    fn fixed_jitter_is_deterministic(seeker in seeker_strategy(), pool in candidates_strategy()) {
        let matcher = Matcher::with_default_weights();
        let first = matcher.rank(&seeker, &pool, &mut FixedJitter::neutral()).unwrap();
        let second = matcher.rank(&seeker, &pool, &mut FixedJitter::neutral()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn top_n_length(seeker in seeker_strategy(), pool in candidates_strategy(), n in 0usize..30) {
        let matcher = Matcher::with_default_weights();
        let top = matcher.top_n(&seeker, &pool, n, &mut FixedJitter::neutral()).unwrap();
        prop_assert_eq!(top.len(), n.min(pool.len()));
    }

    #[test]
    fn explanation_has_at_most_three_reasons(seeker in seeker_strategy(), pool in candidates_strategy()) {
        let matcher = Matcher::with_default_weights();
        for r in matcher.rank(&seeker, &pool, &mut FixedJitter::neutral()).unwrap() {
            let prefix = format!("{}% match due to ", r.score);
            let body = r.explanation.strip_prefix(&prefix).unwrap();
            // No reason text contains ", " itself
            prop_assert!(body.split(", ").count() <= 3, "too many reasons: {}", body);
        }
    }

    #[test]
    fn jaccard_symmetric_and_bounded(
        a in prop::collection::vec(pick(SKILLS), 0..5),
        b in prop::collection::vec(pick(SKILLS), 0..5),
    ) {
        let set_a = classify_all(&a, skill_categories());
        let set_b = classify_all(&b, skill_categories());
        let ab = jaccard_similarity(&set_a, &set_b);
        prop_assert_eq!(ab, jaccard_similarity(&set_b, &set_a));
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn keyword_overlap_bounded(texts in prop::collection::vec(".{0,40}", 0..5), target in ".{0,60}") {
        let score = keyword_overlap(&texts, &target);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
