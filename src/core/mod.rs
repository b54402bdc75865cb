// Core algorithm exports
pub mod categories;
pub mod experience;
pub mod explanation;
pub mod jitter;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use categories::{classify, classify_all, industry_categories, skill_categories, CategoryDictionary, CategorySet};
pub use experience::experience_weight;
pub use explanation::{match_reasons, render_explanation, CategoryProfile};
pub use jitter::{FixedJitter, JitterFactory, JitterSource, UniformJitter};
pub use matcher::Matcher;
pub use scoring::{to_percentage, ScoreAggregator};
pub use similarity::{jaccard_similarity, keyword_overlap};
