use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::core::jitter::{JitterFactory, JITTER_MAX, JITTER_MIN};
use crate::error::MatchError;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub jitter: JitterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 3 }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_category_weight")]
    pub skill_category: f64,
    #[serde(default = "default_industry_category_weight")]
    pub industry_category: f64,
    #[serde(default = "default_direct_skill_weight")]
    pub direct_skill: f64,
    #[serde(default = "default_domain_alignment_weight")]
    pub domain_alignment: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_category: default_skill_category_weight(),
            industry_category: default_industry_category_weight(),
            direct_skill: default_direct_skill_weight(),
            domain_alignment: default_domain_alignment_weight(),
            experience: default_experience_weight(),
        }
    }
}

fn default_skill_category_weight() -> f64 { 0.30 }
fn default_industry_category_weight() -> f64 { 0.25 }
fn default_direct_skill_weight() -> f64 { 0.20 }
fn default_domain_alignment_weight() -> f64 { 0.15 }
fn default_experience_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct JitterSettings {
    #[serde(default = "default_jitter_mode")]
    pub mode: String,
    #[serde(default = "default_fixed_factor")]
    pub fixed_factor: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for JitterSettings {
    fn default() -> Self {
        Self {
            mode: default_jitter_mode(),
            fixed_factor: default_fixed_factor(),
            seed: None,
        }
    }
}

fn default_jitter_mode() -> String { "uniform".to_string() }
fn default_fixed_factor() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Validated scoring weights
    pub fn scoring_weights(&self) -> Result<ScoringWeights, MatchError> {
        let w = &self.scoring.weights;
        let weights = ScoringWeights {
            skill_category: w.skill_category,
            industry_category: w.industry_category,
            direct_skill: w.direct_skill,
            domain_alignment: w.domain_alignment,
            experience: w.experience,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Factory creating one jitter source per ranking call
    pub fn jitter_factory(&self) -> Result<JitterFactory, MatchError> {
        match self.jitter.mode.to_lowercase().as_str() {
            "uniform" => Ok(match self.jitter.seed {
                Some(seed) => JitterFactory::Seeded(seed),
                None => JitterFactory::Uniform,
            }),
            "fixed" => {
                let factor = self.jitter.fixed_factor;
                if !(JITTER_MIN..=JITTER_MAX).contains(&factor) {
                    return Err(MatchError::InvalidJitter(format!(
                        "fixed factor {} outside [{}, {}]",
                        factor, JITTER_MIN, JITTER_MAX
                    )));
                }
                Ok(JitterFactory::Fixed(factor))
            }
            other => Err(MatchError::InvalidJitter(format!(
                "unknown jitter mode '{}', expected 'uniform' or 'fixed'",
                other
            ))),
        }
    }
}
