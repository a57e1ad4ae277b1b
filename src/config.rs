//! Configuration for scoring weights and the embedding model.
//!
//! The numeric constants here are empirical. They mirror how commercial
//! ATS keyword filters weigh coverage, and changing them changes every
//! downstream score, so they live in one serializable place instead of
//! being scattered through the scoring code.

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub semantic: SemanticConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// ATS sub-score weights. Keyword coverage dominates by design.
    pub keywords_weight: f32,
    pub formatting_weight: f32,
    pub experience_weight: f32,
    pub education_weight: f32,

    /// Skill-count thresholds for the keyword sub-score, highest first.
    pub keyword_bands: Vec<KeywordBand>,

    /// Blend between lexical skill overlap and embedding similarity.
    pub skill_blend_weight: f32,
    pub semantic_blend_weight: f32,

    /// Multiplier applied when a job's type is outside the caller's
    /// preference set. A soft penalty, not an exclusion.
    pub preference_penalty: f32,

    /// Jobs scoring below this are dropped from the ranking.
    pub min_match_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordBand {
    pub min_skills: usize,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticConfig {
    /// Local directory holding a Model2Vec model (tokenizer.json,
    /// model.safetensors, config.json). None disables semantic scoring.
    pub model_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                keywords_weight: 0.40,
                formatting_weight: 0.20,
                experience_weight: 0.25,
                education_weight: 0.15,
                keyword_bands: vec![
                    KeywordBand { min_skills: 15, score: 95.0 },
                    KeywordBand { min_skills: 10, score: 85.0 },
                    KeywordBand { min_skills: 7, score: 75.0 },
                    KeywordBand { min_skills: 5, score: 65.0 },
                    KeywordBand { min_skills: 3, score: 50.0 },
                ],
                skill_blend_weight: 0.7,
                semantic_blend_weight: 0.3,
                preference_penalty: 0.7,
                min_match_score: 10,
            },
            semantic: SemanticConfig { model_dir: None },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}

impl ScoringConfig {
    /// Keyword sub-score for a given skill count, via the banded thresholds.
    pub fn keyword_score(&self, skill_count: usize) -> f32 {
        self.keyword_bands
            .iter()
            .find(|band| skill_count >= band.min_skills)
            .map(|band| band.score)
            .unwrap_or(30.0)
    }
}
