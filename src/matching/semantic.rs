//! Semantic similarity via static embeddings.
//!
//! The embedding model is a runtime capability: it either loads once at
//! startup or the matcher runs lexical-only for the rest of the process.
//! Per-item inference problems degrade to a zero score for that one
//! comparison, never to a request failure.

use crate::config::SemanticConfig;
use crate::error::{MatcherError, Result};
use log::{info, warn};
use model2vec_rs::model::StaticModel;
use std::path::Path;

/// Provider of text-to-text similarity in [0.0, 1.0].
pub trait SimilarityProvider: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f32;
    /// Model identifier for logs and reports; None for the lexical-only
    /// fallback.
    fn model_name(&self) -> Option<&str>;
}

/// Model2Vec-backed provider.
pub struct EmbeddingSimilarity {
    model: StaticModel,
    name: String,
}

impl EmbeddingSimilarity {
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model = StaticModel::from_pretrained(model_dir, None, None, None)
            .map_err(|e| MatcherError::EmbeddingModel(format!("Failed to load model: {}", e)))?;
        info!("loaded embedding model from {}", model_dir.display());
        Ok(Self {
            model,
            name: model_dir.display().to_string(),
        })
    }
}

impl SimilarityProvider for EmbeddingSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        let embedding_a = self.model.encode_single(a);
        let embedding_b = self.model.encode_single(b);
        if embedding_a.is_empty() || embedding_b.is_empty() {
            warn!("embedding inference returned an empty vector, scoring 0");
            return 0.0;
        }
        cosine_similarity(&embedding_a, &embedding_b)
    }

    fn model_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Fallback provider used when no model is configured or loading failed.
/// Always scores zero, which collapses ranking to pure lexical matching.
pub struct NullSimilarity;

impl SimilarityProvider for NullSimilarity {
    fn similarity(&self, _a: &str, _b: &str) -> f32 {
        0.0
    }

    fn model_name(&self) -> Option<&str> {
        None
    }
}

/// Select a provider once at startup. A load failure is logged and mapped
/// to the null provider for the remaining process lifetime; there is no
/// retry.
pub fn load_provider(config: &SemanticConfig) -> Box<dyn SimilarityProvider> {
    match &config.model_dir {
        Some(dir) => match EmbeddingSimilarity::load(dir) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!("embedding model unavailable, falling back to lexical matching: {}", e);
                Box::new(NullSimilarity)
            }
        },
        None => Box::new(NullSimilarity),
    }
}

/// Cosine similarity of two vectors. Dimension mismatches and zero-norm
/// vectors score 0 rather than failing.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
