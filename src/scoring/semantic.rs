use simsimd::SpatialSimilarity;
use std::future::Future;
use strum::EnumCount;

use super::criterion::Criterion;
use crate::error::{Result, ScoringError};

/// Capability that compares a transcript against a reference description.
///
/// `similarity` returns a cosine similarity in `[-1, 1]`. Implementations that
/// can batch should override `rubric_similarities`, which must return one
/// value per criterion in canonical order.
pub trait SemanticScorer: Send + Sync {
    fn similarity(&self, text: &str, reference: &str) -> impl Future<Output = Result<f32>> + Send;

    fn rubric_similarities(&self, text: &str) -> impl Future<Output = Result<Vec<f32>>> + Send {
        async move {
            let mut similarities = Vec::with_capacity(Criterion::COUNT);
            for criterion in Criterion::all() {
                similarities.push(
                    self.similarity(text, criterion.reference_description())
                        .await?,
                );
            }
            Ok(similarities)
        }
    }
}

/// Always fails; used when the embedding model is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledScorer;

impl SemanticScorer for DisabledScorer {
    async fn similarity(&self, _text: &str, _reference: &str) -> Result<f32> {
        Err(ScoringError::unavailable("semantic scoring is disabled"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemanticScores {
    /// Raw cosine similarities, canonical criterion order.
    pub similarities: Vec<f32>,
    /// Similarities mapped onto `[0, 100]`.
    pub scores: Vec<f64>,
}

impl SemanticScores {
    pub fn from_similarities(similarities: Vec<f32>) -> Result<Self> {
        if similarities.len() != Criterion::COUNT {
            return Err(ScoringError::unavailable(format!(
                "expected {} similarities, got {}",
                Criterion::COUNT,
                similarities.len()
            )));
        }
        let scores = similarities
            .iter()
            .map(|sim| normalize_similarity(*sim))
            .collect();
        Ok(Self {
            similarities,
            scores,
        })
    }

    pub fn score(&self, criterion: Criterion) -> f64 {
        self.scores[criterion.index()]
    }
}

pub async fn semantic_scores<S: SemanticScorer>(scorer: &S, text: &str) -> Result<SemanticScores> {
    let similarities = scorer.rubric_similarities(text).await?;
    SemanticScores::from_similarities(similarities)
}

/// Maps a cosine similarity in `[-1, 1]` onto `[0, 100]`.
pub fn normalize_similarity(sim: f32) -> f64 {
    let sim = f64::from(sim);
    if sim.is_nan() {
        return 0.0;
    }
    ((sim + 1.0) / 2.0).clamp(0.0, 1.0) * 100.0
}

/// `None` when simsimd rejects the pair, e.g. on a dimension mismatch.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    f32::cosine(a, b).map(|distance| (1.0 - distance) as f32)
}
