use std::time::Duration;

use super::lexicon::Lexicon;
use super::rules::rule_based_scores;
use super::score::{build_report, ScoreReport};
use super::semantic::{semantic_scores, SemanticScorer, SemanticScores};
use crate::error::{Result, ScoringError};
use crate::settings::{FailurePolicy, RubricWeights, Settings};
use crate::utils::log_semantic_fallback;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub weights: RubricWeights,
    pub semantic_timeout: Duration,
    pub on_failure: FailurePolicy,
    pub lexicon: Lexicon,
}

impl EngineOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            weights: settings.rubric.weights,
            semantic_timeout: Duration::from_millis(settings.semantic.timeout_ms),
            on_failure: settings.semantic.on_failure,
            lexicon: Lexicon::STANDARD,
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

async fn semantic_with_timeout<S: SemanticScorer>(
    scorer: &S,
    text: &str,
    timeout: Duration,
) -> Result<SemanticScores> {
    tokio::time::timeout(timeout, semantic_scores(scorer, text))
        .await
        .map_err(|_| ScoringError::SemanticTimeout(timeout))?
}

pub async fn score_transcript<S: SemanticScorer>(
    text: &str,
    scorer: &S,
    options: &EngineOptions,
) -> Result<ScoreReport> {
    options.weights.validate()?;

    let rules = rule_based_scores(text, &options.lexicon);

    let semantic = match semantic_with_timeout(scorer, text, options.semantic_timeout).await {
        Ok(scores) => Some(scores),
        Err(e) if options.on_failure == FailurePolicy::RuleOnly && e.is_semantic() => {
            log_semantic_fallback(&e.to_string());
            None
        }
        Err(e) => return Err(e),
    };

    Ok(build_report(rules, semantic.as_ref(), &options.weights))
}
