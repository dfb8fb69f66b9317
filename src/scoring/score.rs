use serde::Serialize;

use super::criterion::{Criterion, Details};
use super::feedback::feedback_for;
use super::rules::RuleScores;
use super::semantic::SemanticScores;
use crate::settings::RubricWeights;

pub const RULE_WEIGHT: f64 = 0.6;
pub const SEMANTIC_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticStatus {
    Ok,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionReport {
    pub criterion: Criterion,
    pub score: f64,
    pub rule_score: f64,
    pub semantic_score: Option<f64>,
    pub weight: u32,
    pub details: Details,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub overall_score: f64,
    pub word_count: usize,
    pub semantic_status: SemanticStatus,
    pub criteria: Vec<CriterionReport>,
}

impl ScoreReport {
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionReport> {
        self.criteria.iter().find(|c| c.criterion == criterion)
    }
}

/// Without a semantic score the rule score stands alone.
pub fn combine(rule_score: f64, semantic_score: Option<f64>) -> f64 {
    match semantic_score {
        Some(semantic) => RULE_WEIGHT * rule_score + SEMANTIC_WEIGHT * semantic,
        None => rule_score,
    }
}

pub fn weighted_contribution(combined: f64, weight: u32) -> f64 {
    combined * f64::from(weight) / 100.0
}

pub fn build_report(
    rules: RuleScores,
    semantic: Option<&SemanticScores>,
    weights: &RubricWeights,
) -> ScoreReport {
    let mut overall_score = 0.0;
    let mut criteria = Vec::with_capacity(rules.results.len());

    for result in rules.results {
        let semantic_score = semantic.map(|s| s.score(result.criterion));
        let score = combine(result.score, semantic_score);
        let weight = weights.weight(result.criterion);
        overall_score += weighted_contribution(score, weight);

        criteria.push(CriterionReport {
            criterion: result.criterion,
            feedback: feedback_for(result.criterion, score, &result.details),
            score,
            rule_score: result.score,
            semantic_score,
            weight,
            details: result.details,
        });
    }

    ScoreReport {
        overall_score,
        word_count: rules.word_count,
        semantic_status: if semantic.is_some() {
            SemanticStatus::Ok
        } else {
            SemanticStatus::Unavailable
        },
        criteria,
    }
}
