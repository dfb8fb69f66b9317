pub mod bands;
pub mod clarity;
mod criterion;
mod embeddings;
pub mod engagement;
mod engine;
pub mod feedback;
pub mod flow;
pub mod grammar;
pub mod keywords;
pub mod lexicon;
mod rules;
pub mod salutation;
mod score;
pub mod semantic;
pub mod speech_rate;
mod text;
pub mod vocabulary;

pub use criterion::{Criterion, CriterionResult, Details, Scored};
pub use embeddings::EmbeddingHandle;
pub use engine::{score_transcript, EngineOptions};
pub use feedback::feedback_for;
pub use lexicon::Lexicon;
pub use rules::{rule_based_scores, RuleScores};
pub use score::{
    build_report, combine, CriterionReport, ScoreReport, SemanticStatus, RULE_WEIGHT,
    SEMANTIC_WEIGHT,
};
pub use semantic::{DisabledScorer, SemanticScorer, SemanticScores};
pub use text::NormalizedText;
