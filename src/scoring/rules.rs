use super::clarity::detect_clarity;
use super::criterion::{Criterion, CriterionResult};
use super::engagement::detect_engagement;
use super::flow::detect_flow;
use super::grammar::detect_grammar;
use super::keywords::detect_keywords;
use super::lexicon::Lexicon;
use super::salutation::detect_salutation;
use super::speech_rate::detect_speech_rate;
use super::text::NormalizedText;
use super::vocabulary::detect_vocabulary;

#[derive(Debug, Clone, PartialEq)]
pub struct RuleScores {
    pub word_count: usize,
    /// One entry per criterion, in canonical order.
    pub results: Vec<CriterionResult>,
}

impl RuleScores {
    pub fn get(&self, criterion: Criterion) -> &CriterionResult {
        &self.results[criterion.index()]
    }

    pub fn score(&self, criterion: Criterion) -> f64 {
        self.get(criterion).score
    }
}

pub fn rule_based_scores(transcript: &str, lexicon: &Lexicon) -> RuleScores {
    let text = NormalizedText::new(transcript);
    let word_count = text.word_count();

    let results = vec![
        detect_salutation(&text, lexicon).into_result(),
        detect_keywords(&text, lexicon).into_result(),
        detect_flow(&text, lexicon).into_result(),
        detect_speech_rate(word_count).into_result(),
        detect_grammar(&text).into_result(),
        detect_vocabulary(&text).into_result(),
        detect_clarity(&text, lexicon).into_result(),
        detect_engagement(&text, lexicon).into_result(),
    ];

    RuleScores {
        word_count,
        results,
    }
}
