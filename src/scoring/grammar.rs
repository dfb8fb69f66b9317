use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::bands::{Band, BandTable, Bound};
use super::criterion::Scored;
use super::text::NormalizedText;

pub const BASE_SCORE: f64 = 90.0;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

const SENTENCE_LENGTH_PENALTIES: BandTable = BandTable {
    bound: Bound::Above,
    bands: &[
        Band::new(25.0, 25.0, "very long sentences"),
        Band::new(18.0, 15.0, "long sentences"),
        Band::new(12.0, 5.0, "slightly long sentences"),
    ],
    fallback: Band::new(0.0, 0.0, "short sentences"),
};

const AND_CHAIN_PENALTIES: BandTable = BandTable {
    bound: Bound::Above,
    bands: &[
        Band::new(5.0, 20.0, "heavy and-chaining"),
        Band::new(3.0, 10.0, "some and-chaining"),
    ],
    fallback: Band::new(0.0, 0.0, "little and-chaining"),
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarDetails {
    pub avg_sentence_length: f64,
    pub sentence_count: usize,
    pub and_count: usize,
}

/// Never zero; text without terminal punctuation is one sentence.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1)
}

/// Heuristic only: long sentences and "and" chains stand in for run-ons.
pub fn detect_grammar(text: &NormalizedText) -> Scored<GrammarDetails> {
    let words = text.words();
    let sentence_count = sentence_count(text.as_str());
    let avg_sentence_length = words.len() as f64 / sentence_count as f64;
    let and_count = words.iter().filter(|w| **w == "and").count();

    let penalty = SENTENCE_LENGTH_PENALTIES.score(avg_sentence_length)
        + AND_CHAIN_PENALTIES.score(and_count as f64);
    let score = (BASE_SCORE - penalty).clamp(0.0, 100.0);

    Scored {
        score,
        details: GrammarDetails {
            avg_sentence_length,
            sentence_count,
            and_count,
        },
    }
}
