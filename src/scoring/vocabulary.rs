use serde::Serialize;
use std::collections::HashSet;

use super::bands::RATIO_BANDS;
use super::criterion::Scored;
use super::text::NormalizedText;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyDetails {
    pub ttr: f64,
    pub total_words: usize,
    pub distinct_words: usize,
}

/// Type-token ratio over the tokenized transcript.
pub fn detect_vocabulary(text: &NormalizedText) -> Scored<VocabularyDetails> {
    let words = text.words();
    let total_words = words.len();

    if total_words == 0 {
        return Scored {
            score: 0.0,
            details: VocabularyDetails {
                ttr: 0.0,
                total_words: 0,
                distinct_words: 0,
            },
        };
    }

    let distinct_words = words.iter().collect::<HashSet<_>>().len();
    let ttr = distinct_words as f64 / total_words as f64;

    Scored {
        score: RATIO_BANDS.score(ttr),
        details: VocabularyDetails {
            ttr,
            total_words,
            distinct_words,
        },
    }
}
