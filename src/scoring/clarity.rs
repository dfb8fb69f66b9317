use serde::Serialize;

use super::bands::{Band, BandTable, Bound};
use super::criterion::Scored;
use super::lexicon::Lexicon;
use super::text::NormalizedText;

/// Filler occurrences per hundred words.
const FILLER_RATE_BANDS: BandTable = BandTable {
    bound: Bound::AtMost,
    bands: &[
        Band::new(3.0, 100.0, "rare"),
        Band::new(6.0, 80.0, "occasional"),
        Band::new(9.0, 60.0, "noticeable"),
        Band::new(12.0, 40.0, "frequent"),
    ],
    fallback: Band::new(f64::INFINITY, 20.0, "constant"),
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClarityDetails {
    pub filler_count: usize,
    pub filler_rate_percent: f64,
}

pub fn count_fillers(text: &NormalizedText, lexicon: &Lexicon) -> usize {
    let words = text.words();
    lexicon
        .fillers
        .iter()
        .map(|filler| {
            if filler.contains(' ') {
                text.count(filler)
            } else {
                words.iter().filter(|w| *w == filler).count()
            }
        })
        .sum()
}

pub fn detect_clarity(text: &NormalizedText, lexicon: &Lexicon) -> Scored<ClarityDetails> {
    let filler_count = count_fillers(text, lexicon);
    let total_words = text.word_count().max(1);
    let filler_rate_percent = filler_count as f64 / total_words as f64 * 100.0;

    Scored {
        score: FILLER_RATE_BANDS.score(filler_rate_percent),
        details: ClarityDetails {
            filler_count,
            filler_rate_percent,
        },
    }
}
