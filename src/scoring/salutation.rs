use serde::Serialize;
use strum::Display;

use super::criterion::Scored;
use super::lexicon::Lexicon;
use super::text::NormalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
pub enum SalutationLevel {
    None,
    Normal,
    Good,
    Excellent,
}

impl SalutationLevel {
    pub fn score(self) -> f64 {
        match self {
            Self::Excellent => 100.0,
            Self::Good => 75.0,
            Self::Normal => 50.0,
            Self::None => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalutationDetails {
    pub level: SalutationLevel,
}

/// Phrase tiers match as substrings; the plain greetings only as whole
/// tokens so "this" never counts as "hi".
pub fn detect_salutation(text: &NormalizedText, lexicon: &Lexicon) -> Scored<SalutationDetails> {
    let level = if lexicon.salutation_excellent.iter().any(|p| text.contains(p)) {
        SalutationLevel::Excellent
    } else if lexicon.salutation_good.iter().any(|p| text.contains(p)) {
        SalutationLevel::Good
    } else if text
        .words()
        .iter()
        .any(|w| lexicon.salutation_normal.contains(w))
    {
        SalutationLevel::Normal
    } else {
        SalutationLevel::None
    };

    Scored {
        score: level.score(),
        details: SalutationDetails { level },
    }
}
