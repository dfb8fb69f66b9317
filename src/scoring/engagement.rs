use serde::Serialize;

use super::bands::RATIO_BANDS;
use super::criterion::Scored;
use super::lexicon::Lexicon;
use super::text::NormalizedText;

/// Positive probability when no sentiment word appears at all.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementDetails {
    pub positive_prob: f64,
    pub pos_count: usize,
    pub neg_count: usize,
}

pub fn detect_engagement(text: &NormalizedText, lexicon: &Lexicon) -> Scored<EngagementDetails> {
    let words = text.words();
    let pos_count = words.iter().filter(|w| lexicon.positive.contains(w)).count();
    let neg_count = words.iter().filter(|w| lexicon.negative.contains(w)).count();

    let positive_prob = match pos_count + neg_count {
        0 => NEUTRAL_PROBABILITY,
        total => pos_count as f64 / total as f64,
    };

    Scored {
        score: RATIO_BANDS.score(positive_prob),
        details: EngagementDetails {
            positive_prob,
            pos_count,
            neg_count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(raw: &str) -> Scored<EngagementDetails> {
        detect_engagement(&NormalizedText::new(raw), &Lexicon::STANDARD)
    }

    #[test]
    fn test_neutral_when_no_sentiment_words() {
        let result = detect("My name is Asha");
        assert_eq!(result.details.positive_prob, 0.5);
        assert_eq!(result.score, 60.0);
    }

    #[test]
    fn test_all_positive() {
        let result = detect("I am happy and proud and I love chess");
        assert_eq!(result.details.pos_count, 3);
        assert_eq!(result.details.neg_count, 0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_mixed_sentiment() {
        let result = detect("I am happy but nervous and tired");
        assert_eq!(result.details.pos_count, 1);
        assert_eq!(result.details.neg_count, 2);
        assert!((result.details.positive_prob - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_all_negative() {
        let result = detect("sad sad tired");
        assert_eq!(result.details.positive_prob, 0.0);
        assert_eq!(result.score, 20.0);
    }

    #[test]
    fn test_tokens_must_match_exactly() {
        // "happy." keeps its punctuation
        let result = detect("I am happy.");
        assert_eq!(result.details.pos_count, 0);
        assert_eq!(result.score, 60.0);
    }
}
