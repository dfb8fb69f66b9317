use serde::Serialize;

use super::bands::Band;
use super::criterion::Scored;

pub const TOO_FAST: Band = Band::new(162.0, 0.0, "Too fast");
pub const FAST: Band = Band::new(141.0, 40.0, "Fast");
pub const IDEAL: Band = Band::new(111.0, 100.0, "Ideal");
pub const SLOW: Band = Band::new(81.0, 60.0, "Slow");
pub const TOO_SLOW: Band = Band::new(0.0, 20.0, "Too slow");

/// Words per minute, approximated by the raw word count of a roughly
/// one-minute introduction. The bands are closed ranges; 161 sits in the gap
/// between "Fast" and "Too fast" and lands on the fallback.
pub fn pace_band(wpm: usize) -> &'static Band {
    match wpm {
        w if w > 161 => &TOO_FAST,
        141..=160 => &FAST,
        111..=140 => &IDEAL,
        81..=110 => &SLOW,
        _ => &TOO_SLOW,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRateDetails {
    pub wpm_estimate: usize,
    pub band: &'static str,
}

pub fn detect_speech_rate(word_count: usize) -> Scored<SpeechRateDetails> {
    let band = pace_band(word_count);
    Scored {
        score: band.score,
        details: SpeechRateDetails {
            wpm_estimate: word_count,
            band: band.label,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_of(words: usize) -> (f64, &'static str) {
        let result = detect_speech_rate(words);
        (result.score, result.details.band)
    }

    #[test]
    fn test_ideal_pace() {
        assert_eq!(band_of(125), (100.0, "Ideal"));
        assert_eq!(band_of(111), (100.0, "Ideal"));
        assert_eq!(band_of(140), (100.0, "Ideal"));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_of(0), (20.0, "Too slow"));
        assert_eq!(band_of(80), (20.0, "Too slow"));
        assert_eq!(band_of(81), (60.0, "Slow"));
        assert_eq!(band_of(110), (60.0, "Slow"));
        assert_eq!(band_of(141), (40.0, "Fast"));
        assert_eq!(band_of(160), (40.0, "Fast"));
        assert_eq!(band_of(162), (0.0, "Too fast"));
        assert_eq!(band_of(500), (0.0, "Too fast"));
    }

    #[test]
    fn test_161_falls_through_to_too_slow() {
        assert_eq!(band_of(161), (20.0, "Too slow"));
    }

    #[test]
    fn test_estimate_is_word_count() {
        assert_eq!(detect_speech_rate(97).details.wpm_estimate, 97);
    }
}
