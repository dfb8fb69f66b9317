use serde::Serialize;

use super::criterion::Scored;
use super::lexicon::Lexicon;
use super::text::NormalizedText;

pub const MUST_HAVE_POINTS: u32 = 4;
pub const GOOD_TO_HAVE_POINTS: u32 = 2;
pub const MAX_POINTS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDetails {
    pub must_have_found: Vec<String>,
    pub good_to_have_found: Vec<String>,
    /// Points after the cap.
    pub points: u32,
    pub raw_points: u32,
}

fn found_in(text: &NormalizedText, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|kw| text.contains(kw))
        .map(|kw| kw.to_string())
        .collect()
}

pub fn detect_keywords(text: &NormalizedText, lexicon: &Lexicon) -> Scored<KeywordDetails> {
    let must_have_found = found_in(text, lexicon.must_have);
    let good_to_have_found = found_in(text, lexicon.good_to_have);

    let raw_points = must_have_found.len() as u32 * MUST_HAVE_POINTS
        + good_to_have_found.len() as u32 * GOOD_TO_HAVE_POINTS;
    let points = raw_points.min(MAX_POINTS);
    let score = f64::from(points) / f64::from(MAX_POINTS) * 100.0;

    Scored {
        score,
        details: KeywordDetails {
            must_have_found,
            good_to_have_found,
            points,
            raw_points,
        },
    }
}
