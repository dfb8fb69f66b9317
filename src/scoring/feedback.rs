use super::criterion::{Criterion, Details};

pub const FALLBACK_FEEDBACK: &str = "No specific feedback available for this criterion.";

fn list_or_none(found: &[String]) -> String {
    if found.is_empty() {
        "none".to_string()
    } else {
        found.join(", ")
    }
}

/// Deterministic message for one criterion. Details belonging to a different
/// criterion fall back to a generic sentence.
pub fn feedback_for(criterion: Criterion, score: f64, details: &Details) -> String {
    match (criterion, details) {
        (Criterion::Salutation, Details::Salutation(d)) => {
            if score == 0.0 {
                "No clear greeting detected. Start with a polite salutation like \
                 'Good morning' or 'Hello everyone'."
                    .to_string()
            } else if score < 70.0 {
                format!(
                    "Greeting detected ({}). You can make it warmer or more enthusiastic, \
                     e.g. 'I am excited to introduce myself today.'",
                    d.level
                )
            } else {
                format!(
                    "Nice greeting ({}). Your opening sounds polite and appropriate.",
                    d.level
                )
            }
        }
        (Criterion::KeywordPresence, Details::Keywords(d)) => format!(
            "You covered some key details about yourself. Try to clearly mention name, age, \
             class/school, family, and hobbies. Optional details like goals, where you are from, \
             strengths, or a fun fact make the introduction richer. \
             (Found must-have keywords: {}; good-to-have: {}.)",
            list_or_none(&d.must_have_found),
            list_or_none(&d.good_to_have_found)
        ),
        (Criterion::Flow, Details::Flow(d)) => {
            if d.order_ok {
                "Your introduction follows a logical order and is easy to follow.".to_string()
            } else {
                "The information jumps around a bit. Try this structure: greeting → name → \
                 basic details (age, class, school, place) → extra details (hobbies, goals, \
                 fun fact) → closing."
                    .to_string()
            }
        }
        (Criterion::SpeechRate, Details::SpeechRate(d)) => match d.band {
            "Too fast" | "Fast" => "You may be speaking too quickly. Slow down slightly and add \
                                    small pauses so each sentence is clear."
                .to_string(),
            "Too slow" => "You might be speaking a bit slowly. Try connecting phrases more \
                           smoothly to sound more natural."
                .to_string(),
            _ => "Your speaking pace seems comfortable for a short introduction.".to_string(),
        },
        (Criterion::Grammar, Details::Grammar(_)) => tiered(
            score,
            "Sentence structure looks quite good for a short intro. Keep using clear, simple \
             sentences.",
            "Some sentences may be long or linked with many 'and's. Try breaking long sentences \
             into two and avoid chaining too many ideas with 'and'.",
            "Sentences may be too long or loosely connected. Use shorter sentences with clear \
             full stops, and avoid using 'and' too often in a single sentence.",
        ),
        (Criterion::Vocabulary, Details::Vocabulary(_)) => tiered(
            score,
            "Good variety of words. You are using diverse vocabulary for a short introduction.",
            "Vocabulary is okay, but you repeat some words. Try using a few different adjectives \
             and verbs to describe yourself and your hobbies.",
            "You rely on very simple, repeated words. Learn and use some new words to talk about \
             your interests, strengths, and goals.",
        ),
        (Criterion::Clarity, Details::Clarity(d)) => {
            if score > HIGH {
                "Very few filler words. Your speech is clear and to the point.".to_string()
            } else if score > MID {
                format!(
                    "You use some fillers (around {:.1}% of your words). Try replacing 'um/like' \
                     with short pauses.",
                    d.filler_rate_percent
                )
            } else {
                format!(
                    "Many filler words detected (around {:.1}% of your words). Practice speaking \
                     slower and pausing instead of saying 'um' or 'like'.",
                    d.filler_rate_percent
                )
            }
        }
        (Criterion::Engagement, Details::Engagement(_)) => tiered(
            score,
            "Your tone feels positive and engaged. You sound interested and confident while \
             speaking about yourself.",
            "Tone is mostly neutral with some positivity. Try adding a bit more energy or warmth \
             when you talk about your hobbies or goals.",
            "Tone may sound a little flat or less positive. Try to sound more enthusiastic when \
             you introduce yourself, especially when talking about your interests and dreams.",
        ),
        _ => FALLBACK_FEEDBACK.to_string(),
    }
}

const HIGH: f64 = 85.0;
const MID: f64 = 60.0;

fn tiered(score: f64, high: &str, mid: &str, low: &str) -> String {
    let message = if score > HIGH {
        high
    } else if score > MID {
        mid
    } else {
        low
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::clarity::ClarityDetails;
    use crate::scoring::flow::FlowDetails;
    use crate::scoring::keywords::KeywordDetails;
    use crate::scoring::salutation::{SalutationDetails, SalutationLevel};
    use crate::scoring::speech_rate::SpeechRateDetails;
    use crate::scoring::vocabulary::VocabularyDetails;

    fn salutation(level: SalutationLevel) -> Details {
        Details::Salutation(SalutationDetails { level })
    }

    #[test]
    fn test_salutation_thresholds() {
        let none = feedback_for(Criterion::Salutation, 0.0, &salutation(SalutationLevel::None));
        assert!(none.starts_with("No clear greeting"));

        let normal = feedback_for(
            Criterion::Salutation,
            50.0,
            &salutation(SalutationLevel::Normal),
        );
        assert!(normal.contains("(Normal)"));
        assert!(normal.contains("warmer"));

        let good = feedback_for(Criterion::Salutation, 75.0, &salutation(SalutationLevel::Good));
        assert!(good.starts_with("Nice greeting (Good)"));
    }

    #[test]
    fn test_keywords_are_listed() {
        let details = Details::Keywords(KeywordDetails {
            must_have_found: vec!["name".into(), "age".into()],
            good_to_have_found: vec![],
            points: 8,
            raw_points: 8,
        });
        let text = feedback_for(Criterion::KeywordPresence, 26.0, &details);
        assert!(text.contains("Found must-have keywords: name, age; good-to-have: none."));
    }

    #[test]
    fn test_flow_uses_order_flag() {
        let details = Details::Flow(FlowDetails {
            order_ok: false,
            salutation_index: Some(10),
            name_index: Some(0),
            hobby_index: None,
            goal_index: None,
        });
        let text = feedback_for(Criterion::Flow, 90.0, &details);
        assert!(text.starts_with("The information jumps around"));
    }

    #[test]
    fn test_speech_rate_uses_band() {
        let details = |band| {
            Details::SpeechRate(SpeechRateDetails {
                wpm_estimate: 0,
                band,
            })
        };
        assert!(feedback_for(Criterion::SpeechRate, 0.0, &details("Too fast")).contains("too quickly"));
        assert!(feedback_for(Criterion::SpeechRate, 0.0, &details("Fast")).contains("too quickly"));
        assert!(feedback_for(Criterion::SpeechRate, 0.0, &details("Too slow")).contains("slowly"));
        assert!(feedback_for(Criterion::SpeechRate, 0.0, &details("Slow")).contains("comfortable"));
        assert!(feedback_for(Criterion::SpeechRate, 0.0, &details("Ideal")).contains("comfortable"));
    }

    #[test]
    fn test_clarity_interpolates_rate() {
        let details = Details::Clarity(ClarityDetails {
            filler_count: 3,
            filler_rate_percent: 7.0 / 0.9,
        });
        let text = feedback_for(Criterion::Clarity, 70.0, &details);
        assert!(text.contains("around 7.8% of your words"));
        let text = feedback_for(Criterion::Clarity, 40.0, &details);
        assert!(text.starts_with("Many filler words detected (around 7.8%"));
    }

    #[test]
    fn test_tier_boundaries_are_strict() {
        let details = Details::Vocabulary(VocabularyDetails {
            ttr: 0.5,
            total_words: 10,
            distinct_words: 5,
        });
        assert!(feedback_for(Criterion::Vocabulary, 85.0, &details).starts_with("Vocabulary is okay"));
        assert!(feedback_for(Criterion::Vocabulary, 85.1, &details).starts_with("Good variety"));
        assert!(feedback_for(Criterion::Vocabulary, 60.0, &details).starts_with("You rely"));
    }

    #[test]
    fn test_mismatched_details_fall_back() {
        let text = feedback_for(Criterion::Grammar, 90.0, &salutation(SalutationLevel::Good));
        assert_eq!(text, FALLBACK_FEEDBACK);
    }

    #[test]
    fn test_feedback_is_deterministic() {
        let details = salutation(SalutationLevel::Excellent);
        assert_eq!(
            feedback_for(Criterion::Salutation, 100.0, &details),
            feedback_for(Criterion::Salutation, 100.0, &details)
        );
    }
}
