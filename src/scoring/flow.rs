use serde::Serialize;

use super::criterion::Scored;
use super::lexicon::Lexicon;
use super::text::NormalizedText;

pub const ORDERED_SCORE: f64 = 100.0;
pub const OUT_OF_ORDER_SCORE: f64 = 40.0;

/// Byte offsets of the first occurrence of each anchor in the normalized text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowDetails {
    pub order_ok: bool,
    pub salutation_index: Option<usize>,
    pub name_index: Option<usize>,
    pub hobby_index: Option<usize>,
    pub goal_index: Option<usize>,
}

fn earliest<'a>(text: &NormalizedText, needles: impl IntoIterator<Item = &'a str>) -> Option<usize> {
    needles.into_iter().filter_map(|n| text.find(n)).min()
}

/// `true` unless both anchors exist and `later` actually comes first.
fn in_order(earlier: Option<usize>, later: Option<usize>) -> bool {
    match (earlier, later) {
        (Some(e), Some(l)) => e <= l,
        _ => true,
    }
}

pub fn detect_flow(text: &NormalizedText, lexicon: &Lexicon) -> Scored<FlowDetails> {
    let salutation_index = earliest(text, lexicon.flow_salutations());
    let name_index = earliest(text, lexicon.name_markers.iter().copied());
    let hobby_index = text.find(lexicon.hobby_marker);
    let goal_index = text.find(lexicon.goal_marker);

    let order_ok = in_order(salutation_index, name_index)
        && in_order(name_index, hobby_index)
        && in_order(name_index, goal_index);

    Scored {
        score: if order_ok {
            ORDERED_SCORE
        } else {
            OUT_OF_ORDER_SCORE
        },
        details: FlowDetails {
            order_ok,
            salutation_index,
            name_index,
            hobby_index,
            goal_index,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(raw: &str) -> Scored<FlowDetails> {
        detect_flow(&NormalizedText::new(raw), &Lexicon::STANDARD)
    }

    #[test]
    fn test_well_ordered_intro() {
        let result = detect("Hello everyone. My name is Asha. My hobby is painting and my goal is art school.");
        assert!(result.details.order_ok);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.details.salutation_index, Some(0));
        assert_eq!(result.details.name_index, Some(16));
    }

    #[test]
    fn test_goal_before_name_breaks_order() {
        let result = detect("Good morning. My goal is to fly. My name is Asha.");
        assert!(!result.details.order_ok);
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_salutation_after_name_breaks_order() {
        let result = detect("My name is Asha and hello to all");
        assert!(!result.details.order_ok);
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_missing_anchors_never_violate() {
        let result = detect("My hobby is chess. My goal is to win.");
        assert_eq!(result.details.name_index, None);
        assert!(result.details.order_ok);

        let empty = detect("");
        assert!(empty.details.order_ok);
        assert_eq!(empty.score, 100.0);
    }

    #[test]
    fn test_enthusiasm_after_name_keeps_order() {
        let result = detect("My name is Ravi. I am very excited to be here.");
        assert_eq!(result.details.name_index, Some(0));
        assert_eq!(result.details.salutation_index, None);
        assert!(result.details.order_ok);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_name_marker_i_am() {
        let result = detect("I am Leo and my hobby is chess");
        assert_eq!(result.details.name_index, Some(0));
        assert!(result.details.order_ok);
    }
}
