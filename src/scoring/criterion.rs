use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::clarity::ClarityDetails;
use super::engagement::EngagementDetails;
use super::flow::FlowDetails;
use super::grammar::GrammarDetails;
use super::keywords::KeywordDetails;
use super::salutation::SalutationDetails;
use super::speech_rate::SpeechRateDetails;
use super::vocabulary::VocabularyDetails;

/// Rubric criteria, declared in canonical report order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Criterion {
    #[strum(serialize = "Salutation")]
    #[serde(rename = "Salutation")]
    Salutation,
    #[strum(serialize = "Keyword Presence")]
    #[serde(rename = "Keyword Presence")]
    KeywordPresence,
    #[strum(serialize = "Flow")]
    #[serde(rename = "Flow")]
    Flow,
    #[strum(serialize = "Speech Rate")]
    #[serde(rename = "Speech Rate")]
    SpeechRate,
    #[strum(serialize = "Grammar")]
    #[serde(rename = "Grammar")]
    Grammar,
    #[strum(serialize = "Vocabulary")]
    #[serde(rename = "Vocabulary")]
    Vocabulary,
    #[strum(serialize = "Clarity")]
    #[serde(rename = "Clarity")]
    Clarity,
    #[strum(serialize = "Engagement")]
    #[serde(rename = "Engagement")]
    Engagement,
}

impl Criterion {
    pub fn all() -> impl Iterator<Item = Criterion> {
        Self::iter()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Reference text the transcript embedding is compared against.
    pub fn reference_description(self) -> &'static str {
        match self {
            Self::Salutation => {
                "A polite greeting at the beginning of the self introduction, such as \
                 good morning, hello everyone, I am excited to introduce myself."
            }
            Self::KeywordPresence => {
                "The introduction should mention key personal details like name, age, \
                 class or school, family, hobbies or interests, and optional goals or strengths."
            }
            Self::Flow => {
                "The introduction should follow a logical structure: greeting, name, basic details, \
                 additional details such as hobbies and goals, and a brief closing."
            }
            Self::SpeechRate => {
                "The text should sound like a natural short spoken introduction, not unnaturally \
                 rushed or extremely slow when read aloud."
            }
            Self::Grammar => {
                "The sentences should be grammatically correct, with proper word order and basic \
                 tenses used accurately in English."
            }
            Self::Vocabulary => {
                "The introduction should use a reasonable variety of words and some descriptive \
                 vocabulary instead of repeating the same simple words."
            }
            Self::Clarity => {
                "The introduction should be clear and easy to follow, without too many filler phrases \
                 such as um, like, you know."
            }
            Self::Engagement => {
                "The tone should sound positive, interested and confident, showing enthusiasm about \
                 oneself, hobbies and future goals."
            }
        }
    }

    /// The criterion whose reference description is exactly `reference`.
    pub fn from_reference(reference: &str) -> Option<Criterion> {
        Self::iter().find(|c| c.reference_description() == reference)
    }

    pub fn reference_descriptions() -> Vec<&'static str> {
        Self::iter().map(|c| c.reference_description()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    Salutation(SalutationDetails),
    Keywords(KeywordDetails),
    Flow(FlowDetails),
    SpeechRate(SpeechRateDetails),
    Grammar(GrammarDetails),
    Vocabulary(VocabularyDetails),
    Clarity(ClarityDetails),
    Engagement(EngagementDetails),
}

impl Details {
    pub fn criterion(&self) -> Criterion {
        match self {
            Self::Salutation(_) => Criterion::Salutation,
            Self::Keywords(_) => Criterion::KeywordPresence,
            Self::Flow(_) => Criterion::Flow,
            Self::SpeechRate(_) => Criterion::SpeechRate,
            Self::Grammar(_) => Criterion::Grammar,
            Self::Vocabulary(_) => Criterion::Vocabulary,
            Self::Clarity(_) => Criterion::Clarity,
            Self::Engagement(_) => Criterion::Engagement,
        }
    }
}

/// A detector's score together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<D> {
    pub score: f64,
    pub details: D,
}

impl<D: Into<Details>> Scored<D> {
    pub fn into_result(self) -> CriterionResult {
        let details = self.details.into();
        CriterionResult {
            criterion: details.criterion(),
            score: self.score,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub score: f64,
    pub details: Details,
}

macro_rules! details_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Details {
                fn from(details: $ty) -> Self {
                    Details::$variant(details)
                }
            }
        )*
    };
}

details_from! {
    Salutation => SalutationDetails,
    Keywords => KeywordDetails,
    Flow => FlowDetails,
    SpeechRate => SpeechRateDetails,
    Grammar => GrammarDetails,
    Vocabulary => VocabularyDetails,
    Clarity => ClarityDetails,
    Engagement => EngagementDetails,
}
