pub const SALUTATION_NORMAL: &[&str] = &["hi", "hello"];

pub const SALUTATION_GOOD: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
];

pub const SALUTATION_EXCELLENT: &[&str] = &[
    "i am excited to introduce",
    "i'm excited to introduce",
    "feeling great",
    "i am very excited",
    "i'm very excited",
];

pub const MUST_HAVE_KEYWORDS: &[&str] = &[
    "name",
    "age",
    "class",
    "school",
    "family",
    "hobby",
    "hobbies",
    "interests",
];

pub const GOOD_TO_HAVE_KEYWORDS: &[&str] = &[
    "from",
    "goal",
    "dream",
    "ambition",
    "unique",
    "strength",
    "achievement",
    "fun fact",
];

pub const NAME_MARKERS: &[&str] = &["my name is", "i am "];

pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "ok", "hmm", "ah",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "excited",
    "glad",
    "enjoy",
    "enjoying",
    "love",
    "like",
    "confident",
    "grateful",
    "thankful",
    "proud",
    "interested",
    "passionate",
    "fun",
    "great",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "boring", "tired", "sad", "nervous", "scared", "anxious", "worried", "hate", "dislike",
];

/// Word and phrase tables every detector reads from. Never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub salutation_normal: &'static [&'static str],
    pub salutation_good: &'static [&'static str],
    pub salutation_excellent: &'static [&'static str],
    pub must_have: &'static [&'static str],
    pub good_to_have: &'static [&'static str],
    pub name_markers: &'static [&'static str],
    pub hobby_marker: &'static str,
    pub goal_marker: &'static str,
    pub fillers: &'static [&'static str],
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl Lexicon {
    pub const STANDARD: Lexicon = Lexicon {
        salutation_normal: SALUTATION_NORMAL,
        salutation_good: SALUTATION_GOOD,
        salutation_excellent: SALUTATION_EXCELLENT,
        must_have: MUST_HAVE_KEYWORDS,
        good_to_have: GOOD_TO_HAVE_KEYWORDS,
        name_markers: NAME_MARKERS,
        hobby_marker: "hobby",
        goal_marker: "goal",
        fillers: FILLER_WORDS,
        positive: POSITIVE_WORDS,
        negative: NEGATIVE_WORDS,
    };

    /// Greetings that anchor the opening of an introduction. The excellent
    /// tier is enthusiasm, not a greeting, and may appear anywhere.
    pub fn flow_salutations(&self) -> impl Iterator<Item = &'static str> {
        self.salutation_good
            .iter()
            .chain(self.salutation_normal)
            .copied()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::STANDARD
    }
}
