/// Lowercased transcript with every whitespace run collapsed to a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let text = raw
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Byte offset of the first occurrence, if any.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }

    /// Non-overlapping occurrences of `needle`.
    pub fn count(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        self.text.matches(needle).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_and_lowercases() {
        let text = NormalizedText::new("  Hello\t\tWORLD \n  again  ");
        assert_eq!(text.as_str(), "hello world again");
        assert_eq!(text.words(), vec!["hello", "world", "again"]);
        assert_eq!(text.word_count(), 3);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(NormalizedText::new("").is_empty());
        let blank = NormalizedText::new(" \n\t ");
        assert!(blank.is_empty());
        assert!(blank.words().is_empty());
        assert_eq!(blank.word_count(), 0);
    }

    #[test]
    fn test_keeps_punctuation_and_non_ascii() {
        let text = NormalizedText::new("Ça VA?  Très   bien!");
        assert_eq!(text.as_str(), "ça va? très bien!");
    }

    #[test]
    fn test_count_is_non_overlapping() {
        let text = NormalizedText::new("you know you know youknow");
        assert_eq!(text.count("you know"), 2);
        assert_eq!(text.count(""), 0);
        assert_eq!(text.find("know"), Some(4));
        assert_eq!(text.find("absent"), None);
    }
}
