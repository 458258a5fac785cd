use super::frequency::FrequencyMap;
use super::sort::{sort_words, SortOrder, WordCount};
use super::token::tokenize_text;
use tracing::{debug, warn};

/// Word counts for one block of text.
///
/// Built once from the input; afterwards it is only viewed in different
/// orders, never recounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyModel {
    frequencies: FrequencyMap,
}

impl WordFrequencyModel {
    /// Tokenizes and counts `text`. Missing or blank text gives an empty model.
    #[tracing::instrument(skip_all)]
    pub fn from_text(text: Option<&str>) -> Self {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("no text to analyze, showing an empty table");
                return Self::default();
            }
        };

        let tokens = tokenize_text(text);
        let frequencies = FrequencyMap::from_tokens(tokens);
        debug!(
            total = frequencies.total(),
            distinct = frequencies.distinct(),
            "counted words"
        );
        Self { frequencies }
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn sorted(&self, order: SortOrder) -> Vec<WordCount> {
        sort_words(&self.frequencies, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_text() {
        let model = WordFrequencyModel::from_text(Some("cat dog cat"));
        assert_eq!(model.frequencies().get("cat"), Some(2));
        assert_eq!(model.frequencies().get("dog"), Some(1));
        assert_eq!(model.frequencies().total(), 3);
    }

    #[test]
    fn test_model_without_text() {
        assert!(WordFrequencyModel::from_text(None).is_empty());
    }

    #[test]
    fn test_model_blank_text() {
        assert!(WordFrequencyModel::from_text(Some("")).is_empty());
        assert!(WordFrequencyModel::from_text(Some(" \n\t ")).is_empty());
    }

    #[test]
    fn test_model_text_without_words() {
        let model = WordFrequencyModel::from_text(Some("2024-01-01, 12:30!"));
        assert!(model.is_empty());
        assert!(model.sorted(SortOrder::Alphabetical).is_empty());
    }

    #[test]
    fn test_model_sorted_views() {
        let model = WordFrequencyModel::from_text(Some("b a b c b a"));
        let alpha: Vec<_> = model
            .sorted(SortOrder::Alphabetical)
            .into_iter()
            .map(|row| (row.word, row.count))
            .collect();
        assert_eq!(
            alpha,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 3),
                ("c".to_string(), 1)
            ]
        );
        let by_count = model.sorted(SortOrder::CountDescending);
        assert_eq!(by_count[0], WordCount::new("b", 3));
        assert_eq!(by_count[2], WordCount::new("c", 1));
    }
}
