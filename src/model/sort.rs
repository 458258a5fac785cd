use super::collate::collate;
use super::frequency::FrequencyMap;
use std::cmp::Ordering;
use std::fmt;

/// Display order of the word table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Alphabetical,
    CountDescending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Alphabetical => SortOrder::CountDescending,
            SortOrder::CountDescending => SortOrder::Alphabetical,
        }
    }

    /// Label of the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "Sort by Count Descending",
            SortOrder::CountDescending => "Sort Alphabetically",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Alphabetical => write!(f, "alphabetically"),
            SortOrder::CountDescending => write!(f, "by count"),
        }
    }
}

/// One row of the word table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

fn compare(order: SortOrder, a: &WordCount, b: &WordCount) -> Ordering {
    match order {
        SortOrder::Alphabetical => collate(&a.word, &b.word),
        // Equal counts fall back to alphabetical order
        SortOrder::CountDescending => b
            .count
            .cmp(&a.count)
            .then_with(|| collate(&a.word, &b.word)),
    }
}

/// Produces the rows of `map` in the given order.
///
/// The result is fully determined by the map contents: distinct words never
/// compare equal, so hash iteration order cannot leak into the output.
pub fn sort_words(map: &FrequencyMap, order: SortOrder) -> Vec<WordCount> {
    let mut rows: Vec<WordCount> = map
        .iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect();
    rows.sort_by(|a, b| compare(order, a, b));
    rows
}
