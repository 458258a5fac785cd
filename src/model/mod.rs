pub mod collate;
pub mod frequency;
pub mod sort;
pub mod token;
pub mod word_frequency;

pub use collate::collate;
pub use frequency::FrequencyMap;
pub use sort::{sort_words, SortOrder, WordCount};
pub use token::{tokenize_text, Token};
pub use word_frequency::WordFrequencyModel;
