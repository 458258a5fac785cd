//! Source of the text to analyze.
//!
//! The text is compiled into the binary and handed over whole; there is no
//! file, clipboard or network loading.

/// Text compiled into the binary
const BUNDLED_TEXT: &str = include_str!("text.txt");

/// Text handed to the word model, with a label describing where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub text: Option<&'static str>,
    pub source: String,
}

impl LoadedText {
    pub fn is_blank(&self) -> bool {
        self.text.map_or(true, |text| text.trim().is_empty())
    }
}

/// Loads the bundled text.
pub fn load() -> LoadedText {
    LoadedText {
        text: Some(BUNDLED_TEXT),
        source: "bundled:text.txt".to_string(),
    }
}
