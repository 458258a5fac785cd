use crate::app::mode::AppMode;
use crate::model::{SortOrder, WordCount};

/// Render state for UI components
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub rows: &'a [WordCount],
    pub selected: Option<usize>,
    pub sort_order: SortOrder,
    pub toggle_label: &'static str,
    /// Tokens counted
    pub total_words: usize,
    pub distinct_words: usize,
}

impl RenderState<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Footer text describing the table
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No words to display".to_string();
        }
        format!(
            "{} words · {} distinct · sorted {}",
            self.total_words, self.distinct_words, self.sort_order
        )
    }
}
