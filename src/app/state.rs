use crate::model::{SortOrder, WordCount, WordFrequencyModel};
use tracing::debug;

/// The word table shown on screen: counts, current order, and the rows in
/// that order.
///
/// Changing the order builds a new `WordTable`; an existing one is never
/// edited, so a half-sorted table cannot be observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    model: WordFrequencyModel,
    order: SortOrder,
    rows: Vec<WordCount>,
}

impl WordTable {
    /// Starts out in alphabetical order.
    pub fn new(model: WordFrequencyModel) -> Self {
        Self::with_order(model, SortOrder::default())
    }

    pub fn with_order(model: WordFrequencyModel, order: SortOrder) -> Self {
        let rows = model.sorted(order);
        Self { model, order, rows }
    }

    /// Returns the same counts in the other order.
    pub fn toggle_sort(self) -> Self {
        let order = self.order.toggled();
        debug!(?order, rows = self.rows.len(), "toggling sort order");
        Self::with_order(self.model, order)
    }

    pub fn rows(&self) -> &[WordCount] {
        &self.rows
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Label for the sort control
    pub fn toggle_label(&self) -> &'static str {
        self.order.toggle_label()
    }

    pub fn model(&self) -> &WordFrequencyModel {
        &self.model
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
