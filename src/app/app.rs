use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::WordTable;
use crate::config::TableConfig;
use crate::model::WordFrequencyModel;

pub struct App {
    pub mode: AppMode,
    table: WordTable,
    selected: Option<usize>,
    page_size: usize,
}

impl App {
    pub fn new(model: WordFrequencyModel, config: &TableConfig) -> Self {
        let table = WordTable::new(model);
        let selected = if table.is_empty() { None } else { Some(0) };
        Self {
            mode: AppMode::Browsing,
            table,
            selected,
            page_size: config.page_size.max(1),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn table(&self) -> &WordTable {
        &self.table
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ToggleSort => self.toggle_sort(),
            AppEvent::SelectNext => self.move_selection(1),
            AppEvent::SelectPrevious => self.move_selection(-1),
            AppEvent::PageDown => self.move_selection(self.page_size as isize),
            AppEvent::PageUp => self.move_selection(-(self.page_size as isize)),
            AppEvent::SelectFirst => self.select_index(0),
            AppEvent::SelectLast => self.select_index(usize::MAX),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    pub fn toggle_sort(&mut self) {
        let table = std::mem::take(&mut self.table);
        self.table = table.toggle_sort();
        self.select_index(0);
    }

    fn move_selection(&mut self, delta: isize) {
        if let Some(current) = self.selected {
            self.select_index(current.saturating_add_signed(delta));
        }
    }

    /// Selects `index`, clamped to the last row. No-op on an empty table.
    fn select_index(&mut self, index: usize) {
        let len = self.table.rows().len();
        self.selected = if len == 0 {
            None
        } else {
            Some(index.min(len - 1))
        };
    }

    pub fn get_render_state(&self) -> RenderState<'_> {
        let frequencies = self.table.model().frequencies();
        RenderState {
            mode: self.mode,
            rows: self.table.rows(),
            selected: self.selected,
            sort_order: self.table.sort_order(),
            toggle_label: self.table.toggle_label(),
            total_words: frequencies.total(),
            distinct_words: frequencies.distinct(),
        }
    }
}
