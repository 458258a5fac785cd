use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, RenderState};
use crate::config::TableConfig;
use crate::model::{SortOrder, WordCount, WordFrequencyModel};

fn app_for(text: &str) -> App {
    App::new(
        WordFrequencyModel::from_text(Some(text)),
        &TableConfig::default(),
    )
}

fn words(app: &App) -> Vec<String> {
    app.table().rows().iter().map(|r| r.word.clone()).collect()
}

#[test]
fn test_app_starts_browsing_alphabetically() {
    let app = app_for("cat dog cat");
    assert_eq!(app.mode(), AppMode::Browsing);
    assert_eq!(app.table().sort_order(), SortOrder::Alphabetical);
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app_for("cat");
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_app_handle_event_none() {
    let mut app = app_for("cat dog");
    app.handle_event(AppEvent::None);
    assert_eq!(app.mode(), AppMode::Browsing);
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_app_toggle_sort_twice_restores_order() {
    let mut app = app_for("b a b c b a");
    let before = words(&app);
    app.handle_event(AppEvent::ToggleSort);
    assert_eq!(words(&app), vec!["b", "a", "c"]);
    assert_eq!(app.get_render_state().toggle_label, "Sort Alphabetically");
    app.handle_event(AppEvent::ToggleSort);
    assert_eq!(words(&app), before);
    assert_eq!(
        app.get_render_state().toggle_label,
        "Sort by Count Descending"
    );
}

#[test]
fn test_app_toggle_resets_selection() {
    let mut app = app_for("a b c d");
    app.handle_event(AppEvent::SelectLast);
    assert_eq!(app.selected(), Some(3));
    app.handle_event(AppEvent::ToggleSort);
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_app_selection_is_clamped() {
    let mut app = app_for("a b c");
    app.handle_event(AppEvent::SelectPrevious);
    assert_eq!(app.selected(), Some(0));
    app.handle_event(AppEvent::SelectNext);
    app.handle_event(AppEvent::SelectNext);
    app.handle_event(AppEvent::SelectNext);
    assert_eq!(app.selected(), Some(2));
}

#[test]
fn test_app_paging() {
    let text = (0..25)
        .map(|i| format!("w{}", (b'a' + i) as char))
        .collect::<Vec<_>>()
        .join(" ");
    let mut app = app_for(&text);
    app.handle_event(AppEvent::PageDown);
    assert_eq!(app.selected(), Some(10));
    app.handle_event(AppEvent::PageDown);
    app.handle_event(AppEvent::PageDown);
    assert_eq!(app.selected(), Some(24));
    app.handle_event(AppEvent::PageUp);
    assert_eq!(app.selected(), Some(14));
    app.handle_event(AppEvent::SelectFirst);
    assert_eq!(app.selected(), Some(0));
}

#[test]
fn test_app_empty_text_has_no_selection() {
    let mut app = App::new(WordFrequencyModel::from_text(None), &TableConfig::default());
    assert_eq!(app.selected(), None);
    app.handle_event(AppEvent::SelectNext);
    app.handle_event(AppEvent::ToggleSort);
    assert_eq!(app.selected(), None);
    assert!(app.table().is_empty());
}

#[test]
fn test_app_get_render_state() {
    let app = app_for("cat dog cat");
    let state: RenderState = app.get_render_state();
    assert_eq!(state.mode, AppMode::Browsing);
    assert_eq!(
        state.rows,
        &[WordCount::new("cat", 2), WordCount::new("dog", 1)]
    );
    assert_eq!(state.total_words, 3);
    assert_eq!(state.distinct_words, 2);
    assert_eq!(state.summary(), "3 words · 2 distinct · sorted alphabetically");
}

#[test]
fn test_app_render_state_empty_summary() {
    let app = app_for("   ");
    assert_eq!(app.get_render_state().summary(), "No words to display");
}
