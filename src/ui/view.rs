use crate::app::RenderState;
use crate::config::TableConfig;
use crate::ui::keymap::KEY_HELP;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draws the whole screen: sort control, word table, footer.
pub fn draw(frame: &mut Frame, state: &RenderState, config: &TableConfig) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(render_sort_control(state.toggle_label), chunks[0]);

    let mut table_state = TableState::default().with_selected(state.selected);
    frame.render_stateful_widget(render_word_table(state, config), chunks[1], &mut table_state);

    frame.render_widget(render_footer(state), chunks[2]);
}

/// The sort "button": the label of the order a toggle switches to.
pub fn render_sort_control(label: &'static str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            format!("[ {} ]", label),
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  press s", Style::default().fg(colors::dimmed())),
    ]);
    Paragraph::new(line).alignment(Alignment::Left)
}

/// Display width of the word column: the widest word or header.
pub fn word_column_width(state: &RenderState, config: &TableConfig) -> u16 {
    let widest = state
        .rows
        .iter()
        .map(|row| row.word.width())
        .chain(std::iter::once(config.word_header.width()))
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

pub fn render_word_table<'a>(state: &RenderState<'a>, config: &'a TableConfig) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from(config.word_header.as_str()),
        Cell::from(Line::from(config.count_header.as_str()).alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'a>> = state
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.word.as_str()),
                Cell::from(Line::from(row.count.to_string()).alignment(Alignment::Right)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(word_column_width(state, config)),
        Constraint::Length(config.count_width),
    ];

    Table::new(rows, widths)
        .header(header)
        .block(
            Block::bordered()
                .title(config.title.as_str())
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()))
        .row_highlight_style(Style::default().bg(colors::highlight()))
        .highlight_symbol("> ")
}

pub fn render_footer(state: &RenderState) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(state.summary(), Style::default().fg(colors::text())),
        Span::styled(format!("  |  {}", KEY_HELP), Style::default().fg(colors::dimmed())),
    ]);
    Paragraph::new(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::model::WordFrequencyModel;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let config = TableConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, &app.get_render_state(), &config))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    fn app_for(text: Option<&str>) -> App {
        App::new(WordFrequencyModel::from_text(text), &TableConfig::default())
    }

    #[test]
    fn test_draw_shows_label_headers_and_rows() {
        let app = app_for(Some("cat dog cat"));
        let lines = screen(&app, 60, 10);
        assert!(lines[0].contains("Sort by Count Descending"));
        assert!(lines.iter().any(|l| l.contains("Word") && l.contains("Count")));
        let cat = lines.iter().position(|l| l.contains("cat")).unwrap();
        let dog = lines.iter().position(|l| l.contains("dog")).unwrap();
        assert!(cat < dog);
        assert!(lines[cat].contains('2'));
        assert!(lines[9].contains("3 words"));
    }

    #[test]
    fn test_draw_after_toggle() {
        let mut app = app_for(Some("a b b"));
        app.toggle_sort();
        let lines = screen(&app, 60, 10);
        assert!(lines[0].contains("Sort Alphabetically"));
        let a = lines.iter().position(|l| l.contains(" a ")).unwrap();
        let b = lines.iter().position(|l| l.contains(" b ")).unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_draw_empty_table() {
        let app = app_for(None);
        let lines = screen(&app, 60, 8);
        assert!(lines[0].contains("Sort by Count Descending"));
        assert!(lines.iter().any(|l| l.contains("Word")));
        assert!(lines[7].contains("No words to display"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let app = app_for(Some("cat dog"));
        let _ = screen(&app, 4, 2);
    }

    #[test]
    fn test_word_column_width_uses_widest_word() {
        let app = app_for(Some("a extraordinarily café"));
        let state = app.get_render_state();
        assert_eq!(word_column_width(&state, &TableConfig::default()), 15);
    }

    #[test]
    fn test_word_column_width_empty_uses_header() {
        let app = app_for(None);
        let state = app.get_render_state();
        assert_eq!(word_column_width(&state, &TableConfig::default()), 4);
    }
}
