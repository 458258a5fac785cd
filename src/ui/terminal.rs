use crate::app::{App, AppEvent, AppMode};
use crate::config::{EventLoopConfig, TableConfig};
use crate::error::Result;
use crate::ui::keymap::key_to_app_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    table_config: TableConfig,
    event_loop: EventLoopConfig,
    // Dropped after `terminal`, restoring the screen last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(table_config: TableConfig, event_loop: EventLoopConfig) -> Result<Self> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            table_config,
            event_loop,
            _guard: guard,
        })
    }

    /// Draws and handles keys until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> Result<()> {
        self.render_frame(app)?;

        while app.mode() != AppMode::Quit {
            // Timeouts just redraw, which picks up terminal resizes
            if event::poll(self.event_loop.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    let app_event = key_to_app_event(key);
                    if app_event != AppEvent::None {
                        debug!(?app_event, "key event");
                        app.handle_event(app_event);
                    }
                }
            }

            self.render_frame(app)?;
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> Result<()> {
        let render_state = app.get_render_state();
        let config = &self.table_config;

        self.terminal
            .draw(|frame| view::draw(frame, &render_state, config))?;

        Ok(())
    }
}
