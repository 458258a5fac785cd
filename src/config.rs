// Configuration for the word table and its terminal front end
// All values are compiled-in defaults; nothing is read from disk or the environment

use std::time::Duration;
use tracing::Level;

/// Table layout and labels
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Title shown on the table border
    pub title: String,

    /// Column headers
    pub word_header: String,
    pub count_header: String,

    /// Width of the count column in cells (default 8)
    pub count_width: u16,

    /// Rows moved by PageUp / PageDown (default 10)
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: "wordtally".to_string(),
            word_header: "Word".to_string(),
            count_header: "Count".to_string(),
            count_width: 8,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Most verbose level written to stderr (default WARN)
    pub max_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_level: Level::WARN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventLoopConfig {
    /// How long to wait for a key before redrawing (default 250ms)
    pub poll_interval: Duration,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub table: TableConfig,
    pub logging: LoggingConfig,
    pub event_loop: EventLoopConfig,
}
