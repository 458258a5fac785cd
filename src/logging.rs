use crate::config::LoggingConfig;

/// Installs the global fmt subscriber on stderr.
///
/// Must run before the terminal switches to the alternate screen. Calling it
/// again after a subscriber is set does nothing.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
