use tracing::info;
use wordtally::app::App;
use wordtally::config::Config;
use wordtally::model::WordFrequencyModel;
use wordtally::ui::TuiManager;
use wordtally::{input, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    logging::init(&config.logging);

    // Count before entering the alternate screen so warnings stay visible
    let loaded = input::load();
    info!(source = %loaded.source, "loaded text");
    let model = WordFrequencyModel::from_text(loaded.text);

    let mut app = App::new(model, &config.table);
    let mut tui = TuiManager::new(config.table, config.event_loop)?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
