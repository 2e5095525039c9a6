use menuboard::app::{App, Tui};
use menuboard::config::AppConfig;
use menuboard::util::init_file_logger;
use menuboard::{error, MenuStore, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let log_path = init_file_logger(&config.log_level)?;
    tracing::info!(log = %log_path.display(), "menuboard starting");

    let store = if config.seed_menu {
        MenuStore::seeded()
    } else {
        MenuStore::new()
    };
    let mut app = App::new(config, store);

    let mut tui = Tui::new(app.config().tick_rate())?;
    tui.init()?;
    if !tui.is_size_adequate()? {
        tracing::warn!("terminal is smaller than 80x24, layout may be clipped");
    }

    let outcome = event_loop(&mut tui, &mut app);
    tui.restore()?;

    if let Err(e) = &outcome {
        tracing::error!(error = %e, "menuboard stopped with an error");
    } else {
        tracing::info!(items = app.store().len(), "menuboard exiting");
    }
    outcome
}

fn event_loop(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        tui.draw(|f| app.render(f))?;
        if let Some(key) = tui.handle_events()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
