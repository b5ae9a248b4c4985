use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::error;

use rayframe::app::keymap::KeyConfig;
use rayframe::app::persistence::{load_or_default, FileSettingsStore, SettingsStore};
use rayframe::app::{r#loop::run_loop, state::AppState};
use rayframe::logging;
use rayframe::themes::Registry;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    if let Some(path) = logging::default_log_path() {
        if let Err(err) = logging::init(&path) {
            eprintln!("logging disabled: {err:#}");
        }
    }

    // Everything that can fail on bad config happens before the terminal is touched
    let settings_store: Arc<dyn SettingsStore> = Arc::new(
        FileSettingsStore::default_location().context("no home directory for settings")?,
    );
    let settings = load_or_default(settings_store.as_ref());
    let key_config = KeyConfig::load();
    let registry = Registry::builtin();
    let app_state = AppState::new(registry, &settings, &key_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, settings_store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "editor exited with an error");
        println!("{err:?}");
    }

    Ok(())
}
