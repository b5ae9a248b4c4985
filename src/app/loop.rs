use crate::app::{
    action::Action, command::Command, input::map_event_to_action, persistence::SettingsStore,
    reducer, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    settings: Arc<dyn SettingsStore>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, settings, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    settings: Arc<dyn SettingsStore>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    info!(
        theme = app_state.current_theme().name,
        padding = app_state.padding(),
        "editor started"
    );

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, settings.clone(), action_tx.clone());
            }
        }
    }

    info!("editor stopped");
    Ok(())
}

/// Runs a side effect off the UI task and reports back through `tx`.
pub(crate) fn handle_command(
    command: Command,
    settings: Arc<dyn SettingsStore>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::SaveSettings(snapshot) => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || settings.save(&snapshot))
                    .await
                    .map_err(anyhow::Error::from)
                    .and_then(|res| res);
                if result.is_ok() {
                    debug!("settings saved");
                }
                let _ = tx
                    .send(Action::SettingsSaved(result.map_err(|e| e.to_string())))
                    .await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
