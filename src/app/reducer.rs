use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState},
};
use crate::store::next_padding;

use std::time::Instant;
use tracing::{info, warn};

/// Applies `action`, then runs control effects. Any store write yields a save command.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let command = apply(state, action);
    if state.sync_effects() {
        return command.or_else(|| Some(Command::SaveSettings(state.settings())));
    }
    command
}

fn apply(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Editor Controls ---
        Action::CycleTheme => {
            if let Some(theme) = state.theme_control.cycle(&state.store) {
                state.set_status(format!("Theme: {}", theme.name));
            }
        }
        Action::CyclePadding => {
            let padding = next_padding(state.store.padding.get());
            state.store.padding.set(padding);
            state.set_status(format!("Padding: {padding}"));
        }

        // --- Theme Dropdown ---
        Action::OpenThemeDropdown => {
            state.theme_control.open(&state.store);
            state.mode = AppMode::ThemeDropdown;
        }
        Action::DropdownNext => {
            if let Some(dropdown) = &mut state.theme_control.dropdown {
                dropdown.next();
            }
        }
        Action::DropdownPrev => {
            if let Some(dropdown) = &mut state.theme_control.dropdown {
                dropdown.prev();
            }
        }
        Action::DropdownHighlight(index) => {
            if let Some(dropdown) = &mut state.theme_control.dropdown {
                dropdown.highlight(index);
            }
        }
        Action::DropdownConfirm => {
            state.mode = AppMode::Normal;
            match state.theme_control.confirm(&state.store) {
                Some(Ok(theme)) => state.set_status(format!("Theme: {}", theme.name)),
                Some(Err(err)) => state.last_error = Some(err.to_string()),
                None => {}
            }
        }
        Action::SelectTheme(name) => {
            state.theme_control.close();
            state.mode = AppMode::Normal;
            match state.theme_control.select(&state.store, &name) {
                Ok(theme) => state.set_status(format!("Theme: {}", theme.name)),
                Err(err) => state.last_error = Some(err.to_string()),
            }
        }
        Action::CancelMode => {
            state.theme_control.close();
            state.mode = AppMode::Normal;
            state.last_error = None;
        }

        // --- System ---
        Action::Quit => {
            state.theme_control.unmount(&mut state.keymap);
            state.mode = AppMode::Normal;
            state.should_quit = true;
        }
        Action::Resize(w, h) => {
            info!(width = w, height = h, "terminal resized");
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }

        // --- Async Results ---
        Action::SettingsSaved(result) => {
            if let Err(err) = result {
                warn!(error = %err, "saving settings failed");
                state.last_error = Some(format!("Could not save settings: {err}"));
            }
        }
    }
    None
}
