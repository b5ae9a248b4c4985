use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            app_state.keymap.get_action(key, app_state.mode)
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Mouse(mouse) => match app_state.mode {
            AppMode::Normal => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let control = ui::get_layout(area).theme_control;
                    control
                        .contains((mouse.column, mouse.row).into())
                        .then_some(Action::OpenThemeDropdown)
                }
                _ => None,
            },
            AppMode::ThemeDropdown => {
                let dropdown = app_state.theme_control.dropdown.as_ref()?;
                let popup = ui::dropdown_rect(area, dropdown);
                let row = dropdown.row_at(popup, mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::ScrollDown => Some(Action::DropdownNext),
                    MouseEventKind::ScrollUp => Some(Action::DropdownPrev),
                    MouseEventKind::Moved => row
                        .filter(|i| dropdown.rows[*i].value().is_some())
                        .map(Action::DropdownHighlight),
                    MouseEventKind::Down(MouseButton::Left) => match row {
                        Some(i) => dropdown.rows[i]
                            .value()
                            .map(|value| Action::SelectTheme(value.to_string())),
                        None if popup.contains((mouse.column, mouse.row).into()) => None,
                        None => Some(Action::CancelMode),
                    },
                    _ => None,
                }
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    const SIZE: Size = Size {
        width: 80,
        height: 40,
    };

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_cycle_hotkey_maps_to_action() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key('c'), &state, SIZE),
            Some(Action::CycleTheme)
        );
    }

    #[test]
    fn test_release_ignored() {
        let state = AppState::default();
        let mut release = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn test_click_control_opens_dropdown() {
        let state = AppState::default();
        let control = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).theme_control;
        let click = mouse(MouseEventKind::Down(MouseButton::Left), control.x + 1, control.y);
        assert_eq!(
            map_event_to_action(click, &state, SIZE),
            Some(Action::OpenThemeDropdown)
        );
        let elsewhere = mouse(MouseEventKind::Down(MouseButton::Left), 0, SIZE.height - 5);
        assert_eq!(map_event_to_action(elsewhere, &state, SIZE), None);
    }

    #[test]
    fn test_click_row_selects_theme() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenThemeDropdown);
        let dropdown = state.theme_control.dropdown.as_ref().unwrap();
        let popup = ui::dropdown_rect(Rect::new(0, 0, SIZE.width, SIZE.height), dropdown);

        // First inner line is the "Partners" label
        let label = mouse(MouseEventKind::Down(MouseButton::Left), popup.x + 2, popup.y + 1);
        assert_eq!(map_event_to_action(label, &state, SIZE), None);

        let first = mouse(MouseEventKind::Down(MouseButton::Left), popup.x + 2, popup.y + 2);
        assert_eq!(
            map_event_to_action(first, &state, SIZE),
            Some(Action::SelectTheme("Vercel".to_string()))
        );

        let hover = mouse(MouseEventKind::Moved, popup.x + 2, popup.y + 3);
        assert_eq!(
            map_event_to_action(hover, &state, SIZE),
            Some(Action::DropdownHighlight(2))
        );

        let outside = mouse(
            MouseEventKind::Down(MouseButton::Left),
            SIZE.width - 1,
            SIZE.height - 1,
        );
        assert_eq!(
            map_event_to_action(outside, &state, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_dropdown_keys() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenThemeDropdown);
        assert_eq!(
            map_event_to_action(key('j'), &state, SIZE),
            Some(Action::DropdownNext)
        );
        // The cycle hotkey is inactive while the list has focus
        assert_eq!(map_event_to_action(key('c'), &state, SIZE), None);
    }
}
