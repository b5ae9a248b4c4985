use crate::app::state::{AppMode, AppState};
use crate::components::dropdown::{Dropdown, DropdownState};
use crate::components::footer::Footer;
use crate::components::frame::FramePreview;
use crate::components::header::{Header, PaddingControlView};
use crate::components::helpers::{anchored_rect, dim_area};
use crate::components::theme_control::{ThemeControlView, TITLE};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub const LOGO_WIDTH: u16 = 12;
pub const THEME_CONTROL_WIDTH: u16 = 26;
pub const PADDING_CONTROL_WIDTH: u16 = 16;
pub const DROPDOWN_WIDTH: u16 = 30;

pub struct AppLayout {
    pub header: Rect,
    pub theme_control: Rect,
    pub padding_control: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header / controls
            Constraint::Min(0),    // Frame preview
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LOGO_WIDTH),
            Constraint::Length(THEME_CONTROL_WIDTH),
            Constraint::Length(PADDING_CONTROL_WIDTH),
            Constraint::Min(0),
        ])
        .split(main[0]);

    AppLayout {
        header: main[0],
        theme_control: controls[1],
        padding_control: controls[2],
        body: main[1],
        footer: main[2],
    }
}

/// Where the open theme list is drawn: under the theme control, above the footer.
pub fn dropdown_rect(area: Rect, dropdown: &DropdownState) -> Rect {
    let layout = get_layout(area);
    let bounds = Rect {
        height: layout.footer.y.saturating_sub(area.y),
        ..area
    };
    anchored_rect(
        layout.theme_control,
        DROPDOWN_WIDTH,
        dropdown.desired_height(),
        bounds,
    )
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area);
    let chrome = &app_state.chrome;
    let theme = app_state.current_theme();
    let padding = app_state.padding();

    // --- Header ---
    f.render_widget(Header { chrome }, layout.header);
    f.render_widget(
        ThemeControlView {
            theme,
            chrome,
            open: app_state.mode == AppMode::ThemeDropdown,
        },
        layout.theme_control,
    );
    f.render_widget(PaddingControlView { padding, chrome }, layout.padding_control);

    // --- Body ---
    f.render_widget(
        FramePreview {
            theme,
            padding,
            chrome,
        },
        layout.body,
    );

    // --- Footer ---
    f.render_widget(Footer { state: app_state }, layout.footer);

    // --- Overlay ---
    if let Some(dropdown) = &app_state.theme_control.dropdown {
        dim_area(f.buffer_mut(), layout.body);
        f.render_widget(
            Dropdown {
                title: TITLE,
                state: dropdown,
                chrome,
            },
            dropdown_rect(area, dropdown),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_layout_regions() {
        let layout = get_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.theme_control, Rect::new(LOGO_WIDTH, 0, THEME_CONTROL_WIDTH, 1));
        assert_eq!(layout.body, Rect::new(0, 1, 100, 28));
        assert_eq!(layout.footer, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_dropdown_rect_above_footer() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenThemeDropdown);
        let dropdown = state.theme_control.dropdown.as_ref().unwrap();

        let rect = dropdown_rect(Rect::new(0, 0, 100, 8), dropdown);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.bottom(), 7);
        assert_eq!(rect.x, LOGO_WIDTH);
    }

    #[test]
    fn test_draw_shows_controls() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = AppState::default();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let buf = terminal.backend().buffer();
        let header = row_text(buf, 0);
        assert!(header.contains("Theme"));
        assert!(header.contains("Candy"));
        assert!(header.contains("Padding"));
    }

    #[test]
    fn test_draw_open_dropdown_lists_groups() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::default();
        update(&mut state, Action::OpenThemeDropdown);
        terminal.draw(|f| draw(f, &state)).unwrap();

        let buf = terminal.backend().buffer();
        let screen: Vec<String> = (0..buf.area.height).map(|y| row_text(buf, y)).collect();
        assert!(screen[2].contains("Partners"));
        assert!(screen[3].contains("Vercel"));
        assert!(screen[4].contains("Rabbit"));
        assert!(!screen.iter().any(|l| l.contains("Supabase")));
        assert!(screen.iter().any(|l| l.contains("Mono")));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        let mut state = AppState::default();
        update(&mut state, Action::OpenThemeDropdown);
        terminal.draw(|f| draw(f, &state)).unwrap();
    }
}
