use crate::app::keymap::key_label;
use crate::app::state::{AppMode, AppState};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: String,
    pub desc: &'static str,
}

impl FooterItem {
    fn new(key: impl Into<String>, desc: &'static str) -> Self {
        Self {
            key: key.into(),
            desc,
        }
    }
}

pub fn get_items(state: &AppState) -> Vec<FooterItem> {
    if state.last_error.is_some() {
        return vec![FooterItem::new("esc", "dismiss")];
    }

    let bindings = &state.keymap.bindings;
    match state.mode {
        AppMode::Normal => {
            let mut items = Vec::new();
            if state.theme_control.is_mounted() {
                items.push(FooterItem::new(key_label(bindings.cycle_theme), "next theme"));
            }
            items.push(FooterItem::new(key_label(bindings.open_theme), "themes"));
            items.push(FooterItem::new(key_label(bindings.cycle_padding), "padding"));
            items.push(FooterItem::new(key_label(bindings.quit), "quit"));
            items
        }
        AppMode::ThemeDropdown => vec![
            FooterItem::new("j/k", "move"),
            FooterItem::new("enter", "select"),
            FooterItem::new("esc", "close"),
        ],
    }
}

pub struct Footer<'a> {
    pub state: &'a AppState,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chrome = &self.state.chrome;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), chrome.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), chrome.status_info)
        } else {
            Span::styled("  READY  ", chrome.status_ready)
        };

        let mut current_width = status_span.width() + 1;
        let mut spans = vec![status_span, Span::raw(" ")];
        let available_width = area.width.saturating_sub(2) as usize;

        for item in get_items(state) {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!("{} ", item.desc);
            let item_width = key_str.len() + desc_str.len();
            if current_width + item_width > available_width {
                break;
            }
            spans.push(Span::styled(key_str, chrome.key_binding));
            spans.push(Span::styled(desc_str, chrome.footer));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(chrome.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(state: &AppState) -> Vec<String> {
        get_items(state).into_iter().map(|i| i.key).collect()
    }

    #[test]
    fn test_items_follow_mode() {
        let mut state = AppState::default();
        assert_eq!(keys(&state), vec!["c", "t", "p", "q"]);

        state.mode = AppMode::ThemeDropdown;
        assert_eq!(keys(&state), vec!["j/k", "enter", "esc"]);

        state.last_error = Some("boom".to_string());
        assert_eq!(keys(&state), vec!["esc"]);
    }

    #[test]
    fn test_render_error_status() {
        let mut state = AppState::default();
        state.last_error = Some("Unknown theme: Nope".to_string());
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Footer { state: &state }.render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.contains("ERROR: Unknown theme: Nope"));
    }
}
