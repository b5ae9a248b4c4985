use crate::themes::{Rgb, Theme};
use ratatui::style::{Color, Modifier, Style};

const CRUST: Rgb = Rgb(17, 17, 27);
const BASE: Rgb = Rgb(30, 30, 46);
const SURFACE0: Rgb = Rgb(49, 50, 68);
const SURFACE2: Rgb = Rgb(88, 91, 112);
const OVERLAY0: Rgb = Rgb(108, 112, 134);
const SUBTEXT0: Rgb = Rgb(166, 173, 200);
const TEXT: Rgb = Rgb(205, 214, 244);
const GREEN: Rgb = Rgb(166, 227, 161);
const RED: Rgb = Rgb(243, 139, 168);

/// Styles for the editor's own widgets, tinted by the active frame theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub control_title: Style,
    pub control_value: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub group_label: Style,
    pub separator: Style,

    pub window: Style,
    pub window_title: Style,
    pub code: Style,
    pub code_keyword: Style,
    pub code_string: Style,
    pub code_comment: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,
    pub key_binding: Style,
    pub footer: Style,
    pub dimmed: Style,
}

impl Chrome {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.background.from;
        // Dark accents vanish against the base, fall back to the lighter stop or plain text
        let accent = if accent.luma() < 60 {
            if theme.background.to.luma() >= 60 {
                theme.background.to
            } else {
                TEXT
            }
        } else {
            accent
        };
        let accent_fg = if accent.luma() > 140 { CRUST } else { TEXT };

        Self {
            border: fg(SURFACE2),
            border_focus: fg(accent),

            header: fg(TEXT).bg(BASE.into()),
            header_logo: fg(accent_fg)
                .bg(accent.into())
                .add_modifier(Modifier::BOLD),
            control_title: fg(SUBTEXT0).bg(BASE.into()).add_modifier(Modifier::DIM),
            control_value: fg(TEXT).bg(SURFACE0.into()).add_modifier(Modifier::BOLD),

            list_item: fg(TEXT),
            list_selected: fg(accent_fg)
                .bg(accent.into())
                .add_modifier(Modifier::BOLD),
            group_label: fg(SUBTEXT0).add_modifier(Modifier::BOLD),
            separator: fg(SURFACE2),

            window: fg(TEXT).bg(CRUST.into()),
            window_title: fg(OVERLAY0).bg(CRUST.into()),
            code: fg(TEXT).bg(CRUST.into()),
            code_keyword: fg(accent).bg(CRUST.into()).add_modifier(Modifier::BOLD),
            code_string: fg(GREEN).bg(CRUST.into()),
            code_comment: fg(OVERLAY0).bg(CRUST.into()).add_modifier(Modifier::ITALIC),

            status_ready: fg(CRUST).bg(GREEN.into()).add_modifier(Modifier::BOLD),
            status_info: fg(accent_fg)
                .bg(accent.into())
                .add_modifier(Modifier::BOLD),
            status_error: fg(CRUST).bg(RED.into()).add_modifier(Modifier::BOLD),
            key_binding: fg(accent).add_modifier(Modifier::BOLD),
            footer: fg(SUBTEXT0).bg(CRUST.into()),
            dimmed: fg(OVERLAY0).add_modifier(Modifier::DIM),
        }
    }
}

fn fg(c: Rgb) -> Style {
    Style::default().fg(Color::from(c))
}
