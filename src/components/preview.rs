use crate::themes::{Gradient, Rgb, Theme, RABBIT, VERCEL};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Cells taken by a preview in front of a dropdown label.
pub const PREVIEW_WIDTH: usize = 4;

/// Fixed artwork for partners that ship their own mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Vercel,
    Rabbit,
}

impl Logo {
    /// Recognizes partners by display name.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Option<Self> {
        if theme.name == VERCEL.name {
            Some(Logo::Vercel)
        } else if theme.name == RABBIT.name {
            Some(Logo::Rabbit)
        } else {
            None
        }
    }

    #[must_use]
    pub fn glyphs(self) -> &'static str {
        match self {
            Logo::Vercel => " ▲  ",
            Logo::Rabbit => "(\\/)",
        }
    }

    fn backdrop(self) -> Rgb {
        match self {
            Logo::Vercel => Rgb(0, 0, 0),
            Logo::Rabbit => RABBIT.background.from,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Logo(Logo),
    Swatch(Gradient),
}

impl Preview {
    /// Partner logos when recognized, otherwise the background gradient.
    #[must_use]
    pub fn for_partner(theme: &Theme) -> Self {
        Logo::for_theme(theme).map_or(Preview::Swatch(theme.background), Preview::Logo)
    }

    /// Standard themes always show their gradient.
    #[must_use]
    pub fn for_standard(theme: &Theme) -> Self {
        Preview::Swatch(theme.background)
    }

    #[must_use]
    pub fn spans(&self) -> Vec<Span<'static>> {
        match self {
            Preview::Logo(logo) => vec![Span::styled(
                logo.glyphs(),
                Style::default()
                    .fg(Color::White)
                    .bg(logo.backdrop().into())
                    .add_modifier(Modifier::BOLD),
            )],
            Preview::Swatch(gradient) => swatch(gradient, PREVIEW_WIDTH),
        }
    }
}

/// A row of `width` cells shaded from `gradient.from` to `gradient.to`.
pub fn swatch(gradient: &Gradient, width: usize) -> Vec<Span<'static>> {
    gradient
        .steps(width)
        .into_iter()
        .map(|c| Span::styled(" ", Style::default().bg(c.into())))
        .collect()
}
