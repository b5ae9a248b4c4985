use crate::chrome::Chrome;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LOGO: &str = " RAYFRAME ";

pub struct Header<'a> {
    pub chrome: &'a Chrome,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::styled(LOGO, self.chrome.header_logo),
            // Fill rest of line
            Span::styled(" ".repeat(area.width as usize), self.chrome.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.chrome.header)
            .render(area, buf);
    }
}

pub struct PaddingControlView<'a> {
    pub padding: u16,
    pub chrome: &'a Chrome,
}

impl Widget for PaddingControlView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(" Padding ", self.chrome.control_title),
            Span::styled(format!(" {} ", self.padding), self.chrome.control_value),
        ]))
        .style(self.chrome.header)
        .render(area, buf);
    }
}
