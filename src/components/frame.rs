use crate::chrome::Chrome;
use crate::themes::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const SAMPLE: &[&str] = &[
    "// Drop a snippet in, pick a theme, export.",
    "fn main() {",
    "    let greeting = \"hello, frame\";",
    "    for word in greeting.split(' ') {",
    "        println!(\"{word}\");",
    "    }",
    "}",
];

const KEYWORDS: &[&str] = &["fn", "let", "for", "in", "mut", "pub", "use", "return"];

pub const WINDOW_TITLE: &str = "untitled-1";

/// Terminal cells used to render `padding` pixels: horizontal, vertical.
/// Cells are roughly twice as tall as they are wide.
#[must_use]
pub fn padding_cells(padding: u16) -> (u16, u16) {
    (padding / 8, padding / 16)
}

/// The editor canvas: a code window floating on the theme's gradient.
pub struct FramePreview<'a> {
    pub theme: &'a Theme,
    pub padding: u16,
    pub chrome: &'a Chrome,
}

impl Widget for FramePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.paint_background(area, buf);

        let (px, py) = padding_cells(self.padding);
        // Never squeeze the window below a usable size
        let px = px.min(area.width.saturating_sub(12) / 2);
        let py = py.min(area.height.saturating_sub(4) / 2);
        let window = Rect {
            x: area.x + px,
            y: area.y + py,
            width: area.width.saturating_sub(px * 2),
            height: area.height.saturating_sub(py * 2),
        };
        if window.width < 3 || window.height < 3 {
            return;
        }

        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" ● ● ● ", self.chrome.window_title),
                Span::styled(WINDOW_TITLE, self.chrome.window_title),
                Span::styled(" ", self.chrome.window_title),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.chrome.window_title)
            .style(self.chrome.window);

        let lines: Vec<Line> = SAMPLE.iter().map(|l| highlight(l, self.chrome)).collect();
        Paragraph::new(lines)
            .block(block)
            .style(self.chrome.code)
            .render(window, buf);
    }
}

impl FramePreview<'_> {
    fn paint_background(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let w = f32::from(area.width.max(2) - 1);
        let h = f32::from(area.height.max(2) - 1);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Diagonal blend, mostly left to right
                let t = 0.7 * f32::from(x - area.x) / w + 0.3 * f32::from(y - area.y) / h;
                let color: Color = self.theme.background.sample(t).into();
                let cell = &mut buf[(x, y)];
                cell.set_symbol(" ");
                cell.set_style(Style::default().bg(color));
            }
        }
    }
}

/// Minimal token colouring for the sample snippet.
fn highlight<'a>(line: &'a str, chrome: &Chrome) -> Line<'a> {
    if let Some(pos) = line.find("//") {
        let mut spans = tokens(&line[..pos], chrome);
        spans.push(Span::styled(&line[pos..], chrome.code_comment));
        return Line::from(spans);
    }
    Line::from(tokens(line, chrome))
}

fn tokens<'a>(text: &'a str, chrome: &Chrome) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('"') {
            let end = stripped.find('"').map_or(rest.len(), |i| i + 2);
            spans.push(Span::styled(&rest[..end], chrome.code_string));
            rest = &rest[end..];
            continue;
        }
        let end = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if end == 0 {
            let ch = rest.chars().next().map_or(1, char::len_utf8);
            spans.push(Span::styled(&rest[..ch], chrome.code));
            rest = &rest[ch..];
        } else {
            let word = &rest[..end];
            let style = if KEYWORDS.contains(&word) {
                chrome.code_keyword
            } else {
                chrome.code
            };
            spans.push(Span::styled(word, style));
            rest = &rest[end..];
        }
    }
    spans
}
