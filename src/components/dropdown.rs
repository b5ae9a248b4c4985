use crate::chrome::Chrome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::draw_drop_shadow;

/// One line of a dropdown list.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownRow {
    Label(String),
    Separator,
    Item {
        value: String,
        label: String,
        preview: Vec<Span<'static>>,
    },
}

impl DropdownRow {
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            DropdownRow::Item { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Open dropdown: its rows, the highlighted row and the currently committed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropdownState {
    pub rows: Vec<DropdownRow>,
    pub highlighted: usize,
    pub value: Option<String>,
}

impl DropdownState {
    /// Highlights the row holding `value`, or the first item when there is none.
    #[must_use]
    pub fn new(rows: Vec<DropdownRow>, value: Option<String>) -> Self {
        let mut state = Self {
            rows,
            highlighted: 0,
            value,
        };
        let target = state.value.clone();
        if !target.is_some_and(|v| state.highlight_value(&v)) {
            state.highlighted = state.first_item().unwrap_or(0);
        }
        state
    }

    fn first_item(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.value().is_some())
    }

    pub fn item_count(&self) -> usize {
        self.rows.iter().filter(|r| r.value().is_some()).count()
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(DropdownRow::value)
    }

    /// Move to the next item, skipping labels and separators, wrapping at the end.
    pub fn next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        for step in 1..=len {
            let i = (self.highlighted + step) % len;
            if self.rows[i].value().is_some() {
                self.highlighted = i;
                return;
            }
        }
    }

    pub fn prev(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        for step in 1..=len {
            let i = (self.highlighted + len - step) % len;
            if self.rows[i].value().is_some() {
                self.highlighted = i;
                return;
            }
        }
    }

    /// Highlight a row by index. Non-item rows are ignored.
    pub fn highlight(&mut self, index: usize) -> bool {
        if self.rows.get(index).and_then(DropdownRow::value).is_some() {
            self.highlighted = index;
            true
        } else {
            false
        }
    }

    pub fn highlight_value(&mut self, value: &str) -> bool {
        match self.rows.iter().position(|r| r.value() == Some(value)) {
            Some(i) => {
                self.highlighted = i;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.rows.get(self.highlighted).and_then(DropdownRow::value)
    }

    /// First visible row so the highlighted one stays on screen.
    #[must_use]
    pub fn offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let max_offset = self.rows.len().saturating_sub(visible);
        self.highlighted
            .saturating_sub(visible - 1)
            .min(max_offset)
    }

    /// Row index under a terminal cell, given the rect the dropdown was rendered into.
    #[must_use]
    pub fn row_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let inner = inner_rect(area);
        if column < inner.left()
            || column >= inner.right()
            || row < inner.top()
            || row >= inner.bottom()
        {
            return None;
        }
        let index = self.offset(inner.height as usize) + (row - inner.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    /// Height (borders included) needed to show every row.
    #[must_use]
    pub fn desired_height(&self) -> u16 {
        u16::try_from(self.rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub struct Dropdown<'a> {
    pub title: &'a str,
    pub state: &'a DropdownState,
    pub chrome: &'a Chrome,
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let full = buf.area;
        draw_drop_shadow(buf, area, full);
        Clear.render(area, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.chrome.control_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.chrome.border_focus)
            .render(area, buf);

        let inner = inner_rect(area);
        let width = inner.width as usize;
        let offset = self.state.offset(inner.height as usize);

        for (line_no, (index, row)) in self
            .state
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + line_no as u16;
            let line = match row {
                DropdownRow::Label(text) => {
                    Line::from(Span::styled(format!(" {text}"), self.chrome.group_label))
                }
                DropdownRow::Separator => {
                    Line::from(Span::styled("─".repeat(width), self.chrome.separator))
                }
                DropdownRow::Item {
                    value,
                    label,
                    preview,
                } => {
                    let style = if index == self.state.highlighted {
                        self.chrome.list_selected
                    } else {
                        self.chrome.list_item
                    };
                    let marker = if self.state.value.as_deref() == Some(value.as_str()) {
                        "✓ "
                    } else {
                        "  "
                    };

                    let mut spans = vec![Span::styled(marker, style)];
                    spans.extend(preview.iter().cloned());
                    spans.push(Span::styled(format!(" {label}"), style));
                    let used: usize = spans.iter().map(Span::width).sum();
                    spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), style));
                    Line::from(spans)
                }
            };
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
