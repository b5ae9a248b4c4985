use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(ratatui::style::Modifier::DIM));
        }
    }
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width,
        height: area.height,
    };

    let shadow_area = shadow_area.intersection(terminal_area).intersection(buf.area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(ratatui::style::Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

/// Place a popup of `width` x `height` below `anchor`, shifted and clipped to stay inside `bounds`.
#[must_use]
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let y = anchor.bottom().min(bounds.bottom());
    let height = height.min(bounds.bottom().saturating_sub(y));
    let max_x = bounds.right().saturating_sub(width);
    let x = anchor.x.clamp(bounds.x, max_x.max(bounds.x));
    Rect {
        x,
        y,
        width,
        height,
    }
}
