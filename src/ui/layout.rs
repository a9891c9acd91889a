use ratatui::layout::{Position, Rect};

pub const PREV_LABEL: &str = " < Prev ";
pub const NEXT_LABEL: &str = " Next > ";
/// Columns taken by one indicator glyph plus its gap.
pub const INDICATOR_WIDTH: u16 = 2;

/// Clickable region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PrevButton,
    NextButton,
    /// 1-based slide position.
    Indicator(usize),
    Viewport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLayout {
    pub prev: Rect,
    pub indicators: Vec<Rect>,
    pub next: Rect,
    pub counter: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
    pub controls: FooterLayout,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let status_height = 1.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + status_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let status = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(status_height),
        width: area.width,
        height: status_height,
    };
    let footer = Rect {
        x: area.x,
        y: status.y.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + footer_height + status_height),
    };
    (header, body, footer, status)
}

/// Width of the `current / total` counter for a deck of `total` slides.
pub fn counter_width(total: usize) -> u16 {
    let digits = total.max(1).to_string().len() as u16;
    digits * 2 + 3
}

/// Place the footer controls inside the footer border.
///
/// Indicators that do not fit are not drawn and cannot be clicked.
pub fn footer_layout(footer: Rect, slide_count: usize) -> FooterLayout {
    let inner = Rect {
        x: footer.x.saturating_add(1),
        y: footer.y.saturating_add(1),
        width: footer.width.saturating_sub(2),
        height: footer.height.saturating_sub(2).min(1),
    };
    let row = |x: u16, width: u16| Rect {
        x,
        y: inner.y,
        width,
        height: inner.height,
    };

    let button_width = PREV_LABEL.chars().count() as u16;
    let counter = counter_width(slide_count);
    let prev = row(inner.x, button_width.min(inner.width));

    let strip_x = prev.right().saturating_add(1);
    let reserved = button_width * 2 + counter + 3;
    let room = inner.width.saturating_sub(reserved) / INDICATOR_WIDTH;
    let shown = slide_count.min(room as usize) as u16;
    let indicators = (0..shown)
        .map(|i| row(strip_x + i * INDICATOR_WIDTH, 1))
        .collect();

    let next_x = strip_x + shown * INDICATOR_WIDTH + 1;
    let next = row(next_x, button_width.min(inner.right().saturating_sub(next_x)));
    let counter_x = inner.right().saturating_sub(counter).max(next.right());
    let counter = row(counter_x, inner.right().saturating_sub(counter_x));

    FooterLayout {
        prev,
        indicators,
        next,
        counter,
    }
}

pub fn screen_layout(area: Rect, slide_count: usize) -> ScreenLayout {
    let (header, body, footer, status) = layout_regions(area);
    ScreenLayout {
        header,
        body,
        footer,
        status,
        controls: footer_layout(footer, slide_count),
    }
}

impl ScreenLayout {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = Position::new(column, row);
        if self.controls.prev.contains(point) {
            return Some(HitTarget::PrevButton);
        }
        if self.controls.next.contains(point) {
            return Some(HitTarget::NextButton);
        }
        if let Some(index) = self
            .controls
            .indicators
            .iter()
            .position(|rect| rect.contains(point))
        {
            return Some(HitTarget::Indicator(index + 1));
        }
        if self.body.contains(point) {
            return Some(HitTarget::Viewport);
        }
        None
    }
}
