use crate::ui::layout::{FooterLayout, NEXT_LABEL, PREV_LABEL};
use crate::ui::theme::{
    DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, INDICATOR_ACTIVE, INDICATOR_IDLE,
};
use crate::ui::view::ScreenModel;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ←/→ Navigate │ Home/End │ T: Timer │ Q: Quit ";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, controls: &FooterLayout, screen: &ScreenModel) {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(Span::styled(HINTS, hint_style))
                .title_bottom(Span::styled(format!(" v{} ", VERSION), hint_style)),
            area,
        );

        frame.render_widget(button(PREV_LABEL, screen.prev_disabled), controls.prev);
        frame.render_widget(button(NEXT_LABEL, screen.next_disabled), controls.next);

        for (rect, highlighted) in controls.indicators.iter().zip(&screen.indicators) {
            let (glyph, color) = if *highlighted {
                ("●", INDICATOR_ACTIVE)
            } else {
                ("○", INDICATOR_IDLE)
            };
            frame.render_widget(Paragraph::new(Span::styled(glyph, Style::default().fg(color))), *rect);
        }

        let counter = format!("{} / {}", screen.position_text, screen.total_text);
        frame.render_widget(
            Paragraph::new(Span::styled(counter, Style::default().fg(HEADER_TEXT)))
                .alignment(Alignment::Right),
            controls.counter,
        );
    }
}

fn button(label: &'static str, disabled: bool) -> Paragraph<'static> {
    let style = if disabled {
        Style::default().fg(DISABLED_TEXT)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    Paragraph::new(Span::styled(label, style))
}
