use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TIMER_PAUSED, TIMER_RUNNING,
};
use crate::ui::view::ScreenModel;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Deck name, active slide title, and the elapsed timer.
    pub fn widget(&self, screen: &ScreenModel, title: &str, timer_running: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let timer_style = Style::default().fg(if timer_running {
            TIMER_RUNNING
        } else {
            TIMER_PAUSED
        });

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                screen.deck_name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("⏱ {}", screen.timer_text), timer_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
