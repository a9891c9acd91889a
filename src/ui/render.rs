use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::view::ScreenModel;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = app.layout_for(frame.area());
    let screen = app.screen_snapshot();

    let header = Header::new();
    frame.render_widget(
        header.widget(&screen, &app.current_title(), app.is_timer_running()),
        layout.header,
    );

    frame.render_widget(Clear, layout.body);
    frame.render_widget(slide_widget(&screen), layout.body);

    Footer::new().render(frame, layout.footer, &layout.controls, &screen);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", screen.announcement),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )),
        layout.status,
    );
}

fn slide_widget(screen: &ScreenModel) -> Paragraph<'static> {
    // Accent border while the outgoing slide still carries its forward tag.
    let border = if screen.in_transition() {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", screen.position_text));

    let lines: Vec<Line<'static>> = screen
        .active_slide()
        .map(|slide| slide.body.lines().map(styled_line).collect())
        .unwrap_or_default();

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
}

fn styled_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();
    if let Some(text) = trimmed.strip_prefix("# ") {
        Line::from(Span::styled(
            text.trim().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        Line::from(Span::styled(
            text.trim().to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(line.to_string())
    }
}
