use crate::config::Config;
use crate::deck::Deck;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::clock::SystemClock;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Session options that do not live in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// 1-based slide to open on.
    pub start_slide: Option<usize>,
    pub timer: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            start_slide: None,
            timer: true,
        }
    }
}

pub fn run(deck: &Deck, config: &Config, options: RunOptions) -> io::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    shutdown.register_signals()?;

    let mut app = App::new(deck, config, SystemClock)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    if let Some(position) = options.start_slide {
        if !app.controller_mut().go_to(position) && position != 1 {
            tracing::warn!(position, total = deck.len(), "Start slide out of range, ignored");
        }
    }
    if options.timer {
        app.controller_mut().start_timer();
    }

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.poll_interval_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Mouse(mouse)) => {
                handle_mouse(&mut app, mouse);
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Focus(gained)) => app.on_focus(gained),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.controller_mut().stop_timer();
    shutdown.signal();
    drop(guard);
    tracing::info!(
        position = app.controller().current_position(),
        elapsed_secs = app.controller().elapsed().as_secs(),
        "Presentation closed"
    );
    Ok(())
}
