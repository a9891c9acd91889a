use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Terminal gained (`true`) or lost focus.
    Focus(bool),
    Tick,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It polls the terminal, emits a `Tick` every
    /// `tick_rate`, and stops once shutdown is signalled or the receiver is
    /// dropped.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                        Ok(Event::FocusGained) => tx.send(AppEvent::Focus(true)),
                        Ok(Event::FocusLost) => tx.send(AppEvent::Focus(false)),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
