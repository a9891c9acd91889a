//! Presentation controller: slide position plus everything that mirrors it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::Config;
use crate::ui::clock::Clock;
use crate::ui::gesture::{self, GestureSample, Swipe, DEFAULT_MIN_SWIPE_DISTANCE};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState};
use crate::ui::surface::{SlideHandle, Surfaces};
use crate::ui::timer::{format_elapsed, ElapsedTimer};

/// Title used in announcements for slides without a heading.
pub const FALLBACK_TITLE: &str = "Slide content";

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("A presentation needs at least one slide")]
    NoSlides,
}

/// Timing and gesture tuning for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Delay before stale "previous" tags are stripped after a transition.
    pub cleanup_delay: Duration,
    /// Period of the elapsed-time tick.
    pub tick_interval: Duration,
    pub min_swipe_distance: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            cleanup_delay: Duration::from_millis(300),
            tick_interval: Duration::from_secs(1),
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            cleanup_delay: Duration::from_millis(config.transition.cleanup_delay_ms),
            tick_interval: Duration::from_millis(config.timer.tick_interval_ms),
            min_swipe_distance: config.gesture.min_swipe_distance,
        }
    }
}

pub struct PresentationController {
    state: NavigationState,
    surfaces: Surfaces,
    clock: Box<dyn Clock>,
    settings: ControllerSettings,
    /// One deadline per transition; each fires once.
    pending_cleanups: VecDeque<Instant>,
    timer: ElapsedTimer,
}

impl PresentationController {
    /// Bind the controller to its surfaces and show the first slide.
    ///
    /// Missing optional surfaces are logged once here and then skipped on
    /// every refresh.
    pub fn new(
        surfaces: Surfaces,
        clock: impl Clock + 'static,
        settings: ControllerSettings,
    ) -> Result<Self, ControllerError> {
        let state =
            NavigationState::new(surfaces.slides.len()).ok_or(ControllerError::NoSlides)?;

        let missing = surfaces.missing();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            tracing::warn!(
                missing = %names.join(", "),
                "Presentation surfaces not bound; their updates are disabled"
            );
        }
        if let Some(strip) = &surfaces.indicators {
            if strip.len() != state.total() {
                tracing::warn!(
                    indicators = strip.len(),
                    slides = state.total(),
                    "Indicator count does not match slide count"
                );
            }
        }

        let timer = ElapsedTimer::new(clock.now(), settings.tick_interval);
        let mut controller = Self {
            state,
            surfaces,
            clock: Box::new(clock),
            settings,
            pending_cleanups: VecDeque::new(),
            timer,
        };
        controller.initialize();
        tracing::info!(total = controller.total_count(), "Presentation initialized");
        Ok(controller)
    }

    fn initialize(&mut self) {
        for (index, slide) in self.surfaces.slides.iter_mut().enumerate() {
            slide.set_active(index == 0);
            slide.set_previous(false);
        }
        let total = self.state.total().to_string();
        if let Some(display) = self.surfaces.total_display.as_mut() {
            display.set_text(&total);
        }
        if let Some(display) = self.surfaces.timer_display.as_mut() {
            display.set_text(&format_elapsed(Duration::ZERO));
        }
        self.refresh();
    }

    /// Apply a navigation intent. Returns true if the position changed.
    pub fn dispatch(&mut self, intent: NavigationIntent) -> bool {
        let before = self.state;
        let after = NavigationReducer::reduce(before, intent);
        if after == before {
            tracing::trace!(?intent, position = before.current(), "Navigation ignored");
            return false;
        }
        self.transition(before.current(), after);
        true
    }

    fn transition(&mut self, from: usize, next: NavigationState) {
        let to = next.current();
        tracing::debug!(from, to, "Slide transition");

        if let Some(slide) = self.slide_mut(from) {
            slide.set_active(false);
            // Only forward moves tag the outgoing slide; backward moves let it
            // fade without a direction.
            if to > from {
                slide.set_previous(true);
            }
        }

        self.state = next;

        if let Some(slide) = self.slide_mut(to) {
            slide.set_previous(false);
            slide.set_active(true);
        }

        let deadline = self.clock.now() + self.settings.cleanup_delay;
        self.pending_cleanups.push_back(deadline);

        self.refresh();
        self.announce();
    }

    fn slide_mut(&mut self, position: usize) -> Option<&mut Box<dyn SlideHandle>> {
        self.surfaces.slides.get_mut(position.checked_sub(1)?)
    }

    fn refresh(&mut self) {
        let current = self.state.current();

        if let Some(display) = self.surfaces.position_display.as_mut() {
            display.set_text(&current.to_string());
        }
        if let Some(button) = self.surfaces.prev_button.as_mut() {
            button.set_disabled(self.state.is_at_first());
        }
        if let Some(button) = self.surfaces.next_button.as_mut() {
            button.set_disabled(self.state.is_at_last());
        }
        if let Some(strip) = self.surfaces.indicators.as_mut() {
            for index in 0..strip.len() {
                strip.set_highlighted(index, index + 1 == current);
            }
        }
    }

    fn announce(&mut self) {
        let message = self.announcement();
        tracing::info!(announcement = %message, "Slide changed");
        if let Some(announcer) = self.surfaces.announcer.as_mut() {
            announcer.announce(&message);
        }
    }

    /// Accessibility text for the current slide.
    pub fn announcement(&self) -> String {
        format!(
            "Slide {} of {}: {}",
            self.state.current(),
            self.state.total(),
            self.current_title()
        )
    }

    /// First heading of the active slide, or [`FALLBACK_TITLE`].
    pub fn current_title(&self) -> String {
        self.surfaces
            .slides
            .get(self.state.current() - 1)
            .and_then(|slide| slide.first_heading())
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    pub fn go_to(&mut self, position: usize) -> bool {
        self.dispatch(NavigationIntent::GoTo(position))
    }

    pub fn next(&mut self) -> bool {
        self.dispatch(NavigationIntent::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.dispatch(NavigationIntent::Previous)
    }

    pub fn go_to_first(&mut self) -> bool {
        self.dispatch(NavigationIntent::First)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.dispatch(NavigationIntent::Last)
    }

    pub fn current_position(&self) -> usize {
        self.state.current()
    }

    pub fn total_count(&self) -> usize {
        self.state.total()
    }

    pub fn is_at_first(&self) -> bool {
        self.state.is_at_first()
    }

    pub fn is_at_last(&self) -> bool {
        self.state.is_at_last()
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Classify a gesture without acting on it.
    pub fn classify_gesture(&self, sample: &GestureSample) -> Option<Swipe> {
        gesture::classify(sample, self.settings.min_swipe_distance)
    }

    /// Classify a gesture and navigate: swipe left goes forward, swipe right
    /// goes back.
    pub fn handle_gesture(&mut self, sample: &GestureSample) -> Option<Swipe> {
        let swipe = self.classify_gesture(sample)?;
        tracing::debug!(?swipe, "Swipe detected");
        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.previous(),
        };
        Some(swipe)
    }

    pub fn start_timer(&mut self) {
        if self.timer.start(self.clock.now()) {
            tracing::debug!("Presentation timer started");
        }
    }

    pub fn stop_timer(&mut self) {
        if self.timer.stop() {
            tracing::debug!("Presentation timer stopped");
        }
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Elapsed time since the controller was created.
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed(self.clock.now())
    }

    /// True while at least one transition cleanup has not fired yet.
    pub fn has_pending_cleanup(&self) -> bool {
        !self.pending_cleanups.is_empty()
    }

    /// Run deferred work that has come due: transition cleanups and the
    /// timer tick.
    pub fn on_tick(&mut self) {
        let now = self.clock.now();
        self.run_due_cleanups(now);
        if let Some(text) = self.timer.poll(now) {
            if let Some(display) = self.surfaces.timer_display.as_mut() {
                display.set_text(&text);
            }
        }
    }

    fn run_due_cleanups(&mut self, now: Instant) {
        let mut fired = false;
        while let Some(&deadline) = self.pending_cleanups.front() {
            if deadline > now {
                break;
            }
            self.pending_cleanups.pop_front();
            fired = true;
        }
        if !fired {
            return;
        }
        for slide in self.surfaces.slides.iter_mut() {
            if !slide.is_active() {
                slide.set_previous(false);
            }
        }
    }
}
