//! Shared test utilities: in-memory surfaces that record what the
//! controller writes.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use slidedeck::ui::clock::ManualClock;
use slidedeck::ui::controller::{ControllerSettings, PresentationController};
use slidedeck::ui::surface::{
    Announcer, IndicatorStrip, NavButton, SlideHandle, Surfaces, TextSurface,
};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    pub active: bool,
    pub previous: bool,
    pub heading: Option<String>,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub slides: Vec<SlideRecord>,
    pub prev_disabled: Option<bool>,
    pub next_disabled: Option<bool>,
    pub position: String,
    pub total: String,
    pub timer: String,
    pub indicators: Vec<bool>,
    pub announcements: Vec<String>,
}

impl Recorded {
    pub fn active_positions(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.active)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn previous_positions(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.previous)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn highlighted_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn last_announcement(&self) -> Option<&str> {
        self.announcements.last().map(String::as_str)
    }
}

pub type Shared = Arc<Mutex<Recorded>>;

struct RecordingSlide {
    shared: Shared,
    index: usize,
}

impl SlideHandle for RecordingSlide {
    fn set_active(&mut self, active: bool) {
        self.shared.lock().slides[self.index].active = active;
    }

    fn is_active(&self) -> bool {
        self.shared.lock().slides[self.index].active
    }

    fn set_previous(&mut self, previous: bool) {
        self.shared.lock().slides[self.index].previous = previous;
    }

    fn is_previous(&self) -> bool {
        self.shared.lock().slides[self.index].previous
    }

    fn first_heading(&self) -> Option<String> {
        self.shared.lock().slides[self.index].heading.clone()
    }
}

#[derive(Clone, Copy)]
pub enum Field {
    Position,
    Total,
    Timer,
}

struct RecordingText {
    shared: Shared,
    field: Field,
}

impl TextSurface for RecordingText {
    fn set_text(&mut self, text: &str) {
        let mut rec = self.shared.lock();
        let slot = match self.field {
            Field::Position => &mut rec.position,
            Field::Total => &mut rec.total,
            Field::Timer => &mut rec.timer,
        };
        *slot = text.to_string();
    }
}

struct RecordingButton {
    shared: Shared,
    next: bool,
}

impl NavButton for RecordingButton {
    fn set_disabled(&mut self, disabled: bool) {
        let mut rec = self.shared.lock();
        if self.next {
            rec.next_disabled = Some(disabled);
        } else {
            rec.prev_disabled = Some(disabled);
        }
    }
}

struct RecordingIndicators {
    shared: Shared,
}

impl IndicatorStrip for RecordingIndicators {
    fn len(&self) -> usize {
        self.shared.lock().indicators.len()
    }

    fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        self.shared.lock().indicators[index] = highlighted;
    }
}

struct RecordingAnnouncer {
    shared: Shared,
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, message: &str) {
        self.shared.lock().announcements.push(message.to_string());
    }
}

/// Only the slides, nothing else bound.
pub fn bare_surfaces(headings: &[Option<&str>]) -> (Surfaces, Shared) {
    let shared: Shared = Arc::new(Mutex::new(Recorded {
        slides: headings
            .iter()
            .map(|heading| SlideRecord {
                heading: heading.map(str::to_string),
                ..SlideRecord::default()
            })
            .collect(),
        indicators: vec![false; headings.len()],
        ..Recorded::default()
    }));

    let slides: Vec<Box<dyn SlideHandle>> = (0..headings.len())
        .map(|index| {
            Box::new(RecordingSlide {
                shared: Arc::clone(&shared),
                index,
            }) as Box<dyn SlideHandle>
        })
        .collect();

    (Surfaces::new(slides), shared)
}

/// Every surface bound to one recorder.
pub fn recording_surfaces(headings: &[Option<&str>]) -> (Surfaces, Shared) {
    let (surfaces, shared) = bare_surfaces(headings);
    let text = |field| RecordingText {
        shared: Arc::clone(&shared),
        field,
    };
    let surfaces = surfaces
        .with_prev_button(RecordingButton {
            shared: Arc::clone(&shared),
            next: false,
        })
        .with_next_button(RecordingButton {
            shared: Arc::clone(&shared),
            next: true,
        })
        .with_position_display(text(Field::Position))
        .with_total_display(text(Field::Total))
        .with_timer_display(text(Field::Timer))
        .with_indicators(RecordingIndicators {
            shared: Arc::clone(&shared),
        })
        .with_announcer(RecordingAnnouncer {
            shared: Arc::clone(&shared),
        });
    (surfaces, shared)
}

/// Headings "Slide 1" .. "Slide n".
pub fn numbered_headings(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Slide {}", i)).collect()
}

pub struct Harness {
    pub controller: PresentationController,
    pub recorded: Shared,
    pub clock: ManualClock,
}

pub fn harness(n: usize) -> Harness {
    let headings = numbered_headings(n);
    let headings: Vec<Option<&str>> = headings.iter().map(|h| Some(h.as_str())).collect();
    harness_with(&headings)
}

pub fn harness_with(headings: &[Option<&str>]) -> Harness {
    let (surfaces, recorded) = recording_surfaces(headings);
    let clock = ManualClock::new();
    let controller =
        PresentationController::new(surfaces, clock.clone(), ControllerSettings::default())
            .expect("controller");
    Harness {
        controller,
        recorded,
        clock,
    }
}

/// Write `content` to a file named `name` in a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}
