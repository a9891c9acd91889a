//! Terminal-backed surfaces.
//!
//! Each surface writes into a shared [`ScreenModel`] that the renderer reads
//! on the next frame.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::deck::Deck;
use crate::ui::surface::{Announcer, IndicatorStrip, NavButton, SlideHandle, Surfaces, TextSurface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideView {
    pub body: String,
    pub title: Option<String>,
    pub active: bool,
    pub previous: bool,
}

/// Everything the renderer needs, as last written by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenModel {
    pub deck_name: String,
    pub slides: Vec<SlideView>,
    pub position_text: String,
    pub total_text: String,
    pub timer_text: String,
    pub announcement: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub indicators: Vec<bool>,
}

impl ScreenModel {
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            deck_name: deck.name().to_string(),
            slides: deck
                .slides()
                .iter()
                .map(|slide| SlideView {
                    body: slide.body().to_string(),
                    title: slide.title().map(str::to_string),
                    active: false,
                    previous: false,
                })
                .collect(),
            indicators: vec![false; deck.len()],
            ..Self::default()
        }
    }

    pub fn active_slide(&self) -> Option<&SlideView> {
        self.slides.iter().find(|slide| slide.active)
    }

    /// True while a forward transition tag is still pending cleanup.
    pub fn in_transition(&self) -> bool {
        self.slides.iter().any(|slide| slide.previous && !slide.active)
    }
}

pub type SharedScreen = Arc<Mutex<ScreenModel>>;

struct TerminalSlide {
    screen: SharedScreen,
    index: usize,
}

impl SlideHandle for TerminalSlide {
    fn set_active(&mut self, active: bool) {
        if let Some(slide) = self.screen.lock().slides.get_mut(self.index) {
            slide.active = active;
        }
    }

    fn is_active(&self) -> bool {
        self.screen
            .lock()
            .slides
            .get(self.index)
            .is_some_and(|slide| slide.active)
    }

    fn set_previous(&mut self, previous: bool) {
        if let Some(slide) = self.screen.lock().slides.get_mut(self.index) {
            slide.previous = previous;
        }
    }

    fn is_previous(&self) -> bool {
        self.screen
            .lock()
            .slides
            .get(self.index)
            .is_some_and(|slide| slide.previous)
    }

    fn first_heading(&self) -> Option<String> {
        self.screen
            .lock()
            .slides
            .get(self.index)
            .and_then(|slide| slide.title.clone())
    }
}

#[derive(Clone, Copy)]
enum ButtonSide {
    Prev,
    Next,
}

struct TerminalButton {
    screen: SharedScreen,
    side: ButtonSide,
}

impl NavButton for TerminalButton {
    fn set_disabled(&mut self, disabled: bool) {
        let mut screen = self.screen.lock();
        match self.side {
            ButtonSide::Prev => screen.prev_disabled = disabled,
            ButtonSide::Next => screen.next_disabled = disabled,
        }
    }
}

#[derive(Clone, Copy)]
enum TextField {
    Position,
    Total,
    Timer,
}

struct TerminalText {
    screen: SharedScreen,
    field: TextField,
}

impl TextSurface for TerminalText {
    fn set_text(&mut self, text: &str) {
        let mut screen = self.screen.lock();
        let slot = match self.field {
            TextField::Position => &mut screen.position_text,
            TextField::Total => &mut screen.total_text,
            TextField::Timer => &mut screen.timer_text,
        };
        slot.clear();
        slot.push_str(text);
    }
}

struct TerminalIndicators {
    screen: SharedScreen,
}

impl IndicatorStrip for TerminalIndicators {
    fn len(&self) -> usize {
        self.screen.lock().indicators.len()
    }

    fn set_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(slot) = self.screen.lock().indicators.get_mut(index) {
            *slot = highlighted;
        }
    }
}

struct StatusLine {
    screen: SharedScreen,
}

impl Announcer for StatusLine {
    fn announce(&mut self, message: &str) {
        self.screen.lock().announcement = message.to_string();
    }
}

/// Resolve every terminal surface against `screen`.
pub fn bind_surfaces(screen: &SharedScreen) -> Surfaces {
    let slide_count = screen.lock().slides.len();
    let slides: Vec<Box<dyn SlideHandle>> = (0..slide_count)
        .map(|index| {
            Box::new(TerminalSlide {
                screen: Arc::clone(screen),
                index,
            }) as Box<dyn SlideHandle>
        })
        .collect();

    let text = |field| TerminalText {
        screen: Arc::clone(screen),
        field,
    };

    Surfaces::new(slides)
        .with_prev_button(TerminalButton {
            screen: Arc::clone(screen),
            side: ButtonSide::Prev,
        })
        .with_next_button(TerminalButton {
            screen: Arc::clone(screen),
            side: ButtonSide::Next,
        })
        .with_position_display(text(TextField::Position))
        .with_total_display(text(TextField::Total))
        .with_timer_display(text(TextField::Timer))
        .with_indicators(TerminalIndicators {
            screen: Arc::clone(screen),
        })
        .with_announcer(StatusLine {
            screen: Arc::clone(screen),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(source: &str) -> SharedScreen {
        let deck = Deck::parse("talk", source).unwrap();
        Arc::new(Mutex::new(ScreenModel::from_deck(&deck)))
    }

    #[test]
    fn model_mirrors_deck() {
        let screen = shared("# A\n---\nplain");
        let model = screen.lock();
        assert_eq!(model.deck_name, "talk");
        assert_eq!(model.slides.len(), 2);
        assert_eq!(model.slides[0].title.as_deref(), Some("A"));
        assert_eq!(model.slides[1].title, None);
        assert_eq!(model.indicators, vec![false, false]);
    }

    #[test]
    fn bound_surfaces_write_through() {
        let screen = shared("# A\n---\n# B");
        let mut surfaces = bind_surfaces(&screen);
        assert!(surfaces.missing().is_empty());

        surfaces.slides[1].set_active(true);
        surfaces.slides[0].set_previous(true);
        if let Some(display) = surfaces.timer_display.as_mut() {
            display.set_text("01:02");
        }
        if let Some(announcer) = surfaces.announcer.as_mut() {
            announcer.announce("hello");
        }

        let model = screen.lock();
        assert_eq!(model.active_slide().and_then(|s| s.title.as_deref()), Some("B"));
        assert!(model.in_transition());
        assert_eq!(model.timer_text, "01:02");
        assert_eq!(model.announcement, "hello");
    }
}
