//! Host-provided surfaces the presentation controller reads and writes.
//!
//! The controller never creates these; the host binds them once and hands
//! them over in a [`Surfaces`] bundle. Everything except the slides is
//! optional, and a missing surface only disables its own refresh.

use std::fmt;

/// One slide panel.
pub trait SlideHandle {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
    /// Transition tag for a slide that was just left by moving forward.
    fn set_previous(&mut self, previous: bool);
    fn is_previous(&self) -> bool;
    /// Text of the first top-level heading inside the slide, if any.
    fn first_heading(&self) -> Option<String>;
}

/// Previous/next control.
pub trait NavButton {
    fn set_disabled(&mut self, disabled: bool);
}

/// Any surface that shows a line of text (counters, timer).
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

/// Row of per-slide indicators, indexed from 0.
pub trait IndicatorStrip {
    fn len(&self) -> usize;
    fn set_highlighted(&mut self, index: usize, highlighted: bool);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live region for assistive technology.
pub trait Announcer {
    fn announce(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    PrevButton,
    NextButton,
    PositionDisplay,
    TotalDisplay,
    Indicators,
    TimerDisplay,
    Announcer,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceKind::PrevButton => "previous button",
            SurfaceKind::NextButton => "next button",
            SurfaceKind::PositionDisplay => "position display",
            SurfaceKind::TotalDisplay => "total display",
            SurfaceKind::Indicators => "indicator strip",
            SurfaceKind::TimerDisplay => "timer display",
            SurfaceKind::Announcer => "announcer",
        };
        f.write_str(name)
    }
}

/// Every surface the controller talks to, resolved once by the host.
#[derive(Default)]
pub struct Surfaces {
    pub slides: Vec<Box<dyn SlideHandle>>,
    pub prev_button: Option<Box<dyn NavButton>>,
    pub next_button: Option<Box<dyn NavButton>>,
    pub position_display: Option<Box<dyn TextSurface>>,
    pub total_display: Option<Box<dyn TextSurface>>,
    pub indicators: Option<Box<dyn IndicatorStrip>>,
    pub timer_display: Option<Box<dyn TextSurface>>,
    pub announcer: Option<Box<dyn Announcer>>,
}

impl Surfaces {
    pub fn new(slides: Vec<Box<dyn SlideHandle>>) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    pub fn with_prev_button(mut self, button: impl NavButton + 'static) -> Self {
        self.prev_button = Some(Box::new(button));
        self
    }

    pub fn with_next_button(mut self, button: impl NavButton + 'static) -> Self {
        self.next_button = Some(Box::new(button));
        self
    }

    pub fn with_position_display(mut self, display: impl TextSurface + 'static) -> Self {
        self.position_display = Some(Box::new(display));
        self
    }

    pub fn with_total_display(mut self, display: impl TextSurface + 'static) -> Self {
        self.total_display = Some(Box::new(display));
        self
    }

    pub fn with_indicators(mut self, strip: impl IndicatorStrip + 'static) -> Self {
        self.indicators = Some(Box::new(strip));
        self
    }

    pub fn with_timer_display(mut self, display: impl TextSurface + 'static) -> Self {
        self.timer_display = Some(Box::new(display));
        self
    }

    pub fn with_announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.announcer = Some(Box::new(announcer));
        self
    }

    /// Optional surfaces that were not bound.
    pub fn missing(&self) -> Vec<SurfaceKind> {
        let slots = [
            (SurfaceKind::PrevButton, self.prev_button.is_some()),
            (SurfaceKind::NextButton, self.next_button.is_some()),
            (SurfaceKind::PositionDisplay, self.position_display.is_some()),
            (SurfaceKind::TotalDisplay, self.total_display.is_some()),
            (SurfaceKind::Indicators, self.indicators.is_some()),
            (SurfaceKind::TimerDisplay, self.timer_display.is_some()),
            (SurfaceKind::Announcer, self.announcer.is_some()),
        ];
        slots
            .into_iter()
            .filter(|(_, bound)| !bound)
            .map(|(kind, _)| kind)
            .collect()
    }
}
