//! Swipe detection for touch and pointer-drag input.

/// Minimum horizontal travel, in gesture units, for a swipe to count.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Start and end coordinates of one touch or drag interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl GestureSample {
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content dragged toward the left edge; advances the deck.
    Left,
    /// Content dragged toward the right edge; goes back.
    Right,
}

/// Classify a sample as a horizontal swipe.
///
/// The gesture must be more horizontal than vertical and travel strictly
/// further than `min_distance`; anything else (vertical scrolls, short taps)
/// yields `None`.
pub fn classify(sample: &GestureSample, min_distance: f64) -> Option<Swipe> {
    let dx = sample.start_x - sample.end_x;
    let dy = sample.start_y - sample.end_y;

    if dx.abs() <= dy.abs() || dx.abs() <= min_distance {
        return None;
    }
    if dx > 0.0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

/// Collects gesture samples from raw touch and pointer events.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    touch_start: Option<(f64, f64)>,
    drag_start: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.touch_start = Some((x, y));
    }

    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<GestureSample> {
        let (start_x, start_y) = self.touch_start.take()?;
        Some(GestureSample::new(start_x, start_y, x, y))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag_start = Some((x, y));
    }

    /// Returns true while a drag is in progress, meaning the move should not
    /// be handled by anything else.
    pub fn pointer_move(&self) -> bool {
        self.is_dragging()
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<GestureSample> {
        let (start_x, start_y) = self.drag_start.take()?;
        Some(GestureSample::new(start_x, start_y, x, y))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }
}
