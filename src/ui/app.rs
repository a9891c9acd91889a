use crate::config::Config;
use crate::deck::Deck;
use crate::ui::clock::Clock;
use crate::ui::controller::{ControllerError, ControllerSettings, PresentationController};
use crate::ui::gesture::{PointerTracker, Swipe};
use crate::ui::layout::{screen_layout, HitTarget, ScreenLayout};
use crate::ui::navigation::NavigationIntent;
use crate::ui::view::{bind_surfaces, ScreenModel, SharedScreen};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use std::sync::Arc;

/// Terminal host for one presentation.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    screen: SharedScreen,
    controller: PresentationController,
    pointer: PointerTracker,
    /// Gesture units per terminal column and row.
    cell_scale: (f64, f64),
}

impl App {
    pub fn new(
        deck: &Deck,
        config: &Config,
        clock: impl Clock + 'static,
    ) -> Result<Self, ControllerError> {
        let screen: SharedScreen = Arc::new(Mutex::new(ScreenModel::from_deck(deck)));
        let surfaces = bind_surfaces(&screen);
        let controller =
            PresentationController::new(surfaces, clock, ControllerSettings::from(config))?;

        Ok(Self {
            should_quit: false,
            size: None,
            screen,
            controller,
            pointer: PointerTracker::new(),
            cell_scale: (config.gesture.cell_width, config.gesture.cell_height),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &PresentationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PresentationController {
        &mut self.controller
    }

    pub fn screen_snapshot(&self) -> ScreenModel {
        self.screen.lock().clone()
    }

    pub fn current_title(&self) -> String {
        self.controller.current_title()
    }

    pub fn is_timer_running(&self) -> bool {
        self.controller.is_timer_running()
    }

    pub fn navigate(&mut self, intent: NavigationIntent) -> bool {
        self.controller.dispatch(intent)
    }

    pub fn toggle_timer(&mut self) {
        if self.controller.is_timer_running() {
            self.controller.stop_timer();
        } else {
            self.controller.start_timer();
        }
    }

    pub fn on_tick(&mut self) {
        self.controller.on_tick();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::trace!(cols, rows, "Terminal resized");
        self.size = Some((cols, rows));
    }

    pub fn on_focus(&mut self, gained: bool) {
        if gained {
            tracing::debug!("Presentation visible");
        } else {
            tracing::debug!("Presentation hidden");
        }
    }

    pub fn layout_for(&self, area: Rect) -> ScreenLayout {
        screen_layout(area, self.controller.total_count())
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let (width, height) = self.size?;
        self.layout_for(Rect::new(0, 0, width, height))
            .hit_test(column, row)
    }

    fn to_units(&self, column: u16, row: u16) -> (f64, f64) {
        (
            f64::from(column) * self.cell_scale.0,
            f64::from(row) * self.cell_scale.1,
        )
    }

    pub fn begin_drag(&mut self, column: u16, row: u16) {
        let (x, y) = self.to_units(column, row);
        self.pointer.pointer_down(x, y);
    }

    pub fn drag_in_progress(&self) -> bool {
        self.pointer.pointer_move()
    }

    /// Finish a drag and act on it. Returns `None` if no drag was active.
    pub fn end_drag(&mut self, column: u16, row: u16) -> Option<Option<Swipe>> {
        let (x, y) = self.to_units(column, row);
        let sample = self.pointer.pointer_up(x, y)?;
        Some(self.controller.handle_gesture(&sample))
    }
}
