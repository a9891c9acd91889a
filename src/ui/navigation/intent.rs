use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Jump to a 1-based slide position. Out-of-range targets are ignored.
    GoTo(usize),
    Next,
    Previous,
    First,
    Last,
}

impl Intent for NavigationIntent {}
