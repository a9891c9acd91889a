use crate::ui::mvi::UiState;

/// Current slide position within a deck of `total` slides.
///
/// `current` is 1-based and always within `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl UiState for NavigationState {}

impl NavigationState {
    /// Start at the first slide. Returns `None` for an empty deck.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_at_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_at_last(&self) -> bool {
        self.current == self.total
    }

    /// Whether `target` is a position the state may move to.
    pub fn accepts(&self, target: usize) -> bool {
        (1..=self.total).contains(&target) && target != self.current
    }

    pub(super) fn with_current(self, current: usize) -> Self {
        Self { current, ..self }
    }
}
