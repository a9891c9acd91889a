//! Model-View-Intent (MVI) architecture primitives.
//!
//! Unidirectional data flow for the presentation layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Surfaces
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of navigation state
//! - **Intent**: User actions or host requests
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
