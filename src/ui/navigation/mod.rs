mod intent;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::NavigationState;
