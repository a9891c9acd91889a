use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Slide transition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Delay before "previous" transition tags are cleared (default: 300).
    #[serde(default = "default_cleanup_delay_ms")]
    pub cleanup_delay_ms: u64,
}

/// Swipe detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum horizontal travel for a swipe, in gesture units (default: 50).
    #[serde(default = "default_min_swipe_distance")]
    pub min_swipe_distance: f64,
    /// Gesture units per terminal column (default: 8).
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Gesture units per terminal row (default: 16).
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

/// Elapsed time display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Tick period in milliseconds (default: 1000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Start the timer as soon as the deck opens (default: true).
    #[serde(default = "default_autostart")]
    pub autostart: bool,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How often the event loop wakes up to run deferred work (default: 100).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_cleanup_delay_ms() -> u64 {
    300
}

fn default_min_swipe_distance() -> f64 {
    50.0
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_autostart() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            cleanup_delay_ms: default_cleanup_delay_ms(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: default_min_swipe_distance(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            autostart: default_autostart(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
