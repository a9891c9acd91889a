pub mod app;
pub mod clock;
pub mod controller;
pub mod events;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod surface;
pub mod terminal_guard;
pub mod theme;
pub mod timer;
pub mod view;
