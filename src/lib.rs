//! Regionboard - author collision regions over a background image.
//!
//! The crate is split into a headless core and an optional windowed shell:
//!
//! - `input` - coordinate conversion, key bindings and the event router
//! - `camera` - pan/zoom state
//! - `board` - committed regions, the two-click draw state machine, undo
//! - `persistence` - wire codec and key-value stores
//! - `render` - per-frame draw list
//! - `session` - the context object tying the above together
//!
//! The `app` module (feature `gui`) hosts the gpui window.

pub mod background;
pub mod board;
pub mod camera;
pub mod constants;
pub mod input;
pub mod notifications;
pub mod persistence;
pub mod render;
pub mod session;
pub mod settings;
pub mod types;

#[cfg(feature = "gui")]
pub mod app;
