//! Keyboard, mouse and scroll input handling for the editor canvas.
//!
//! ## Architecture
//!
//! Backends translate native events into a single [`EditorEvent`] enum, and
//! [`router::dispatch`] applies it to an [`crate::session::EditorSession`].
//! Nothing here keeps state between events: the draw state lives on the
//! board and the pointer position on the session.
//!
//! ## Modules
//!
//! - `coords` - Viewport/world coordinate conversion
//! - `state` - Two-click draw state machine
//! - `keymap` - Key bindings to editor commands
//! - `router` - Event dispatch

pub mod coords;
pub mod keymap;
pub mod router;
mod state;

pub use keymap::{Command, Key, Modifiers};
pub use router::{dispatch, EditorEvent, PointerButton};
pub use state::DrawState;
