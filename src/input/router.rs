//! Event dispatch - one entry point for every input the editor reacts to.

use crate::constants::{
    DEFAULT_ZOOM, SCROLL_ZOOM_DIVISOR, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::input::coords::CoordinateConverter;
use crate::input::keymap::{command_for, Command, Key, Modifiers};
use crate::notifications::Toast;
use crate::persistence::{ParseError, PersistenceError};
use crate::session::EditorSession;
use crate::types::Vec2;
use tracing::{error, info, warn};

/// Mouse buttons the editor distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: drag to pan
    Primary,
    /// Right button: two-click draw
    Secondary,
    Middle,
}

/// Input event in backend-neutral form. Positions are viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorEvent {
    KeyDown { key: Key, modifiers: Modifiers },
    PointerMoved {
        position: Vec2,
        /// Movement since the previous pointer event
        delta: Vec2,
        /// Whether the primary button is held (drag-pan)
        primary_held: bool,
    },
    PointerDown { button: PointerButton, position: Vec2 },
    Scroll { delta_y: f32 },
    Resized { width: f32, height: f32 },
}

/// Apply one event to the session. Returns true if a redraw is needed.
pub fn dispatch(session: &mut EditorSession, event: EditorEvent) -> bool {
    match event {
        EditorEvent::KeyDown { key, modifiers } => match command_for(key, modifiers) {
            Some(command) => run_command(session, command),
            None => false,
        },
        EditorEvent::PointerMoved {
            position,
            delta,
            primary_held,
        } => {
            session.set_pointer(position);
            if primary_held {
                session.camera.drag_by(delta);
            }
            true
        }
        EditorEvent::PointerDown { button, position } => {
            session.set_pointer(position);
            match button {
                PointerButton::Secondary => {
                    let pixel = CoordinateConverter::snap_to_pixel(position, &session.camera);
                    session.board.begin_or_commit_draw(pixel);
                    true
                }
                PointerButton::Primary | PointerButton::Middle => false,
            }
        }
        EditorEvent::Scroll { delta_y } => {
            session.camera.zoom_by(1.0 - delta_y / SCROLL_ZOOM_DIVISOR)
        }
        EditorEvent::Resized { width, height } => session.camera.set_viewport_size(width, height),
    }
}

fn run_command(session: &mut EditorSession, command: Command) -> bool {
    match command {
        Command::SelectKind(kind) => session.board.set_mode(kind),
        Command::ZoomReset => session.camera.set_zoom(DEFAULT_ZOOM),
        Command::ZoomIn => session.camera.zoom_by(ZOOM_IN_FACTOR),
        Command::ZoomOut => session.camera.zoom_by(ZOOM_OUT_FACTOR),
        Command::CancelDraw => session.board.cancel_draw(),
        Command::ResetAll => {
            session.board.reset_all();
            true
        }
        Command::Undo => session.board.undo().is_some(),
        Command::Pan { direction, fast } => {
            session.camera.pan_discrete(direction, fast);
            true
        }
        Command::Save => {
            match session.save() {
                Ok(count) => {
                    info!(regions = count, "regions saved");
                    session
                        .toasts
                        .push(Toast::success(format!("Saved {count} regions")));
                }
                Err(e) => {
                    error!("Failed to save regions: {}", e);
                    session.toasts.push(Toast::error(format!("Save failed: {e}")));
                }
            }
            true
        }
        Command::Load => {
            match session.load() {
                Ok(count) => {
                    info!(regions = count, "regions loaded");
                    session
                        .toasts
                        .push(Toast::info(format!("Loaded {count} regions")));
                }
                Err(PersistenceError::Parse(ParseError::Missing(key))) => {
                    warn!(%key, "nothing saved yet");
                    session.toasts.push(Toast::warning("Nothing saved yet"));
                }
                Err(e) => {
                    warn!("Load failed, keeping current regions: {}", e);
                    session.toasts.push(Toast::error(format!("Load failed: {e}")));
                }
            }
            true
        }
    }
}
