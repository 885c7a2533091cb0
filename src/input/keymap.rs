//! Key bindings.
//!
//! | Key            | Command                  |
//! |----------------|--------------------------|
//! | `1`..`9`       | select region kind N     |
//! | `0`            | reset zoom               |
//! | `=` / `-`      | zoom in / out            |
//! | `o` / `i`      | save / load              |
//! | escape         | cancel pending draw      |
//! | shift + `r`    | clear all regions        |
//! | control + `z`  | undo last region         |
//! | arrows         | pan (shift for fast)     |

use crate::types::{PanDirection, RegionKind};

/// A key as reported by the input backend, already lowercased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Parse a backend key name (`"a"`, `"escape"`, `"up"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "escape" | "esc" => Some(Self::Escape),
            "up" | "arrowup" => Some(Self::ArrowUp),
            "down" | "arrowdown" => Some(Self::ArrowDown),
            "left" | "arrowleft" => Some(Self::ArrowLeft),
            "right" | "arrowright" => Some(Self::ArrowRight),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// "Fast" modifier: faster panning, and guards reset
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
    };
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
    };
}

/// Logical editor command produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectKind(RegionKind),
    ZoomReset,
    ZoomIn,
    ZoomOut,
    Save,
    Load,
    CancelDraw,
    ResetAll,
    Undo,
    Pan { direction: PanDirection, fast: bool },
}

/// Map a key press to a command, if it is bound.
pub fn command_for(key: Key, modifiers: Modifiers) -> Option<Command> {
    let command = match key {
        Key::Escape => Command::CancelDraw,
        Key::ArrowUp => pan(PanDirection::Up, modifiers),
        Key::ArrowDown => pan(PanDirection::Down, modifiers),
        Key::ArrowLeft => pan(PanDirection::Left, modifiers),
        Key::ArrowRight => pan(PanDirection::Right, modifiers),
        Key::Char('0') => Command::ZoomReset,
        Key::Char(c @ '1'..='9') => {
            let slot = c.to_digit(10)? as usize;
            Command::SelectKind(RegionKind::from_slot(slot)?)
        }
        Key::Char('=') => Command::ZoomIn,
        Key::Char('-') => Command::ZoomOut,
        Key::Char('o') => Command::Save,
        Key::Char('i') => Command::Load,
        Key::Char('r') if modifiers.shift => Command::ResetAll,
        Key::Char('z') if modifiers.control => Command::Undo,
        Key::Char(_) => return None,
    };
    Some(command)
}

fn pan(direction: PanDirection, modifiers: Modifiers) -> Command {
    Command::Pan {
        direction,
        fast: modifiers.shift,
    }
}
