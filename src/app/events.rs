//! gpui event conversion into [`EditorEvent`]s.

use crate::input::{EditorEvent, Key, Modifiers, PointerButton};
use crate::types::Vec2;
use gpui::{KeyDownEvent, MouseButton, Pixels, Point, ScrollDelta, ScrollWheelEvent};

/// Pixels per scroll line for line-based wheels
const LINE_HEIGHT_PX: f32 = 20.0;

pub fn to_vec2(point: Point<Pixels>) -> Vec2 {
    Vec2::new(f32::from(point.x), f32::from(point.y))
}

pub fn key_down(event: &KeyDownEvent) -> Option<EditorEvent> {
    let keystroke = &event.keystroke;
    let key = Key::from_name(&keystroke.key)?;
    Some(EditorEvent::KeyDown {
        key,
        modifiers: Modifiers {
            shift: keystroke.modifiers.shift,
            control: keystroke.modifiers.control || keystroke.modifiers.platform,
        },
    })
}

pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

pub fn scroll(event: &ScrollWheelEvent) -> EditorEvent {
    let delta_y = match event.delta {
        ScrollDelta::Pixels(delta) => f32::from(delta.y),
        ScrollDelta::Lines(delta) => delta.y * LINE_HEIGHT_PX,
    };
    EditorEvent::Scroll { delta_y }
}
