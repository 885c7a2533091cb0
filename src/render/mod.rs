//! Render adapter - turns session state into backend-neutral draw commands.
//!
//! The adapter never mutates the session. A backend paints the resulting
//! [`DrawList`] in order; world-space rectangles are mapped to the viewport
//! with [`crate::input::coords::CoordinateConverter::world_to_viewport`].

mod canvas;

pub use canvas::build_frame;

use crate::types::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle in world pixels
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    /// Text anchored at a viewport position (top-left of the line)
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// Ordered draw commands for one frame, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// All text lines, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }
}
