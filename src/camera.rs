//! Camera controller - pan position, zoom factor and viewport size.
//!
//! The camera position is the world point shown at the center of the
//! viewport. Zoom scales uniformly around that point, so zooming never moves
//! the position.

use crate::constants::{DEFAULT_ZOOM, FAST_PAN_STEP, MAX_ZOOM, MIN_ZOOM, PAN_STEP};
use crate::input::coords::CoordinateConverter;
use crate::types::{PanDirection, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec2,
    zoom: f32,
    viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
            viewport: Vec2::ZERO,
        }
    }
}

impl Camera {
    /// Camera centered on `center` for a viewport of the given size.
    pub fn new(center: Vec2, viewport: Vec2) -> Self {
        Self {
            position: center,
            zoom: DEFAULT_ZOOM,
            viewport,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    /// Clamp `target` into `[MIN_ZOOM, MAX_ZOOM]` and apply it.
    ///
    /// NaN clamps to the floor. Returns true if the zoom changed.
    pub fn set_zoom(&mut self, target: f32) -> bool {
        let clamped = if target.is_nan() {
            MIN_ZOOM
        } else {
            target.clamp(MIN_ZOOM, MAX_ZOOM)
        };
        if clamped == self.zoom {
            return false;
        }
        tracing::debug!(from = self.zoom, to = clamped, requested = target, "zoom");
        self.zoom = clamped;
        true
    }

    /// Multiplicative zoom, `set_zoom(zoom * factor)`.
    pub fn zoom_by(&mut self, factor: f32) -> bool {
        self.set_zoom(self.zoom * factor)
    }

    /// Translate by a world-space offset.
    pub fn pan_by(&mut self, offset: Vec2) {
        self.position = self.position + offset;
    }

    /// Pan so the image follows a pointer drag of `delta` viewport pixels.
    ///
    /// The delta is divided by the zoom so the same drag distance moves the
    /// image by the same on-screen amount at any zoom level.
    pub fn drag_by(&mut self, delta: Vec2) {
        self.pan_by(-CoordinateConverter::delta_viewport_to_world(delta, self.zoom));
    }

    /// Step one or ten world pixels in an axis direction.
    pub fn pan_discrete(&mut self, direction: PanDirection, fast: bool) {
        let step = if fast { FAST_PAN_STEP } else { PAN_STEP };
        self.pan_by(direction.unit().scale(step));
    }

    pub fn center_on(&mut self, point: Vec2) {
        self.position = point;
    }

    /// Returns true if the size actually changed.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) -> bool {
        let size = Vec2::new(width.max(0.0), height.max(0.0));
        if size == self.viewport {
            return false;
        }
        self.viewport = size;
        true
    }
}
