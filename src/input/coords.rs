//! Coordinate conversion between viewport and world space.
//!
//! Every world pixel the editor derives, whether for a click, the cursor
//! marker or the preview, goes through this module so they always agree.

use crate::camera::Camera;
use crate::types::{PixelPoint, Vec2};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert viewport position to world position
    #[inline]
    pub fn viewport_to_world(viewport_pos: Vec2, camera: &Camera) -> Vec2 {
        let half = camera.viewport_size().scale(0.5);
        camera.position() + (viewport_pos - half).scale(1.0 / camera.zoom())
    }

    /// Convert world position to viewport position
    #[inline]
    pub fn world_to_viewport(world_pos: Vec2, camera: &Camera) -> Vec2 {
        let half = camera.viewport_size().scale(0.5);
        (world_pos - camera.position()).scale(camera.zoom()) + half
    }

    /// Convert a delta from viewport to world (for drag operations)
    #[inline]
    pub fn delta_viewport_to_world(delta: Vec2, zoom: f32) -> Vec2 {
        delta.scale(1.0 / zoom)
    }

    /// Convert a delta from world to viewport
    #[inline]
    pub fn delta_world_to_viewport(delta: Vec2, zoom: f32) -> Vec2 {
        delta.scale(zoom)
    }

    /// Resolve a viewport position to the world pixel under it.
    #[inline]
    pub fn snap_to_pixel(viewport_pos: Vec2, camera: &Camera) -> PixelPoint {
        PixelPoint::from_world(Self::viewport_to_world(viewport_pos, camera))
    }
}
