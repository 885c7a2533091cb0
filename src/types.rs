//! Core types for the region editor.
//!
//! Defines the region kinds, committed regions and the small geometry
//! primitives shared by the camera, board and renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D position or offset in floating point (viewport or world space).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// An integer world pixel.
///
/// Produced by [`crate::input::coords::CoordinateConverter::snap_to_pixel`];
/// [`PixelPoint::from_world`] holds the one rounding rule used everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a world position half away from zero.
    ///
    /// Non-finite components snap to 0, out-of-range components saturate.
    pub fn from_world(world: Vec2) -> Self {
        Self::new(snap_axis(world.x), snap_axis(world.y))
    }

    pub fn to_world(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

#[inline]
fn snap_axis(value: f32) -> i32 {
    // `as` saturates and maps NaN to 0
    value.round() as i32
}

/// Direction for discrete keyboard panning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit vector in world space (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Linear RGBA color, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

// ============================================================================
// Regions
// ============================================================================

/// Classification stamped onto a region.
///
/// Every kind is listed once in [`RegionKind::ALL`]; hotkeys, colors and the
/// wire name are all derived from that table, so a new kind is a new variant
/// plus one entry in each match below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    #[default]
    Solid,
    Platform,
    Ladder,
}

impl RegionKind {
    /// All kinds in declaration order. Digit `n` selects `ALL[n - 1]`.
    pub const ALL: &'static [RegionKind] = &[Self::Solid, Self::Platform, Self::Ladder];

    /// Wire name used by the persisted schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Platform => "platform",
            Self::Ladder => "ladder",
        }
    }

    /// Human-readable label for the mode indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Platform => "Platform",
            Self::Ladder => "Ladder",
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            Self::Solid => Rgba::rgb(1.0, 0.0, 0.0),
            Self::Platform => Rgba::rgb(0.0, 0.0, 1.0),
            Self::Ladder => Rgba::rgb(0.0, 0.8, 0.2),
        }
    }

    /// Kind bound to a 1-based hotkey slot.
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed rectangle in world-pixel space.
///
/// `x`/`y` is the top-left pixel; `width`/`height` count pixels inclusively
/// and are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: RegionKind,
}

impl Region {
    /// Build the region spanning two clicked pixels, both included.
    ///
    /// Corners may be given in any order; the result is normalized to the
    /// top-left corner with positive extents.
    ///
    /// A span covering the whole `i32` axis is 2^32 pixels, one more than
    /// `u32` holds; that extent saturates at `u32::MAX`.
    pub fn from_corners(a: PixelPoint, b: PixelPoint, kind: RegionKind) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x).saturating_add(1),
            height: a.y.abs_diff(b.y).saturating_add(1),
            kind,
        }
    }

    /// Bottom-right pixel (inclusive).
    pub fn max_corner(&self) -> PixelPoint {
        let right = i64::from(self.x) + i64::from(self.width) - 1;
        let bottom = i64::from(self.y) + i64::from(self.height) - 1;
        PixelPoint::new(
            right.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            bottom.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        )
    }

    #[inline]
    pub fn contains(&self, point: PixelPoint) -> bool {
        let max = self.max_corner();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }
}
