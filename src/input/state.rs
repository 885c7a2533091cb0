//! Draw state machine for the two-click rectangle protocol.
//!
//! ## State Transitions
//!
//! ```text
//! Idle        -> Anchored(p)   (commit click at p)
//! Anchored(a) -> Idle          (commit click at p, region a..p appended)
//! Anchored(a) -> Idle          (cancel)
//! Idle        -> Idle          (cancel)
//! ```
//!
//! There is no terminal state; the editor stays in this loop for the whole
//! session.

use crate::types::PixelPoint;

/// Draw-in-progress state. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawState {
    /// No anchor pending
    #[default]
    Idle,

    /// First click placed, waiting for the second
    Anchored {
        /// World pixel of the first click
        anchor: PixelPoint,
    },
}

impl DrawState {
    /// Returns true if no anchor is pending
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the pending anchor, if any
    pub fn anchor(&self) -> Option<PixelPoint> {
        match self {
            Self::Anchored { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }

    /// Place the first click
    pub fn start(&mut self, anchor: PixelPoint) {
        *self = Self::Anchored { anchor };
    }

    /// Take the anchor and return to Idle.
    pub fn take_anchor(&mut self) -> Option<PixelPoint> {
        let anchor = self.anchor();
        *self = Self::Idle;
        anchor
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
