//! Region board - the authoritative region set and draw state.
//!
//! The board owns the committed regions (in authoring order), the pending
//! anchor of the two-click draw protocol and the current type mode. Regions
//! are never edited in place: they are appended by a completed draw, removed
//! by undo/reset, or replaced wholesale by an import.

use crate::input::DrawState;
use crate::persistence::codec;
use crate::persistence::ParseError;
use crate::types::{PixelPoint, Region, RegionKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Owned copy of the region sequence, shaped like the persisted schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    pub rects: Vec<Region>,
}

impl RegionSnapshot {
    pub fn new(rects: Vec<Region>) -> Self {
        Self { rects }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Result of a commit click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// First click stored; waiting for the second
    AnchorSet(PixelPoint),
    /// Second click completed a region, which was appended
    Committed(Region),
}

#[derive(Clone, Debug, Default)]
pub struct Board {
    regions: Vec<Region>,
    draw: DrawState,
    mode: RegionKind,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Type mode ====================

    pub fn mode(&self) -> RegionKind {
        self.mode
    }

    /// Set the kind stamped onto the next committed region.
    pub fn set_mode(&mut self, kind: RegionKind) -> bool {
        if self.mode == kind {
            return false;
        }
        debug!(from = %self.mode, to = %kind, "type mode changed");
        self.mode = kind;
        true
    }

    // ==================== Draw protocol ====================

    pub fn draw_state(&self) -> DrawState {
        self.draw
    }

    pub fn anchor(&self) -> Option<PixelPoint> {
        self.draw.anchor()
    }

    /// Two-click protocol: the first call anchors, the second commits.
    pub fn begin_or_commit_draw(&mut self, point: PixelPoint) -> DrawOutcome {
        match self.draw.take_anchor() {
            None => {
                self.draw.start(point);
                debug!(x = point.x, y = point.y, "anchor set");
                DrawOutcome::AnchorSet(point)
            }
            Some(anchor) => {
                let region = Region::from_corners(anchor, point, self.mode);
                self.regions.push(region);
                debug!(
                    x = region.x,
                    y = region.y,
                    width = region.width,
                    height = region.height,
                    kind = %region.kind,
                    total = self.regions.len(),
                    "region committed"
                );
                DrawOutcome::Committed(region)
            }
        }
    }

    /// Drop a pending anchor. Returns true if there was one.
    pub fn cancel_draw(&mut self) -> bool {
        self.draw.take_anchor().is_some()
    }

    /// The region a commit click at `pointer` would produce, if anchored.
    pub fn preview(&self, pointer: PixelPoint) -> Option<Region> {
        self.draw
            .anchor()
            .map(|anchor| Region::from_corners(anchor, pointer, self.mode))
    }

    // ==================== Region set ====================

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Remove the most recently committed region.
    ///
    /// Empty board is a no-op returning `None`. A pending anchor is kept.
    pub fn undo(&mut self) -> Option<Region> {
        let removed = self.regions.pop();
        if let Some(region) = removed {
            debug!(kind = %region.kind, remaining = self.regions.len(), "undo");
        }
        removed
    }

    /// Clear every region and any pending anchor.
    pub fn reset_all(&mut self) {
        debug!(cleared = self.regions.len(), "reset");
        self.regions.clear();
        self.draw.reset();
    }

    // ==================== Import / export ====================

    pub fn export_snapshot(&self) -> RegionSnapshot {
        RegionSnapshot::new(self.regions.clone())
    }

    /// Decode `text` and replace the region set with it.
    ///
    /// On error the board is left exactly as it was.
    pub fn import_snapshot(&mut self, text: &str) -> Result<usize, ParseError> {
        let snapshot = codec::decode(text)?;
        Ok(self.restore(snapshot))
    }

    /// Replace the region set and clear any pending anchor.
    pub fn restore(&mut self, snapshot: RegionSnapshot) -> usize {
        self.regions = snapshot.rects;
        self.draw.reset();
        self.regions.len()
    }
}
