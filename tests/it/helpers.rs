//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSessionBuilder` - Builder pattern for editor sessions
//! - Event shorthands (`key`, `right_click`, `scroll`, ...)
//! - Assertions on the region set

use regionboard::board::Board;
use regionboard::camera::Camera;
use regionboard::input::{dispatch, EditorEvent, Key, Modifiers, PointerButton};
use regionboard::persistence::MemoryStore;
use regionboard::session::EditorSession;
use regionboard::settings::Settings;
use regionboard::types::{PixelPoint, Region, RegionKind, Vec2};

/// Viewport used by default: 800x600, so the center is (400, 300).
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

// ============================================================================
// TestSessionBuilder
// ============================================================================

/// Builder for editor sessions backed by an in-memory store.
///
/// # Example
/// ```ignore
/// let session = TestSessionBuilder::new()
///     .centered_on(400.0, 300.0)
///     .with_zoom(2.0)
///     .build();
/// ```
pub struct TestSessionBuilder {
    center: Vec2,
    zoom: f32,
    store: MemoryStore,
    settings: Settings,
}

impl Default for TestSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSessionBuilder {
    /// Camera centered so viewport pixels equal world pixels at zoom 1.
    pub fn new() -> Self {
        Self {
            center: VIEWPORT.scale(0.5),
            zoom: 1.0,
            store: MemoryStore::new(),
            settings: Settings::default(),
        }
    }

    pub fn centered_on(mut self, x: f32, y: f32) -> Self {
        self.center = Vec2::new(x, y);
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> EditorSession {
        let mut camera = Camera::new(self.center, VIEWPORT);
        camera.set_zoom(self.zoom);
        EditorSession::new(camera, Box::new(self.store), self.settings)
    }
}

pub fn session() -> EditorSession {
    TestSessionBuilder::new().build()
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn key(c: char) -> EditorEvent {
    EditorEvent::KeyDown {
        key: Key::Char(c),
        modifiers: Modifiers::NONE,
    }
}

pub fn key_with(k: Key, modifiers: Modifiers) -> EditorEvent {
    EditorEvent::KeyDown { key: k, modifiers }
}

pub fn right_click(x: f32, y: f32) -> EditorEvent {
    EditorEvent::PointerDown {
        button: PointerButton::Secondary,
        position: Vec2::new(x, y),
    }
}

pub fn move_to(x: f32, y: f32) -> EditorEvent {
    EditorEvent::PointerMoved {
        position: Vec2::new(x, y),
        delta: Vec2::ZERO,
        primary_held: false,
    }
}

pub fn drag(to: Vec2, delta: Vec2) -> EditorEvent {
    EditorEvent::PointerMoved {
        position: to,
        delta,
        primary_held: true,
    }
}

pub fn scroll(delta_y: f32) -> EditorEvent {
    EditorEvent::Scroll { delta_y }
}

/// Dispatch a sequence of events, ignoring the redraw flags.
pub fn run(session: &mut EditorSession, events: impl IntoIterator<Item = EditorEvent>) {
    for event in events {
        dispatch(session, event);
    }
}

/// Draw a region with two right clicks (viewport == world at the default camera).
pub fn draw(session: &mut EditorSession, from: (f32, f32), to: (f32, f32)) {
    run(session, [right_click(from.0, from.1), right_click(to.0, to.1)]);
}

// ============================================================================
// Board helpers
// ============================================================================

pub fn region(x: i32, y: i32, width: u32, height: u32, kind: RegionKind) -> Region {
    Region {
        x,
        y,
        width,
        height,
        kind,
    }
}

/// Commit a region straight on a board, bypassing the router.
pub fn commit(board: &mut Board, a: (i32, i32), b: (i32, i32)) -> Region {
    board.begin_or_commit_draw(PixelPoint::new(a.0, a.1));
    match board.begin_or_commit_draw(PixelPoint::new(b.0, b.1)) {
        regionboard::board::DrawOutcome::Committed(region) => region,
        other => panic!("expected a committed region, got {other:?}"),
    }
}

pub fn assert_region_count(board: &Board, expected: usize) {
    assert_eq!(
        board.len(),
        expected,
        "Expected {} regions, found {}",
        expected,
        board.len()
    );
}
