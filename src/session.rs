//! Editor session - the context object threaded through input and rendering.
//!
//! Everything the editor mutates lives here: camera, board, toasts and the
//! last pointer position. The store is owned too, so save/load never reach
//! for ambient state.

use crate::background::BackgroundImage;
use crate::board::Board;
use crate::camera::Camera;
use crate::constants::EDITOR_VALUES_KEY;
use crate::input::coords::CoordinateConverter;
use crate::notifications::ToastManager;
use crate::persistence::codec;
use crate::persistence::{KeyValueStore, ParseError, PersistenceResult};
use crate::settings::Settings;
use crate::types::{PixelPoint, Vec2};

pub struct EditorSession {
    pub camera: Camera,
    pub board: Board,
    pub toasts: ToastManager,
    pub settings: Settings,
    pointer: Vec2,
    store: Box<dyn KeyValueStore>,
}

impl EditorSession {
    pub fn new(camera: Camera, store: Box<dyn KeyValueStore>, settings: Settings) -> Self {
        Self {
            camera,
            board: Board::new(),
            toasts: ToastManager::new(),
            settings,
            pointer: Vec2::ZERO,
            store,
        }
    }

    /// Session with the camera centered on `background`.
    pub fn for_background(
        background: &BackgroundImage,
        viewport: Vec2,
        store: Box<dyn KeyValueStore>,
        settings: Settings,
    ) -> Self {
        Self::new(Camera::new(background.center(), viewport), store, settings)
    }

    // ==================== Pointer ====================

    /// Last known pointer position in viewport pixels.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// World pixel under the pointer.
    pub fn pointer_pixel(&self) -> PixelPoint {
        CoordinateConverter::snap_to_pixel(self.pointer, &self.camera)
    }

    // ==================== Persistence ====================

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Encode the current regions and write them under the editor key.
    pub fn save(&mut self) -> PersistenceResult<usize> {
        let snapshot = self.board.export_snapshot();
        let text = codec::encode(&snapshot)?;
        self.store.set(EDITOR_VALUES_KEY, &text)?;
        Ok(snapshot.len())
    }

    /// Replace the regions with the stored ones.
    ///
    /// Any failure (nothing stored, unreadable store, bad data) leaves the
    /// board untouched.
    pub fn load(&mut self) -> PersistenceResult<usize> {
        let text = self
            .store
            .get(EDITOR_VALUES_KEY)?
            .ok_or_else(|| ParseError::Missing(EDITOR_VALUES_KEY.to_string()))?;
        Ok(self.board.import_snapshot(&text)?)
    }
}
