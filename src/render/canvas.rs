//! Per-frame canvas overlay: regions, draw preview, markers and labels.
//!
//! Draw order, back to front:
//! 1. committed regions, colored by their own kind
//! 2. preview rectangle (anchor to pointer), colored by the current mode
//! 3. anchor marker
//! 4. cursor marker
//! 5. mode label and toasts (viewport space)

use crate::constants::{LABEL_FONT_SIZE, LABEL_LINE_HEIGHT, LABEL_ORIGIN, MARKER_SIZE};
use crate::notifications::ToastVariant;
use crate::render::DrawList;
use crate::session::EditorSession;
use crate::types::{PixelPoint, Region, Rgba};

const LABEL_COLOR: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

pub fn build_frame(session: &EditorSession) -> DrawList {
    let mut list = DrawList::new();
    let settings = &session.settings;
    let mode = session.board.mode();
    let pointer = session.pointer_pixel();

    for region in session.board.regions() {
        push_region(&mut list, region, region.kind.color().with_alpha(settings.region_opacity));
    }

    if let Some(anchor) = session.board.anchor() {
        if let Some(preview) = session.board.preview(pointer) {
            push_region(&mut list, &preview, mode.color().with_alpha(settings.preview_opacity));
        }
        push_marker(&mut list, anchor, mode.color());
    }

    push_marker(&mut list, pointer, mode.color());

    let (label_x, mut line_y) = LABEL_ORIGIN;
    if settings.show_mode_label {
        list.text(label_x, line_y, mode.label(), LABEL_FONT_SIZE, LABEL_COLOR);
        line_y += LABEL_LINE_HEIGHT;
    }

    for toast in session.toasts.active() {
        let color = toast_color(toast.variant).with_alpha(toast.opacity());
        list.text(label_x, line_y, toast.display_text(), LABEL_FONT_SIZE, color);
        line_y += LABEL_LINE_HEIGHT;
    }

    list
}

fn push_region(list: &mut DrawList, region: &Region, color: Rgba) {
    list.rect(
        region.x as f32,
        region.y as f32,
        region.width as f32,
        region.height as f32,
        color,
    );
}

fn push_marker(list: &mut DrawList, at: PixelPoint, color: Rgba) {
    let size = MARKER_SIZE as f32;
    list.rect(at.x as f32, at.y as f32, size, size, color);
}

fn toast_color(variant: ToastVariant) -> Rgba {
    match variant {
        ToastVariant::Success => Rgba::rgb(0.4, 0.9, 0.5),
        ToastVariant::Info => Rgba::rgb(0.6, 0.8, 1.0),
        ToastVariant::Warning => Rgba::rgb(1.0, 0.8, 0.3),
        ToastVariant::Error => Rgba::rgb(1.0, 0.4, 0.4),
    }
}
