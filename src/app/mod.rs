//! Windowed shell - hosts an [`EditorSession`] in a gpui window.
//!
//! The shell only translates: native events become [`EditorEvent`]s for the
//! router, and the render adapter's [`DrawList`] becomes painted quads and
//! text. The background image is drawn under everything with the same
//! camera transform.

mod events;

use crate::background::BackgroundImage;
use crate::input::coords::CoordinateConverter;
use crate::input::{dispatch, EditorEvent, PointerButton};
use crate::render::{build_frame, DrawCommand, DrawList};
use crate::session::EditorSession;
use crate::types::{Rgba, Vec2};
use gpui::*;

pub struct RegionEditor {
    session: EditorSession,
    background: BackgroundImage,
    focus_handle: FocusHandle,
    /// Previous pointer position, for drag deltas
    last_pointer: Option<Vec2>,
}

impl RegionEditor {
    pub fn new(
        session: EditorSession,
        background: BackgroundImage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            session,
            background,
            focus_handle,
            last_pointer: None,
        }
    }

    fn apply(&mut self, event: EditorEvent, cx: &mut Context<Self>) {
        if dispatch(&mut self.session, event) {
            cx.notify();
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(event) = events::key_down(event) {
            self.apply(event, cx);
        }
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let position = events::to_vec2(event.position);
        self.last_pointer = Some(position);
        if let Some(button) = events::pointer_button(event.button) {
            self.apply(EditorEvent::PointerDown { button, position }, cx);
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let position = events::to_vec2(event.position);
        let delta = self.last_pointer.map_or(Vec2::ZERO, |last| position - last);
        self.last_pointer = Some(position);
        let primary_held = event
            .pressed_button
            .and_then(events::pointer_button)
            .is_some_and(|button| button == PointerButton::Primary);
        self.apply(
            EditorEvent::PointerMoved {
                position,
                delta,
                primary_held,
            },
            cx,
        );
    }

    fn handle_scroll(&mut self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.apply(events::scroll(event), cx);
    }

    fn render_background(&self) -> impl IntoElement {
        let camera = &self.session.camera;
        let origin = CoordinateConverter::world_to_viewport(Vec2::ZERO, camera);
        let size = CoordinateConverter::delta_world_to_viewport(self.background.size(), camera.zoom());
        img(self.background.path.clone())
            .absolute()
            .left(px(origin.x))
            .top(px(origin.y))
            .w(px(size.x))
            .h(px(size.y))
    }
}

fn to_hsla(color: Rgba) -> Hsla {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
    .into()
}

fn paint_draw_list(bounds: Bounds<Pixels>, list: &DrawList, camera: &crate::camera::Camera, window: &mut Window) {
    let offset = events::to_vec2(bounds.origin);
    for command in list.iter() {
        if let DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        } = command
        {
            let top_left = CoordinateConverter::world_to_viewport(Vec2::new(*x, *y), camera) + offset;
            let extent = CoordinateConverter::delta_world_to_viewport(Vec2::new(*width, *height), camera.zoom());
            let rect = Bounds {
                origin: point(px(top_left.x), px(top_left.y)),
                size: size(px(extent.x), px(extent.y)),
            };
            window.paint_quad(fill(rect, to_hsla(*color)));
        }
    }
}

impl Render for RegionEditor {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport = window.viewport_size();
        dispatch(
            &mut self.session,
            EditorEvent::Resized {
                width: f32::from(viewport.width),
                height: f32::from(viewport.height),
            },
        );
        if self.session.toasts.prune_expired() || self.session.toasts.count() > 0 {
            // keep fading toasts animating until they are gone
            window.request_animation_frame();
        }

        let list = build_frame(&self.session);
        let camera = self.session.camera.clone();
        let overlay_list = list.clone();

        let labels = list.iter().filter_map(|command| match command {
            DrawCommand::Text {
                x,
                y,
                text,
                size,
                color,
            } => Some(
                div()
                    .absolute()
                    .left(px(*x))
                    .top(px(*y))
                    .text_size(px(*size))
                    .text_color(to_hsla(*color))
                    .child(text.clone()),
            ),
            DrawCommand::Rect { .. } => None,
        });
        let labels: Vec<_> = labels.collect();

        div()
            .id("region-editor")
            .track_focus(&self.focus_handle)
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(rgb(0x1e1e1e))
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .child(self.render_background())
            .child(
                canvas(
                    move |_bounds, _window, _cx| (),
                    move |bounds, _data, window, _cx| {
                        paint_draw_list(bounds, &overlay_list, &camera, window);
                    },
                )
                .absolute()
                .size_full(),
            )
            .children(labels)
    }
}

/// Open the editor window and run the gpui event loop.
pub fn run(session: EditorSession, background: BackgroundImage) {
    Application::new().run(move |cx: &mut App| {
        let (width, height) = crate::constants::DEFAULT_WINDOW_SIZE;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| RegionEditor::new(session, background, window, cx)),
        );
        if let Err(e) = opened {
            tracing::error!("Failed to open editor window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
