use super::Listener;
use crate::dom;
use crate::error::EffectError;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Match the canvas to the window and regenerate traces on every resize.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> Result<Listener, EffectError> {
    let window_for_size = window.clone();
    let canvas = canvas.clone();
    Listener::attach(window, "resize", move |_ev| {
        let (w, h) = dom::viewport_size(&window_for_size);
        dom::sync_canvas_size(&canvas, w, h);
        frame_ctx.borrow_mut().field.resize(w as f32, h as f32);
    })
}
