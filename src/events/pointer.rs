use super::Listener;
use crate::error::EffectError;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last pointer position over the canvas, in client pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Record `mousemove` over the canvas. Nothing reads the position yet; the
/// generic variant only captures it.
pub fn wire_pointer_capture(
    canvas: &web::HtmlCanvasElement,
    state: Rc<Cell<PointerState>>,
) -> Result<Listener, EffectError> {
    Listener::attach(canvas, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            state.set(PointerState {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            });
        }
    })
}
