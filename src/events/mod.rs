use crate::error::EffectError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod navigation;
pub mod pointer;
pub mod resize;

pub use navigation::{on_dom_ready, wire_page_signals};
pub use pointer::{wire_pointer_capture, PointerState};
pub use resize::wire_resize;

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, EffectError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback: Some(callback),
        })
    }

    /// Keep the listener for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(callback) = &self.callback {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, callback.as_ref().unchecked_ref());
        }
    }
}
