use crate::constants::{CANVAS_ID, CANVAS_STYLE, CONTAINER_ID, CONTAINER_STYLE};
use crate::error::EffectError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `innerWidth` x `innerHeight` in CSS pixels, at least 1x1.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let w = read(window.inner_width()) as u32;
    let h = read(window.inner_height()) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn current_hash(window: &web::Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Container, canvas and 2D context the effect draws into. Remembers which
/// elements it created so [`Surface::detach`] only removes those.
pub struct Surface {
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
    owns_container: bool,
    owns_canvas: bool,
}

impl Surface {
    /// Find (or, with `create_container`, insert) the container and put a
    /// canvas in it.
    pub fn attach(document: &web::Document, create_container: bool) -> Result<Self, EffectError> {
        let (container, owns_container) = match document.get_element_by_id(CONTAINER_ID) {
            Some(el) => (el, false),
            None if create_container => {
                let body = document.body().ok_or(EffectError::NoBody)?;
                let el = document.create_element("div")?;
                el.set_id(CONTAINER_ID);
                el.set_attribute("style", CONTAINER_STYLE)?;
                body.insert_before(&el, body.first_child().as_ref())?;
                (el, true)
            }
            None => return Err(EffectError::MissingContainer(CONTAINER_ID)),
        };

        let (canvas, owns_canvas, context) = match attach_canvas(document, &container) {
            Ok(parts) => parts,
            Err(e) => {
                if owns_container {
                    container.remove();
                }
                return Err(e);
            }
        };

        Ok(Self {
            container,
            canvas,
            context,
            owns_container,
            owns_canvas,
        })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.context
    }

    /// Remove created elements; a borrowed canvas is only cleared.
    pub fn detach(self) {
        if self.owns_canvas {
            self.canvas.remove();
        } else {
            let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
            self.context.clear_rect(0.0, 0.0, w, h);
        }
        if self.owns_container {
            self.container.remove();
        }
    }
}

// Reuse `#circuit-canvas` or append a new one to `container`, then take its 2D
// context. A canvas created here is removed again if the context is refused.
fn attach_canvas(
    document: &web::Document,
    container: &web::Element,
) -> Result<(web::HtmlCanvasElement, bool, web::CanvasRenderingContext2d), EffectError> {
    let existing = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let (canvas, owns_canvas) = match existing {
        Some(c) => (c, false),
        None => {
            let c = document
                .create_element("canvas")?
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| EffectError::Js(format!("{:?}", e)))?;
            c.set_id(CANVAS_ID);
            c.set_attribute("style", CANVAS_STYLE)?;
            container.append_child(&c)?;
            (c, true)
        }
    };

    let context = canvas
        .get_context("2d")
        .map_err(EffectError::from)
        .and_then(|ctx| ctx.ok_or(EffectError::NoContext))
        .and_then(|ctx| {
            ctx.dyn_into::<web::CanvasRenderingContext2d>()
                .map_err(|_| EffectError::NoContext)
        });
    match context {
        Ok(context) => Ok((canvas, owns_canvas, context)),
        Err(e) => {
            if owns_canvas {
                canvas.remove();
            }
            Err(e)
        }
    }
}

pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}
