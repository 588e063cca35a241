use crate::constants::DEFERRED_START_MS;
use crate::core::{
    is_home_route, Action, CircuitField, EffectConfig, Lifecycle, Phase, Signal, Variant,
};
use crate::dom::{self, Surface};
use crate::error::EffectError;
use crate::events::{self, Listener, PointerState};
use crate::frame::{FrameContext, FrameLoop};
use crate::render::CanvasPainter;
use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Owns the effect for one page: lifecycle state plus, while running, the
/// canvas, the field and the frame loop.
pub struct Controller {
    config: EffectConfig,
    lifecycle: Lifecycle,
    active: Option<Activation>,
    _page_listeners: Vec<Listener>,
}

struct Activation {
    surface: Surface,
    frame: FrameLoop,
    _listeners: Vec<Listener>,
    _pointer: Option<Rc<Cell<PointerState>>>,
}

impl Controller {
    pub fn new(config: EffectConfig) -> Self {
        let lifecycle = Lifecycle::new(config.variant.follows_route());
        Self {
            config,
            lifecycle,
            active: None,
            _page_listeners: Vec::new(),
        }
    }

    /// Create a controller, listen for unload (and hash navigation when the
    /// variant follows the route) and start it once the DOM is ready.
    pub fn install(config: EffectConfig) -> Result<Rc<RefCell<Self>>, EffectError> {
        let window = web::window().ok_or(EffectError::NoWindow)?;
        let document = window.document().ok_or(EffectError::NoDocument)?;
        let follows_route = config.variant.follows_route();
        let defer = config.variant.defers_start();
        let this = Rc::new(RefCell::new(Self::new(config)));

        let weak = Rc::downgrade(&this);
        let listeners = events::wire_page_signals(&window, follows_route, move |signal| {
            if let Some(c) = weak.upgrade() {
                c.borrow_mut().handle(signal);
            }
        })?;
        this.borrow_mut()._page_listeners = listeners;

        let weak = Rc::downgrade(&this);
        events::on_dom_ready(&document, move || {
            if defer {
                spawn_local(async move {
                    sleep_ms(DEFERRED_START_MS).await;
                    if let Some(c) = weak.upgrade() {
                        c.borrow_mut().start_if_pending();
                    }
                });
            } else if let Some(c) = weak.upgrade() {
                c.borrow_mut().start_if_pending();
            }
        })?;
        Ok(this)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Start, or restart after a stop, subject to the route check.
    pub fn start(&mut self) {
        let home = web::window()
            .map(|w| is_home_route(&dom::current_hash(&w)))
            .unwrap_or(false);
        self.handle(Signal::Ready { home });
    }

    pub fn stop(&mut self) {
        self.handle(Signal::Unload);
    }

    // Automatic start on DOM ready; skipped when stop() already ran.
    fn start_if_pending(&mut self) {
        if self.lifecycle.phase() == Phase::Uninitialized {
            self.start();
        }
    }

    pub fn handle(&mut self, signal: Signal) {
        match self.lifecycle.on(signal) {
            Action::Activate => {
                if let Err(e) = self.activate() {
                    match (self.config.variant, &e) {
                        (Variant::Generic, EffectError::MissingContainer(_)) => {
                            log::warn!("Circuit animation container not found")
                        }
                        (Variant::Generic, _) => log::error!("[circuit] activation failed: {}", e),
                        (Variant::RouteAware, _) => log::debug!("[circuit] not activated: {}", e),
                    }
                    self.lifecycle.on(Signal::Failed);
                }
            }
            Action::Teardown => self.teardown(),
            Action::None => {}
        }
    }

    fn activate(&mut self) -> Result<(), EffectError> {
        let window = web::window().ok_or(EffectError::NoWindow)?;
        let document = window.document().ok_or(EffectError::NoDocument)?;
        let surface = Surface::attach(&document, self.config.variant.creates_container())?;

        let (w, h) = dom::viewport_size(&window);
        dom::sync_canvas_size(surface.canvas(), w, h);
        let field = CircuitField::new(
            self.config.clone(),
            w as f32,
            h as f32,
            StdRng::from_entropy(),
        );
        let (traces, particles) = (field.traces().len(), field.particles().len());
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            field,
            painter: CanvasPainter::new(surface.context().clone()),
        }));

        let pointer = self
            .config
            .variant
            .tracks_pointer()
            .then(|| Rc::new(Cell::new(PointerState::default())));
        let listeners = match wire_activation(&window, &surface, &frame_ctx, pointer.as_ref()) {
            Ok(l) => l,
            Err(e) => {
                surface.detach();
                return Err(e);
            }
        };

        let frame = FrameLoop::start(frame_ctx);
        self.active = Some(Activation {
            surface,
            frame,
            _listeners: listeners,
            _pointer: pointer,
        });
        log::info!(
            "[circuit] running ({:?}): {}x{} px, {} traces, {} particles",
            self.config.variant,
            w,
            h,
            traces,
            particles
        );
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(active) = self.active.take() {
            active.frame.cancel();
            drop(active._listeners);
            active.surface.detach();
            log::info!("[circuit] torn down");
        }
    }
}

fn wire_activation(
    window: &web::Window,
    surface: &Surface,
    frame_ctx: &Rc<RefCell<FrameContext>>,
    pointer: Option<&Rc<Cell<PointerState>>>,
) -> Result<Vec<Listener>, EffectError> {
    let mut listeners = vec![events::wire_resize(
        window,
        surface.canvas(),
        frame_ctx.clone(),
    )?];
    if let Some(state) = pointer {
        listeners.push(events::wire_pointer_capture(
            surface.canvas(),
            state.clone(),
        )?);
    }
    Ok(listeners)
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
