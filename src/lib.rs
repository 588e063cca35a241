#![cfg(target_arch = "wasm32")]
//! Circuit-board particle flow drawn on a 2D canvas behind the docs homepage.
//!
//! Loading the module installs a [`controller::Controller`] that starts on DOM
//! ready; `start()` and `stop()` are exported for the host page.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod controller;
pub mod core;
pub mod dom;
pub mod error;
pub mod events;
pub mod frame;
pub mod render;

use crate::controller::Controller;
use crate::core::EffectConfig;

thread_local! {
    static INSTANCE: RefCell<Option<Rc<RefCell<Controller>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("circuit-flow starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let controller = Controller::install(EffectConfig::compiled())?;
    INSTANCE.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

fn with_instance(f: impl FnOnce(&mut Controller)) {
    match INSTANCE.with(|slot| slot.borrow().clone()) {
        Some(c) => f(&mut c.borrow_mut()),
        None => log::warn!("circuit-flow is not installed"),
    }
}

/// Start the effect (or restart it after `stop()`).
#[wasm_bindgen]
pub fn start() {
    with_instance(|c| c.start());
}

/// Tear the effect down and remove its canvas.
#[wasm_bindgen]
pub fn stop() {
    with_instance(|c| c.stop());
}
