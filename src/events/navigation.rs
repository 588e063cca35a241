use super::Listener;
use crate::core::{is_home_route, Signal};
use crate::dom;
use crate::error::EffectError;
use web_sys as web;

/// Run `f` once the DOM is parsed, immediately if it already is.
pub fn on_dom_ready(
    document: &web::Document,
    f: impl FnOnce() + 'static,
) -> Result<(), EffectError> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    Listener::attach(document, "DOMContentLoaded", move |_ev| {
        if let Some(f) = f.take() {
            f();
        }
    })?
    .forget();
    Ok(())
}

/// Page-lifetime signals: unload always, hash navigation when the effect
/// follows the route.
pub fn wire_page_signals(
    window: &web::Window,
    follows_route: bool,
    dispatch: impl Fn(Signal) + Clone + 'static,
) -> Result<Vec<Listener>, EffectError> {
    let mut listeners = Vec::with_capacity(2);

    let on_unload = dispatch.clone();
    listeners.push(Listener::attach(window, "beforeunload", move |_ev| {
        on_unload(Signal::Unload);
    })?);

    if follows_route {
        let window_for_hash = window.clone();
        listeners.push(Listener::attach(window, "hashchange", move |_ev| {
            let hash = dom::current_hash(&window_for_hash);
            dispatch(Signal::Navigated {
                home: is_home_route(&hash),
            });
        })?);
    }
    Ok(listeners)
}
