// Host-side tests for activation state and route detection.
// The main crate is wasm-only, so we compile the pure-Rust core directly.

#![allow(dead_code, unused_imports)]
#[path = "../src/core/mod.rs"]
mod circuit;

use circuit::config::{EffectConfig, Variant};
use circuit::lifecycle::{Action, Lifecycle, Phase, Signal};
use circuit::route::is_home_route;

fn route_aware() -> Lifecycle {
    Lifecycle::new(Variant::RouteAware.follows_route())
}

fn generic() -> Lifecycle {
    Lifecycle::new(Variant::Generic.follows_route())
}

#[test]
fn home_route_detection() {
    for hash in ["", "#", "#/", "#/home"] {
        assert!(is_home_route(hash), "{hash:?} should be home");
    }
    for hash in ["#/docs", "#/home/intro", "#/Home", "#docs", "#/?q=1"] {
        assert!(!is_home_route(hash), "{hash:?} should not be home");
    }
}

#[test]
fn starts_on_ready_when_home() {
    let mut lc = route_aware();
    assert_eq!(lc.phase(), Phase::Uninitialized);
    assert_eq!(lc.on(Signal::Ready { home: true }), Action::Activate);
    assert!(lc.is_running());
}

#[test]
fn ready_off_home_waits_for_navigation() {
    let mut lc = route_aware();
    assert_eq!(lc.on(Signal::Ready { home: false }), Action::None);
    assert_eq!(lc.phase(), Phase::TornDown);
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::Activate);
    assert!(lc.is_running());
}

#[test]
fn navigating_away_tears_down_and_back_restarts() {
    let mut lc = route_aware();
    lc.on(Signal::Ready { home: true });
    // #/home -> #/docs
    assert_eq!(lc.on(Signal::Navigated { home: false }), Action::Teardown);
    assert_eq!(lc.phase(), Phase::TornDown);
    // #/docs -> #/api: nothing to tear down twice
    assert_eq!(lc.on(Signal::Navigated { home: false }), Action::None);
    // back to #/
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::Activate);
    // #/ -> #/home stays running
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::None);
    assert!(lc.is_running());
}

#[test]
fn navigation_before_ready_is_ignored() {
    let mut lc = route_aware();
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::None);
    assert_eq!(lc.phase(), Phase::Uninitialized);
}

#[test]
fn unload_tears_down_only_when_running() {
    let mut lc = route_aware();
    assert_eq!(lc.on(Signal::Unload), Action::None);
    assert_eq!(lc.phase(), Phase::TornDown);

    let mut lc = generic();
    lc.on(Signal::Ready { home: false });
    assert_eq!(lc.on(Signal::Unload), Action::Teardown);
    assert_eq!(lc.on(Signal::Unload), Action::None);
}

#[test]
fn generic_ignores_routes() {
    let mut lc = generic();
    assert_eq!(lc.on(Signal::Ready { home: false }), Action::Activate);
    assert_eq!(lc.on(Signal::Navigated { home: false }), Action::None);
    assert!(lc.is_running());
}

#[test]
fn failed_activation_leaves_it_torn_down() {
    let mut lc = generic();
    lc.on(Signal::Ready { home: true });
    assert_eq!(lc.on(Signal::Failed), Action::None);
    assert_eq!(lc.phase(), Phase::TornDown);
    // An explicit start tries again
    assert_eq!(lc.on(Signal::Ready { home: true }), Action::Activate);
}

#[test]
fn ready_while_running_is_a_no_op() {
    let mut lc = route_aware();
    lc.on(Signal::Ready { home: true });
    assert_eq!(lc.on(Signal::Ready { home: true }), Action::None);
    assert_eq!(lc.on(Signal::Ready { home: false }), Action::None);
}

#[test]
fn variant_presets_match_their_behaviour() {
    let generic = EffectConfig::generic();
    assert_eq!(generic.variant, Variant::Generic);
    assert!(!generic.variant.follows_route());
    assert!(!generic.variant.creates_container());
    assert!(generic.variant.tracks_pointer());
    assert!(generic.pads.terminal.is_none());

    let route = EffectConfig::route_aware();
    assert!(route.variant.follows_route());
    assert!(route.variant.creates_container());
    assert!(route.variant.defers_start());
    assert!(route.pads.terminal.is_some());
}

#[test]
fn compiled_preset_follows_feature() {
    let expected = if cfg!(feature = "generic") {
        Variant::Generic
    } else {
        Variant::RouteAware
    };
    assert_eq!(EffectConfig::compiled().variant, expected);
}

#[test]
fn navigation_after_unload_does_not_restart() {
    let mut lc = route_aware();
    lc.on(Signal::Ready { home: true });
    assert_eq!(lc.on(Signal::Unload), Action::Teardown);
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::None);
    assert_eq!(lc.phase(), Phase::TornDown);
    // An explicit start clears the stop
    assert_eq!(lc.on(Signal::Ready { home: true }), Action::Activate);
    assert_eq!(lc.on(Signal::Navigated { home: false }), Action::Teardown);
    assert_eq!(lc.on(Signal::Navigated { home: true }), Action::Activate);
}
