// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn counts_and_ranges_are_sane() {
    assert!(GENERIC_TRACE_COUNT > 0);
    assert!(TRACE_COUNT_MAX > 0);
    assert!(JITTER_SEGMENTS_MIN >= 1 && JITTER_SEGMENTS_MIN <= JITTER_SEGMENTS_MAX);
    assert!(RIGHT_ANGLE_SEGMENTS_MIN >= 1 && RIGHT_ANGLE_SEGMENTS_MIN <= RIGHT_ANGLE_SEGMENTS_MAX);
    assert!(SEGMENT_LENGTH_MIN > 0.0 && SEGMENT_LENGTH_MIN < SEGMENT_LENGTH_MAX);
    assert!(JITTER_DRIFT_CHANCE > 0.0 && JITTER_DRIFT_CHANCE < 1.0);
    assert!(TRACE_PIXELS_PER_TRACE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn connection_weights_are_translucent() {
    // Links are a faint overlay; full-strength alpha would drown the traces
    assert!(GENERIC_CONNECTION_ALPHA > 0.0 && GENERIC_CONNECTION_ALPHA < 1.0);
    assert!(ROUTE_CONNECTION_ALPHA > 0.0 && ROUTE_CONNECTION_ALPHA < 1.0);
    assert!(GENERIC_CONNECTION_DISTANCE > 0.0);
    assert!(ROUTE_CONNECTION_DISTANCE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_counts_keep_link_pass_small() {
    // The link pass is quadratic in the particle count
    assert!(GENERIC_PARTICLE_COUNT <= 100);
    assert!(ROUTE_PARTICLE_COUNT <= 100);
    assert!(GENERIC_PARTICLE_SPEED > 0.0 && ROUTE_PARTICLE_SPEED > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(PROGRESS_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pads_grow_toward_terminals() {
    assert!(PAD_RADIUS > 0.0);
    assert!(TERMINAL_PAD_RADIUS > PAD_RADIUS);
    assert!(TERMINAL_RING_RADIUS > TERMINAL_PAD_RADIUS);
}

#[test]
fn dom_identifiers_are_distinct() {
    assert_ne!(CONTAINER_ID, CANVAS_ID);
    assert!(!CONTAINER_ID.contains(' ') && !CANVAS_ID.contains(' '));
    assert!(CONTAINER_STYLE.contains("pointer-events:none"));
    assert!(DEFERRED_START_MS > 0);
}
