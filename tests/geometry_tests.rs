// Host-side tests for trace generation.
// The main crate is wasm-only, so we compile the pure-Rust core directly.

#![allow(dead_code, unused_imports)]
#[path = "../src/core/mod.rs"]
mod circuit;

use circuit::constants::*;
use circuit::direction::{Direction, Edge};
use circuit::geometry::{generate_set, jitter_trace, right_angle_trace, Bounds, TraceStyle};
use rand::prelude::*;

#[test]
fn turns_are_perpendicular_only() {
    for d in Direction::ALL {
        let turns = d.turns();
        assert_ne!(turns[0], turns[1]);
        for t in turns {
            assert_ne!(t, d, "{d:?} may not continue straight");
            assert_ne!(t.unit(), -d.unit(), "{d:?} may not reverse");
            assert_eq!(t.unit().dot(d.unit()), 0.0);
        }
    }
}

#[test]
fn edges_start_heading_inward() {
    assert_eq!(Edge::Top.inward(), Direction::Down);
    assert_eq!(Edge::Right.inward(), Direction::Left);
    assert_eq!(Edge::Bottom.inward(), Direction::Up);
    assert_eq!(Edge::Left.inward(), Direction::Right);
}

#[test]
fn right_angle_traces_stay_rectilinear_and_inside_margin() {
    let mut rng = StdRng::seed_from_u64(7);
    for (w, h) in [(1920.0, 1080.0), (800.0, 600.0), (375.0, 812.0), (200.0, 150.0)] {
        let bounds = Bounds::new(w, h, TRACE_MARGIN);
        for _ in 0..500 {
            let trace = right_angle_trace(bounds, &mut rng);
            assert!(trace.len() >= 2);
            assert!(trace.is_rectilinear(), "diagonal step in {:?}", trace.points());
            for p in trace.points() {
                assert!(p.x >= TRACE_MARGIN && p.x <= w - TRACE_MARGIN, "x={} w={w}", p.x);
                assert!(p.y >= TRACE_MARGIN && p.y <= h - TRACE_MARGIN, "y={} h={h}", p.y);
            }
        }
    }
}

#[test]
fn right_angle_traces_turn_at_every_vertex() {
    let mut rng = StdRng::seed_from_u64(7);
    let viewports = [
        (1920.0, 1080.0),
        (800.0, 600.0),
        (375.0, 812.0),
        (200.0, 150.0),
        (120.0, 600.0),
    ];
    for (w, h) in viewports {
        let bounds = Bounds::new(w, h, TRACE_MARGIN);
        for _ in 0..2000 {
            let trace = right_angle_trace(bounds, &mut rng);
            for p in trace.points().windows(3) {
                let (a, b) = (p[1] - p[0], p[2] - p[1]);
                // Neither straight on nor back along the previous segment
                assert_eq!(a.dot(b), 0.0, "{w}x{h}: {:?}", trace.points());
                assert_ne!(a.perp_dot(b), 0.0, "{w}x{h}: {:?}", trace.points());
            }
        }
    }
}

#[test]
fn right_angle_segments_are_bounded_in_length_and_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let bounds = Bounds::new(1920.0, 1080.0, TRACE_MARGIN);
    for _ in 0..500 {
        let trace = right_angle_trace(bounds, &mut rng);
        assert!(trace.len() <= RIGHT_ANGLE_SEGMENTS_MAX + 1);
        for w in trace.points().windows(2) {
            // Clamping can only shorten a segment
            assert!(w[0].distance(w[1]) < SEGMENT_LENGTH_MAX);
        }
    }
}

#[test]
fn right_angle_trace_starts_on_a_margin_line() {
    let mut rng = StdRng::seed_from_u64(3);
    let (w, h) = (1280.0, 720.0);
    let bounds = Bounds::new(w, h, TRACE_MARGIN);
    for _ in 0..200 {
        let s = right_angle_trace(bounds, &mut rng).first().unwrap();
        let on_edge = s.x == TRACE_MARGIN
            || s.x == w - TRACE_MARGIN
            || s.y == TRACE_MARGIN
            || s.y == h - TRACE_MARGIN;
        assert!(on_edge, "start {s:?} is not on an edge");
    }
}

#[test]
fn tiny_viewport_still_yields_two_points() {
    let mut rng = StdRng::seed_from_u64(5);
    // Both axes narrower than twice the margin collapse to the centre
    let bounds = Bounds::new(60.0, 50.0, TRACE_MARGIN);
    let trace = right_angle_trace(bounds, &mut rng);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.first(), trace.last());
}

#[test]
fn jitter_traces_span_the_primary_axis() {
    let mut rng = StdRng::seed_from_u64(99);
    let bounds = Bounds::new(1000.0, 800.0, 0.0);
    for _ in 0..300 {
        let trace = jitter_trace(bounds, &mut rng);
        let segments = trace.len() - 1;
        assert!((JITTER_SEGMENTS_MIN..=JITTER_SEGMENTS_MAX).contains(&segments));
        let pts = trace.points();
        let horizontal = pts[0].x == 0.0;
        let vertical = pts[0].y == 0.0;
        assert!(horizontal || vertical);
        for w in pts.windows(2) {
            let (along, across) = if horizontal {
                (w[1].x - w[0].x, w[1].y - w[0].y)
            } else {
                (w[1].y - w[0].y, w[1].x - w[0].x)
            };
            let dim = if horizontal { 1000.0 } else { 800.0 };
            let step = dim / segments as f32;
            assert!((along - step).abs() <= JITTER_SPAN / 2.0 + 1e-3);
            assert!(across.abs() <= JITTER_SPAN / 2.0 + 1e-3);
        }
    }
}

#[test]
fn generate_set_uses_requested_style_and_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let bounds = Bounds::new(1024.0, 768.0, TRACE_MARGIN);
    let set = generate_set(TraceStyle::RightAngle, bounds, 9, &mut rng);
    assert_eq!(set.len(), 9);
    assert!(set.iter().all(|t| t.is_rectilinear()));
}

#[test]
fn same_seed_same_traces() {
    let bounds = Bounds::new(1024.0, 768.0, TRACE_MARGIN);
    let a = generate_set(TraceStyle::RightAngle, bounds, 5, &mut StdRng::seed_from_u64(42));
    let b = generate_set(TraceStyle::RightAngle, bounds, 5, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
