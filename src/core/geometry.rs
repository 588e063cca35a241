//! Procedural trace generation.

use super::constants::*;
use super::direction::{Direction, Edge};
use super::trace::Trace;
use glam::Vec2;
use rand::prelude::*;

/// Which generator builds the traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceStyle {
    /// Roughly straight runs across the viewport with random cross-axis drift.
    Jitter,
    /// PCB style: inward from an edge, 90 degree turns only, kept inside the margin.
    RightAngle,
}

/// Area traces are generated for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Clamp into `[margin, dim - margin]` on both axes. An axis narrower
    /// than twice the margin collapses to its midpoint.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(p.x, self.width, self.margin),
            clamp_axis(p.y, self.height, self.margin),
        )
    }
}

#[inline]
fn clamp_axis(v: f32, dim: f32, margin: f32) -> f32 {
    let lo = margin;
    let hi = dim - margin;
    if hi <= lo {
        dim * 0.5
    } else {
        v.clamp(lo, hi)
    }
}

// Uniform in [lo, hi); degenerate ranges return `lo`.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn generate<R: Rng + ?Sized>(style: TraceStyle, bounds: Bounds, rng: &mut R) -> Trace {
    match style {
        TraceStyle::Jitter => jitter_trace(bounds, rng),
        TraceStyle::RightAngle => right_angle_trace(bounds, rng),
    }
}

/// Fresh trace set; the whole set is replaced on every resize.
pub fn generate_set<R: Rng + ?Sized>(
    style: TraceStyle,
    bounds: Bounds,
    count: usize,
    rng: &mut R,
) -> Vec<Trace> {
    (0..count).map(|_| generate(style, bounds, rng)).collect()
}

/// Runs from one viewport side to the other in roughly equal steps. The cross
/// axis drifts on some segments; nothing is clamped.
pub fn jitter_trace<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Trace {
    let segments = rng.gen_range(JITTER_SEGMENTS_MIN..=JITTER_SEGMENTS_MAX);
    let horizontal = rng.gen_bool(0.5);
    let (along_dim, across_dim) = if horizontal {
        (bounds.width, bounds.height)
    } else {
        (bounds.height, bounds.width)
    };
    let step = along_dim / segments as f32;

    let mut along = 0.0_f32;
    let mut across = rng.gen::<f32>() * across_dim;
    let mut points = Vec::with_capacity(segments + 1);
    let to_point = |along: f32, across: f32| {
        if horizontal {
            Vec2::new(along, across)
        } else {
            Vec2::new(across, along)
        }
    };
    points.push(to_point(along, across));
    for _ in 0..segments {
        along += step + (rng.gen::<f32>() - 0.5) * JITTER_SPAN;
        if rng.gen_bool(JITTER_DRIFT_CHANCE) {
            across += (rng.gen::<f32>() - 0.5) * JITTER_SPAN;
        }
        points.push(to_point(along, across));
    }
    Trace::new(points)
}

/// Starts on a random edge heading inward and turns 90 degrees after every
/// segment. Every point stays inside the margin and consecutive points differ
/// on exactly one axis.
pub fn right_angle_trace<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Trace {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let m = bounds.margin;
    let start = match edge {
        Edge::Top => Vec2::new(uniform(rng, m, bounds.width - m), m),
        Edge::Right => Vec2::new(bounds.width - m, uniform(rng, m, bounds.height - m)),
        Edge::Bottom => Vec2::new(uniform(rng, m, bounds.width - m), bounds.height - m),
        Edge::Left => Vec2::new(m, uniform(rng, m, bounds.height - m)),
    };
    let start = bounds.clamp(start);

    let segments = rng.gen_range(RIGHT_ANGLE_SEGMENTS_MIN..=RIGHT_ANGLE_SEGMENTS_MAX);
    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);

    let mut current = start;
    // Heading of the last emitted segment; every later one turns 90 degrees from it
    let mut last: Option<Direction> = None;
    for _ in 0..segments {
        let length = rng.gen_range(SEGMENT_LENGTH_MIN..SEGMENT_LENGTH_MAX);
        let mut turns = last.unwrap_or(edge.inward()).turns();
        if rng.gen_bool(0.5) {
            turns.swap(0, 1);
        }
        let first = match last {
            None => edge.inward(),
            Some(_) => turns[0],
        };
        // A move pinned against the margin is no move; take the other turn
        let step = [first, turns[0], turns[1]].into_iter().find_map(|d| {
            let next = bounds.clamp(current + d.unit() * length);
            (next != current).then_some((d, next))
        });
        match step {
            Some((d, next)) => {
                points.push(next);
                current = next;
                last = Some(d);
            }
            // The cross axis is collapsed: no turn can move
            None => break,
        }
    }

    if points.len() < 2 {
        // Both axes collapsed: nothing can move, repeat the point
        points.push(current);
    }
    Trace::new(points)
}
