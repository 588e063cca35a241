//! Trace polylines and progress sampling along them.

use glam::Vec2;

/// Ordered polyline; insertion order is path order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    points: Vec<Vec2>,
}

impl Trace {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Position at normalized progress `t` (clamped to `[0, 1]`).
    ///
    /// Progress is spread evenly over segments, not over arc length, so a
    /// particle moves faster on long segments than on short ones.
    /// `t = 0` yields the first point and `t = 1` the last point exactly.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let n = self.points.len();
        match n {
            0 => return Vec2::ZERO,
            1 => return self.points[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (n - 1) as f32;
        let segment = (scaled.floor() as usize).min(n - 2);
        let frac = scaled - segment as f32;
        let a = self.points[segment];
        let b = self.points[segment + 1];
        // Weighted form keeps both endpoints exact at frac 0 and 1
        a * (1.0 - frac) + b * frac
    }

    /// True when every consecutive pair differs on exactly one axis.
    pub fn is_rectilinear(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| (w[0].x != w[1].x) != (w[0].y != w[1].y))
    }
}
