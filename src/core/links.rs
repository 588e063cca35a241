//! Proximity connections between particles.

use glam::Vec2;

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Linear falloff: `(1 - distance / threshold) * base_alpha`, `None` when the
/// pair is at or beyond the threshold.
#[inline]
pub fn connection_alpha(distance: f32, threshold: f32, base_alpha: f32) -> Option<f32> {
    if threshold <= 0.0 || distance >= threshold {
        return None;
    }
    Some((1.0 - distance / threshold) * base_alpha)
}

/// Every unordered pair closer than `threshold`.
///
/// Quadratic in the number of positions; fine for the compiled-in particle
/// counts (tens), not for thousands.
pub fn links(positions: &[Vec2], threshold: f32, base_alpha: f32) -> Vec<Link> {
    let mut out = Vec::new();
    for (i, &a) in positions.iter().enumerate() {
        for &b in &positions[i + 1..] {
            if let Some(alpha) = connection_alpha(a.distance(b), threshold, base_alpha) {
                out.push(Link {
                    from: a,
                    to: b,
                    alpha,
                });
            }
        }
    }
    out
}
