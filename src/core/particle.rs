use super::constants::PROGRESS_SCALE;
use super::trace::Trace;
use glam::Vec2;
use rand::prelude::*;

/// An "electron" riding one trace.
///
/// `trace` indexes into the trace set owned by the field. Several particles may
/// share a trace, and the index is repointed whenever the set is regenerated.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub progress: f32,
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
    pub trace: usize,
    pub position: Vec2,
}

impl Particle {
    /// Random spawn scaled from the base speed and size.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        trace: usize,
        base_speed: f32,
        base_size: f32,
    ) -> Self {
        Self {
            progress: rng.gen::<f32>(),
            speed: base_speed * (0.5 + rng.gen::<f32>() * 0.5),
            size: base_size * (0.5 + rng.gen::<f32>()),
            // (0.5, 1.0]; never fully transparent
            opacity: 1.0 - rng.gen::<f32>() * 0.5,
            trace,
            position: Vec2::ZERO,
        }
    }

    /// Advance one frame. Returns true when progress wrapped back to the start.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.progress += self.speed / PROGRESS_SCALE;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            true
        } else {
            false
        }
    }

    /// Recompute `position` from the current progress.
    #[inline]
    pub fn resolve(&mut self, traces: &[Trace]) {
        if let Some(trace) = traces.get(self.trace) {
            self.position = trace.point_at(self.progress);
        }
    }

    pub fn update(&mut self, traces: &[Trace]) {
        self.advance();
        self.resolve(traces);
    }

    #[inline]
    pub fn retarget(&mut self, trace: usize) {
        self.trace = trace;
    }
}
