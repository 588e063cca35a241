//! The trace set and the particles riding it.

use super::config::EffectConfig;
use super::geometry::{generate_set, Bounds};
use super::links::{links, Link};
use super::particle::Particle;
use super::trace::Trace;
use glam::Vec2;
use rand::prelude::*;

/// Owns every trace and particle of one activation.
pub struct CircuitField {
    config: EffectConfig,
    bounds: Bounds,
    traces: Vec<Trace>,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl CircuitField {
    /// Generate traces for the viewport, then bind each particle to a random trace.
    pub fn new(config: EffectConfig, width: f32, height: f32, mut rng: StdRng) -> Self {
        let bounds = Bounds::new(width.max(1.0), height.max(1.0), config.margin);
        let traces = Self::build_traces(&config, bounds, &mut rng);
        let particles = (0..config.particle_count)
            .map(|_| {
                let trace = rng.gen_range(0..traces.len());
                let mut p =
                    Particle::spawn(&mut rng, trace, config.particle_speed, config.particle_size);
                p.resolve(&traces);
                p
            })
            .collect();
        Self {
            config,
            bounds,
            traces,
            particles,
            rng,
        }
    }

    pub fn with_seed(config: EffectConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::new(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn build_traces(config: &EffectConfig, bounds: Bounds, rng: &mut StdRng) -> Vec<Trace> {
        let count = config.traces.count(bounds.width, bounds.height);
        generate_set(config.style, bounds, count, rng)
    }

    /// Replace the whole trace set for a new viewport and repoint every
    /// particle at a member of it. Particles keep speed, size and opacity.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width.max(1.0), height.max(1.0), self.config.margin);
        self.traces = Self::build_traces(&self.config, self.bounds, &mut self.rng);
        let count = self.traces.len();
        for p in &mut self.particles {
            p.retarget(self.rng.gen_range(0..count));
            p.resolve(&self.traces);
        }
        log::debug!(
            "[circuit] resized to {:.0}x{:.0}: {} traces",
            self.bounds.width,
            self.bounds.height,
            count
        );
    }

    /// Advance every particle one frame.
    pub fn step(&mut self) {
        let traces = &self.traces;
        for p in &mut self.particles {
            p.update(traces);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let positions: Vec<Vec2> = self.particles.iter().map(|p| p.position).collect();
        links(
            &positions,
            self.config.connection_distance,
            self.config.connection_alpha,
        )
    }

    #[inline]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
