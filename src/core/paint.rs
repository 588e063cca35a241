//! Frame composition on top of a minimal 2D drawing surface.
//!
//! The browser implementation wraps `CanvasRenderingContext2d`; keeping the
//! sequence here lets it run against any `Painter`.

use super::config::EffectConfig;
use super::field::CircuitField;
use super::particle::Particle;
use super::trace::Trace;
use glam::Vec2;

/// Drawing operations the effect needs from a 2D canvas.
pub trait Painter {
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_alpha(&mut self, alpha: f64);
    /// A blur of 0 disables the shadow.
    fn set_shadow(&mut self, blur: f64, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_polyline(&mut self, points: &[Vec2]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f64);
    fn stroke_circle(&mut self, center: Vec2, radius: f64);
}

/// Draw one full frame: background, traces, particles (advanced first), links.
/// Alpha and shadow are back at their defaults when this returns.
pub fn paint_frame<P: Painter + ?Sized>(painter: &mut P, field: &mut CircuitField) {
    let bounds = field.bounds();
    painter.set_fill(field.config().background);
    painter.fill_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);

    for trace in field.traces() {
        draw_trace(painter, trace, field.config());
    }

    field.step();
    for particle in field.particles() {
        draw_particle(painter, particle, field.config());
    }

    draw_links(painter, field);
}

pub fn draw_trace<P: Painter + ?Sized>(painter: &mut P, trace: &Trace, config: &EffectConfig) {
    painter.set_stroke(config.trace_color);
    painter.set_line_width(config.trace_line_width);
    painter.stroke_polyline(trace.points());

    painter.set_fill(config.trace_color);
    let points = trace.points();
    let last = points.len().saturating_sub(1);
    for (i, &p) in points.iter().enumerate() {
        match config.pads.terminal {
            Some(terminal) if i == 0 || i == last => {
                painter.fill_circle(p, terminal.radius);
                painter.stroke_circle(p, terminal.ring_radius);
            }
            _ => painter.fill_circle(p, config.pads.radius),
        }
    }
}

pub fn draw_particle<P: Painter + ?Sized>(
    painter: &mut P,
    particle: &Particle,
    config: &EffectConfig,
) {
    if config.particle_glow {
        painter.set_shadow(config.glow_blur, config.particle_color);
    }
    painter.set_fill(config.particle_color);
    painter.set_alpha(particle.opacity as f64);
    painter.fill_circle(particle.position, particle.size as f64);
    painter.set_shadow(0.0, config.particle_color);
    painter.set_alpha(1.0);
}

fn draw_links<P: Painter + ?Sized>(painter: &mut P, field: &CircuitField) {
    let config = field.config();
    painter.set_stroke(config.particle_color);
    painter.set_line_width(config.connection_line_width);
    for link in field.links() {
        painter.set_alpha(link.alpha as f64);
        painter.stroke_line(link.from, link.to);
    }
    painter.set_alpha(1.0);
}
