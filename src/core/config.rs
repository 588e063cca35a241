//! Compiled-in presets for the two flavours of the effect.
//!
//! Nothing here is read at runtime from the page; the `generic` cargo feature
//! decides which preset [`EffectConfig::compiled`] returns.

use super::constants::*;
use super::geometry::TraceStyle;

/// Which flavour of the background is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Jitter traces, fixed trace count, expects the host page to provide the
    /// container and stays up until the page unloads.
    Generic,
    /// Right-angle traces sized to the viewport, only active on the home route
    /// and created/destroyed as the hash route changes.
    RouteAware,
}

impl Variant {
    pub fn compiled() -> Self {
        if cfg!(feature = "generic") {
            Variant::Generic
        } else {
            Variant::RouteAware
        }
    }

    #[inline]
    pub fn follows_route(self) -> bool {
        matches!(self, Variant::RouteAware)
    }

    #[inline]
    pub fn creates_container(self) -> bool {
        matches!(self, Variant::RouteAware)
    }

    #[inline]
    pub fn defers_start(self) -> bool {
        matches!(self, Variant::RouteAware)
    }

    #[inline]
    pub fn tracks_pointer(self) -> bool {
        matches!(self, Variant::Generic)
    }
}

/// How many traces to generate for a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceBudget {
    Fixed(usize),
    /// `min(max, floor((width + height) / pixels_per_trace))`, never below one.
    Viewport { pixels_per_trace: f32, max: usize },
}

impl TraceBudget {
    pub fn count(self, width: f32, height: f32) -> usize {
        match self {
            TraceBudget::Fixed(n) => n.max(1),
            TraceBudget::Viewport {
                pixels_per_trace,
                max,
            } => {
                let by_area = ((width + height) / pixels_per_trace).floor().max(0.0) as usize;
                by_area.min(max).max(1)
            }
        }
    }
}

/// Pads drawn on trace vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadStyle {
    pub radius: f64,
    /// Larger pad plus an outer ring on the first and last vertex.
    pub terminal: Option<TerminalPads>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalPads {
    pub radius: f64,
    pub ring_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub variant: Variant,
    pub style: TraceStyle,
    pub traces: TraceBudget,
    pub margin: f32,

    pub particle_count: usize,
    pub particle_speed: f32,
    pub particle_size: f32,
    pub particle_color: &'static str,
    pub particle_glow: bool,
    pub glow_blur: f64,

    pub trace_color: &'static str,
    pub trace_line_width: f64,
    pub pads: PadStyle,

    pub connection_distance: f32,
    pub connection_alpha: f32,
    pub connection_line_width: f64,

    pub background: &'static str,
}

impl EffectConfig {
    pub fn generic() -> Self {
        Self {
            variant: Variant::Generic,
            style: TraceStyle::Jitter,
            traces: TraceBudget::Fixed(GENERIC_TRACE_COUNT),
            margin: 0.0,
            particle_count: GENERIC_PARTICLE_COUNT,
            particle_speed: GENERIC_PARTICLE_SPEED,
            particle_size: PARTICLE_SIZE,
            particle_color: PARTICLE_COLOR,
            particle_glow: true,
            glow_blur: GLOW_BLUR,
            trace_color: GENERIC_TRACE_COLOR,
            trace_line_width: TRACE_LINE_WIDTH,
            pads: PadStyle {
                radius: PAD_RADIUS,
                terminal: None,
            },
            connection_distance: GENERIC_CONNECTION_DISTANCE,
            connection_alpha: GENERIC_CONNECTION_ALPHA,
            connection_line_width: CONNECTION_LINE_WIDTH,
            background: BACKGROUND_COLOR,
        }
    }

    pub fn route_aware() -> Self {
        Self {
            variant: Variant::RouteAware,
            style: TraceStyle::RightAngle,
            traces: TraceBudget::Viewport {
                pixels_per_trace: TRACE_PIXELS_PER_TRACE,
                max: TRACE_COUNT_MAX,
            },
            margin: TRACE_MARGIN,
            particle_count: ROUTE_PARTICLE_COUNT,
            particle_speed: ROUTE_PARTICLE_SPEED,
            particle_size: PARTICLE_SIZE,
            particle_color: PARTICLE_COLOR,
            particle_glow: true,
            glow_blur: GLOW_BLUR,
            trace_color: ROUTE_TRACE_COLOR,
            trace_line_width: TRACE_LINE_WIDTH,
            pads: PadStyle {
                radius: PAD_RADIUS,
                terminal: Some(TerminalPads {
                    radius: TERMINAL_PAD_RADIUS,
                    ring_radius: TERMINAL_RING_RADIUS,
                }),
            },
            connection_distance: ROUTE_CONNECTION_DISTANCE,
            connection_alpha: ROUTE_CONNECTION_ALPHA,
            connection_line_width: CONNECTION_LINE_WIDTH,
            background: BACKGROUND_COLOR,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Generic => Self::generic(),
            Variant::RouteAware => Self::route_aware(),
        }
    }

    /// Preset selected by the `generic` cargo feature.
    pub fn compiled() -> Self {
        Self::for_variant(Variant::compiled())
    }
}
