// Shared effect tuning constants. Both variants draw from these; the presets in
// `config.rs` pick which ones apply.

// Particle motion: progress advances by speed / PROGRESS_SCALE each frame
pub const PROGRESS_SCALE: f32 = 1000.0;

// Palette
pub const BACKGROUND_COLOR: &str = "#0a0e17";
pub const PARTICLE_COLOR: &str = "#00d9ff";
pub const GENERIC_TRACE_COLOR: &str = "rgba(0, 217, 255, 0.2)";
pub const ROUTE_TRACE_COLOR: &str = "rgba(0, 217, 255, 0.15)";

// Glow
pub const GLOW_BLUR: f64 = 10.0;

// Jitter traces (generic variant)
pub const GENERIC_TRACE_COUNT: usize = 8;
pub const JITTER_SEGMENTS_MIN: usize = 2;
pub const JITTER_SEGMENTS_MAX: usize = 4;
pub const JITTER_SPAN: f32 = 100.0; // full width of the (rand - 0.5) offset
pub const JITTER_DRIFT_CHANCE: f64 = 0.3; // chance a segment shifts on the cross axis

// Right-angle traces (route-aware variant)
pub const TRACE_MARGIN: f32 = 40.0;
pub const RIGHT_ANGLE_SEGMENTS_MIN: usize = 3;
pub const RIGHT_ANGLE_SEGMENTS_MAX: usize = 6;
pub const SEGMENT_LENGTH_MIN: f32 = 80.0;
pub const SEGMENT_LENGTH_MAX: f32 = 230.0; // exclusive
pub const TRACE_PIXELS_PER_TRACE: f32 = 150.0; // (width + height) / this
pub const TRACE_COUNT_MAX: usize = 12;

// Pads
pub const PAD_RADIUS: f64 = 2.0;
pub const TERMINAL_PAD_RADIUS: f64 = 3.5;
pub const TERMINAL_RING_RADIUS: f64 = 6.0;

// Particles
pub const GENERIC_PARTICLE_COUNT: usize = 60;
pub const ROUTE_PARTICLE_COUNT: usize = 50;
pub const GENERIC_PARTICLE_SPEED: f32 = 0.5;
pub const ROUTE_PARTICLE_SPEED: f32 = 0.8;
pub const PARTICLE_SIZE: f32 = 2.0;

// Connections between nearby particles
pub const GENERIC_CONNECTION_DISTANCE: f32 = 150.0;
pub const GENERIC_CONNECTION_ALPHA: f32 = 0.15;
pub const ROUTE_CONNECTION_DISTANCE: f32 = 120.0;
pub const ROUTE_CONNECTION_ALPHA: f32 = 0.2;
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;
pub const TRACE_LINE_WIDTH: f64 = 1.0;
