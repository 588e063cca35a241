pub mod config;
pub mod constants;
pub mod direction;
pub mod field;
pub mod geometry;
pub mod lifecycle;
pub mod links;
pub mod paint;
pub mod particle;
pub mod route;
pub mod trace;

pub use config::{EffectConfig, Variant};
pub use field::CircuitField;
pub use lifecycle::{Action, Lifecycle, Phase, Signal};
pub use paint::{paint_frame, Painter};
pub use route::is_home_route;
