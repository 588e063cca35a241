// Page integration constants used by the browser layer.

// DOM identifiers
pub const CONTAINER_ID: &str = "circuit-canvas-container";
pub const CANVAS_ID: &str = "circuit-canvas";

// Inline styles for elements created by the effect
pub const CONTAINER_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;z-index:-1;pointer-events:none;overflow:hidden";
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%";

// Route-aware start is deferred so the docs framework can finish mounting
pub const DEFERRED_START_MS: i32 = 100;
