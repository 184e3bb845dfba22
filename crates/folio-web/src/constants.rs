// DOM hooks the host page provides

pub const CANVAS_ID: &str = "folio-canvas";
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_BAR_ID: &str = "loading-progress";
pub const LOADING_LABEL_ID: &str = "loading-label";

pub const FOCUSED_BODY_CLASS: &str = "focused";
pub const ACTIVE_MARKER_SELECTOR: &str = "[data-item].active";
pub const ACTIVE_CLASS: &str = "active";

// Frame delta clamp so a backgrounded tab does not jump the easing
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
