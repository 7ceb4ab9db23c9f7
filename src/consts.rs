//! Shared constants for the state containers.

// ── Canvas defaults ─────────────────────────────────────────────

/// Background color a fresh canvas starts with.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1A1A1A";

/// Zoom factor for an unzoomed view (1.0 = no zoom).
pub const DEFAULT_ZOOM: f64 = 1.0;
