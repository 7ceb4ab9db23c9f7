//! Per-canvas view and interaction state.
//!
//! `CanvasState` is the full record describing one canvas: its pixel
//! dimensions, pan/zoom view transform, pointer tracking, the active input
//! mode, the externally owned 2D rendering context, and the open-ended
//! per-piece settings bag. `CanvasStore` is the shared observable handle the
//! rendering and input layers go through; it never interprets the record,
//! only publishes it.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DEFAULT_BACKGROUND_COLOR, DEFAULT_ZOOM};
use crate::store::{Store, Subscription};

/// Unique identifier for a drawn piece.
pub type PieceId = Uuid;

/// How pointer and keyboard input is currently interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Freehand drawing (default).
    #[default]
    Draw,
    /// Select and move existing pieces.
    Select,
    /// Pan the view by dragging.
    Pan,
    /// Erase pieces under the pointer.
    Erase,
}

/// View and interaction state for one canvas.
///
/// `mouse_x`/`mouse_y` and their `prev_` counterparts are in canvas space;
/// input handlers sample the pointer on every event and shift the current
/// position into the `prev_` fields themselves. `zoom` must stay positive
/// and `ctx` stays `None` until the UI layer has created the rendering
/// surface — both are caller contracts, not runtime checks.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Current input interpretation mode.
    pub active_mode: Mode,
    /// Whether a pointer button is currently held.
    pub mouse_down: bool,
    /// Pointer x position in canvas space.
    pub mouse_x: f64,
    /// Pointer y position in canvas space.
    pub mouse_y: f64,
    /// Pointer x position at the previous sampled event.
    pub prev_mouse_x: f64,
    /// Pointer y position at the previous sampled event.
    pub prev_mouse_y: f64,
    /// Horizontal view translation offset.
    pub x_pan: f64,
    /// Vertical view translation offset.
    pub y_pan: f64,
    /// Handle to the external drawing surface, owned by the UI layer.
    pub ctx: Option<CanvasRenderingContext2d>,
    /// Canvas background color as a CSS color string.
    pub background_color: String,
    /// Per-piece configuration, opaque to this layer.
    pub piece_settings: HashMap<PieceId, Value>,
    /// View scale factor (1.0 = no zoom). Must stay positive.
    pub zoom: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            active_mode: Mode::default(),
            mouse_down: false,
            mouse_x: 0.0,
            mouse_y: 0.0,
            prev_mouse_x: 0.0,
            prev_mouse_y: 0.0,
            x_pan: 0.0,
            y_pan: 0.0,
            ctx: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_owned(),
            piece_settings: HashMap::new(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Shared observable handle to one canvas's state.
///
/// Construct one per canvas and clone the handle into whichever components
/// need it; clones share the same record and subscriber registry.
#[derive(Clone)]
pub struct CanvasStore {
    store: Store<CanvasState>,
}

impl CanvasStore {
    /// Create a store seeded with the default record.
    #[must_use]
    pub fn new() -> Self {
        Self { store: Store::new(CanvasState::default()) }
    }

    /// Register an observer; invoked immediately with the current record and
    /// again after every update.
    pub fn subscribe(
        &self,
        observer: impl FnMut(&CanvasState) + 'static,
    ) -> Subscription<CanvasState> {
        self.store.subscribe(observer)
    }

    /// Replace the whole record and notify subscribers.
    pub fn set(&self, state: CanvasState) {
        self.store.set(state);
    }

    /// Mutate the record in place and notify subscribers.
    pub fn update(&self, mutator: impl FnOnce(&mut CanvasState)) {
        self.store.update(mutator);
    }

    /// A clone of the current record, without subscribing.
    #[must_use]
    pub fn snapshot(&self) -> CanvasState {
        self.store.snapshot()
    }

    /// Record the externally created 2D rendering context.
    ///
    /// The store keeps only a reference to the surface; the UI layer owns
    /// its lifecycle.
    pub fn attach_context(&self, ctx: CanvasRenderingContext2d) {
        self.store.update(|state| state.ctx = Some(ctx));
    }

    /// The settings payload for one piece, if any has been stored.
    #[must_use]
    pub fn piece_setting(&self, id: &PieceId) -> Option<Value> {
        self.store.with(|state| state.piece_settings.get(id).cloned())
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new()
    }
}
