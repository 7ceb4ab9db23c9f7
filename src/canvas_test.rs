#![allow(clippy::float_cmp)]

use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

// --- fresh defaults ---

#[test]
fn default_dimensions_are_zero() {
    let state = CanvasState::default();
    assert_eq!(state.width, 0);
    assert_eq!(state.height, 0);
}

#[test]
fn default_mode_is_draw() {
    let state = CanvasState::default();
    assert_eq!(state.active_mode, Mode::Draw);
}

#[test]
fn default_mouse_released() {
    let state = CanvasState::default();
    assert!(!state.mouse_down);
}

#[test]
fn default_pointer_at_origin() {
    let state = CanvasState::default();
    assert_eq!(state.mouse_x, 0.0);
    assert_eq!(state.mouse_y, 0.0);
    assert_eq!(state.prev_mouse_x, 0.0);
    assert_eq!(state.prev_mouse_y, 0.0);
}

#[test]
fn default_pan_is_zero() {
    let state = CanvasState::default();
    assert_eq!(state.x_pan, 0.0);
    assert_eq!(state.y_pan, 0.0);
}

#[test]
fn default_context_absent() {
    let state = CanvasState::default();
    assert!(state.ctx.is_none());
}

#[test]
fn default_background_color() {
    let state = CanvasState::default();
    assert_eq!(state.background_color, "#1A1A1A");
}

#[test]
fn default_piece_settings_empty() {
    let state = CanvasState::default();
    assert!(state.piece_settings.is_empty());
}

#[test]
fn default_zoom_is_one() {
    let state = CanvasState::default();
    assert_eq!(state.zoom, 1.0);
}

// --- Mode ---

#[test]
fn mode_serializes_lowercase() {
    let value = serde_json::to_value(Mode::Draw).unwrap();
    assert_eq!(value, json!("draw"));
}

#[test]
fn mode_deserializes_lowercase() {
    let mode: Mode = serde_json::from_value(json!("select")).unwrap();
    assert_eq!(mode, Mode::Select);
}

// --- CanvasStore ---

#[test]
fn store_starts_with_default_record() {
    let store = CanvasStore::new();
    let state = store.snapshot();
    assert_eq!(state.width, 0);
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.active_mode, Mode::Draw);
    assert!(state.ctx.is_none());
}

#[test]
fn zoom_then_mouse_updates_accumulate() {
    let store = CanvasStore::new();
    store.update(|state| state.zoom = 2.5);
    store.update(|state| state.mouse_x = 100.0);

    let state = store.snapshot();
    assert_eq!(state.zoom, 2.5);
    assert_eq!(state.mouse_x, 100.0);
    // Everything else stays at its default.
    assert_eq!(state.width, 0);
    assert_eq!(state.height, 0);
    assert_eq!(state.active_mode, Mode::Draw);
    assert!(!state.mouse_down);
    assert_eq!(state.mouse_y, 0.0);
    assert_eq!(state.prev_mouse_x, 0.0);
    assert_eq!(state.x_pan, 0.0);
    assert_eq!(state.y_pan, 0.0);
    assert!(state.ctx.is_none());
    assert_eq!(state.background_color, "#1A1A1A");
    assert!(state.piece_settings.is_empty());
}

#[test]
fn pointer_sample_shifts_previous_position() {
    let store = CanvasStore::new();
    store.update(|state| {
        state.mouse_down = true;
        state.mouse_x = 10.0;
        state.mouse_y = 20.0;
    });
    store.update(|state| {
        state.prev_mouse_x = state.mouse_x;
        state.prev_mouse_y = state.mouse_y;
        state.mouse_x = 15.0;
        state.mouse_y = 26.0;
    });

    let state = store.snapshot();
    assert!(state.mouse_down);
    assert_eq!(state.prev_mouse_x, 10.0);
    assert_eq!(state.prev_mouse_y, 20.0);
    assert_eq!(state.mouse_x, 15.0);
    assert_eq!(state.mouse_y, 26.0);
}

#[test]
fn set_replaces_whole_record() {
    let store = CanvasStore::new();
    store.set(CanvasState {
        width: 800,
        height: 600,
        active_mode: Mode::Pan,
        ..CanvasState::default()
    });

    let state = store.snapshot();
    assert_eq!(state.width, 800);
    assert_eq!(state.height, 600);
    assert_eq!(state.active_mode, Mode::Pan);
    assert_eq!(state.zoom, 1.0);
}

#[test]
fn subscriber_receives_post_update_record() {
    let store = CanvasStore::new();
    let zooms = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&zooms);
    let sub = store.subscribe(move |state| sink.borrow_mut().push(state.zoom));
    store.update(|state| state.zoom = 3.0);
    assert_eq!(*zooms.borrow(), vec![1.0, 3.0]);
    sub.unsubscribe();
}

// --- piece settings ---

#[test]
fn piece_setting_returns_stored_payload() {
    let store = CanvasStore::new();
    let id = PieceId::new_v4();
    store.update(|state| {
        state
            .piece_settings
            .insert(id, json!({ "stroke": "#FFFFFF", "stroke_width": 3 }));
    });

    let payload = store.piece_setting(&id);
    assert_eq!(payload, Some(json!({ "stroke": "#FFFFFF", "stroke_width": 3 })));
}

#[test]
fn piece_setting_unknown_id_is_none() {
    let store = CanvasStore::new();
    assert_eq!(store.piece_setting(&PieceId::new_v4()), None);
}
