//! Observable state containers for the drawing client.
//!
//! This crate is compiled to WebAssembly and runs in the browser alongside
//! the rendering and input layers. It holds the two pieces of shared
//! application state — the per-canvas view/interaction record and the global
//! session/layout record — behind a small reactive primitive: components
//! subscribe to a store and are re-invoked synchronously with the full record
//! after every mutation. No rendering, input handling, or persistence lives
//! here; those layers read and write these stores from outside.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Generic observable container and subscription handles |
//! | [`canvas`] | Per-canvas view/interaction state and its store |
//! | [`app`] | Global session and layout state and its store |
//! | [`consts`] | Shared constants (default background color, default zoom) |

pub mod app;
pub mod canvas;
pub mod consts;
pub mod store;
