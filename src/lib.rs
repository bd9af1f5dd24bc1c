//! Ambient soundscape page: motion seen by the webcam steers the volume of a
//! looping track, stillness fades it out, and an overlay image appears after
//! a period without input.
//!
//! `core` is plain Rust and builds on any target; the browser glue only
//! builds for wasm32.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod camera;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use app::start;
