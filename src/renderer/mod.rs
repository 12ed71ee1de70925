//! Rendering module
//!
//! A small capability trait over 2D drawing plus the stateless per-frame draw
//! pass. The browser backend wraps a Canvas2D context; tests and headless
//! runs use the recording/null surfaces.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::draw_frame;
pub use surface::{NullSurface, Surface, TextAlign};
