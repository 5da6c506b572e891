//! 2D rendering module
//!
//! `shapes` projects game state to draw commands; `canvas` replays them on a
//! browser `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{DrawCommand, scene};
