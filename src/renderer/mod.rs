//! Vector-line rendering module
//!
//! The game draws through the `Canvas` trait; `LineBatch` tessellates lines
//! into triangles and `RenderState` uploads them with WebGPU.

pub mod batch;
pub mod canvas;
pub mod draw;
pub mod glyphs;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::LineBatch;
pub use canvas::{Canvas, Color};
pub use draw::{Palette, RenderStyle, draw_world};
pub use pipeline::RenderState;
