//! wgpu rendering module
//!
//! The game draws through `platform::Canvas` into a `FrameBuilder`;
//! `RenderState` uploads the result as one triangle list per frame.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::FrameBuilder;
pub use pipeline::{RenderState, Viewport};
pub use vertex::{Color, Vertex, colors};
