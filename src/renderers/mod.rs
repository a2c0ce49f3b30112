//! [Renderer](crate::render::Renderer) implementations for the different ways rendered text can
//! be consumed.

mod buffer_renderer;
mod measure_renderer;
mod string_renderer;

pub use buffer_renderer::BufferRenderer;
pub use measure_renderer::MeasureRenderer;
pub use string_renderer::StringRenderer;
