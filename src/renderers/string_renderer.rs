use alloc::string::String;

use crate::{error::RenderError, render::{Glyph, Renderer}};

/// Collects drawn text into a `String`.
#[derive(Default, Clone, Debug)]
pub struct StringRenderer {
    pub output: String,
}

impl StringRenderer {
    /// Creates a renderer whose output has room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        StringRenderer { output: String::with_capacity(capacity) }
    }
}

impl Renderer for StringRenderer {
    fn draw(&mut self, glyph: Glyph) -> Result<(), RenderError> {
        glyph.with_text(|text| self.output.push_str(text));
        Ok(())
    }
}
