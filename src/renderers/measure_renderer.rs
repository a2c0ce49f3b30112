use crate::{error::RenderError, render::{Glyph, Renderer}};

/// Counts the bytes which would be drawn, without drawing anything.
#[derive(Default, Clone, Debug)]
pub struct MeasureRenderer {
    pub size: usize,
}

impl Renderer for MeasureRenderer {
    fn draw(&mut self, glyph: Glyph) -> Result<(), RenderError> {
        self.size += glyph.width();
        Ok(())
    }
}
