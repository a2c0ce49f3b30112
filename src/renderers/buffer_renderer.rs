use crate::{error::RenderError, render::{Glyph, Renderer}};

/// Copies drawn text into a caller-provided byte buffer, failing rather than writing past its end.
#[derive(Debug)]
pub struct BufferRenderer<'b> {
    buffer: &'b mut [u8],
    written: usize,
}

impl<'b> BufferRenderer<'b> {
    pub fn new(buffer: &'b mut [u8]) -> Self {
        BufferRenderer { buffer, written: 0 }
    }

    /// The number of bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// The total size of the buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn put_str(&mut self, text: &str) -> Result<(), RenderError> {
        let end = self.written + text.len();
        let capacity = self.buffer.len();
        let target = self.buffer.get_mut(self.written..end)
            .ok_or_else(|| RenderError::buffer_too_small(capacity, end))?;

        target.copy_from_slice(text.as_bytes());
        self.written = end;
        Ok(())
    }
}

impl Renderer for BufferRenderer<'_> {
    fn draw(&mut self, glyph: Glyph) -> Result<(), RenderError> {
        glyph.with_text(|text| self.put_str(text))
    }
}
