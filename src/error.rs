use alloc::{format, string::String, fmt};

pub trait Error : alloc::fmt::Display + alloc::fmt::Debug {}

/// Raised when a node tree does not satisfy a structural limit, such as a maximum depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeError(pub String);

impl NodeError {
    pub fn too_deep(limit: usize) -> Self {
        NodeError(format!("expression is deeper than the limit of {} levels", limit))
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node error: {}", self.0)
    }
}
impl Error for NodeError {}

/// Raised when rendered output does not fit into the space given to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(pub String);

impl RenderError {
    /// `needed` is the size the buffer would need to be to hold the text drawn so far, which may
    /// be less than the full rendering.
    pub fn buffer_too_small(capacity: usize, needed: usize) -> Self {
        RenderError(format!("buffer of {} bytes is too small, needed at least {}", capacity, needed))
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "render error: {}", self.0)
    }
}
impl Error for RenderError {}
