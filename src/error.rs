use thiserror::Error;

/// Errors raised by graph construction, smoothing and the selection session.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScissorsError {
    #[error("image is not loaded")]
    ImageNotLoaded,

    #[error("invalid smoothing filter: size={size}, sigma={sigma}")]
    InvalidFilter { size: usize, sigma: f64 },

    #[error("pixel buffer holds {actual} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("anchor ({row}, {col}) lies outside the graph")]
    AnchorOutsideGraph { row: usize, col: usize },

    #[error("no anchor has been placed yet")]
    NoActiveAnchor,

    #[error("selection is already closed")]
    SessionClosed,

    #[error("pixel ({row}, {col}) lies outside the image")]
    PixelOutOfBounds { row: usize, col: usize },
}
