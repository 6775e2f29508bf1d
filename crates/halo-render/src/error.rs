//! Render error types.

/// Errors produced while rendering or exporting a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested resolution has a zero dimension.
    #[error("resolution {width}x{height} has no pixels")]
    EmptyResolution {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The frame was cancelled before all rows finished.
    #[error("frame cancelled after {completed} of {total} rows")]
    Cancelled {
        /// Rows shaded before cancellation was observed.
        completed: u32,
        /// Rows in the frame.
        total: u32,
    },

    /// Every worker thread has exited.
    #[error("render workers disconnected")]
    WorkersGone,

    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),

    /// Writing the image to disk failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
