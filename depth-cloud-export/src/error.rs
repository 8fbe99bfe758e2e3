/// Error types for depth map point cloud export
use thiserror::Error;

/// Result alias used throughout the export pipeline.
pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The configured depth window is empty or inverted.
    #[error("min-depth ({min}) must be less than max-depth ({max})")]
    InvalidDepthRange { min: u16, max: u16 },

    /// The source produced no original/depth image pairs.
    #[error("no depth images found in source")]
    NoDepthSource,

    /// Every sampled point has zero depth, so Z cannot be normalised.
    #[error("maximum sampled depth is zero, cannot normalise Z")]
    DegenerateDepthRange,

    #[error("crop box {x},{y} {width}x{height} does not fit inside {image_width}x{image_height} image")]
    InvalidCrop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("grid buffer holds {actual} values, expected {width}x{height}")]
    GridSize {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Points and colours must stay index-paired through every stage.
    #[error("{points} points paired with {colours} colours")]
    PairingMismatch { points: usize, colours: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("LAS error: {0}")]
    Las(#[from] las::Error),
}
