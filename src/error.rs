use thiserror::Error;

/// Errors raised by the impact model, chart builder and their loaders
#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("Invalid reference dataset: {0}")]
    InvalidDataset(String),

    #[error("Missing parameter '{parameter}' for indicator '{indicator}'")]
    MissingParameter { indicator: String, parameter: String },

    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    PixelBuffer { width: u32, height: u32, expected: usize, actual: usize },

    #[error("PNG encoding failed: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ImpactResult<T> = std::result::Result<T, ImpactError>;
