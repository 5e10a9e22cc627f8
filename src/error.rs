use dashgrid_layout::LayoutError;
use dashgrid_preview::PreviewError;
use thiserror::Error;

/// A comprehensive error type for building, encoding and previewing dashboards.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Preview failed: {0}")]
    Preview(#[from] PreviewError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
