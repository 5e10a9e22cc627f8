use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid compression quality {0}: expected 0-100")]
    InvalidQuality(u8),
    #[error("Preview canvas of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u32, height: u32 },
}
