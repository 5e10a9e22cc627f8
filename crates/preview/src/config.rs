use crate::error::PreviewError;
use serde::Deserialize;

/// Output encoding of a preview image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Jpeg,
    /// Lossless; ignores `quality`.
    Png,
}

/// Pixel geometry and encoding settings for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Width of one top-level grid column in pixels. Defaults to `200`.
    pub cell_width: u32,
    /// Height of one top-level grid row in pixels. Defaults to `150`.
    pub cell_height: u32,
    /// Gap around and between top-level cells. Defaults to `10`.
    pub margin: u32,
    /// JPEG quality on a 0-100 scale, where 0 is treated as 1. Defaults to `90`.
    pub quality: u8,
    pub format: ImageFormat,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cell_width: 200,
            cell_height: 150,
            margin: 10,
            quality: 90,
            format: ImageFormat::default(),
        }
    }
}

impl PreviewConfig {
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), PreviewError> {
        if self.quality > 100 {
            return Err(PreviewError::InvalidQuality(self.quality));
        }
        Ok(())
    }

    /// Quality handed to the JPEG encoder, which expects 1-100.
    pub(crate) fn encoder_quality(&self) -> u8 {
        self.quality.clamp(1, 100)
    }
}
