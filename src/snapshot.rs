//! Offscreen rasterization of video frames.
//!
//! A [`Snapshot`] is a transient raster surface sized to the preview's
//! on-screen dimensions. The current video frame is drawn (scaled) into
//! it, encoded as PNG, and returned as a data URI. The surface is created
//! per capture and discarded after encoding.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{imageops::FilterType, DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use thiserror::Error;

use crate::stream::VideoFrame;

/// Data URI prefix for the encoded output.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Errors raised while drawing or encoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot surface has zero dimensions")]
    EmptySurface,
    #[error("frame buffer does not match its dimensions")]
    MalformedFrame,
    #[error("failed to encode snapshot: {0}")]
    EncodeFailed(#[from] image::ImageError),
}

/// Transient offscreen raster surface.
#[derive(Debug)]
pub struct Snapshot {
    surface: RgbImage,
}

impl Snapshot {
    /// Creates a surface with the given on-screen dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptySurface);
        }
        Ok(Self {
            surface: RgbImage::new(width, height),
        })
    }

    /// Draws a video frame into the surface, scaling to fill it.
    pub fn draw(&mut self, frame: &VideoFrame) -> Result<(), SnapshotError> {
        let source = RgbImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
            .ok_or(SnapshotError::MalformedFrame)?;
        let (w, h) = self.surface.dimensions();
        self.surface = if source.dimensions() == (w, h) {
            source
        } else {
            image::imageops::resize(&source, w, h, FilterType::Triangle)
        };
        Ok(())
    }

    /// Encodes the surface as PNG, consuming it, and returns a data URI.
    pub fn into_data_uri(self) -> Result<String, SnapshotError> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(self.surface)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", BASE64.encode(&bytes)))
    }
}

/// Rasterizes a frame at the given surface dimensions to a PNG data URI.
pub fn rasterize(frame: &VideoFrame, width: u32, height: u32) -> Result<String, SnapshotError> {
    let mut snapshot = Snapshot::new(width, height)?;
    snapshot.draw(frame)?;
    snapshot.into_data_uri()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frame(width: u32, height: u32) -> VideoFrame {
        let pixels = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        VideoFrame::new(pixels, width, height, 1)
    }

    #[test]
    fn test_rasterize_produces_png_data_uri() {
        let uri = rasterize(&test_frame(32, 24), 32, 24).unwrap();
        assert!(uri.starts_with(PNG_DATA_URI_PREFIX));
        assert!(uri.len() > PNG_DATA_URI_PREFIX.len());
    }

    #[test]
    fn test_rasterize_scales_to_surface() {
        // Frame larger than the preview surface; output must decode back
        // to the surface dimensions.
        let uri = rasterize(&test_frame(64, 48), 16, 12).unwrap();
        let encoded = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
        let bytes = BASE64.decode(encoded).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 12);
    }

    #[test]
    fn test_zero_surface_rejected() {
        assert!(matches!(
            Snapshot::new(0, 10),
            Err(SnapshotError::EmptySurface)
        ));
    }

    #[test]
    fn test_malformed_frame_rejected() {
        let bad = VideoFrame::new(vec![0u8; 7], 32, 24, 1);
        let mut snapshot = Snapshot::new(32, 24).unwrap();
        assert!(matches!(
            snapshot.draw(&bad),
            Err(SnapshotError::MalformedFrame)
        ));
    }
}
