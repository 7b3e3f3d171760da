//! Direct camera backend built on `nokhwa`.
//!
//! Only compiled with the `camera` feature. Provides a real
//! [`MediaSource`] for environments where the component talks to local
//! camera hardware instead of a platform media layer. Audio capture is
//! not wired here; acquisition yields a video-only stream.

use async_trait::async_trait;
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
    Camera,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::frame::VideoFrame;
use super::source::{
    FrameProvider, MediaSource, MediaStream, MediaTrack, StreamConstraints, StreamError,
};

/// Frame provider backed by an open `nokhwa` camera.
struct CameraProvider {
    camera: Mutex<Camera>,
    sequence: AtomicU64,
}

impl FrameProvider for CameraProvider {
    fn current_frame(&self) -> Result<VideoFrame, StreamError> {
        let mut camera = self.camera.lock();
        let buffer = camera
            .frame()
            .map_err(|e| StreamError::FrameFailed(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| StreamError::FrameFailed(e.to_string()))?;
        let (width, height) = (decoded.width(), decoded.height());
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(VideoFrame::new(decoded.into_raw(), width, height, sequence))
    }
}

impl Drop for CameraProvider {
    fn drop(&mut self) {
        let mut camera = self.camera.lock();
        if let Err(e) = camera.stop_stream() {
            tracing::warn!("failed to stop camera stream: {e}");
        }
    }
}

/// Media source acquiring streams from local camera hardware.
pub struct CameraSource {
    index: u32,
}

impl CameraSource {
    /// Creates a source for the given camera device index.
    pub fn new(index: u32) -> Self {
        Self { index }
    }
}

impl Default for CameraSource {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl MediaSource for CameraSource {
    async fn acquire(&self, constraints: &StreamConstraints) -> Result<MediaStream, StreamError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
            .map_err(|e| StreamError::NoDevice(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| StreamError::OpenFailed(e.to_string()))?;

        tracing::info!(
            index = self.index,
            facing = %constraints.facing_mode,
            "camera stream opened"
        );

        let provider = CameraProvider {
            camera: Mutex::new(camera),
            sequence: AtomicU64::new(0),
        };
        let track = MediaTrack::video(format!("camera {}", self.index), Arc::new(provider));
        Ok(MediaStream::new(vec![track]))
    }
}
