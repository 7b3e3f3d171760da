//! Mock media source generating synthetic frames.
//!
//! Used by tests and the demo binary in place of real camera hardware.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::frame::VideoFrame;
use super::source::{
    FrameProvider, MediaSource, MediaStream, MediaTrack, StreamConstraints, StreamError,
};

/// Synthetic frame provider producing a deterministic gradient pattern.
///
/// Pixel values depend only on position and sequence number, so tests can
/// rely on stable output. The release flag, when set, flips on drop so
/// tests can observe hardware release timing.
pub struct PatternProvider {
    width: u32,
    height: u32,
    sequence: AtomicU64,
    released: Option<Arc<AtomicBool>>,
}

impl PatternProvider {
    /// Creates a provider for the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sequence: AtomicU64::new(0),
            released: None,
        }
    }

    /// Attaches a flag that is set when the provider is dropped.
    pub fn with_release_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.released = Some(flag);
        self
    }
}

impl FrameProvider for PatternProvider {
    fn current_frame(&self) -> Result<VideoFrame, StreamError> {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let pixel_count = (self.width as usize) * (self.height as usize);
        let mut pixels = Vec::with_capacity(pixel_count * 3);
        for i in 0..pixel_count {
            let v = ((i as u64 ^ sequence) % 256) as u8;
            pixels.extend_from_slice(&[v, v.wrapping_add(64), v.wrapping_add(128)]);
        }
        Ok(VideoFrame::new(pixels, self.width, self.height, sequence))
    }
}

impl Drop for PatternProvider {
    fn drop(&mut self) {
        if let Some(flag) = &self.released {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

/// Mock media source for tests and the demo.
pub struct MockMediaSource {
    width: u32,
    height: u32,
    fail: bool,
    delay: Option<Duration>,
    release_flag: Option<Arc<AtomicBool>>,
}

impl Default for MockMediaSource {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fail: false,
            delay: None,
            release_flag: None,
        }
    }
}

impl MockMediaSource {
    /// Creates a source producing 640x480 synthetic frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with specific frame dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Creates a source that fails every acquisition.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Delays acquisition, for exercising teardown of in-flight requests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Attaches a flag set when the video track's device handle is dropped.
    pub fn with_release_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.release_flag = Some(flag);
        self
    }
}

#[async_trait]
impl MediaSource for MockMediaSource {
    async fn acquire(&self, constraints: &StreamConstraints) -> Result<MediaStream, StreamError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(StreamError::NoDevice(format!(
                "no camera for facing mode {:?}",
                constraints.facing_mode
            )));
        }

        let mut provider = PatternProvider::new(self.width, self.height);
        if let Some(flag) = &self.release_flag {
            provider = provider.with_release_flag(Arc::clone(flag));
        }

        let mut tracks = Vec::with_capacity(2);
        if constraints.audio {
            tracks.push(MediaTrack::audio("mock microphone"));
        }
        tracks.push(MediaTrack::video(
            format!("mock camera ({})", constraints.facing_mode),
            Arc::new(provider),
        ));
        tracing::info!(
            facing = %constraints.facing_mode,
            audio = constraints.audio,
            "MockMediaSource acquired stream"
        );
        Ok(MediaStream::new(tracks))
    }
}
