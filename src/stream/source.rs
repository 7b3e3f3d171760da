//! Media stream acquisition and the stream handle.
//!
//! A [`MediaSource`] hands out [`MediaStream`]s matching a set of
//! constraints. The stream exclusively owns its hardware tracks; dropping
//! or stopping it releases the hardware.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::frame::VideoFrame;

/// Errors that can occur acquiring or reading a stream.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("no camera device matched the constraints: {0}")]
    NoDevice(String),
    #[error("camera or microphone permission denied")]
    PermissionDenied,
    #[error("failed to open stream: {0}")]
    OpenFailed(String),
    #[error("no live video track in the stream")]
    NoVideoTrack,
    #[error("failed to read frame: {0}")]
    FrameFailed(String),
}

/// Constraints for stream acquisition.
///
/// Mirrors what the platform media layer accepts: an audio flag plus a
/// facing-mode string for video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConstraints {
    /// Request an audio track alongside video.
    pub audio: bool,
    /// Platform facing-mode value selecting the camera.
    pub facing_mode: String,
}

/// Kind of a media track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Microphone input.
    Audio,
    /// Camera input.
    Video,
}

/// Supplies the current video frame for a live video track.
pub trait FrameProvider: Send + Sync {
    /// Returns the most recent frame.
    fn current_frame(&self) -> Result<VideoFrame, StreamError>;
}

/// One hardware track within a stream.
pub struct MediaTrack {
    kind: TrackKind,
    label: String,
    live: bool,
    provider: Option<Arc<dyn FrameProvider>>,
}

impl MediaTrack {
    /// Creates an audio track.
    pub fn audio(label: impl Into<String>) -> Self {
        Self {
            kind: TrackKind::Audio,
            label: label.into(),
            live: true,
            provider: None,
        }
    }

    /// Creates a video track backed by a frame provider.
    pub fn video(label: impl Into<String>, provider: Arc<dyn FrameProvider>) -> Self {
        Self {
            kind: TrackKind::Video,
            label: label.into(),
            live: true,
            provider: Some(provider),
        }
    }

    /// Returns the track kind.
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Returns the track label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the track is still live.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Stops the track, releasing its hardware.
    pub fn stop(&mut self) {
        if self.live {
            self.live = false;
            // Dropping the provider releases the device handle.
            self.provider = None;
            tracing::debug!(label = %self.label, "track stopped");
        }
    }
}

impl std::fmt::Debug for MediaTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaTrack")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("live", &self.live)
            .finish()
    }
}

/// An acquired media stream, exclusively owned by one component instance.
#[derive(Debug)]
pub struct MediaStream {
    tracks: Vec<MediaTrack>,
}

impl MediaStream {
    /// Creates a stream from its tracks.
    pub fn new(tracks: Vec<MediaTrack>) -> Self {
        Self { tracks }
    }

    /// Returns the tracks in the stream.
    pub fn tracks(&self) -> &[MediaTrack] {
        &self.tracks
    }

    /// Pulls the current frame from the first live video track.
    pub fn current_frame(&self) -> Result<VideoFrame, StreamError> {
        let track = self
            .tracks
            .iter()
            .find(|t| t.kind == TrackKind::Video && t.live)
            .ok_or(StreamError::NoVideoTrack)?;
        match &track.provider {
            Some(provider) => provider.current_frame(),
            None => Err(StreamError::NoVideoTrack),
        }
    }

    /// Stops every track, releasing all hardware handles.
    pub fn stop_all(&mut self) {
        for track in &mut self.tracks {
            track.stop();
        }
        tracing::info!(tracks = self.tracks.len(), "media stream released");
    }

    /// Whether any track is still live.
    pub fn is_live(&self) -> bool {
        self.tracks.iter().any(|t| t.live)
    }
}

/// Acquires media streams by constraint.
///
/// The single asynchronous entry point of the component; implementations
/// cover the platform media layer, the mock, and the optional direct
/// camera backend.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Acquires a stream matching the constraints.
    ///
    /// Fails when no device matches or permission is refused.
    async fn acquire(&self, constraints: &StreamConstraints) -> Result<MediaStream, StreamError>;
}
