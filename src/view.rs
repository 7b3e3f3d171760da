//! The camera view component.
//!
//! Owns the preview surface and the acquired media stream, exposes the
//! still-capture operation, and delegates capability queries to the
//! platform camera manager. Lifecycle follows the hosting UI: `mount`
//! starts stream acquisition, `unmount` releases the hardware.

use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::{self, CameraProps, PropValue, PropsPatch, ResolvedProps};
use crate::config::constants::MODE_VIDEO;
use crate::platform::{CameraManager, ManagerError, PermissionStatus, PlatformInfo};
use crate::snapshot::{self, SnapshotError};
use crate::stream::{MediaSource, MediaStream, StreamConstraints, StreamError};

/// Alert title shown when stream acquisition fails.
const ACQUIRE_ALERT_TITLE: &str = "Camera Error";
/// Alert body shown when stream acquisition fails.
const ACQUIRE_ALERT_BODY: &str = "We were unable to find your camera, or permissions were denied. \
     If this continues to occur, you may have to clear your cache and try again.";

/// Errors surfaced by the still-capture operation.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no active stream; the view is not mounted or acquisition failed")]
    NoStream,
    #[error(transparent)]
    Stream(#[from] StreamError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// On-screen dimensions of the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Container width in pixels.
    pub width: u32,
    /// Container height in pixels.
    pub height: u32,
}

/// Sink for user-facing alerts with a single acknowledgement action.
pub trait AlertSink: Send + Sync {
    /// Raises an alert. Returns once the user would have acknowledged it.
    fn alert(&self, title: &str, message: &str);
}

/// Default alert sink that writes alerts to the log.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn alert(&self, title: &str, message: &str) {
        tracing::error!(title, message, "user alert");
    }
}

/// Caller-supplied overrides for a single capture.
///
/// Absent fields fall back to the view's resolved props.
#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    /// Override the audio flag.
    pub audio: Option<bool>,
    /// Override the capture mode.
    pub mode: Option<PropValue>,
    /// Override the shutter-sound flag.
    pub play_sound_on_capture: Option<bool>,
    /// Override the capture target.
    pub target: Option<PropValue>,
    /// Override the capture quality.
    pub quality: Option<PropValue>,
    /// Override the facing direction.
    pub facing: Option<PropValue>,
    /// Title attached to the captured media.
    pub title: Option<String>,
    /// Description attached to the captured media.
    pub description: Option<String>,
    /// Override the mirror flag.
    pub mirror_image: Option<bool>,
    /// Override the orientation-fix flag.
    pub fix_orientation: Option<bool>,
    /// Requested video duration in seconds. Negative means unbounded.
    pub total_seconds: Option<f64>,
    /// Video time scale in frames per second.
    pub preferred_time_scale: Option<u32>,
}

/// Effective capture parameters after merging options onto resolved props.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// Capture audio alongside video.
    pub audio: bool,
    /// Effective capture mode.
    pub mode: PropValue,
    /// Play a shutter sound.
    pub play_sound_on_capture: bool,
    /// Delivery target for the captured media.
    pub target: PropValue,
    /// Capture quality.
    pub quality: PropValue,
    /// Facing direction.
    pub facing: PropValue,
    /// Media title. Empty unless overridden.
    pub title: String,
    /// Media description. Empty unless overridden.
    pub description: String,
    /// Mirror the captured still.
    pub mirror_image: bool,
    /// Compensate for device orientation.
    pub fix_orientation: bool,
    /// Video duration in seconds; -1 is the unbounded sentinel.
    /// Unset until the video branch resolves it.
    pub total_seconds: Option<f64>,
    /// Video time scale; unset until the video branch resolves it.
    pub preferred_time_scale: Option<u32>,
}

impl CaptureRequest {
    /// Merges caller overrides onto the capture-relevant subset of the
    /// resolved props.
    pub fn merge(resolved: &ResolvedProps, options: CaptureOptions) -> Self {
        Self {
            audio: options.audio.unwrap_or(resolved.capture_audio),
            mode: options.mode.unwrap_or_else(|| resolved.capture_mode.clone()),
            play_sound_on_capture: options
                .play_sound_on_capture
                .unwrap_or(resolved.play_sound_on_capture),
            target: options
                .target
                .unwrap_or_else(|| resolved.capture_target.clone()),
            quality: options
                .quality
                .unwrap_or_else(|| resolved.capture_quality.clone()),
            facing: options.facing.unwrap_or_else(|| resolved.facing.clone()),
            title: options.title.unwrap_or_default(),
            description: options.description.unwrap_or_default(),
            mirror_image: options.mirror_image.unwrap_or(resolved.mirror_image),
            fix_orientation: options.fix_orientation.unwrap_or(resolved.fix_orientation),
            total_seconds: options.total_seconds,
            preferred_time_scale: options.preferred_time_scale,
        }
    }

    /// Whether the effective mode selects the video branch.
    pub fn is_video(&self) -> bool {
        self.mode.as_str() == Some(MODE_VIDEO)
    }

    /// Resolves video timing: a non-negative requested duration is kept,
    /// anything else becomes the -1 unbounded sentinel; the time scale
    /// defaults to 30.
    pub fn resolve_video_timing(&mut self) {
        self.total_seconds = Some(self.total_seconds.filter(|s| *s > -1.0).unwrap_or(-1.0));
        self.preferred_time_scale = Some(self.preferred_time_scale.unwrap_or(30));
    }
}

/// Result of a successful capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutput {
    /// Encoded image as a PNG data URI.
    pub media_uri: String,
}

/// Result of a stop-capture request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopResponse {
    /// A recording was in progress and the manager stopped it.
    Stopped(String),
    /// Nothing was recording; the call was a no-op.
    NotRecording,
}

impl StopResponse {
    /// Human-readable outcome message.
    pub fn message(&self) -> &str {
        match self {
            StopResponse::Stopped(msg) => msg,
            StopResponse::NotRecording => "Not Recording.",
        }
    }
}

/// Preview surface bound to the hosting container.
#[derive(Debug, Default)]
struct Preview {
    width: u32,
    height: u32,
    attached: bool,
}

impl Preview {
    fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.height;
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}

/// State shared with the acquisition task.
#[derive(Default)]
struct ViewShared {
    is_authorized: bool,
    is_recording: bool,
    mounted: bool,
    preview: Preview,
    stream: Option<MediaStream>,
}

/// The camera view component.
///
/// Construction wires in the platform description, the camera manager
/// collaborator, and a media source; the hosting UI drives `mount` and
/// `unmount` around its own lifecycle.
pub struct CameraView {
    props: CameraProps,
    resolved: ResolvedProps,
    platform: PlatformInfo,
    manager: Arc<dyn CameraManager>,
    source: Arc<dyn MediaSource>,
    alerts: Arc<dyn AlertSink>,
    shared: Arc<Mutex<ViewShared>>,
    acquire_task: Option<JoinHandle<()>>,
}

impl CameraView {
    /// Creates an unmounted view.
    pub fn new(
        props: CameraProps,
        platform: PlatformInfo,
        manager: Arc<dyn CameraManager>,
        source: Arc<dyn MediaSource>,
    ) -> Self {
        let resolved = config::resolve(&props);
        Self {
            props,
            resolved,
            platform,
            manager,
            source,
            alerts: Arc::new(LogAlertSink),
            shared: Arc::new(Mutex::new(ViewShared::default())),
            acquire_task: None,
        }
    }

    /// Replaces the alert sink.
    pub fn with_alert_sink(mut self, alerts: Arc<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Returns the resolved props currently in effect.
    pub fn resolved(&self) -> &ResolvedProps {
        &self.resolved
    }

    /// Whether camera access is considered authorized.
    pub fn is_authorized(&self) -> bool {
        self.shared.lock().is_authorized
    }

    /// Whether a capture is in progress.
    pub fn is_recording(&self) -> bool {
        self.shared.lock().is_recording
    }

    /// Whether a live stream is currently held.
    pub fn has_stream(&self) -> bool {
        self.shared.lock().stream.is_some()
    }

    /// Current preview dimensions.
    pub fn preview_size(&self) -> (u32, u32) {
        let shared = self.shared.lock();
        (shared.preview.width, shared.preview.height)
    }

    /// Whether the preview is bound to a media stream.
    pub fn preview_attached(&self) -> bool {
        self.shared.lock().preview.attached
    }

    /// Applies a prop patch to the live view and re-resolves.
    pub fn set_native_props(&mut self, patch: PropsPatch) {
        self.props.apply(patch);
        self.resolved = config::resolve(&self.props);
    }

    /// Mounts the view into a container of the given size.
    ///
    /// Sizes the preview to the container and spawns stream acquisition
    /// in the background; the preview binds to the stream when it
    /// arrives. Acquisition failure raises a user-facing alert and is not
    /// reported to the owner. Must be called within a Tokio runtime.
    pub fn mount(&mut self, viewport: Viewport) {
        {
            let mut shared = self.shared.lock();
            shared.mounted = true;
            shared.is_authorized = true;
            shared.preview.resize(viewport);
            shared.preview.attached = false;
        }

        let constraints = StreamConstraints {
            audio: true,
            facing_mode: self.resolved.facing_mode().to_string(),
        };
        tracing::info!(
            platform = self.platform.label,
            facing = %constraints.facing_mode,
            width = viewport.width,
            height = viewport.height,
            "mounting camera view"
        );

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let alerts = Arc::clone(&self.alerts);
        self.acquire_task = Some(tokio::spawn(async move {
            match source.acquire(&constraints).await {
                Ok(stream) => {
                    let mut shared = shared.lock();
                    shared.preview.attached = true;
                    shared.stream = Some(stream);
                    tracing::info!("preview bound to media stream");
                }
                Err(err) => {
                    tracing::warn!(%err, "stream acquisition failed");
                    alerts.alert(ACQUIRE_ALERT_TITLE, ACQUIRE_ALERT_BODY);
                }
            }
        }));
    }

    /// Waits for an in-flight stream acquisition to settle.
    pub async fn acquired(&mut self) {
        if let Some(task) = self.acquire_task.take() {
            // Join failure means the task was aborted; nothing to surface.
            let _ = task.await;
        }
    }

    /// Captures a still image of the current video frame.
    ///
    /// Overrides are merged onto the resolved props. A video-mode request
    /// resolves its duration and time scale and flips the recording flag,
    /// but no recording backend exists; the still path executes either
    /// way and resets the flag on completion.
    pub async fn capture(&self, options: CaptureOptions) -> Result<CaptureOutput, CaptureError> {
        let mut request = CaptureRequest::merge(&self.resolved, options);
        if request.is_video() {
            request.resolve_video_timing();
            self.shared.lock().is_recording = true;
            tracing::debug!(
                total_seconds = ?request.total_seconds,
                preferred_time_scale = ?request.preferred_time_scale,
                "video mode requested; no recording backend, taking a still"
            );
        }

        let outcome: Result<CaptureOutput, CaptureError> = (|| {
            let (frame, width, height) = {
                let shared = self.shared.lock();
                let stream = shared.stream.as_ref().ok_or(CaptureError::NoStream)?;
                let frame = stream.current_frame()?;
                (frame, shared.preview.width, shared.preview.height)
            };
            let media_uri = snapshot::rasterize(&frame, width, height)?;
            Ok(CaptureOutput { media_uri })
        })();

        self.shared.lock().is_recording = false;
        if let Ok(ref output) = outcome {
            tracing::debug!(bytes = output.media_uri.len(), "still captured");
        }
        outcome
    }

    /// Stops an in-progress capture.
    ///
    /// Idempotent: when nothing is recording, resolves immediately with
    /// [`StopResponse::NotRecording`] and touches no state.
    pub async fn stop_capture(&self) -> Result<StopResponse, ManagerError> {
        let was_recording = {
            let mut shared = self.shared.lock();
            let was = shared.is_recording;
            shared.is_recording = false;
            was
        };
        if was_recording {
            self.manager.stop_capture().await.map(StopResponse::Stopped)
        } else {
            Ok(StopResponse::NotRecording)
        }
    }

    /// Unmounts the view, stopping any capture and releasing the stream.
    ///
    /// An in-flight acquisition is aborted so a late completion cannot
    /// touch the unmounted view. Stop-capture runs before track release
    /// so the platform recording is never orphaned by a dead stream.
    pub async fn unmount(&mut self) {
        if let Some(task) = self.acquire_task.take() {
            task.abort();
        }

        if self.is_recording() {
            if let Err(err) = self.stop_capture().await {
                tracing::warn!(%err, "stop capture during unmount failed");
            }
        }

        let mut shared = self.shared.lock();
        shared.preview.detach();
        if let Some(mut stream) = shared.stream.take() {
            stream.stop_all();
        }
        shared.mounted = false;
        tracing::info!("camera view unmounted");
    }

    /// Field of view of the active camera, in degrees.
    pub async fn fov(&self) -> Result<f64, ManagerError> {
        self.manager.fov().await
    }

    /// Prompts the user for camera and microphone access.
    pub async fn request_permissions(&self) -> Result<PermissionStatus, ManagerError> {
        self.manager.request_permissions().await
    }

    /// Queries permission state.
    ///
    /// Platforms without a native permission check are treated as always
    /// authorized; the manager is not consulted there.
    pub async fn check_permissions(&self) -> Result<PermissionStatus, ManagerError> {
        if !self.platform.native_permission_check {
            return Ok(PermissionStatus::Granted);
        }
        self.manager.check_permissions().await
    }

    /// Whether a flash is available.
    ///
    /// Platforms that key flash hardware by camera module get the
    /// resolved facing value; others are queried without one.
    pub async fn has_flash(&self) -> Result<bool, ManagerError> {
        if self.platform.flash_query_requires_facing {
            self.manager
                .has_flash(Some(self.resolved.facing_mode()))
                .await
        } else {
            self.manager.has_flash(None).await
        }
    }

    #[cfg(test)]
    fn set_recording(&self, value: bool) {
        self.shared.lock().is_recording = value;
    }
}

impl std::fmt::Debug for CameraView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.shared.lock();
        f.debug_struct("CameraView")
            .field("platform", &self.platform.label)
            .field("mounted", &shared.mounted)
            .field("is_authorized", &shared.is_authorized)
            .field("is_recording", &shared.is_recording)
            .field("has_stream", &shared.stream.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockCameraManager;
    use crate::snapshot::PNG_DATA_URI_PREFIX;
    use crate::stream::MockMediaSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    const VIEWPORT: Viewport = Viewport {
        width: 320,
        height: 240,
    };

    fn make_view(
        manager: Arc<MockCameraManager>,
        source: Arc<MockMediaSource>,
        platform: PlatformInfo,
    ) -> CameraView {
        CameraView::new(CameraProps::default(), platform, manager, source)
    }

    #[tokio::test]
    async fn test_mount_acquires_stream_and_authorizes() {
        let mut view = make_view(
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        assert!(!view.has_stream());
        assert!(!view.preview_attached());
        view.mount(VIEWPORT);
        view.acquired().await;
        assert!(view.is_authorized());
        assert!(view.has_stream());
        assert!(view.preview_attached());
        assert_eq!(view.preview_size(), (320, 240));
    }

    #[tokio::test]
    async fn test_capture_default_returns_png_data_uri() {
        let mut view = make_view(
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        view.mount(VIEWPORT);
        view.acquired().await;

        let output = view.capture(CaptureOptions::default()).await.unwrap();
        assert!(output.media_uri.starts_with(PNG_DATA_URI_PREFIX));
        assert!(output.media_uri.len() > PNG_DATA_URI_PREFIX.len());
        assert!(!view.is_recording());
    }

    #[tokio::test]
    async fn test_capture_without_stream_fails() {
        let view = make_view(
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        assert!(matches!(
            view.capture(CaptureOptions::default()).await,
            Err(CaptureError::NoStream)
        ));
    }

    #[tokio::test]
    async fn test_video_mode_takes_still_and_resets_recording() {
        let mut view = make_view(
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        view.mount(VIEWPORT);
        view.acquired().await;

        let output = view
            .capture(CaptureOptions {
                mode: Some(PropValue::name("video")),
                total_seconds: Some(-1.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(output.media_uri.starts_with(PNG_DATA_URI_PREFIX));
        assert!(!view.is_recording());
    }

    #[test]
    fn test_video_timing_defaults() {
        let resolved = config::resolve(&CameraProps::default());
        let mut request = CaptureRequest::merge(
            &resolved,
            CaptureOptions {
                mode: Some(PropValue::name("video")),
                total_seconds: Some(-1.0),
                ..Default::default()
            },
        );
        assert!(request.is_video());
        request.resolve_video_timing();
        assert_eq!(request.total_seconds, Some(-1.0));
        assert_eq!(request.preferred_time_scale, Some(30));
    }

    #[test]
    fn test_video_timing_keeps_requested_duration() {
        let resolved = config::resolve(&CameraProps::default());
        let mut request = CaptureRequest::merge(
            &resolved,
            CaptureOptions {
                mode: Some(PropValue::name("video")),
                total_seconds: Some(12.0),
                preferred_time_scale: Some(60),
                ..Default::default()
            },
        );
        request.resolve_video_timing();
        assert_eq!(request.total_seconds, Some(12.0));
        assert_eq!(request.preferred_time_scale, Some(60));
    }

    #[test]
    fn test_merge_fills_empty_title_and_description() {
        let resolved = config::resolve(&CameraProps::default());
        let request = CaptureRequest::merge(&resolved, CaptureOptions::default());
        assert_eq!(request.title, "");
        assert_eq!(request.description, "");
        assert!(!request.audio);
        assert!(request.play_sound_on_capture);
        assert!(!request.is_video());
    }

    #[tokio::test]
    async fn test_stop_capture_idle_is_noop() {
        let manager = Arc::new(MockCameraManager::new());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        let response = view.stop_capture().await.unwrap();
        assert_eq!(response, StopResponse::NotRecording);
        assert_eq!(response.message(), "Not Recording.");
        assert_eq!(manager.stop_calls(), 0);
    }

    #[tokio::test]
    async fn test_stop_capture_while_recording_delegates() {
        let manager = Arc::new(MockCameraManager::new());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        view.set_recording(true);
        let response = view.stop_capture().await.unwrap();
        assert_eq!(response, StopResponse::Stopped("stopped".to_string()));
        assert_eq!(manager.stop_calls(), 1);
        assert!(!view.is_recording());
    }

    /// Manager that records whether the stream's device handle was
    /// already released when stop-capture arrived.
    struct OrderProbe {
        released: Arc<AtomicBool>,
        released_at_stop: Arc<AtomicBool>,
        stop_called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CameraManager for OrderProbe {
        async fn request_permissions(&self) -> Result<PermissionStatus, ManagerError> {
            Ok(PermissionStatus::Granted)
        }
        async fn check_permissions(&self) -> Result<PermissionStatus, ManagerError> {
            Ok(PermissionStatus::Granted)
        }
        async fn has_flash(&self, _facing: Option<&str>) -> Result<bool, ManagerError> {
            Ok(false)
        }
        async fn fov(&self) -> Result<f64, ManagerError> {
            Ok(0.0)
        }
        async fn stop_capture(&self) -> Result<String, ManagerError> {
            self.stop_called.store(true, Ordering::SeqCst);
            self.released_at_stop
                .store(self.released.load(Ordering::SeqCst), Ordering::SeqCst);
            Ok("stopped".to_string())
        }
    }

    #[tokio::test]
    async fn test_unmount_stops_capture_before_releasing_tracks() {
        let released = Arc::new(AtomicBool::new(false));
        let released_at_stop = Arc::new(AtomicBool::new(false));
        let stop_called = Arc::new(AtomicBool::new(false));
        let manager = Arc::new(OrderProbe {
            released: Arc::clone(&released),
            released_at_stop: Arc::clone(&released_at_stop),
            stop_called: Arc::clone(&stop_called),
        });
        let source =
            Arc::new(MockMediaSource::new().with_release_flag(Arc::clone(&released)));

        let mut view = CameraView::new(
            CameraProps::default(),
            PlatformInfo::web(),
            manager,
            source,
        );
        view.mount(VIEWPORT);
        view.acquired().await;
        view.set_recording(true);

        view.unmount().await;

        // Stop reached the manager, tracks were released, and they were
        // still live when stop arrived.
        assert!(stop_called.load(Ordering::SeqCst));
        assert!(released.load(Ordering::SeqCst));
        assert!(!released_at_stop.load(Ordering::SeqCst));
        assert!(!view.has_stream());
        assert!(!view.is_recording());
    }

    #[tokio::test]
    async fn test_unmount_aborts_inflight_acquisition() {
        let source = Arc::new(MockMediaSource::new().with_delay(Duration::from_millis(300)));
        let mut view = CameraView::new(
            CameraProps::default(),
            PlatformInfo::web(),
            Arc::new(MockCameraManager::new()),
            source,
        );
        view.mount(VIEWPORT);
        view.unmount().await;

        // Give the aborted task time to have completed, had it survived.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!view.has_stream());
    }

    /// Alert sink that records everything raised through it.
    #[derive(Default)]
    struct RecordingAlerts {
        seen: Mutex<Vec<(String, String)>>,
    }

    impl AlertSink for RecordingAlerts {
        fn alert(&self, title: &str, message: &str) {
            self.seen.lock().push((title.to_string(), message.to_string()));
        }
    }

    #[tokio::test]
    async fn test_acquisition_failure_alerts_and_leaves_no_stream() {
        let alerts = Arc::new(RecordingAlerts::default());
        let mut view = CameraView::new(
            CameraProps::default(),
            PlatformInfo::web(),
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::failing()),
        )
        .with_alert_sink(Arc::clone(&alerts) as Arc<dyn AlertSink>);

        view.mount(VIEWPORT);
        view.acquired().await;

        let seen = alerts.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, ACQUIRE_ALERT_TITLE);
        drop(seen);
        assert!(!view.has_stream());
        // Authorization is still marked; only the stream is missing.
        assert!(view.is_authorized());
    }

    #[tokio::test]
    async fn test_check_permissions_short_circuits_without_native_check() {
        let manager = Arc::new(MockCameraManager::denying());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        assert_eq!(
            view.check_permissions().await.unwrap(),
            PermissionStatus::Granted
        );
        assert!(!manager.permission_checked());
    }

    #[tokio::test]
    async fn test_check_permissions_delegates_with_native_check() {
        let manager = Arc::new(MockCameraManager::denying());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::android(),
        );
        assert_eq!(
            view.check_permissions().await.unwrap(),
            PermissionStatus::Denied
        );
        assert!(manager.permission_checked());
    }

    #[tokio::test]
    async fn test_has_flash_passes_facing_when_required() {
        let manager = Arc::new(MockCameraManager::new());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::android(),
        );
        assert!(view.has_flash().await.unwrap());
        // Default facing is "back", which resolves to "user".
        assert_eq!(manager.flash_facing_seen(), Some("user".to_string()));
    }

    #[tokio::test]
    async fn test_has_flash_omits_facing_otherwise() {
        let manager = Arc::new(MockCameraManager::new());
        let view = make_view(
            Arc::clone(&manager),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        assert!(view.has_flash().await.unwrap());
        assert_eq!(manager.flash_facing_seen(), None);
    }

    #[tokio::test]
    async fn test_set_native_props_reresolves() {
        let mut view = make_view(
            Arc::new(MockCameraManager::new()),
            Arc::new(MockMediaSource::new()),
            PlatformInfo::web(),
        );
        assert_eq!(view.resolved().facing_mode(), "user");
        view.set_native_props(PropsPatch {
            facing: Some(PropValue::name("front")),
            ..Default::default()
        });
        assert_eq!(view.resolved().facing_mode(), "environment");
    }
}
