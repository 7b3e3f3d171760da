//! The external camera manager collaborator.
//!
//! Permission checks, flash control, field-of-view queries, and recording
//! stop live in a platform-specific subsystem outside this crate. The
//! trait pins down exactly the calls made against it; the mock stands in
//! for it in tests and the demo.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use thiserror::Error;

/// Errors surfaced by the camera manager.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("operation not supported on this platform: {0}")]
    Unsupported(&'static str),
    #[error("camera manager failure: {0}")]
    Failed(String),
}

/// Outcome of a permission check or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Camera and microphone access granted.
    Granted,
    /// Access denied by the user or platform policy.
    Denied,
}

/// Platform camera subsystem this component delegates to.
#[async_trait]
pub trait CameraManager: Send + Sync {
    /// Prompts the user for camera and microphone access.
    async fn request_permissions(&self) -> Result<PermissionStatus, ManagerError>;

    /// Queries the current permission state without prompting.
    async fn check_permissions(&self) -> Result<PermissionStatus, ManagerError>;

    /// Whether a flash is available, optionally for a specific facing
    /// direction when the platform keys flash hardware by camera module.
    async fn has_flash(&self, facing: Option<&str>) -> Result<bool, ManagerError>;

    /// Field of view of the active camera, in degrees.
    async fn fov(&self) -> Result<f64, ManagerError>;

    /// Stops an in-progress recording.
    async fn stop_capture(&self) -> Result<String, ManagerError>;
}

/// Mock manager for tests and the demo.
///
/// Answers are fixed at construction; calls are counted so tests can
/// assert delegation and ordering behavior.
pub struct MockCameraManager {
    permission: PermissionStatus,
    flash: bool,
    fov_degrees: f64,
    stop_calls: AtomicUsize,
    flash_facing_seen: parking_lot::Mutex<Option<String>>,
    permission_checked: AtomicBool,
}

impl Default for MockCameraManager {
    fn default() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            flash: true,
            fov_degrees: 60.0,
            stop_calls: AtomicUsize::new(0),
            flash_facing_seen: parking_lot::Mutex::new(None),
            permission_checked: AtomicBool::new(false),
        }
    }
}

impl MockCameraManager {
    /// Creates a mock that grants permission and reports a flash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that denies permission.
    pub fn denying() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            ..Self::default()
        }
    }

    /// Number of stop-capture calls made against the manager.
    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    /// The facing value the last flash query carried, if any.
    pub fn flash_facing_seen(&self) -> Option<String> {
        self.flash_facing_seen.lock().clone()
    }

    /// Whether a permission check reached the manager.
    pub fn permission_checked(&self) -> bool {
        self.permission_checked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraManager for MockCameraManager {
    async fn request_permissions(&self) -> Result<PermissionStatus, ManagerError> {
        tracing::debug!("MockCameraManager: permission request");
        Ok(self.permission)
    }

    async fn check_permissions(&self) -> Result<PermissionStatus, ManagerError> {
        self.permission_checked.store(true, Ordering::SeqCst);
        Ok(self.permission)
    }

    async fn has_flash(&self, facing: Option<&str>) -> Result<bool, ManagerError> {
        *self.flash_facing_seen.lock() = facing.map(str::to_string);
        Ok(self.flash)
    }

    async fn fov(&self) -> Result<f64, ManagerError> {
        Ok(self.fov_degrees)
    }

    async fn stop_capture(&self) -> Result<String, ManagerError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("MockCameraManager: stop capture");
        Ok("stopped".to_string())
    }
}
