//! Platform description and the external camera manager.
//!
//! The component never branches on an OS name. Platform differences are
//! expressed as capability flags on [`PlatformInfo`], injected at
//! construction, and everything hardware-side goes through the
//! [`CameraManager`] trait.

mod manager;

pub use manager::{CameraManager, ManagerError, MockCameraManager, PermissionStatus};

/// Capability description of the hosting platform.
///
/// Injected into the component instead of scattering OS-name comparisons
/// through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Human-readable platform label, used only in logs.
    pub label: &'static str,
    /// Whether the camera manager implements a real permission check.
    /// When false, permission checks short-circuit to granted.
    pub native_permission_check: bool,
    /// Whether the flash query needs the resolved facing value to pick
    /// the right camera module.
    pub flash_query_requires_facing: bool,
}

impl PlatformInfo {
    /// Browser-hosted platform: no native permission check, single flash
    /// query entry point.
    pub fn web() -> Self {
        Self {
            label: "web",
            native_permission_check: false,
            flash_query_requires_facing: false,
        }
    }

    /// Android: real permission check, flash query keyed by facing.
    pub fn android() -> Self {
        Self {
            label: "android",
            native_permission_check: true,
            flash_query_requires_facing: true,
        }
    }

    /// iOS: permission check short-circuits, single flash entry point.
    pub fn ios() -> Self {
        Self {
            label: "ios",
            native_permission_check: false,
            flash_query_requires_facing: false,
        }
    }
}

impl Default for PlatformInfo {
    fn default() -> Self {
        Self::web()
    }
}
