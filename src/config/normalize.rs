//! Prop normalization.
//!
//! Translates owner-supplied symbolic names into the platform values the
//! camera layer understands, and derives the barcode-scanner flag from the
//! presence of a barcode callback.

use super::constants;
use super::props::{CameraProps, PropValue};

/// Props with every recognized symbolic name resolved to its platform value.
///
/// Unrecognized names and numeric values pass through unchanged.
#[derive(Debug, Clone)]
pub struct ResolvedProps {
    /// Resolved aspect value.
    pub aspect: PropValue,
    /// Resolved facing-mode value.
    pub facing: PropValue,
    /// Resolved orientation value.
    pub orientation: PropValue,
    /// Resolved capture mode.
    pub capture_mode: PropValue,
    /// Resolved capture target.
    pub capture_target: PropValue,
    /// Resolved capture quality.
    pub capture_quality: PropValue,
    /// Resolved flash mode.
    pub flash_mode: PropValue,
    /// Resolved torch mode.
    pub torch_mode: PropValue,
    /// Capture audio alongside video.
    pub capture_audio: bool,
    /// Rotate captured stills to compensate for device orientation.
    pub fix_orientation: bool,
    /// Mirror captured stills horizontally.
    pub mirror_image: bool,
    /// Play a shutter sound when capturing.
    pub play_sound_on_capture: bool,
    /// Barcode symbologies to scan for. Empty unless scanning is enabled.
    pub barcode_types: Vec<String>,
    /// Whether barcode scanning is active. Derived, never set directly:
    /// true exactly when the owner supplied a barcode callback.
    pub barcode_scanner_enabled: bool,
}

/// Resolves one prop value through a table.
fn resolve_value(table: &constants::ConstantTable, value: &PropValue) -> PropValue {
    match value {
        PropValue::Name(name) => match table.resolve(name) {
            Some(platform) => PropValue::Name(platform.to_string()),
            None => value.clone(),
        },
        PropValue::Number(_) => value.clone(),
    }
}

/// Normalizes a prop record against the constant tables.
///
/// The barcode symbology list is forced empty when no barcode callback is
/// supplied; enabling the scanner without a listener is meaningless, so the
/// two fields are coupled here rather than left to the owner.
pub fn resolve(props: &CameraProps) -> ResolvedProps {
    let scanner_enabled = props.on_barcode_read.is_some();
    ResolvedProps {
        aspect: resolve_value(&constants::ASPECT, &props.aspect),
        facing: resolve_value(&constants::FACING, &props.facing),
        orientation: resolve_value(&constants::ORIENTATION, &props.orientation),
        capture_mode: resolve_value(&constants::CAPTURE_MODE, &props.capture_mode),
        capture_target: resolve_value(&constants::CAPTURE_TARGET, &props.capture_target),
        capture_quality: resolve_value(&constants::CAPTURE_QUALITY, &props.capture_quality),
        flash_mode: resolve_value(&constants::FLASH_MODE, &props.flash_mode),
        torch_mode: resolve_value(&constants::TORCH_MODE, &props.torch_mode),
        capture_audio: props.capture_audio,
        fix_orientation: props.fix_orientation,
        mirror_image: props.mirror_image,
        play_sound_on_capture: props.play_sound_on_capture,
        barcode_types: if scanner_enabled {
            props.barcode_types.clone()
        } else {
            Vec::new()
        },
        barcode_scanner_enabled: scanner_enabled,
    }
}

impl ResolvedProps {
    /// Returns the facing value as a platform facing-mode string.
    ///
    /// Numeric facing values have no string form and fall back to the
    /// default facing table entry.
    pub fn facing_mode(&self) -> &str {
        self.facing.as_str().unwrap_or("user")
    }
}
