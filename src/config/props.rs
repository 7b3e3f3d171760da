//! Component configuration props.
//!
//! Props flow in from the component's owner as a flat record. String-valued
//! fields carry symbolic names that the normalizer resolves against the
//! constant tables; numeric values are assumed pre-resolved and pass
//! through unchanged.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A prop value that is either a symbolic name or a pre-resolved number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Symbolic name, resolved through the constant tables.
    Name(String),
    /// Pre-resolved numeric value, passed through unchanged.
    Number(f64),
}

impl PropValue {
    /// Convenience constructor for a symbolic name.
    pub fn name(s: impl Into<String>) -> Self {
        PropValue::Name(s.into())
    }

    /// Returns the string form, if this value is a name.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Name(s) => Some(s.as_str()),
            PropValue::Number(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Name(s.to_string())
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

/// A barcode detected in the preview stream.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeEvent {
    /// Decoded barcode payload.
    pub data: String,
    /// Barcode symbology name.
    pub barcode_type: String,
}

/// A focus point change in the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusEvent {
    /// Horizontal coordinate within the preview, in pixels.
    pub x: f64,
    /// Vertical coordinate within the preview, in pixels.
    pub y: f64,
}

/// A zoom level change in the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEvent {
    /// New zoom factor, 1.0 meaning no zoom.
    pub zoom: f64,
}

/// Owner-supplied barcode callback.
pub type BarcodeHandler = Arc<dyn Fn(&BarcodeEvent) + Send + Sync>;
/// Owner-supplied focus-change callback.
pub type FocusHandler = Arc<dyn Fn(&FocusEvent) + Send + Sync>;
/// Owner-supplied zoom-change callback.
pub type ZoomHandler = Arc<dyn Fn(&ZoomEvent) + Send + Sync>;

/// Flat record of capture options supplied by the component's owner.
///
/// Every field has a default; owners override only what they need. The
/// callback slots are not serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProps {
    /// Preview aspect policy.
    pub aspect: PropValue,
    /// Which physical camera to stream from.
    pub facing: PropValue,
    /// Preview orientation policy.
    pub orientation: PropValue,
    /// Still image vs video capture.
    pub capture_mode: PropValue,
    /// Where captured media is delivered.
    pub capture_target: PropValue,
    /// Capture quality preset.
    pub capture_quality: PropValue,
    /// Flash behavior during capture.
    pub flash_mode: PropValue,
    /// Torch behavior.
    pub torch_mode: PropValue,
    /// Capture audio alongside video.
    pub capture_audio: bool,
    /// Rotate captured stills to compensate for device orientation.
    pub fix_orientation: bool,
    /// Mirror captured stills horizontally.
    pub mirror_image: bool,
    /// Play a shutter sound when capturing.
    pub play_sound_on_capture: bool,
    /// Show the default focus indicator on tap.
    pub default_on_focus_component: bool,
    /// Keep the screen awake while the preview is mounted.
    pub keep_awake: bool,
    /// Barcode symbologies to scan for. Ignored without a barcode callback.
    pub barcode_types: Vec<String>,
    /// Barcode detection callback. Supplying one enables the scanner.
    #[serde(skip)]
    pub on_barcode_read: Option<BarcodeHandler>,
    /// Focus-change callback.
    #[serde(skip)]
    pub on_focus_changed: Option<FocusHandler>,
    /// Zoom-change callback.
    #[serde(skip)]
    pub on_zoom_changed: Option<ZoomHandler>,
}

impl Default for CameraProps {
    fn default() -> Self {
        Self {
            aspect: PropValue::name("fill"),
            facing: PropValue::name("back"),
            orientation: PropValue::name("auto"),
            capture_mode: PropValue::name("still"),
            capture_target: PropValue::name("cameraRoll"),
            capture_quality: PropValue::name("high"),
            flash_mode: PropValue::name("off"),
            torch_mode: PropValue::name("off"),
            capture_audio: false,
            fix_orientation: false,
            mirror_image: false,
            play_sound_on_capture: true,
            default_on_focus_component: true,
            keep_awake: false,
            barcode_types: Vec::new(),
            on_barcode_read: None,
            on_focus_changed: None,
            on_zoom_changed: None,
        }
    }
}

impl std::fmt::Debug for CameraProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraProps")
            .field("aspect", &self.aspect)
            .field("facing", &self.facing)
            .field("orientation", &self.orientation)
            .field("capture_mode", &self.capture_mode)
            .field("capture_target", &self.capture_target)
            .field("capture_quality", &self.capture_quality)
            .field("flash_mode", &self.flash_mode)
            .field("torch_mode", &self.torch_mode)
            .field("capture_audio", &self.capture_audio)
            .field("fix_orientation", &self.fix_orientation)
            .field("mirror_image", &self.mirror_image)
            .field("play_sound_on_capture", &self.play_sound_on_capture)
            .field("default_on_focus_component", &self.default_on_focus_component)
            .field("keep_awake", &self.keep_awake)
            .field("barcode_types", &self.barcode_types)
            .field("on_barcode_read", &self.on_barcode_read.is_some())
            .field("on_focus_changed", &self.on_focus_changed.is_some())
            .field("on_zoom_changed", &self.on_zoom_changed.is_some())
            .finish()
    }
}

/// A partial prop record used to patch a live component.
///
/// Only present fields are applied; everything else keeps its value.
#[derive(Clone, Default)]
pub struct PropsPatch {
    /// New aspect policy.
    pub aspect: Option<PropValue>,
    /// New facing direction.
    pub facing: Option<PropValue>,
    /// New orientation policy.
    pub orientation: Option<PropValue>,
    /// New capture mode.
    pub capture_mode: Option<PropValue>,
    /// New capture target.
    pub capture_target: Option<PropValue>,
    /// New capture quality.
    pub capture_quality: Option<PropValue>,
    /// New flash mode.
    pub flash_mode: Option<PropValue>,
    /// New torch mode.
    pub torch_mode: Option<PropValue>,
    /// New audio-capture flag.
    pub capture_audio: Option<bool>,
    /// New orientation-fix flag.
    pub fix_orientation: Option<bool>,
    /// New mirror flag.
    pub mirror_image: Option<bool>,
    /// New shutter-sound flag.
    pub play_sound_on_capture: Option<bool>,
    /// New barcode symbology list.
    pub barcode_types: Option<Vec<String>>,
}

impl CameraProps {
    /// Applies a patch, leaving absent fields untouched.
    pub fn apply(&mut self, patch: PropsPatch) {
        macro_rules! put {
            ($field:ident) => {
                if let Some(v) = patch.$field {
                    self.$field = v;
                }
            };
        }
        put!(aspect);
        put!(facing);
        put!(orientation);
        put!(capture_mode);
        put!(capture_target);
        put!(capture_quality);
        put!(flash_mode);
        put!(torch_mode);
        put!(capture_audio);
        put!(fix_orientation);
        put!(mirror_image);
        put!(play_sound_on_capture);
        put!(barcode_types);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_props() {
        let props = CameraProps::default();
        assert_eq!(props.facing, PropValue::name("back"));
        assert_eq!(props.capture_mode, PropValue::name("still"));
        assert!(!props.capture_audio);
        assert!(props.play_sound_on_capture);
        assert!(props.barcode_types.is_empty());
        assert!(props.on_barcode_read.is_none());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut props = CameraProps::default();
        props.apply(PropsPatch {
            facing: Some(PropValue::name("front")),
            capture_audio: Some(true),
            ..Default::default()
        });
        assert_eq!(props.facing, PropValue::name("front"));
        assert!(props.capture_audio);
        // untouched fields keep their defaults
        assert_eq!(props.aspect, PropValue::name("fill"));
        assert!(props.play_sound_on_capture);
    }

    #[test]
    fn test_prop_value_deserializes_untagged() {
        let v: PropValue = toml::from_str::<std::collections::HashMap<String, PropValue>>(
            "facing = \"front\"",
        )
        .unwrap()
        .remove("facing")
        .unwrap();
        assert_eq!(v, PropValue::name("front"));
    }
}
