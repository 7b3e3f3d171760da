//! Configuration props, constant tables, and the normalizer.
//!
//! Owners configure the component through a flat prop record. Symbolic
//! string values are resolved against immutable constant tables before any
//! platform call sees them.

pub mod constants;

mod file;
mod normalize;
mod props;

pub use file::{ConfigError, FileConfig, ViewportConfig};
pub use normalize::{resolve, ResolvedProps};
pub use props::{
    BarcodeEvent, BarcodeHandler, CameraProps, FocusEvent, FocusHandler, PropValue, PropsPatch,
    ZoomEvent, ZoomHandler,
};
