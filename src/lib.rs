//! Camera View Library
//!
//! A uniform camera interface for embedding in a host UI: normalize
//! symbolic configuration props into platform values, bind a live video
//! preview to an acquired media stream, and capture the current frame as
//! an encoded still image.
//!
//! # Architecture
//!
//! ```text
//! props → normalize ──┐
//!                     ├→ view ──→ snapshot (still capture)
//! media source ───────┘   │
//!                         └→ camera manager (permissions, flash, FOV, stop)
//! ```
//!
//! # Design Principles
//!
//! - **Tables, not globals**: symbolic option names resolve through
//!   immutable constant tables
//! - **Capabilities, not OS names**: platform differences are injected as
//!   a capability description
//! - **Exclusive stream ownership**: the view holds its stream for its
//!   mounted lifetime and releases every hardware track on unmount
//! - **Cancellable acquisition**: unmount aborts an in-flight stream
//!   request instead of letting a late completion touch a dead view
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use camera_view::{
//!     CameraProps, CameraView, CaptureOptions, MockCameraManager,
//!     MockMediaSource, PlatformInfo, Viewport,
//! };
//!
//! # async fn demo() {
//! let mut view = CameraView::new(
//!     CameraProps::default(),
//!     PlatformInfo::web(),
//!     Arc::new(MockCameraManager::new()),
//!     Arc::new(MockMediaSource::new()),
//! );
//!
//! view.mount(Viewport { width: 640, height: 480 });
//! view.acquired().await;
//!
//! let output = view.capture(CaptureOptions::default()).await.unwrap();
//! println!("captured {} bytes", output.media_uri.len());
//!
//! view.unmount().await;
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod platform;
pub mod snapshot;
pub mod stream;
pub mod view;

// Re-export commonly used types at crate root
pub use config::{CameraProps, FileConfig, PropValue, PropsPatch, ResolvedProps};
pub use platform::{CameraManager, MockCameraManager, PermissionStatus, PlatformInfo};
pub use snapshot::Snapshot;
#[cfg(feature = "camera")]
pub use stream::CameraSource;
pub use stream::{MediaSource, MediaStream, MockMediaSource, StreamConstraints, VideoFrame};
pub use view::{
    AlertSink, CameraView, CaptureError, CaptureOptions, CaptureOutput, CaptureRequest,
    StopResponse, Viewport,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
