//! Media stream acquisition, stream ownership, and video frames.
//!
//! A stream is acquired asynchronously against a set of constraints and
//! held exclusively by one component instance until unmount releases its
//! tracks.

#[cfg(feature = "camera")]
mod camera;
mod frame;
mod mock;
mod source;

#[cfg(feature = "camera")]
pub use camera::CameraSource;
pub use frame::VideoFrame;
pub use mock::{MockMediaSource, PatternProvider};
pub use source::{
    FrameProvider, MediaSource, MediaStream, MediaTrack, StreamConstraints, StreamError, TrackKind,
};
