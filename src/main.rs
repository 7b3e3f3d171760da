//! Camera View demo CLI
//!
//! Walks the component through its lifecycle against a mock platform:
//! mount, stream acquisition, a still capture, and unmount.

use camera_view::{
    config::PropValue, CameraProps, CameraView, CaptureOptions, FileConfig, MediaSource,
    MockCameraManager, PlatformInfo, Viewport,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "camera-view", version, about = "Camera view component demo")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Facing direction override ("back" or "front").
    #[arg(long)]
    facing: Option<String>,

    /// Camera device index for the direct backend.
    #[cfg(feature = "camera")]
    #[arg(long, default_value_t = 0)]
    device: u32,
}

fn media_source(args: &Args) -> Arc<dyn MediaSource> {
    #[cfg(feature = "camera")]
    {
        Arc::new(camera_view::CameraSource::new(args.device))
    }
    #[cfg(not(feature = "camera"))]
    {
        let _ = args;
        Arc::new(camera_view::MockMediaSource::new())
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Camera View v{}", camera_view::VERSION);

    let config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let mut props: CameraProps = config.camera;
    if let Some(facing) = &args.facing {
        props.facing = PropValue::name(facing.clone());
    }

    let manager = Arc::new(MockCameraManager::new());
    let source = media_source(&args);

    let mut view = CameraView::new(props, PlatformInfo::web(), manager, source);

    view.mount(Viewport {
        width: config.viewport.width,
        height: config.viewport.height,
    });
    view.acquired().await;

    if !view.has_stream() {
        eprintln!("No media stream acquired; nothing to capture");
        std::process::exit(1);
    }

    match view.check_permissions().await {
        Ok(status) => info!("Permission status: {:?}", status),
        Err(e) => info!("Permission check failed: {}", e),
    }
    match view.has_flash().await {
        Ok(flash) => info!("Flash available: {}", flash),
        Err(e) => info!("Flash query failed: {}", e),
    }
    match view.fov().await {
        Ok(fov) => info!("Field of view: {} degrees", fov),
        Err(e) => info!("FOV query failed: {}", e),
    }

    info!("Capturing still image...");
    match view.capture(CaptureOptions::default()).await {
        Ok(output) => {
            let preview: String = output.media_uri.chars().take(48).collect();
            info!("Captured {} bytes: {}...", output.media_uri.len(), preview);
        }
        Err(e) => {
            eprintln!("Capture failed: {}", e);
            view.unmount().await;
            std::process::exit(1);
        }
    }

    match view.stop_capture().await {
        Ok(response) => info!("Stop capture: {}", response.message()),
        Err(e) => info!("Stop capture failed: {}", e),
    }

    view.unmount().await;
    info!("Done");
}
