//! Recording-related commands
//!
//! The modal's embedding contract: the host opens the surface with a
//! requested mode, forwards user actions, and reads back snapshots.

use crate::recorder::{
    RecordingMode, RecordingSummary, RecordingSurface, SessionSnapshot, VideoQuality,
};
use crate::utils::{ErrorResponse, StudioConfig};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state for recording
pub struct RecorderState {
    pub surface: Arc<Mutex<RecordingSurface>>,
}

impl RecorderState {
    /// Build state whose sessions follow `config`
    pub fn from_config(config: &StudioConfig) -> Self {
        let surface = RecordingSurface::new()
            .with_tick_interval(config.tick_interval())
            .with_default_settings(config.recording_settings(config.default_mode));
        Self::with_surface(surface)
    }

    pub fn with_surface(surface: RecordingSurface) -> Self {
        Self {
            surface: Arc::new(Mutex::new(surface)),
        }
    }
}

impl Default for RecorderState {
    fn default() -> Self {
        Self::with_surface(RecordingSurface::new())
    }
}

/// Show the recording modal in `mode`
pub async fn open_recording_modal(
    state: &RecorderState,
    mode: RecordingMode,
) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    Ok(surface.open(mode).snapshot())
}

/// Close the modal from the host side, discarding any recording
pub async fn close_recording_modal(state: &RecorderState) -> Result<(), ErrorResponse> {
    state.surface.lock().await.dismiss();
    Ok(())
}

/// Close the modal through its Cancel button
pub async fn cancel_recording_modal(state: &RecorderState) -> Result<(), ErrorResponse> {
    state.surface.lock().await.cancel()?;
    Ok(())
}

/// Start recording
pub async fn start_recording(state: &RecorderState) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    let session = surface.active()?;
    session.start()?;
    Ok(session.snapshot())
}

/// Stop recording
pub async fn stop_recording(state: &RecorderState) -> Result<RecordingSummary, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    Ok(surface.active()?.stop()?)
}

pub async fn set_recording_mode(
    state: &RecorderState,
    mode: RecordingMode,
) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    let session = surface.active()?;
    session.set_mode(mode)?;
    Ok(session.snapshot())
}

pub async fn set_microphone_enabled(
    state: &RecorderState,
    enabled: bool,
) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    let session = surface.active()?;
    session.set_microphone_enabled(enabled)?;
    Ok(session.snapshot())
}

/// Select a capture source by picker tag (`entire`, `front`, ...)
pub async fn set_capture_source(
    state: &RecorderState,
    tag: String,
) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    let session = surface.active()?;
    session.set_source_tag(&tag)?;
    Ok(session.snapshot())
}

pub async fn set_video_quality(
    state: &RecorderState,
    quality: VideoQuality,
) -> Result<SessionSnapshot, ErrorResponse> {
    let mut surface = state.surface.lock().await;
    let session = surface.active()?;
    session.set_quality(quality)?;
    Ok(session.snapshot())
}

/// Current session, or `None` while the modal is closed
pub async fn get_recording_state(state: &RecorderState) -> Option<SessionSnapshot> {
    let surface = state.surface.lock().await;
    surface.session().map(|session| session.snapshot())
}
