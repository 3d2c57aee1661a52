//! Studio Recorder - recording session control for a video editor UI.
//!
//! This is the main library crate. It provides the recording modal's state
//! machine and timer, the editor panels' bounded state, and the command
//! layer a UI host binds to.

pub mod commands;
pub mod editor;
pub mod recorder;
pub mod utils;

use commands::recording::{self, RecorderState};
use commands::EditorState;
use recorder::RecordingEvent;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::StudioConfig;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once is harmless.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run a simulated recording of `seconds` seconds and log what happens
pub async fn run(seconds: u64) -> anyhow::Result<()> {
    let config = StudioConfig::from_env()?;
    init_tracing(&config.log_filter);

    tracing::info!("Starting Studio Recorder v{}", env!("CARGO_PKG_VERSION"));

    let recorder = RecorderState::from_config(&config);
    let editor = EditorState::from_config(&config);

    let snapshot = recording::open_recording_modal(&recorder, config.default_mode).await?;
    tracing::info!("{} ({})", snapshot.title, snapshot.settings.quality.label());

    let mut events = {
        let mut surface = recorder.surface.lock().await;
        surface.active()?.subscribe()
    };

    recording::start_recording(&recorder).await?;

    let recording_time = config.tick_interval() * seconds as u32;
    let deadline = tokio::time::sleep(recording_time + Duration::from_millis(50));
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            event = events.recv() => match event {
                Ok(RecordingEvent::Tick(elapsed)) => {
                    tracing::info!("Recording {}", utils::time::format_recording_time(elapsed));
                }
                Ok(other) => tracing::debug!("Event: {:?}", other),
                Err(e) => {
                    tracing::warn!("Event stream ended: {}", e);
                    break;
                }
            },
        }
    }

    let summary = recording::stop_recording(&recorder).await?;
    tracing::info!(
        "Recorded {}s of {} at {}",
        summary.recorded_seconds,
        summary.settings.source,
        summary.settings.quality.label()
    );

    recording::close_recording_modal(&recorder).await?;

    let timecode = commands::editor::get_playback_timecode(&editor);
    tracing::info!("Playback {} / {}", timecode.current, timecode.duration);

    Ok(())
}
