//! Recording coordinator
//!
//! Owns one session together with the timer that drives it and broadcasts
//! lifecycle events to whoever renders the modal.

use super::session::{RecordingError, RecordingResult, RecordingSession, SessionAction};
use super::state::{
    CaptureSource, RecordingMode, RecordingSettings, RecordingStatus, RecordingSummary,
    SessionSnapshot, VideoQuality,
};
use super::timer::{TickTimer, DEFAULT_TICK_INTERVAL};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Events emitted during recording
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingEvent {
    /// Recording started
    Started { mode: RecordingMode },
    /// One second elapsed, carrying the new count
    Tick(u64),
    /// Recording stopped
    Stopped(RecordingSummary),
    /// Mode switched while idle
    ModeChanged(RecordingMode),
}

/// Session plus its timer
pub struct RecordingCoordinator {
    /// Shared with the tick task
    session: Arc<Mutex<RecordingSession>>,

    /// Tick source, active only while recording
    timer: TickTimer,

    /// Event broadcaster
    event_tx: broadcast::Sender<RecordingEvent>,
}

impl RecordingCoordinator {
    /// Create a coordinator for a new idle session
    pub fn new(mode: RecordingMode) -> Self {
        Self::with_session(RecordingSession::new(mode), DEFAULT_TICK_INTERVAL)
    }

    /// Create a coordinator around an existing session and tick period
    pub fn with_session(session: RecordingSession, tick_interval: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            session: Arc::new(Mutex::new(session)),
            timer: TickTimer::new(tick_interval),
            event_tx,
        }
    }

    /// Create a coordinator seeded with explicit settings
    pub fn with_settings(
        mode: RecordingMode,
        settings: RecordingSettings,
        tick_interval: Duration,
    ) -> Self {
        Self::with_session(RecordingSession::with_settings(mode, settings), tick_interval)
    }

    /// Subscribe to recording events
    pub fn subscribe(&self) -> broadcast::Receiver<RecordingEvent> {
        self.event_tx.subscribe()
    }

    pub fn status(&self) -> RecordingStatus {
        self.session.lock().status()
    }

    pub fn mode(&self) -> RecordingMode {
        self.session.lock().mode()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.session.lock().elapsed_seconds()
    }

    pub fn elapsed_display(&self) -> String {
        self.session.lock().elapsed_display()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().snapshot()
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Start recording and schedule the tick
    pub fn start(&mut self) -> RecordingResult<()> {
        if self.timer.is_active() {
            return Err(RecordingError::TimerAlreadyActive);
        }

        let mode = {
            let mut session = self.session.lock();
            session.start()?;
            session.mode()
        };

        let session = self.session.clone();
        let event_tx = self.event_tx.clone();
        let scheduled = self.timer.start(move || {
            let result = session.lock().tick();
            match result {
                Ok(elapsed) => {
                    let _ = event_tx.send(RecordingEvent::Tick(elapsed));
                    true
                }
                Err(e) => {
                    tracing::warn!("Dropping tick: {}", e);
                    false
                }
            }
        });

        if let Err(e) = scheduled {
            // Without a timer the session would sit at 00:00 forever
            let _ = self.session.lock().stop();
            return Err(e);
        }

        let _ = self.event_tx.send(RecordingEvent::Started { mode });
        tracing::info!("Recording started ({} mode)", mode);
        Ok(())
    }

    /// Cancel the tick and return the session to idle
    pub fn stop(&mut self) -> RecordingResult<RecordingSummary> {
        {
            let session = self.session.lock();
            if !session.is_recording() {
                return Err(RecordingError::InvalidTransition {
                    action: SessionAction::Stop,
                    status: session.status(),
                });
            }
        }

        let timer_result = self.timer.cancel();
        let summary = self.session.lock().stop()?;
        if let Err(e) = timer_result {
            tracing::warn!("Stopped a recording without a running timer: {}", e);
        }

        let _ = self.event_tx.send(RecordingEvent::Stopped(summary.clone()));
        tracing::info!("Recording stopped. Duration: {}s", summary.recorded_seconds);
        Ok(summary)
    }

    pub fn set_mode(&mut self, mode: RecordingMode) -> RecordingResult<()> {
        let changed = {
            let mut session = self.session.lock();
            let previous = session.mode();
            session.set_mode(mode)?;
            previous != mode
        };
        if changed {
            let _ = self.event_tx.send(RecordingEvent::ModeChanged(mode));
        }
        Ok(())
    }

    /// Validate that the session may be discarded
    pub fn cancel(&self) -> RecordingResult<()> {
        self.session.lock().cancel()
    }

    pub fn set_microphone_enabled(&mut self, enabled: bool) -> RecordingResult<()> {
        self.session.lock().set_microphone_enabled(enabled)
    }

    pub fn set_source(&mut self, source: CaptureSource) -> RecordingResult<()> {
        self.session.lock().set_source(source)
    }

    pub fn set_source_tag(&mut self, tag: &str) -> RecordingResult<()> {
        self.session.lock().set_source_tag(tag)
    }

    pub fn set_quality(&mut self, quality: VideoQuality) -> RecordingResult<()> {
        self.session.lock().set_quality(quality)
    }
}

impl Drop for RecordingCoordinator {
    fn drop(&mut self) {
        if self.timer.is_active() {
            tracing::debug!("Discarding coordinator with an active timer");
        }
        // TickTimer aborts its task on drop
    }
}
