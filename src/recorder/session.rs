//! Recording session state machine
//!
//! A session is `Idle` or `Recording`. Every operation is guarded by the
//! status it is valid in and returns `InvalidTransition` otherwise, leaving
//! the session untouched. Timing is not driven here: `tick()` is called by
//! whoever owns the timer (see [`super::coordinator`]).

use super::state::{
    CaptureSource, RecordingMode, RecordingSettings, RecordingStatus, RecordingSummary,
    SessionSnapshot, VideoQuality,
};
use crate::utils::time::format_recording_time;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Operation attempted on a session, used to report rejected transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Tick,
    Stop,
    SetMode,
    Cancel,
    ChangeSettings,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionAction::Start => "start",
            SessionAction::Tick => "tick",
            SessionAction::Stop => "stop",
            SessionAction::SetMode => "change mode",
            SessionAction::Cancel => "cancel",
            SessionAction::ChangeSettings => "change settings",
        };
        f.write_str(name)
    }
}

/// Recording errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordingError {
    #[error("Invalid transition: cannot {action} while {status}")]
    InvalidTransition {
        action: SessionAction,
        status: RecordingStatus,
    },

    #[error("Recording timer is already active")]
    TimerAlreadyActive,

    #[error("Recording timer is not active")]
    TimerNotActive,

    #[error("Source {requested} does not belong to {mode} mode")]
    SourceMismatch {
        mode: RecordingMode,
        requested: CaptureSource,
    },

    #[error("Unknown {mode} source: {tag}")]
    UnknownSource { mode: RecordingMode, tag: String },

    #[error("Recording surface is not open")]
    SurfaceClosed,

    #[error("No async runtime available to drive the recording timer")]
    RuntimeUnavailable,
}

pub type RecordingResult<T> = Result<T, RecordingError>;

/// One presentation of the recording modal
#[derive(Debug, Clone)]
pub struct RecordingSession {
    id: Uuid,
    mode: RecordingMode,
    status: RecordingStatus,
    elapsed_seconds: u64,
    settings: RecordingSettings,
    started_at: Option<DateTime<Utc>>,
}

impl RecordingSession {
    /// Create an idle session with the default settings for `mode`
    pub fn new(mode: RecordingMode) -> Self {
        Self::with_settings(mode, RecordingSettings::for_mode(mode))
    }

    /// Create an idle session with explicit settings
    ///
    /// A source of the wrong kind is replaced by the mode's default.
    pub fn with_settings(mode: RecordingMode, mut settings: RecordingSettings) -> Self {
        if settings.source.mode() != mode {
            settings.source = CaptureSource::default_for(mode);
        }
        Self {
            id: Uuid::new_v4(),
            mode,
            status: RecordingStatus::Idle,
            elapsed_seconds: 0,
            settings,
            started_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> RecordingMode {
        self.mode
    }

    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    pub fn is_recording(&self) -> bool {
        self.status == RecordingStatus::Recording
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn settings(&self) -> &RecordingSettings {
        &self.settings
    }

    /// Elapsed time as `MM:SS`
    pub fn elapsed_display(&self) -> String {
        format_recording_time(self.elapsed_seconds)
    }

    fn require(&self, action: SessionAction, status: RecordingStatus) -> RecordingResult<()> {
        if self.status == status {
            Ok(())
        } else {
            Err(RecordingError::InvalidTransition {
                action,
                status: self.status,
            })
        }
    }

    /// Begin recording from zero
    pub fn start(&mut self) -> RecordingResult<()> {
        self.require(SessionAction::Start, RecordingStatus::Idle)?;
        self.status = RecordingStatus::Recording;
        self.elapsed_seconds = 0;
        self.started_at = Some(Utc::now());
        tracing::info!("Session {} started recording ({})", self.id, self.settings.source);
        Ok(())
    }

    /// Advance the counter by one second, returning the new value
    pub fn tick(&mut self) -> RecordingResult<u64> {
        self.require(SessionAction::Tick, RecordingStatus::Recording)?;
        self.elapsed_seconds += 1;
        tracing::debug!("Session {} at {}", self.id, self.elapsed_display());
        Ok(self.elapsed_seconds)
    }

    /// Stop recording and reset the counter
    pub fn stop(&mut self) -> RecordingResult<RecordingSummary> {
        self.require(SessionAction::Stop, RecordingStatus::Recording)?;
        let stopped_at = Utc::now();
        let summary = RecordingSummary {
            session_id: self.id,
            mode: self.mode,
            settings: self.settings,
            recorded_seconds: self.elapsed_seconds,
            started_at: self.started_at.take().unwrap_or(stopped_at),
            stopped_at,
        };
        self.status = RecordingStatus::Idle;
        self.elapsed_seconds = 0;
        tracing::info!(
            "Session {} stopped after {}s",
            self.id,
            summary.recorded_seconds
        );
        Ok(summary)
    }

    /// Switch between screen and camera
    ///
    /// Changing the mode resets the source to the new mode's default.
    pub fn set_mode(&mut self, mode: RecordingMode) -> RecordingResult<()> {
        self.require(SessionAction::SetMode, RecordingStatus::Idle)?;
        if self.mode != mode {
            self.mode = mode;
            self.settings.source = CaptureSource::default_for(mode);
            tracing::debug!("Session {} switched to {} mode", self.id, mode);
        }
        Ok(())
    }

    /// Check that the session may be abandoned
    ///
    /// The session itself does not change; the owner discards it.
    pub fn cancel(&self) -> RecordingResult<()> {
        self.require(SessionAction::Cancel, RecordingStatus::Idle)
    }

    pub fn set_microphone_enabled(&mut self, enabled: bool) -> RecordingResult<()> {
        self.require(SessionAction::ChangeSettings, RecordingStatus::Idle)?;
        self.settings.microphone_enabled = enabled;
        Ok(())
    }

    pub fn set_source(&mut self, source: CaptureSource) -> RecordingResult<()> {
        self.require(SessionAction::ChangeSettings, RecordingStatus::Idle)?;
        if source.mode() != self.mode {
            return Err(RecordingError::SourceMismatch {
                mode: self.mode,
                requested: source,
            });
        }
        self.settings.source = source;
        Ok(())
    }

    /// Select a source by its picker tag, interpreted for the current mode
    pub fn set_source_tag(&mut self, tag: &str) -> RecordingResult<()> {
        self.require(SessionAction::ChangeSettings, RecordingStatus::Idle)?;
        let source =
            CaptureSource::parse(self.mode, tag).ok_or_else(|| RecordingError::UnknownSource {
                mode: self.mode,
                tag: tag.to_string(),
            })?;
        self.set_source(source)
    }

    pub fn set_quality(&mut self, quality: VideoQuality) -> RecordingResult<()> {
        self.require(SessionAction::ChangeSettings, RecordingStatus::Idle)?;
        self.settings.quality = quality;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            mode: self.mode,
            status: self.status,
            elapsed_seconds: self.elapsed_seconds,
            elapsed_display: self.elapsed_display(),
            title: self.mode.title().to_string(),
            settings: self.settings,
            settings_locked: self.is_recording(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::state::{CameraSource, ScreenSource};

    fn invalid(action: SessionAction, status: RecordingStatus) -> RecordingError {
        RecordingError::InvalidTransition { action, status }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = RecordingSession::new(RecordingMode::Camera);
        assert_eq!(session.status(), RecordingStatus::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.mode(), RecordingMode::Camera);
        assert_eq!(session.elapsed_display(), "00:00");
    }

    #[test]
    fn test_last_mode_set_while_idle_wins() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        let modes = [
            RecordingMode::Camera,
            RecordingMode::Screen,
            RecordingMode::Camera,
            RecordingMode::Camera,
        ];
        for mode in modes {
            session.set_mode(mode).unwrap();
        }
        assert_eq!(session.mode(), RecordingMode::Camera);
        assert_eq!(
            session.settings().source,
            CaptureSource::Camera(CameraSource::Default)
        );
    }

    #[test]
    fn test_mode_is_fixed_while_recording() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        session.set_mode(RecordingMode::Camera).unwrap();
        session.start().unwrap();

        let err = session.set_mode(RecordingMode::Screen).unwrap_err();
        assert_eq!(
            err,
            invalid(SessionAction::SetMode, RecordingStatus::Recording)
        );
        assert_eq!(session.mode(), RecordingMode::Camera);
    }

    #[test]
    fn test_start_then_stop_is_zero() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        session.start().unwrap();
        let summary = session.stop().unwrap();

        assert_eq!(summary.recorded_seconds, 0);
        assert_eq!(session.status(), RecordingStatus::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_ticks_count_and_stop_resets() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        session.start().unwrap();
        for expected in 1..=65 {
            assert_eq!(session.tick().unwrap(), expected);
        }
        assert_eq!(session.elapsed_seconds(), 65);
        assert_eq!(session.elapsed_display(), "01:05");

        let summary = session.stop().unwrap();
        assert_eq!(summary.recorded_seconds, 65);
        assert!(summary.stopped_at >= summary.started_at);
        assert_eq!(session.elapsed_seconds(), 0);

        // A late tick is rejected and does not move the counter
        assert_eq!(
            session.tick().unwrap_err(),
            invalid(SessionAction::Tick, RecordingStatus::Idle)
        );
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_invalid_transitions_are_reported() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        assert_eq!(
            session.stop().unwrap_err(),
            invalid(SessionAction::Stop, RecordingStatus::Idle)
        );

        session.start().unwrap();
        assert_eq!(
            session.start().unwrap_err(),
            invalid(SessionAction::Start, RecordingStatus::Recording)
        );
        assert_eq!(
            session.cancel().unwrap_err(),
            invalid(SessionAction::Cancel, RecordingStatus::Recording)
        );
        assert_eq!(session.status(), RecordingStatus::Recording);
    }

    #[test]
    fn test_settings_are_locked_while_recording() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        session.set_quality(VideoQuality::Hd720).unwrap();
        session.set_source_tag("window").unwrap();
        session.start().unwrap();
        session.tick().unwrap();

        let before = session.snapshot();
        assert!(before.settings_locked);

        assert!(session.set_microphone_enabled(false).is_err());
        assert!(session
            .set_source(CaptureSource::Screen(ScreenSource::Tab))
            .is_err());
        assert!(session.set_source_tag("tab").is_err());
        assert!(session.set_quality(VideoQuality::Uhd4k).is_err());

        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_source_must_match_mode() {
        let mut session = RecordingSession::new(RecordingMode::Screen);
        let err = session
            .set_source(CaptureSource::Camera(CameraSource::Front))
            .unwrap_err();
        assert!(matches!(err, RecordingError::SourceMismatch { .. }));

        let err = session.set_source_tag("front").unwrap_err();
        assert!(matches!(err, RecordingError::UnknownSource { .. }));
        assert_eq!(
            session.settings().source,
            CaptureSource::Screen(ScreenSource::Entire)
        );
    }

    #[test]
    fn test_with_settings_repairs_mismatched_source() {
        let mut settings = RecordingSettings::for_mode(RecordingMode::Screen);
        settings.microphone_enabled = false;
        let session = RecordingSession::with_settings(RecordingMode::Camera, settings);

        assert!(!session.settings().microphone_enabled);
        assert_eq!(
            session.settings().source,
            CaptureSource::Camera(CameraSource::Default)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = invalid(SessionAction::SetMode, RecordingStatus::Recording);
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot change mode while recording"
        );
    }
}
