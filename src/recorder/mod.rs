//! Recording system module
//!
//! This module implements the recording modal's lifecycle:
//! - RecordingSession state machine with explicit transition guards
//! - TickTimer owning the one-second tick task
//! - RecordingCoordinator tying a session to its timer and events
//! - RecordingSurface hosting at most one coordinator at a time

pub mod coordinator;
pub mod session;
pub mod state;
pub mod surface;
pub mod timer;

pub use coordinator::{RecordingCoordinator, RecordingEvent};
pub use session::{RecordingError, RecordingResult, RecordingSession, SessionAction};
pub use state::{
    CaptureSource, RecordingMode, RecordingSettings, RecordingStatus, RecordingSummary,
    SessionSnapshot, VideoQuality,
};
pub use surface::RecordingSurface;
pub use timer::TickTimer;
