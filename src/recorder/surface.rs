//! Hosting surface for the recording modal
//!
//! The surface owns at most one coordinator. A session exists only while
//! the surface is open; dismissing or reopening with another mode discards
//! the old coordinator, which takes its timer down with it.

use super::coordinator::RecordingCoordinator;
use super::session::{RecordingError, RecordingResult};
use super::state::{RecordingMode, RecordingSettings};
use super::timer::DEFAULT_TICK_INTERVAL;
use std::time::Duration;

/// Callback invoked after the surface is dismissed
pub type DismissCallback = Box<dyn FnMut() + Send>;

pub struct RecordingSurface {
    coordinator: Option<RecordingCoordinator>,
    requested_mode: RecordingMode,
    tick_interval: Duration,
    default_settings: Option<RecordingSettings>,
    on_dismiss: Option<DismissCallback>,
}

impl RecordingSurface {
    /// Create a closed surface
    pub fn new() -> Self {
        Self {
            coordinator: None,
            requested_mode: RecordingMode::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            default_settings: None,
            on_dismiss: None,
        }
    }

    /// Register the host's dismissal callback
    pub fn on_dismiss<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Override the tick period used by new sessions
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Settings new sessions start from (source is fitted to the mode)
    pub fn with_default_settings(mut self, settings: RecordingSettings) -> Self {
        self.default_settings = Some(settings);
        self
    }

    pub fn is_open(&self) -> bool {
        self.coordinator.is_some()
    }

    pub fn requested_mode(&self) -> RecordingMode {
        self.requested_mode
    }

    pub fn session(&self) -> Option<&RecordingCoordinator> {
        self.coordinator.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut RecordingCoordinator> {
        self.coordinator.as_mut()
    }

    /// The open session, or `SurfaceClosed`
    pub fn active(&mut self) -> RecordingResult<&mut RecordingCoordinator> {
        self.coordinator.as_mut().ok_or(RecordingError::SurfaceClosed)
    }

    /// Show the surface for `mode`
    ///
    /// Opening an already open surface with the same mode keeps its session.
    pub fn open(&mut self, mode: RecordingMode) -> &mut RecordingCoordinator {
        if self.requested_mode != mode {
            if self.coordinator.take().is_some() {
                tracing::info!("Reopening recording surface in {} mode", mode);
            }
            self.requested_mode = mode;
        }

        let settings = self
            .default_settings
            .unwrap_or_else(|| RecordingSettings::for_mode(mode));
        let tick_interval = self.tick_interval;
        self.coordinator.get_or_insert_with(|| {
            tracing::info!("Opening recording surface in {} mode", mode);
            RecordingCoordinator::with_settings(mode, settings, tick_interval)
        })
    }

    /// Close the surface unconditionally, stopping any recording
    pub fn dismiss(&mut self) {
        let Some(coordinator) = self.coordinator.take() else {
            return;
        };
        if coordinator.is_timer_active() {
            tracing::info!("Recording surface dismissed mid-recording, discarding session");
        } else {
            tracing::info!("Recording surface dismissed");
        }
        drop(coordinator);
        if let Some(callback) = self.on_dismiss.as_mut() {
            callback();
        }
    }

    /// Close the surface through its cancel affordance
    ///
    /// Only available while idle.
    pub fn cancel(&mut self) -> RecordingResult<()> {
        self.active()?.cancel()?;
        self.dismiss();
        Ok(())
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::session::SessionAction;
    use crate::recorder::state::{RecordingStatus, VideoQuality};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted_surface() -> (RecordingSurface, Arc<AtomicUsize>) {
        let dismissed = Arc::new(AtomicUsize::new(0));
        let counter = dismissed.clone();
        let surface = RecordingSurface::new().on_dismiss(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (surface, dismissed)
    }

    #[test]
    fn test_open_seeds_mode() {
        let mut surface = RecordingSurface::new();
        assert!(!surface.is_open());

        let session = surface.open(RecordingMode::Camera);
        assert_eq!(session.mode(), RecordingMode::Camera);
        assert_eq!(session.status(), RecordingStatus::Idle);
        assert!(surface.is_open());
    }

    #[test]
    fn test_reopen_same_mode_keeps_session() {
        let mut surface = RecordingSurface::new();
        let first = surface.open(RecordingMode::Screen).snapshot().id;
        surface
            .open(RecordingMode::Screen)
            .set_quality(VideoQuality::Hd720)
            .unwrap();
        let again = surface.open(RecordingMode::Screen).snapshot();
        assert_eq!(again.id, first);
        assert_eq!(again.settings.quality, VideoQuality::Hd720);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_with_new_mode_resets() {
        let mut surface = RecordingSurface::new();
        surface.open(RecordingMode::Screen).start().unwrap();
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        assert_eq!(surface.session().unwrap().elapsed_seconds(), 4);

        let session = surface.open(RecordingMode::Camera);
        assert_eq!(session.status(), RecordingStatus::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.mode(), RecordingMode::Camera);
        assert!(!session.is_timer_active());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(surface.session().unwrap().elapsed_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_mid_recording_discards_timer() {
        let (mut surface, dismissed) = counted_surface();
        let mut rx = surface.open(RecordingMode::Screen).subscribe();
        surface.active().unwrap().start().unwrap();
        tokio::time::sleep(Duration::from_millis(2_500)).await;

        surface.dismiss();
        assert!(!surface.is_open());
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);

        // Drain what was sent before the dismissal, then expect silence
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        let session = surface.open(RecordingMode::Screen);
        assert_eq!(session.status(), RecordingStatus::Idle);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_only_while_idle() {
        let (mut surface, dismissed) = counted_surface();
        surface.open(RecordingMode::Camera).start().unwrap();

        let err = surface.cancel().unwrap_err();
        assert_eq!(
            err,
            RecordingError::InvalidTransition {
                action: SessionAction::Cancel,
                status: RecordingStatus::Recording,
            }
        );
        assert!(surface.is_open());
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);

        surface.active().unwrap().stop().unwrap();
        surface.cancel().unwrap();
        assert!(!surface.is_open());
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_closed_surface() {
        let (mut surface, dismissed) = counted_surface();
        assert_eq!(surface.cancel(), Err(RecordingError::SurfaceClosed));
        assert!(surface.active().is_err());

        // Dismissing a closed surface does not notify the host
        surface.dismiss();
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_default_settings_apply_to_new_sessions() {
        let mut defaults = RecordingSettings::for_mode(RecordingMode::Screen);
        defaults.microphone_enabled = false;
        defaults.quality = VideoQuality::Uhd4k;
        let mut surface = RecordingSurface::new().with_default_settings(defaults);

        let snapshot = surface.open(RecordingMode::Camera).snapshot();
        assert!(!snapshot.settings.microphone_enabled);
        assert_eq!(snapshot.settings.quality, VideoQuality::Uhd4k);
        assert_eq!(snapshot.settings.source.mode(), RecordingMode::Camera);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_ticks() {
        let mut surface = RecordingSurface::new();
        let mut rx = surface.open(RecordingMode::Screen).subscribe();
        surface.active().unwrap().start().unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        drop(surface);
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
