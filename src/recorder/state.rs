//! Recording state types
//!
//! Modes, status, capture settings and the serialisable views of a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which kind of source a session records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingMode {
    #[default]
    Screen,
    Camera,
}

impl RecordingMode {
    /// Modal title shown for this mode
    pub fn title(&self) -> &'static str {
        match self {
            RecordingMode::Screen => "Record Screen",
            RecordingMode::Camera => "Record Camera",
        }
    }
}

impl fmt::Display for RecordingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingMode::Screen => write!(f, "screen"),
            RecordingMode::Camera => write!(f, "camera"),
        }
    }
}

/// Current status of a recording session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingStatus {
    /// No recording in progress, settings are editable
    #[default]
    Idle,
    /// Currently recording, settings are locked
    Recording,
}

impl fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingStatus::Idle => write!(f, "idle"),
            RecordingStatus::Recording => write!(f, "recording"),
        }
    }
}

/// Output quality preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "720p")]
    Hd720,
    #[default]
    #[serde(rename = "1080p")]
    FullHd1080,
    #[serde(rename = "4k")]
    Uhd4k,
}

impl VideoQuality {
    /// Human readable label for the quality picker
    pub fn label(&self) -> &'static str {
        match self {
            VideoQuality::Hd720 => "720p HD",
            VideoQuality::FullHd1080 => "1080p Full HD",
            VideoQuality::Uhd4k => "4K Ultra HD",
        }
    }

    /// Frame size in pixels (width, height)
    pub fn resolution(&self) -> (u32, u32) {
        match self {
            VideoQuality::Hd720 => (1280, 720),
            VideoQuality::FullHd1080 => (1920, 1080),
            VideoQuality::Uhd4k => (3840, 2160),
        }
    }
}

/// Screen capture target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSource {
    #[default]
    Entire,
    Window,
    Tab,
}

impl ScreenSource {
    pub fn tag(&self) -> &'static str {
        match self {
            ScreenSource::Entire => "entire",
            ScreenSource::Window => "window",
            ScreenSource::Tab => "tab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreenSource::Entire => "Entire Screen",
            ScreenSource::Window => "Application Window",
            ScreenSource::Tab => "Browser Tab",
        }
    }
}

/// Camera capture target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraSource {
    #[default]
    Default,
    Front,
    Back,
}

impl CameraSource {
    pub fn tag(&self) -> &'static str {
        match self {
            CameraSource::Default => "default",
            CameraSource::Front => "front",
            CameraSource::Back => "back",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraSource::Default => "Default Camera",
            CameraSource::Front => "Front Camera",
            CameraSource::Back => "Back Camera",
        }
    }
}

/// Source selection; the variant always matches the session's mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum CaptureSource {
    Screen(ScreenSource),
    Camera(CameraSource),
}

impl CaptureSource {
    /// Default source shown when a mode is first selected
    pub fn default_for(mode: RecordingMode) -> Self {
        match mode {
            RecordingMode::Screen => CaptureSource::Screen(ScreenSource::default()),
            RecordingMode::Camera => CaptureSource::Camera(CameraSource::default()),
        }
    }

    /// Parse a picker tag in the context of a mode
    ///
    /// The same tag space is not shared between modes, so `"front"` is
    /// only meaningful for camera sessions.
    pub fn parse(mode: RecordingMode, tag: &str) -> Option<Self> {
        match mode {
            RecordingMode::Screen => match tag {
                "entire" => Some(CaptureSource::Screen(ScreenSource::Entire)),
                "window" => Some(CaptureSource::Screen(ScreenSource::Window)),
                "tab" => Some(CaptureSource::Screen(ScreenSource::Tab)),
                _ => None,
            },
            RecordingMode::Camera => match tag {
                "default" => Some(CaptureSource::Camera(CameraSource::Default)),
                "front" => Some(CaptureSource::Camera(CameraSource::Front)),
                "back" => Some(CaptureSource::Camera(CameraSource::Back)),
                _ => None,
            },
        }
    }

    /// Mode this source belongs to
    pub fn mode(&self) -> RecordingMode {
        match self {
            CaptureSource::Screen(_) => RecordingMode::Screen,
            CaptureSource::Camera(_) => RecordingMode::Camera,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CaptureSource::Screen(s) => s.tag(),
            CaptureSource::Camera(c) => c.tag(),
        }
    }
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.mode(), self.tag())
    }
}

/// Settings locked for the duration of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSettings {
    /// Whether the microphone is captured alongside the source
    pub microphone_enabled: bool,

    /// Screen or camera target
    pub source: CaptureSource,

    /// Output quality preset
    pub quality: VideoQuality,
}

impl RecordingSettings {
    /// Defaults for a freshly opened modal
    pub fn for_mode(mode: RecordingMode) -> Self {
        Self {
            microphone_enabled: true,
            source: CaptureSource::default_for(mode),
            quality: VideoQuality::default(),
        }
    }
}

/// Serialisable view of a session for the UI host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub mode: RecordingMode,
    pub status: RecordingStatus,
    pub elapsed_seconds: u64,
    /// `MM:SS` rendering of `elapsed_seconds`
    pub elapsed_display: String,
    pub title: String,
    pub settings: RecordingSettings,
    /// Whether settings pickers should be disabled
    pub settings_locked: bool,
}

/// What a stopped recording amounted to
///
/// No media is produced, this only reports the session's bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSummary {
    pub session_id: Uuid,
    pub mode: RecordingMode,
    pub settings: RecordingSettings,
    /// Whole seconds counted before the stop
    pub recorded_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_follow_mode() {
        let screen = RecordingSettings::for_mode(RecordingMode::Screen);
        assert!(screen.microphone_enabled);
        assert_eq!(screen.quality, VideoQuality::FullHd1080);
        assert_eq!(screen.source, CaptureSource::Screen(ScreenSource::Entire));

        let camera = RecordingSettings::for_mode(RecordingMode::Camera);
        assert_eq!(camera.source, CaptureSource::Camera(CameraSource::Default));
    }

    #[test]
    fn test_source_tags_are_mode_scoped() {
        assert_eq!(
            CaptureSource::parse(RecordingMode::Screen, "tab"),
            Some(CaptureSource::Screen(ScreenSource::Tab))
        );
        assert_eq!(CaptureSource::parse(RecordingMode::Screen, "front"), None);
        assert_eq!(
            CaptureSource::parse(RecordingMode::Camera, "back"),
            Some(CaptureSource::Camera(CameraSource::Back))
        );
        assert_eq!(CaptureSource::parse(RecordingMode::Camera, "entire"), None);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&VideoQuality::Uhd4k).unwrap();
        assert_eq!(json, "\"4k\"");

        let settings = RecordingSettings::for_mode(RecordingMode::Camera);
        let value = serde_json::to_value(settings).unwrap();
        assert_eq!(value["microphoneEnabled"], true);
        assert_eq!(value["source"]["kind"], "camera");
        assert_eq!(value["source"]["target"], "default");
        assert_eq!(value["quality"], "1080p");
    }

    #[test]
    fn test_quality_labels() {
        assert_eq!(VideoQuality::Hd720.label(), "720p HD");
        assert_eq!(VideoQuality::Uhd4k.resolution(), (3840, 2160));
        assert_eq!(RecordingMode::Camera.title(), "Record Camera");
    }
}
