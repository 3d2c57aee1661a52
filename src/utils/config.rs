//! Studio configuration
//!
//! Read from a JSON file whose path is given by `STUDIO_RECORDER_CONFIG`.
//! Every field has a default, so a partial file (or none) is fine.

use super::error::{AppError, AppResult};
use crate::recorder::{RecordingMode, RecordingSettings, VideoQuality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "STUDIO_RECORDER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudioConfig {
    /// Period of the recording tick in milliseconds
    pub tick_interval_ms: u64,

    /// Mode the recording modal opens in when none is requested
    pub default_mode: RecordingMode,

    pub default_quality: VideoQuality,

    pub microphone_enabled: bool,

    /// Length of the timeline strip
    pub timeline_duration_secs: f64,

    /// Length of the clip shown by the playback controls
    pub playback_duration_secs: f64,

    /// Frames per second used for `MM:SS:FF` timecodes
    pub frame_rate: u32,

    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            default_mode: RecordingMode::Screen,
            default_quality: VideoQuality::FullHd1080,
            microphone_enabled: true,
            timeline_duration_secs: 120.0,
            playback_duration_secs: 45.0,
            frame_rate: 30,
            log_filter: "studio_recorder=debug".to_string(),
        }
    }
}

impl StudioConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: StudioConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `STUDIO_RECORDER_CONFIG`, or defaults when it is unset
    pub fn from_env() -> AppResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config("tickIntervalMs must be positive".to_string()));
        }
        if self.frame_rate == 0 {
            return Err(AppError::Config("frameRate must be positive".to_string()));
        }
        if !(self.timeline_duration_secs > 0.0) {
            return Err(AppError::Config(
                "timelineDurationSecs must be positive".to_string(),
            ));
        }
        if !(self.playback_duration_secs > 0.0) {
            return Err(AppError::Config(
                "playbackDurationSecs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Settings a freshly opened modal starts with
    pub fn recording_settings(&self, mode: RecordingMode) -> RecordingSettings {
        RecordingSettings {
            microphone_enabled: self.microphone_enabled,
            quality: self.default_quality,
            ..RecordingSettings::for_mode(mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("studio.json");
        fs::write(&path, r#"{ "frameRate": 24, "defaultQuality": "4k" }"#).unwrap();

        let config = StudioConfig::load(&path).unwrap();
        assert_eq!(config.frame_rate, 24);
        assert_eq!(config.default_quality, VideoQuality::Uhd4k);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.timeline_duration_secs, 120.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("studio.json");
        fs::write(&path, r#"{ "tickIntervalMs": 0 }"#).unwrap();

        let err = StudioConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_malformed_and_missing_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            StudioConfig::load(&path),
            Err(AppError::Serialization(_))
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(StudioConfig::load(&missing), Err(AppError::Io(_))));
    }

    #[test]
    fn test_recording_settings_from_config() {
        let config = StudioConfig {
            microphone_enabled: false,
            default_quality: VideoQuality::Hd720,
            ..StudioConfig::default()
        };
        let settings = config.recording_settings(RecordingMode::Camera);
        assert!(!settings.microphone_enabled);
        assert_eq!(settings.quality, VideoQuality::Hd720);
        assert_eq!(settings.source.mode(), RecordingMode::Camera);
    }
}
