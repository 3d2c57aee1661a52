//! Playback transport state: play/pause and the timecode readout.

use crate::utils::time::format_timecode;
use serde::{Deserialize, Serialize};

/// Frame rate assumed by the timecode display
pub const DEFAULT_FRAME_RATE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    is_playing: bool,
    current_time_secs: f64,
    duration_secs: f64,
    frame_rate: u32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(45.0, DEFAULT_FRAME_RATE)
    }
}

impl PlaybackState {
    pub fn new(duration_secs: f64, frame_rate: u32) -> Self {
        Self {
            is_playing: false,
            current_time_secs: 0.0,
            duration_secs: duration_secs.max(0.0),
            frame_rate: frame_rate.max(1),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time_secs(&self) -> f64 {
        self.current_time_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Flip between playing and paused, returning the new state
    pub fn toggle_play(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        tracing::debug!(playing = self.is_playing, "Playback toggled");
        self.is_playing
    }

    /// Move the current time, clamped to `[0, duration]`
    pub fn seek(&mut self, time_secs: f64) -> f64 {
        let time = if time_secs.is_nan() { 0.0 } else { time_secs };
        self.current_time_secs = time.clamp(0.0, self.duration_secs);
        self.current_time_secs
    }

    /// `MM:SS:FF` for the current time
    pub fn current_timecode(&self) -> String {
        format_timecode(self.current_time_secs, self.frame_rate)
    }

    /// `MM:SS:FF` for the clip length
    pub fn duration_timecode(&self) -> String {
        format_timecode(self.duration_secs, self.frame_rate)
    }
}
