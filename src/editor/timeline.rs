//! Timeline strip state: zoom, playhead and ruler geometry.

use crate::utils::time::format_ruler_time;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.5;

/// Horizontal scale at 100% zoom
pub const BASE_PIXELS_PER_SECOND: f64 = 15.0;

/// Spacing of ruler ticks in seconds
pub const RULER_INTERVAL_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Green,
    Yellow,
}

/// A colored dot pinned to the strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMarker {
    pub time_secs: f64,
    pub color: MarkerColor,
}

impl TimelineMarker {
    /// Hover text, e.g. `Marker at 0:25`
    pub fn title(&self) -> String {
        format!("Marker at {}", format_ruler_time(self.time_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineState {
    zoom: f64,
    playhead_secs: f64,
    duration_secs: f64,
    markers: Vec<TimelineMarker>,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new(120.0)
    }
}

impl TimelineState {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            zoom: 1.0,
            playhead_secs: 0.0,
            duration_secs: duration_secs.max(0.0),
            markers: vec![
                TimelineMarker {
                    time_secs: 10.0,
                    color: MarkerColor::Blue,
                },
                TimelineMarker {
                    time_secs: 25.0,
                    color: MarkerColor::Green,
                },
                TimelineMarker {
                    time_secs: 50.0,
                    color: MarkerColor::Yellow,
                },
            ],
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn playhead_secs(&self) -> f64 {
        self.playhead_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn markers(&self) -> &[TimelineMarker] {
        &self.markers
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    /// Set zoom, snapped to the step grid and clamped to range
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let snapped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
        self.zoom = snapped.clamp(MIN_ZOOM, MAX_ZOOM);
        tracing::debug!(zoom = self.zoom, "Timeline zoom");
        self.zoom
    }

    /// Zoom as a whole percentage, e.g. `150`
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn pixels_per_second(&self) -> f64 {
        BASE_PIXELS_PER_SECOND * self.zoom
    }

    /// Full strip width in pixels at the current zoom
    pub fn width_px(&self) -> f64 {
        self.duration_secs * self.pixels_per_second()
    }

    /// Move the playhead, clamped to `[0, duration]`
    pub fn seek(&mut self, time_secs: f64) -> f64 {
        let time = if time_secs.is_nan() { 0.0 } else { time_secs };
        self.playhead_secs = time.clamp(0.0, self.duration_secs);
        tracing::debug!(playhead = self.playhead_secs, "Timeline seek");
        self.playhead_secs
    }

    /// Seek from a click at `x_px` inside the viewport scrolled by `scroll_px`
    pub fn click(&mut self, x_px: f64, scroll_px: f64) -> f64 {
        let time = (x_px + scroll_px) / self.pixels_per_second();
        self.seek(time)
    }

    pub fn playhead_px(&self) -> f64 {
        self.playhead_secs * self.pixels_per_second()
    }

    pub fn playhead_label(&self) -> String {
        format_ruler_time(self.playhead_secs)
    }

    /// Ruler tick times from zero to the end, inclusive
    pub fn ruler_ticks(&self) -> Vec<f64> {
        let count = (self.duration_secs / RULER_INTERVAL_SECS).floor() as usize;
        (0..=count).map(|i| i as f64 * RULER_INTERVAL_SECS).collect()
    }

    /// Pixel offset of a time on the strip
    pub fn offset_px(&self, time_secs: f64) -> f64 {
        time_secs * self.pixels_per_second()
    }
}
