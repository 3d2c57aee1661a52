//! Editor panel commands
//!
//! Thin bindings from UI events to the bounded panel values.

use crate::editor::{EditorWorkspace, PreviewZoom, PropertiesTab, PropertyChange};
use crate::utils::{ErrorResponse, StudioConfig};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Application state for the editor panels
#[derive(Default)]
pub struct EditorState {
    pub workspace: Mutex<EditorWorkspace>,
}

impl EditorState {
    pub fn from_config(config: &StudioConfig) -> Self {
        Self {
            workspace: Mutex::new(EditorWorkspace::from_config(config)),
        }
    }
}

/// Zoom readout after a zoom change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineZoom {
    pub zoom: f64,
    pub percent: u32,
    pub width_px: f64,
}

/// Playhead readout after a seek
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playhead {
    pub time_secs: f64,
    pub offset_px: f64,
    pub label: String,
}

/// Timecode pair shown next to the transport buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timecode {
    pub is_playing: bool,
    pub current: String,
    pub duration: String,
}

fn zoom_readout(workspace: &EditorWorkspace) -> TimelineZoom {
    TimelineZoom {
        zoom: workspace.timeline.zoom(),
        percent: workspace.timeline.zoom_percent(),
        width_px: workspace.timeline.width_px(),
    }
}

fn playhead_readout(workspace: &EditorWorkspace) -> Playhead {
    Playhead {
        time_secs: workspace.timeline.playhead_secs(),
        offset_px: workspace.timeline.playhead_px(),
        label: workspace.timeline.playhead_label(),
    }
}

fn timecode_readout(workspace: &EditorWorkspace) -> Timecode {
    Timecode {
        is_playing: workspace.playback.is_playing(),
        current: workspace.playback.current_timecode(),
        duration: workspace.playback.duration_timecode(),
    }
}

pub fn zoom_timeline_in(state: &EditorState) -> TimelineZoom {
    let mut workspace = state.workspace.lock();
    workspace.timeline.zoom_in();
    zoom_readout(&workspace)
}

pub fn zoom_timeline_out(state: &EditorState) -> TimelineZoom {
    let mut workspace = state.workspace.lock();
    workspace.timeline.zoom_out();
    zoom_readout(&workspace)
}

/// Move the timeline playhead to a time in seconds
pub fn seek_timeline(state: &EditorState, time_secs: f64) -> Playhead {
    let mut workspace = state.workspace.lock();
    workspace.timeline.seek(time_secs);
    playhead_readout(&workspace)
}

/// Move the timeline playhead from a click position
pub fn click_timeline(state: &EditorState, x_px: f64, scroll_px: f64) -> Playhead {
    let mut workspace = state.workspace.lock();
    workspace.timeline.click(x_px, scroll_px);
    playhead_readout(&workspace)
}

pub fn toggle_playback(state: &EditorState) -> Timecode {
    let mut workspace = state.workspace.lock();
    workspace.playback.toggle_play();
    timecode_readout(&workspace)
}

pub fn get_playback_timecode(state: &EditorState) -> Timecode {
    timecode_readout(&state.workspace.lock())
}

pub fn set_property(state: &EditorState, change: PropertyChange) -> EditorWorkspace {
    let mut workspace = state.workspace.lock();
    workspace.properties.apply(change);
    workspace.clone()
}

pub fn select_properties_tab(state: &EditorState, tab: PropertiesTab) {
    state.workspace.lock().properties.select_tab(tab);
}

/// Pick a preview zoom by its label (`Fit`, `50%`, ...)
pub fn set_preview_zoom(state: &EditorState, label: String) -> Result<PreviewZoom, ErrorResponse> {
    let zoom = PreviewZoom::parse(&label).ok_or_else(|| ErrorResponse {
        code: "INVALID_ARGUMENT".to_string(),
        message: format!("Unknown preview zoom: {}", label),
    })?;
    state.workspace.lock().preview_zoom = zoom;
    Ok(zoom)
}

pub fn get_editor_state(state: &EditorState) -> EditorWorkspace {
    state.workspace.lock().clone()
}
