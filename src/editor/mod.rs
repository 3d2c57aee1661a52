//! Editor panel state
//!
//! Everything the editor window shows around the recording modal. None of
//! it is connected to real media; these are bounded values the UI binds to.

pub mod playback;
pub mod preview;
pub mod properties;
pub mod timeline;

pub use playback::PlaybackState;
pub use preview::PreviewZoom;
pub use properties::{PropertiesPanel, PropertiesTab, PropertyChange};
pub use timeline::TimelineState;

use crate::utils::StudioConfig;
use serde::{Deserialize, Serialize};

/// All panel state of one editor window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorWorkspace {
    pub timeline: TimelineState,
    pub playback: PlaybackState,
    pub properties: PropertiesPanel,
    pub preview_zoom: PreviewZoom,
}

impl EditorWorkspace {
    pub fn from_config(config: &StudioConfig) -> Self {
        Self {
            timeline: TimelineState::new(config.timeline_duration_secs),
            playback: PlaybackState::new(config.playback_duration_secs, config.frame_rate),
            properties: PropertiesPanel::default(),
            preview_zoom: PreviewZoom::default(),
        }
    }
}

impl Default for EditorWorkspace {
    fn default() -> Self {
        Self::from_config(&StudioConfig::default())
    }
}
