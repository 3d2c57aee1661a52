//! Preview pane zoom presets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewZoom {
    /// Scale to the pane
    #[default]
    Fit,
    /// Fixed scale in percent
    Percent(u16),
}

impl PreviewZoom {
    /// Options offered by the preview zoom picker
    pub const PRESETS: [PreviewZoom; 7] = [
        PreviewZoom::Fit,
        PreviewZoom::Percent(25),
        PreviewZoom::Percent(50),
        PreviewZoom::Percent(75),
        PreviewZoom::Percent(100),
        PreviewZoom::Percent(150),
        PreviewZoom::Percent(200),
    ];

    /// Parse a picker label such as `Fit` or `150%`
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("fit") {
            return Some(PreviewZoom::Fit);
        }
        let percent: u16 = label.strip_suffix('%')?.trim().parse().ok()?;
        let zoom = PreviewZoom::Percent(percent);
        Self::PRESETS.contains(&zoom).then_some(zoom)
    }

    pub fn label(&self) -> String {
        match self {
            PreviewZoom::Fit => "Fit".to_string(),
            PreviewZoom::Percent(p) => format!("{}%", p),
        }
    }

    /// Scale factor, `None` when it depends on the pane size
    pub fn scale(&self) -> Option<f64> {
        match self {
            PreviewZoom::Fit => None,
            PreviewZoom::Percent(p) => Some(*p as f64 / 100.0),
        }
    }
}
