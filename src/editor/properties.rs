//! Properties inspector state
//!
//! Transform and effect controls are plain bounded values. Sliders clamp to
//! their range and snap to their step; numeric inputs are unbounded.

use serde::{Deserialize, Serialize};

/// Range and granularity of a slider control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into range, snapped to the nearest step from `min`
    pub fn apply(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Round away float noise from fractional steps such as 0.1
        let snapped = (snapped * 1e6).round() / 1e6;
        snapped.clamp(self.min, self.max)
    }
}

pub const OPACITY_RANGE: SliderRange = SliderRange::new(0.0, 100.0, 1.0);
pub const ADJUSTMENT_RANGE: SliderRange = SliderRange::new(-100.0, 100.0, 1.0);
pub const BLUR_RANGE: SliderRange = SliderRange::new(0.0, 20.0, 0.1);
pub const HUE_RANGE: SliderRange = SliderRange::new(0.0, 360.0, 1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertiesTab {
    #[default]
    Transform,
    Effects,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformProperties {
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub blend_mode: BlendMode,
}

impl Default for TransformProperties {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            width: 100.0,
            height: 100.0,
            rotation: 0.0,
            opacity: 100.0,
            blend_mode: BlendMode::Normal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectProperties {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub blur: f64,
    pub hue: f64,
    pub black_and_white: bool,
    pub invert: bool,
}

/// A single inspector edit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "camelCase")]
pub enum PropertyChange {
    PositionX(f64),
    PositionY(f64),
    Width(f64),
    Height(f64),
    Rotation(f64),
    Opacity(f64),
    BlendMode(BlendMode),
    Brightness(f64),
    Contrast(f64),
    Saturation(f64),
    Blur(f64),
    Hue(f64),
    BlackAndWhite(bool),
    Invert(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesPanel {
    pub active_tab: PropertiesTab,
    pub transform: TransformProperties,
    pub effects: EffectProperties,
}

impl PropertiesPanel {
    pub fn select_tab(&mut self, tab: PropertiesTab) {
        self.active_tab = tab;
    }

    /// Apply an edit, clamping slider values
    pub fn apply(&mut self, change: PropertyChange) {
        let t = &mut self.transform;
        let e = &mut self.effects;
        match change {
            PropertyChange::PositionX(v) => t.position_x = v,
            PropertyChange::PositionY(v) => t.position_y = v,
            PropertyChange::Width(v) => t.width = v,
            PropertyChange::Height(v) => t.height = v,
            PropertyChange::Rotation(v) => t.rotation = v,
            PropertyChange::Opacity(v) => t.opacity = OPACITY_RANGE.apply(v),
            PropertyChange::BlendMode(mode) => t.blend_mode = mode,
            PropertyChange::Brightness(v) => e.brightness = ADJUSTMENT_RANGE.apply(v),
            PropertyChange::Contrast(v) => e.contrast = ADJUSTMENT_RANGE.apply(v),
            PropertyChange::Saturation(v) => e.saturation = ADJUSTMENT_RANGE.apply(v),
            PropertyChange::Blur(v) => e.blur = BLUR_RANGE.apply(v),
            PropertyChange::Hue(v) => e.hue = HUE_RANGE.apply(v),
            PropertyChange::BlackAndWhite(on) => e.black_and_white = on,
            PropertyChange::Invert(on) => e.invert = on,
        }
        tracing::debug!(?change, "Property changed");
    }

    pub fn opacity_label(&self) -> String {
        format!("{}%", self.transform.opacity)
    }

    pub fn hue_label(&self) -> String {
        format!("{}°", self.effects.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let panel = PropertiesPanel::default();
        assert_eq!(panel.active_tab, PropertiesTab::Transform);
        assert_eq!(panel.transform.width, 100.0);
        assert_eq!(panel.opacity_label(), "100%");
        assert_eq!(panel.hue_label(), "0°");
        assert!(!panel.effects.invert);
    }

    #[test]
    fn test_sliders_clamp_and_snap() {
        let mut panel = PropertiesPanel::default();
        panel.apply(PropertyChange::Opacity(140.0));
        panel.apply(PropertyChange::Brightness(-250.0));
        panel.apply(PropertyChange::Contrast(12.4));
        panel.apply(PropertyChange::Blur(3.46));
        panel.apply(PropertyChange::Hue(400.0));

        assert_eq!(panel.transform.opacity, 100.0);
        assert_eq!(panel.effects.brightness, -100.0);
        assert_eq!(panel.effects.contrast, 12.0);
        assert_eq!(panel.effects.blur, 3.5);
        assert_eq!(panel.effects.hue, 360.0);
    }

    #[test]
    fn test_inputs_are_unbounded() {
        let mut panel = PropertiesPanel::default();
        panel.apply(PropertyChange::PositionX(-640.0));
        panel.apply(PropertyChange::Rotation(720.0));
        panel.apply(PropertyChange::BlendMode(BlendMode::Overlay));
        panel.apply(PropertyChange::BlackAndWhite(true));

        assert_eq!(panel.transform.position_x, -640.0);
        assert_eq!(panel.transform.rotation, 720.0);
        assert_eq!(panel.transform.blend_mode, BlendMode::Overlay);
        assert!(panel.effects.black_and_white);
    }

    #[test]
    fn test_change_deserializes() {
        let change: PropertyChange =
            serde_json::from_str(r#"{ "property": "saturation", "value": 25 }"#).unwrap();
        assert_eq!(change, PropertyChange::Saturation(25.0));

        let change: PropertyChange =
            serde_json::from_str(r#"{ "property": "blendMode", "value": "multiply" }"#).unwrap();
        assert_eq!(change, PropertyChange::BlendMode(BlendMode::Multiply));
    }
}
