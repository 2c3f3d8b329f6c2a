use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Distance of one arrow-key step, in pixels.
const DEFAULT_KEY_STEP_PX: f64 = 100.0;
/// Duration of the eased keyboard transition.
const DEFAULT_TRANSITION_MS: u32 = 400;
/// Control points of the keyboard easing curve.
const DEFAULT_EASING: [f64; 4] = [0.25, 0.46, 0.45, 0.94];
/// Pointer travel beyond which a drag swallows the click that ends it.
const DEFAULT_CLICK_SLOP_PX: f64 = 5.0;

/// Eased transition applied to discrete scroll steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub duration_ms: u32,
    /// `cubic-bezier(x1, y1, x2, y2)` control points.
    pub easing: [f64; 4],
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: DEFAULT_EASING,
        }
    }
}

impl Transition {
    /// CSS `transition` value animating the transform property.
    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.easing;
        format!(
            "transform {}ms cubic-bezier({}, {}, {}, {})",
            self.duration_ms, x1, y1, x2, y2
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub key_step_px: f64,
    pub transition: Transition,
    /// Clamp `scroll_by` to `[0, max_scroll]` like drag and wheel input.
    pub clamp_discrete_scroll: bool,
    pub click_slop_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            key_step_px: DEFAULT_KEY_STEP_PX,
            transition: Transition::default(),
            clamp_discrete_scroll: true,
            click_slop_px: DEFAULT_CLICK_SLOP_PX,
        }
    }
}

impl CarouselConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("key_step_px", self.key_step_px),
            ("click_slop_px", self.click_slop_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}
