//! Reveal animation configuration.
//!
//! All tuning constants of the feature-grid entrance live here. Every field
//! has a default, so a host can override just the ones it cares about:
//!
//! ```ignore
//! use bento_landing::RevealConfig;
//!
//! let config = RevealConfig::from_json(r#"{ "rootMargin": -120, "staggerMs": 60 }"#)?;
//! assert_eq!(config.duration_ms, 500);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::Easing;

/// Tuning parameters for the one-shot staggered reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    /// Inset applied to every edge of the viewport before intersection is
    /// tested, in CSS pixels. Negative values shrink the viewport so the
    /// grid has to scroll this far in before the reveal fires.
    pub root_margin: f32,
    /// Delay between the start of consecutive cards.
    pub stagger_ms: u64,
    /// Length of each card's entrance.
    pub duration_ms: u64,
    /// Opacity while hidden.
    pub hidden_opacity: f32,
    /// Downward displacement while hidden, in CSS pixels.
    pub hidden_offset_y: f32,
    /// Scale while hidden.
    pub hidden_scale: f32,
    /// Curve applied to every card's progress.
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: -80.0,
            stagger_ms: 80,
            duration_ms: 500,
            hidden_opacity: 0.0,
            hidden_offset_y: 20.0,
            hidden_scale: 0.97,
            easing: Easing::EaseOut,
        }
    }
}

impl RevealConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("rootMargin", self.root_margin),
            ("hiddenOpacity", self.hidden_opacity),
            ("hiddenOffsetY", self.hidden_offset_y),
            ("hiddenScale", self.hidden_scale),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.hidden_opacity) {
            return Err(ConfigError::Opacity(self.hidden_opacity));
        }
        if self.hidden_scale <= 0.0 {
            return Err(ConfigError::Scale(self.hidden_scale));
        }

        Ok(())
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
