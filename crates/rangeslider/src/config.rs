//! Slider configuration.
//!
//! [`SliderConfig`] is the whole public configuration surface. It is plain
//! data: hosts build it in code or load it from JSON/TOML, and may replace it
//! on every update cycle.
//!
//! # Example
//!
//! ```
//! use rangeslider::{AnimationType, SliderConfig};
//!
//! let config = SliderConfig::from_json(
//!     r##"{"leftValue": 20, "rightValue": 80, "maximumValue": 100,
//!         "animateTransitions": true, "animationType": "spring"}"##,
//! ).unwrap();
//! assert_eq!(config.right_value, 80.0);
//! assert_eq!(config.animation_type, AnimationType::Spring);
//! ```

use crate::error::ConfigError;
use crate::range::ValueRange;
use crate::thumb::{Thumb, TransitionPolicy};
use rangeslider_core::{Color, Easing, Size};
use serde::{Deserialize, Serialize};

/// Default spring tension.
pub const DEFAULT_TENSION: f64 = 100.0;
/// Default spring friction.
pub const DEFAULT_FRICTION: f64 = 7.0;
/// Default timing duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 150.0;

/// How externally supplied values are animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Tension/friction spring
    Spring,
    /// Fixed-duration eased transition
    #[default]
    Timing,
}

impl AnimationType {
    /// Merge `overrides` over this policy's defaults.
    #[must_use]
    pub fn resolve(self, overrides: &AnimationConfig) -> TransitionPolicy {
        match self {
            Self::Spring => TransitionPolicy::Spring {
                tension: overrides.tension.unwrap_or(DEFAULT_TENSION),
                friction: overrides.friction.unwrap_or(DEFAULT_FRICTION),
            },
            Self::Timing => TransitionPolicy::Timing {
                duration_ms: overrides.duration.unwrap_or(DEFAULT_DURATION_MS),
                delay_ms: overrides.delay.unwrap_or(0.0),
                easing: overrides.easing.unwrap_or(Easing::EaseInOut),
            },
        }
    }
}

/// Caller overrides for the transition defaults.
///
/// Fields that do not apply to the selected [`AnimationType`] are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Spring friction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f64>,
    /// Spring tension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Timing duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Timing delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Timing easing curve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

/// Range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Initial/controlled value of the left thumb
    pub left_value: f32,
    /// Initial/controlled value of the right thumb
    pub right_value: f32,
    /// Lower bound of the range
    pub minimum_value: f32,
    /// Upper bound of the range
    pub maximum_value: f32,
    /// Step increment (0 = continuous)
    pub step: f32,
    /// Ignore drags
    pub disabled: bool,
    /// Track color left of the left thumb
    #[serde(with = "hex_color")]
    pub minimum_track_tint_color: Color,
    /// Track color right of the left thumb
    #[serde(with = "hex_color")]
    pub maximum_track_tint_color: Color,
    /// Thumb color
    #[serde(with = "hex_color")]
    pub thumb_tint_color: Color,
    /// Size of the invisible touch target around each thumb
    pub thumb_touch_size: Size,
    /// Visible thumb size
    pub thumb_size: Size,
    /// Visible track height
    pub track_height: f32,
    /// Paint the touch surface and touch rectangle
    pub debug_touch_area: bool,
    /// Animate externally supplied value changes
    pub animate_transitions: bool,
    /// Transition kind when animating
    pub animation_type: AnimationType,
    /// Overrides for the transition defaults
    pub animation_config: AnimationConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            left_value: 0.2,
            right_value: 0.5,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            disabled: false,
            minimum_track_tint_color: Color::from_rgb8(0x3f, 0x3f, 0x3f),
            maximum_track_tint_color: Color::from_rgb8(0xb3, 0xb3, 0xb3),
            thumb_tint_color: Color::from_rgb8(0x34, 0x34, 0x34),
            thumb_touch_size: Size::square(40.0),
            thumb_size: Size::square(20.0),
            track_height: 4.0,
            debug_touch_area: false,
            animate_transitions: false,
            animation_type: AnimationType::Timing,
            animation_config: AnimationConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Load and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the range, thumb values and sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.range()?;
        for (thumb, value) in [
            (Thumb::Left, self.left_value),
            (Thumb::Right, self.right_value),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ThumbValue { thumb, value });
            }
        }
        let Size { width, height } = self.thumb_touch_size;
        if !is_usable_size(self.thumb_touch_size) {
            return Err(ConfigError::TouchSize { width, height });
        }
        let Size { width, height } = self.thumb_size;
        if !is_usable_size(self.thumb_size) {
            return Err(ConfigError::ThumbSize { width, height });
        }
        if !is_usable_length(self.track_height) {
            return Err(ConfigError::TrackHeight(self.track_height));
        }
        Ok(())
    }

    /// Validated value range.
    pub fn range(&self) -> Result<ValueRange, ConfigError> {
        Ok(ValueRange::new(
            self.minimum_value,
            self.maximum_value,
            self.step,
        )?)
    }

    /// Transition policy with overrides applied.
    #[must_use]
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.animation_type.resolve(&self.animation_config)
    }
}

fn is_usable_length(length: f32) -> bool {
    length.is_finite() && length >= 0.0
}

fn is_usable_size(size: Size) -> bool {
    is_usable_length(size.width) && is_usable_length(size.height)
}

/// Parse a tint color from a hex string.
pub fn parse_tint(value: &str) -> Result<Color, ConfigError> {
    Color::from_hex(value).map_err(|source| ConfigError::Color {
        value: value.to_string(),
        source,
    })
}

mod hex_color {
    use rangeslider_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_tint(&value).map_err(de::Error::custom)
    }
}
