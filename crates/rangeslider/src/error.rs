//! Error types for the range slider.

use crate::thumb::Thumb;
use rangeslider_core::ColorParseError;
use thiserror::Error;

/// Invalid or unusable value range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// `min == max`, so no ratio can be computed.
    #[error("degenerate range: minimum and maximum are both {0}")]
    Degenerate(f32),

    /// `min > max`.
    #[error("inverted range: minimum {min} is greater than maximum {max}")]
    Inverted {
        /// Configured minimum
        min: f32,
        /// Configured maximum
        max: f32,
    },

    /// Negative or NaN step.
    #[error("invalid step {0}: must be zero or positive")]
    InvalidStep(f32),

    /// NaN or infinite bound.
    #[error("range bounds must be finite")]
    NonFinite,
}

/// Failure to load or apply a slider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON document.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML document.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unparseable tint color.
    #[error("invalid color {value:?}: {source}")]
    Color {
        /// The offending string
        value: String,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },

    /// Range bounds or step rejected.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Touch target with a negative or non-finite dimension.
    #[error("invalid thumb touch size {width}x{height}")]
    TouchSize {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },

    /// NaN or infinite thumb value.
    #[error("{thumb:?} thumb value {value} is not finite")]
    ThumbValue {
        /// Offending thumb
        thumb: Thumb,
        /// Configured value
        value: f32,
    },

    /// Thumb with a negative or non-finite dimension.
    #[error("invalid thumb size {width}x{height}")]
    ThumbSize {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },

    /// Negative or non-finite track height.
    #[error("invalid track height {0}")]
    TrackHeight(f32),
}
