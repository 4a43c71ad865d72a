//! Measured element sizes.

use rangeslider_core::Size;
use serde::{Deserialize, Serialize};

/// Element whose size the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Whole slider container
    Container,
    /// Visible track
    Track,
    /// Visible thumb
    Thumb,
}

/// Sizes of the container, track and thumb as they become known.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasuredSizes {
    container: Option<Size>,
    track: Option<Size>,
    thumb: Option<Size>,
}

impl MeasuredSizes {
    /// Nothing measured yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container: None,
            track: None,
            thumb: None,
        }
    }

    /// Store a measurement.
    ///
    /// Returns `false` when the size equals the cached one.
    pub fn record(&mut self, dimension: Dimension, size: Size) -> bool {
        let slot = match dimension {
            Dimension::Container => &mut self.container,
            Dimension::Track => &mut self.track,
            Dimension::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            return false;
        }
        *slot = Some(size);
        true
    }

    /// Whether `dimension` has been reported.
    #[must_use]
    pub const fn is_measured(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Container => self.container.is_some(),
            Dimension::Track => self.track.is_some(),
            Dimension::Thumb => self.thumb.is_some(),
        }
    }

    /// Whether all three sizes are known.
    #[must_use]
    pub const fn all_measured(&self) -> bool {
        self.container.is_some() && self.track.is_some() && self.thumb.is_some()
    }

    /// Container size, zero until measured.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container.unwrap_or(Size::ZERO)
    }

    /// Track size, zero until measured.
    #[must_use]
    pub fn track(&self) -> Size {
        self.track.unwrap_or(Size::ZERO)
    }

    /// Thumb size, zero until measured.
    #[must_use]
    pub fn thumb(&self) -> Size {
        self.thumb.unwrap_or(Size::ZERO)
    }

    /// Pixel travel of a thumb: `container.width - thumb.width`.
    #[must_use]
    pub fn track_length(&self) -> f32 {
        self.container().width - self.thumb().width
    }
}
