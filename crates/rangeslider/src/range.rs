//! Value mapping between the domain range and pixel offsets.
//!
//! A thumb travels along `track_length = container.width - thumb.width`
//! pixels. Offset `0` is the minimum, `track_length` the maximum.

use crate::error::RangeError;
use serde::{Deserialize, Serialize};

/// Domain range of a slider with optional step quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f32,
    max: f32,
    step: f32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}

impl ValueRange {
    /// Continuous `[0, 1]` range.
    pub const UNIT: Self = Self {
        min: 0.0,
        max: 1.0,
        step: 0.0,
    };

    /// Create a validated range.
    ///
    /// `min == max` is accepted; ratio computations on such a range
    /// report [`RangeError::Degenerate`].
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite);
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        if step.is_nan() || step < 0.0 || step.is_infinite() {
            return Err(RangeError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Minimum value.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Maximum value.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Step increment (0.0 = continuous).
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// `max - min`.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether `min == max`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Clamp a value into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Snap a value to the nearest step offset from `min`, then clamp.
    #[must_use]
    pub fn quantize(&self, value: f32) -> f32 {
        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            self.clamp(steps.mul_add(self.step, self.min))
        } else {
            self.clamp(value)
        }
    }

    /// Normalized position of `value`: `(value - min) / (max - min)`.
    ///
    /// Not clamped; values outside the range give ratios outside `[0, 1]`.
    pub fn ratio_of(&self, value: f32) -> Result<f32, RangeError> {
        if self.is_degenerate() {
            return Err(RangeError::Degenerate(self.min));
        }
        Ok((value - self.min) / self.span())
    }

    /// Pixel offset of a thumb showing `value`.
    pub fn pixel_offset_of(&self, value: f32, track_length: f32) -> Result<f32, RangeError> {
        Ok(self.ratio_of(value)? * track_length)
    }

    /// Domain value for a thumb at pixel `offset`.
    ///
    /// With a step the linear value is snapped first; clamping to
    /// `[min, max]` always happens last. A non-positive track length (not
    /// yet measured) maps every offset to `min`.
    #[must_use]
    pub fn value_from_pixel(&self, offset: f32, track_length: f32) -> f32 {
        let ratio = if track_length > 0.0 {
            offset / track_length
        } else {
            0.0
        };
        let linear = ratio * self.span();

        if self.step > 0.0 {
            let snapped = (linear / self.step).round().mul_add(self.step, self.min);
            self.clamp(snapped)
        } else {
            self.clamp(self.min + linear)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_range_default_is_unit() {
        let range = ValueRange::default();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 1.0);
        assert_eq!(range.step(), 0.0);
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert_eq!(
            ValueRange::new(2.0, 1.0, 0.0),
            Err(RangeError::Inverted { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn test_range_rejects_bad_step() {
        assert!(matches!(
            ValueRange::new(0.0, 1.0, -0.1),
            Err(RangeError::InvalidStep(_))
        ));
        assert!(matches!(
            ValueRange::new(0.0, 1.0, f32::NAN),
            Err(RangeError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_range_rejects_non_finite() {
        assert_eq!(
            ValueRange::new(f32::NEG_INFINITY, 1.0, 0.0),
            Err(RangeError::NonFinite)
        );
    }

    #[test]
    fn test_range_accepts_degenerate() {
        let range = ValueRange::new(5.0, 5.0, 0.0).unwrap();
        assert!(range.is_degenerate());
        assert_eq!(range.ratio_of(5.0), Err(RangeError::Degenerate(5.0)));
        assert!(range.pixel_offset_of(5.0, 100.0).is_err());
    }

    // =========================================================================
    // Mapping Tests
    // =========================================================================

    #[test]
    fn test_ratio_of() {
        let range = ValueRange::new(10.0, 20.0, 0.0).unwrap();
        assert_eq!(range.ratio_of(15.0), Ok(0.5));
        assert_eq!(range.ratio_of(10.0), Ok(0.0));
        assert_eq!(range.ratio_of(25.0), Ok(1.5));
    }

    #[test]
    fn test_pixel_offset_of_midpoint() {
        // 300 wide container, 20 wide thumb
        let offset = ValueRange::UNIT.pixel_offset_of(0.5, 280.0).unwrap();
        assert_eq!(offset, 140.0);
    }

    #[test]
    fn test_pixel_offset_of_endpoints() {
        let range = ValueRange::new(-50.0, 50.0, 0.0).unwrap();
        assert_eq!(range.pixel_offset_of(-50.0, 280.0), Ok(0.0));
        assert_eq!(range.pixel_offset_of(50.0, 280.0), Ok(280.0));
    }

    #[test]
    fn test_value_from_pixel_drag_scenario() {
        let value = ValueRange::UNIT.value_from_pixel(50.0 + 30.0, 280.0);
        assert!((value - 80.0 / 280.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_from_pixel_clamps() {
        assert_eq!(ValueRange::UNIT.value_from_pixel(-40.0, 280.0), 0.0);
        assert_eq!(ValueRange::UNIT.value_from_pixel(400.0, 280.0), 1.0);
    }

    #[test]
    fn test_value_from_pixel_with_step() {
        let range = ValueRange::new(0.0, 100.0, 10.0).unwrap();
        // ~45.4% of the track rounds up to 50
        assert_eq!(range.value_from_pixel(127.0, 280.0), 50.0);
        // 43% rounds down to 40
        assert_eq!(range.value_from_pixel(120.4, 280.0), 40.0);
    }

    #[test]
    fn test_value_from_pixel_step_clamped_after_snapping() {
        // 7 does not divide 20: the snap past max is clamped back to max
        let range = ValueRange::new(0.0, 20.0, 7.0).unwrap();
        assert_eq!(range.value_from_pixel(280.0, 280.0), 20.0);
    }

    #[test]
    fn test_value_from_pixel_unmeasured_track() {
        let range = ValueRange::new(3.0, 9.0, 0.0).unwrap();
        assert_eq!(range.value_from_pixel(50.0, 0.0), 3.0);
        assert_eq!(range.value_from_pixel(50.0, -20.0), 3.0);
    }

    #[test]
    fn test_quantize() {
        let range = ValueRange::new(1.0, 2.0, 0.25).unwrap();
        assert_eq!(range.quantize(1.3), 1.25);
        assert_eq!(range.quantize(1.9), 2.0);
        assert_eq!(range.quantize(5.0), 2.0);
        assert_eq!(ValueRange::UNIT.quantize(0.33), 0.33);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_without_step(
            min in -1000.0f32..1000.0,
            span in 0.5f32..1000.0,
            t in 0.0f32..=1.0,
            track in 10.0f32..2000.0,
        ) {
            let range = ValueRange::new(min, min + span, 0.0).unwrap();
            let v = t.mul_add(span, min);
            let offset = range.pixel_offset_of(v, track).unwrap();
            let back = range.value_from_pixel(offset, track);
            prop_assert!((back - v).abs() <= span * 1e-4 + 1e-3, "{} vs {}", back, v);
        }

        #[test]
        fn prop_offset_monotonic(
            a in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
            track in 0.0f32..2000.0,
        ) {
            let range = ValueRange::new(0.0, 1.0, 0.0).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let off_lo = range.pixel_offset_of(lo, track).unwrap();
            let off_hi = range.pixel_offset_of(hi, track).unwrap();
            prop_assert!(off_lo <= off_hi);
        }

        #[test]
        fn prop_endpoints_map_to_track_ends(
            min in -100.0f32..100.0,
            span in 1.0f32..500.0,
            container in 40.0f32..1000.0,
            thumb in 0.0f32..40.0,
        ) {
            let range = ValueRange::new(min, min + span, 0.0).unwrap();
            let track = container - thumb;
            prop_assert_eq!(range.pixel_offset_of(min, track).unwrap(), 0.0);
            let end = range.pixel_offset_of(min + span, track).unwrap();
            prop_assert!((end - track).abs() <= track * 1e-4);
        }

        #[test]
        fn prop_stepped_values_are_step_multiples_in_range(
            min in -100i32..100,
            step in 1u32..20,
            n in 1u32..50,
            offset in -500.0f32..3000.0,
            track in 1.0f32..2000.0,
        ) {
            let min = min as f32;
            let step = step as f32;
            let max = step.mul_add(n as f32, min);
            let range = ValueRange::new(min, max, step).unwrap();
            let value = range.value_from_pixel(offset, track);
            prop_assert!(value >= min && value <= max);
            let steps = (value - min) / step;
            prop_assert!((steps - steps.round()).abs() < 1e-3, "{} is not a step multiple", value);
        }
    }
}
