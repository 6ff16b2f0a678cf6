//! Per-call layout configuration.
//!
//! [`LayoutConfig`] is an immutable value: every setter consumes `self` and
//! returns the updated copy, so a configuration change is always "construct a
//! new config". The engine never mutates it.
//!
//! # Example
//!
//! ```
//! use zencollage::{FloorPolicy, LayoutConfig};
//!
//! let config = LayoutConfig::default()
//!     .spacing(12.0)
//!     .margin(0.0)
//!     .allow_stacking(true)
//!     .floor_policy(FloorPolicy::Uniform);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.spacing, 12.0);
//! ```

use crate::engine::LayoutError;

/// Preferred stacking axis, carried through for the rendering collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackDirection {
    #[default]
    Auto,
    Horizontal,
    Vertical,
}

/// How row-based strategies enforce `min_image_size` after scaling a row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorPolicy {
    /// Multiply both dimensions by `min_image_size / min(width, height)`.
    /// Ratio-exact.
    #[default]
    Uniform,
    /// Clamp each dimension to `min_image_size` independently.
    ///
    /// Distorts images whose shorter side falls below the floor; such
    /// layouts fail validation and are replaced by the proportional grid.
    PerAxis,
}

/// Spacing, margins, and size limits for one layout call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Gap between neighbouring placements. `>= 0`.
    pub spacing: f64,
    /// Empty border kept around the canvas edge. `>= 0`.
    pub margin: f64,
    /// Smallest rendered dimension a strategy aims for. `> 0`.
    pub min_image_size: f64,
    /// Lower bound on the flow row scale factor, in `(0, 1]`.
    pub max_scale_down: f64,
    /// Emit increasing `order` values and let organic stacking jitter.
    pub allow_stacking: bool,
    pub stack_direction: StackDirection,
    pub balance_composition: bool,
    /// Sort images by intrinsic area, largest first, before packing.
    pub prioritize_large_images: bool,
    pub floor_policy: FloorPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            margin: 20.0,
            min_image_size: 100.0,
            max_scale_down: 0.5,
            allow_stacking: false,
            stack_direction: StackDirection::Auto,
            balance_composition: true,
            prioritize_large_images: false,
            floor_policy: FloorPolicy::Uniform,
        }
    }
}

impl LayoutConfig {
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn min_image_size(mut self, min_image_size: f64) -> Self {
        self.min_image_size = min_image_size;
        self
    }

    pub fn max_scale_down(mut self, max_scale_down: f64) -> Self {
        self.max_scale_down = max_scale_down;
        self
    }

    pub fn allow_stacking(mut self, allow: bool) -> Self {
        self.allow_stacking = allow;
        self
    }

    pub fn stack_direction(mut self, direction: StackDirection) -> Self {
        self.stack_direction = direction;
        self
    }

    pub fn balance_composition(mut self, balance: bool) -> Self {
        self.balance_composition = balance;
        self
    }

    pub fn prioritize_large_images(mut self, prioritize: bool) -> Self {
        self.prioritize_large_images = prioritize;
        self
    }

    pub fn floor_policy(mut self, policy: FloorPolicy) -> Self {
        self.floor_policy = policy;
        self
    }

    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(invalid("spacing", "must be finite and >= 0"));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(invalid("margin", "must be finite and >= 0"));
        }
        if !(self.min_image_size.is_finite() && self.min_image_size > 0.0) {
            return Err(invalid("min_image_size", "must be finite and > 0"));
        }
        if !(self.max_scale_down > 0.0 && self.max_scale_down <= 1.0) {
            return Err(invalid("max_scale_down", "must be in (0, 1]"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> LayoutError {
    LayoutError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn setters_do_not_touch_other_fields() {
        let base = LayoutConfig::default();
        let changed = base.margin(0.0);
        assert_eq!(changed.margin, 0.0);
        assert_eq!(changed.spacing, base.spacing);
        assert_eq!(base.margin, 20.0);
    }

    #[test]
    fn negative_spacing_rejected() {
        assert_eq!(
            LayoutConfig::default().spacing(-1.0).validate(),
            Err(LayoutError::InvalidConfig {
                field: "spacing",
                reason: "must be finite and >= 0"
            })
        );
    }

    #[test]
    fn nan_margin_rejected() {
        assert!(LayoutConfig::default().margin(f64::NAN).validate().is_err());
    }

    #[test]
    fn min_size_must_be_positive_and_finite() {
        assert!(LayoutConfig::default().min_image_size(0.0).validate().is_err());
        assert!(
            LayoutConfig::default()
                .min_image_size(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn max_scale_down_range() {
        assert!(LayoutConfig::default().max_scale_down(0.0).validate().is_err());
        assert!(LayoutConfig::default().max_scale_down(1.5).validate().is_err());
        assert!(LayoutConfig::default().max_scale_down(1.0).validate().is_ok());
        assert!(LayoutConfig::default().max_scale_down(f64::NAN).validate().is_err());
    }
}
