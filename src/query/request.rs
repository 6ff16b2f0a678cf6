//! Parsed representation of a layout query string.

use crate::config::{FloorPolicy, LayoutConfig, StackDirection};
use crate::image::CanvasBounds;
use crate::strategy::Strategy;

/// Layout parameters parsed from a query string. `None` means "not given".
///
/// Produced by [`crate::query::parse()`].
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct LayoutRequest {
    /// `strategy`, `layout`.
    pub strategy: Option<Strategy>,
    /// `spacing`, `gap`.
    pub spacing: Option<f64>,
    /// `margin`.
    pub margin: Option<f64>,
    /// `min`, `minsize`.
    pub min_image_size: Option<f64>,
    /// `maxdown`, `maxscaledown`.
    pub max_scale_down: Option<f64>,
    /// `stacking`.
    pub allow_stacking: Option<bool>,
    /// `direction`.
    pub stack_direction: Option<StackDirection>,
    /// `balance`.
    pub balance_composition: Option<bool>,
    /// `priority=large|none`, `prioritize`.
    pub prioritize_large_images: Option<bool>,
    /// `floor`.
    pub floor_policy: Option<FloorPolicy>,
    /// `w`, `width`.
    pub canvas_width: Option<f64>,
    /// `h`, `height`.
    pub canvas_height: Option<f64>,
}

impl LayoutRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested strategy, [`Strategy::Flow`] when absent.
    pub fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or(Strategy::Flow)
    }

    /// Given values overlaid on [`LayoutConfig::default()`].
    ///
    /// Values are range-checked at parse time, but the result should still
    /// go through [`LayoutConfig::validate`] (the engine does this).
    pub fn config(&self) -> LayoutConfig {
        self.overlay(LayoutConfig::default())
    }

    /// Given values overlaid on `base`.
    pub fn overlay(&self, base: LayoutConfig) -> LayoutConfig {
        let mut c = base;
        if let Some(v) = self.spacing {
            c = c.spacing(v);
        }
        if let Some(v) = self.margin {
            c = c.margin(v);
        }
        if let Some(v) = self.min_image_size {
            c = c.min_image_size(v);
        }
        if let Some(v) = self.max_scale_down {
            c = c.max_scale_down(v);
        }
        if let Some(v) = self.allow_stacking {
            c = c.allow_stacking(v);
        }
        if let Some(v) = self.stack_direction {
            c = c.stack_direction(v);
        }
        if let Some(v) = self.balance_composition {
            c = c.balance_composition(v);
        }
        if let Some(v) = self.prioritize_large_images {
            c = c.prioritize_large_images(v);
        }
        if let Some(v) = self.floor_policy {
            c = c.floor_policy(v);
        }
        c
    }

    /// Canvas bounds, when both `w` and `h` were given.
    pub fn canvas(&self) -> Option<CanvasBounds> {
        CanvasBounds::new(self.canvas_width?, self.canvas_height?).ok()
    }
}
