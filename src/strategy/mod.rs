//! Placement strategies.
//!
//! Every strategy implements the same contract: take the images, the
//! configuration, and the canvas, and return one [`PlacementRect`] per image
//! in emission order. Strategies are deterministic greedy heuristics, not
//! optimizers; only [`Strategy::Organic`] draws from the random source.
//!
//! | Strategy           | Ratio-exact                                  |
//! |--------------------|----------------------------------------------|
//! | `flow`             | yes, unless [`FloorPolicy::PerAxis`] engages |
//! | `masonry`          | yes                                          |
//! | `proportional-grid`| yes (the engine's fallback)                  |
//! | `aspect-grouped`   | same as `flow`                               |
//! | `organic`          | yes (moves rects, never resizes them)        |
//!
//! [`FloorPolicy::PerAxis`]: crate::FloorPolicy::PerAxis

mod flow;
mod grid;
mod grouped;
mod masonry;
mod organic;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

/// One of the five interchangeable packing algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Left-to-right rows that wrap and are scaled to the available width.
    Flow,
    /// Greedy shortest-column placement.
    Masonry,
    /// Fixed row/column grid, each image centered in its cell.
    ProportionalGrid,
    /// Flow rows per aspect group, groups stacked vertically.
    AspectGrouped,
    /// Masonry with bounded random jitter, clamped to the canvas.
    Organic,
}

impl Strategy {
    /// All strategies in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Flow,
        Self::Masonry,
        Self::ProportionalGrid,
        Self::AspectGrouped,
        Self::Organic,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Masonry => "masonry",
            Self::ProportionalGrid => "proportional-grid",
            Self::AspectGrouped => "aspect-grouped",
            Self::Organic => "organic",
        }
    }

    /// Run this strategy.
    ///
    /// Assumes `config` and `images` were validated (see
    /// [`LayoutEngine`](crate::LayoutEngine), which also validates the output).
    /// Returns an empty list for empty input.
    pub fn arrange<R: Rng + ?Sized>(
        self,
        images: &[ImageDescriptor],
        config: &LayoutConfig,
        bounds: CanvasBounds,
        rng: &mut R,
    ) -> Vec<PlacementRect> {
        if images.is_empty() {
            return Vec::new();
        }
        let input: Vec<&ImageDescriptor> = images.iter().collect();
        let mut placements = match self {
            Self::Flow => flow::arrange(&priority_order(&input, config), config, bounds),
            Self::Masonry => masonry::arrange(&priority_order(&input, config), config, bounds),
            // Row-major in input order, so the fallback is independent of priority.
            Self::ProportionalGrid => grid::arrange(&input, config, bounds),
            // Groups keep first-seen input order; priority applies within each group.
            Self::AspectGrouped => grouped::arrange(&input, config, bounds),
            Self::Organic => organic::arrange(&priority_order(&input, config), config, bounds, rng),
        };
        assign_order(&mut placements, config.allow_stacking);
        placements
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout strategy {0:?}, expected flow|masonry|proportional-grid|aspect-grouped|organic")]
pub struct ParseStrategyError(pub alloc::string::String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let matches = |name: &str| s.eq_ignore_ascii_case(name);
        if matches("flow") {
            Ok(Self::Flow)
        } else if matches("masonry") {
            Ok(Self::Masonry)
        } else if matches("proportional-grid") || matches("grid") {
            Ok(Self::ProportionalGrid)
        } else if matches("aspect-grouped") || matches("grouped") {
            Ok(Self::AspectGrouped)
        } else if matches("organic") || matches("stack") {
            Ok(Self::Organic)
        } else {
            Err(ParseStrategyError(alloc::string::String::from(s)))
        }
    }
}

/// Input order, or largest intrinsic area first when configured.
/// The sort is stable, so equal areas keep their input order.
///
/// Used by flow, masonry, and organic, and per group by aspect-grouped.
pub(super) fn priority_order<'a>(
    images: &[&'a ImageDescriptor],
    config: &LayoutConfig,
) -> Vec<&'a ImageDescriptor> {
    let mut ordered = images.to_vec();
    if config.prioritize_large_images {
        ordered.sort_by(|a, b| b.area().cmp(&a.area()));
    }
    ordered
}

fn assign_order(placements: &mut [PlacementRect], stacking: bool) {
    for (i, p) in placements.iter_mut().enumerate() {
        p.order = if stacking { i as u32 } else { 0 };
    }
}
