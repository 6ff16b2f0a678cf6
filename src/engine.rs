//! Strategy dispatch, validation, and the grid fallback.
//!
//! ```text
//!     images, config, bounds
//!              │
//!     check descriptors + config
//!              │
//!     requested strategy ──► validate ──ok──► Arrangement
//!                               │
//!                             fails
//!                               │
//!     proportional grid ───► validate ──ok──► Arrangement (fell_back)
//!                               │
//!                             fails ──► LayoutError::FallbackRejected
//! ```
//!
//! There is one fallback level; the requested strategy is never retried with
//! adjusted parameters.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::image::{CanvasBounds, ImageDescriptor, ImageId, PlacementRect};
use crate::strategy::Strategy;
use crate::validate::find_distorted;

/// Layout error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Image has a zero width or height, so its aspect ratio is undefined.
    #[error("image {id} has a zero dimension ({width}×{height})")]
    InvalidImageDescriptor { id: ImageId, width: u32, height: u32 },
    /// Two images share an id, so placements cannot be matched to sources.
    #[error("image id {0} appears more than once")]
    DuplicateImageId(ImageId),
    /// A configuration field is outside its documented range.
    #[error("invalid layout config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Canvas width or height is not positive and finite.
    #[error("canvas bounds must be positive and finite")]
    InvalidCanvas,
    /// The grid fallback distorted an image. This is an engine bug, never
    /// expected for valid descriptors.
    #[error("grid fallback distorted image {id}")]
    FallbackRejected { id: ImageId },
}

/// Result of one layout call.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    /// One placement per image, in emission order.
    pub placements: Vec<PlacementRect>,
    /// Strategy the caller asked for.
    pub requested: Strategy,
    /// Strategy whose output was returned.
    pub used: Strategy,
    /// True when the requested strategy failed validation and the grid
    /// output was substituted.
    pub fell_back: bool,
}

impl Arrangement {
    /// Bounding box of all placements as `(left, top, right, bottom)`.
    /// `None` for an empty arrangement.
    pub fn content_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.placements.first()?;
        let init = (first.x, first.y, first.right(), first.bottom());
        Some(self.placements.iter().fold(init, |(l, t, r, b), p| {
            (l.min(p.x), t.min(p.y), r.max(p.right()), b.max(p.bottom()))
        }))
    }

    /// Whether every placement lies inside the canvas minus `margin`.
    ///
    /// Only organic stacking guarantees this; on a canvas smaller than
    /// `2 × margin + min_image_size` the other strategies may overflow.
    pub fn fits_within(&self, bounds: CanvasBounds, margin: f64) -> bool {
        const EPS: f64 = 1e-9;
        self.placements.iter().all(|p| {
            p.x >= margin - EPS
                && p.y >= margin - EPS
                && p.right() <= bounds.width - margin + EPS
                && p.bottom() <= bounds.height - margin + EPS
        })
    }
}

/// Runs strategies under one validated [`LayoutConfig`].
///
/// Holds no state between calls; every [`apply`](Self::apply) computes a
/// fresh placement list.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, rejecting an out-of-range configuration.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `images` with `strategy`, falling back to the proportional
    /// grid if any placement distorts its image.
    ///
    /// `rng` is only drawn from by [`Strategy::Organic`]; pass a seeded
    /// generator for reproducible output.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        images: &[ImageDescriptor],
        bounds: CanvasBounds,
        rng: &mut R,
    ) -> Result<Arrangement, LayoutError> {
        bounds.check()?;
        check_unique_ids(images)?;

        let placements = strategy.arrange(images, &self.config, bounds, rng);
        log::debug!(
            "{strategy} placed {} of {} images",
            placements.len(),
            images.len()
        );

        settle(strategy, placements, images, || {
            Strategy::ProportionalGrid.arrange(images, &self.config, bounds, rng)
        })
    }

    /// [`apply`](Self::apply) with the thread-local generator.
    #[cfg(feature = "std")]
    pub fn apply_with_thread_rng(
        &self,
        strategy: Strategy,
        images: &[ImageDescriptor],
        bounds: CanvasBounds,
    ) -> Result<Arrangement, LayoutError> {
        self.apply(strategy, images, bounds, &mut rand::thread_rng())
    }
}

fn check_unique_ids(images: &[ImageDescriptor]) -> Result<(), LayoutError> {
    let mut seen = BTreeSet::new();
    for image in images {
        if !seen.insert(image.id()) {
            return Err(LayoutError::DuplicateImageId(image.id()));
        }
    }
    Ok(())
}

/// Accept `placements` if they validate, otherwise substitute `fallback()`.
fn settle(
    requested: Strategy,
    placements: Vec<PlacementRect>,
    images: &[ImageDescriptor],
    fallback: impl FnOnce() -> Vec<PlacementRect>,
) -> Result<Arrangement, LayoutError> {
    let Some(distorted) = find_distorted(&placements, images) else {
        return Ok(Arrangement {
            placements,
            requested,
            used: requested,
            fell_back: false,
        });
    };
    log::warn!("{requested} distorted image {distorted}, falling back to proportional grid");

    let placements = fallback();
    if let Some(id) = find_distorted(&placements, images) {
        log::error!("proportional grid fallback distorted image {id}");
        return Err(LayoutError::FallbackRejected { id });
    }
    Ok(Arrangement {
        placements,
        requested,
        used: Strategy::ProportionalGrid,
        fell_back: true,
    })
}
