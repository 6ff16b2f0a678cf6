//! Organic stack: masonry placement with bounded random jitter.
//!
//! Every placement after the first is nudged by an independent uniform offset
//! in `±spacing/4` on each axis when stacking is allowed. All placements are
//! then clamped inside the margin box, so this is the one strategy whose
//! output never overflows the canvas (unless an image is larger than the box).

use alloc::vec::Vec;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

use super::masonry;

/// Jitter amplitude as a fraction of `spacing`.
const JITTER_SHARE: f64 = 0.25;

pub(super) fn arrange<R: Rng + ?Sized>(
    images: &[&ImageDescriptor],
    config: &LayoutConfig,
    bounds: CanvasBounds,
    rng: &mut R,
) -> Vec<PlacementRect> {
    let mut placements = masonry::arrange(images, config, bounds);
    let jitter = config.spacing * JITTER_SHARE;
    let jitters = config.allow_stacking && jitter.is_finite() && jitter > 0.0;

    for (i, p) in placements.iter_mut().enumerate() {
        if jitters && i > 0 {
            p.x += rng.gen_range(-jitter..=jitter);
            p.y += rng.gen_range(-jitter..=jitter);
        }
        p.x = clamp_span(p.x, config.margin, bounds.width - p.width - config.margin);
        p.y = clamp_span(p.y, config.margin, bounds.height - p.height - config.margin);
    }
    placements
}

/// Clamp to `[lo, hi]`; when the span is empty (`hi < lo`) pin to `lo`.
fn clamp_span(v: f64, lo: f64, hi: f64) -> f64 {
    if hi < lo { lo } else { v.max(lo).min(hi) }
}
