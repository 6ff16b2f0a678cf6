//! Shortest-column packing.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::config::LayoutConfig;
use crate::fit::scale_to_fit;
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

const MIN_COLUMNS: usize = 2;
const MAX_COLUMNS: usize = 5;

/// `ceil(sqrt(n))`, clamped to 2..=5.
pub(super) fn column_count(n: usize) -> usize {
    let root = Float::ceil(Float::sqrt(n as f64)) as usize;
    root.clamp(MIN_COLUMNS, MAX_COLUMNS)
}

pub(super) fn arrange(
    images: &[&ImageDescriptor],
    config: &LayoutConfig,
    bounds: CanvasBounds,
) -> Vec<PlacementRect> {
    let columns = column_count(images.len());
    let available = bounds.available_width(config.margin);
    let column_width = (available - (columns - 1) as f64 * config.spacing) / columns as f64;

    let mut heights = vec![config.margin; columns];
    let mut placements = Vec::with_capacity(images.len());

    for &image in images {
        let column = shortest(&heights);
        let size = scale_to_fit(
            image.aspect_ratio(),
            column_width,
            column_width * 2.0,
            config.min_image_size,
        );
        let x = config.margin + column as f64 * (column_width + config.spacing);
        placements.push(PlacementRect::new(
            image.id(),
            x,
            heights[column],
            size.width,
            size.height,
        ));
        heights[column] += size.height + config.spacing;
    }

    placements
}

/// Index of the shortest column; ties go to the lowest index.
fn shortest(heights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = i;
        }
    }
    best
}
