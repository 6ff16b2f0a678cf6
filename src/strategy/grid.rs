//! Proportional grid: the ratio-exact fallback.
//!
//! ```text
//!     margin
//!     ┌──────────────────────────────┐
//!     │ ┌────────┐ sp ┌────────┐     │
//!     │ │ ┌────┐ │    │  ┌──┐  │     │   each image fits its cell and is
//!     │ │ └────┘ │    │  │  │  │     │   centered on both axes
//!     │ └────────┘    └──┴──┴──┘     │
//!     └──────────────────────────────┘
//! ```

use alloc::vec::Vec;

use num_traits::Float;

use crate::config::LayoutConfig;
use crate::fit::scale_to_fit;
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

/// `(cols, rows)` for `n` images: `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`.
pub(super) fn grid_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = Float::ceil(Float::sqrt(n as f64)) as usize;
    (cols, n.div_ceil(cols))
}

pub(super) fn arrange(
    images: &[&ImageDescriptor],
    config: &LayoutConfig,
    bounds: CanvasBounds,
) -> Vec<PlacementRect> {
    let (cols, rows) = grid_shape(images.len());
    if cols == 0 {
        return Vec::new();
    }
    let spacing = config.spacing;
    let cell_w =
        (bounds.available_width(config.margin) - (cols - 1) as f64 * spacing) / cols as f64;
    let cell_h =
        (bounds.available_height(config.margin) - (rows - 1) as f64 * spacing) / rows as f64;

    images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let (row, col) = (i / cols, i % cols);
            let cell_x = config.margin + col as f64 * (cell_w + spacing);
            let cell_y = config.margin + row as f64 * (cell_h + spacing);
            let size = scale_to_fit(image.aspect_ratio(), cell_w, cell_h, config.min_image_size);
            PlacementRect::new(
                image.id(),
                cell_x + (cell_w - size.width) / 2.0,
                cell_y + (cell_h - size.height) / 2.0,
                size.width,
                size.height,
            )
        })
        .collect()
}
