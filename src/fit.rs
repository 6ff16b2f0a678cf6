//! Ratio-exact sizing helpers shared by the strategies.

use crate::config::FloorPolicy;

/// Rendered width × height in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Multiply both dimensions by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Fit an image of aspect `ratio` into `max_width × max_height`, then lift it
/// to at least `min_size`.
///
/// Step 1 fits the bounding box: height-constrained when the box is wider
/// than the image, width-constrained otherwise. Step 2 applies the floor when
/// either side is under `min_size`, re-deriving both sides from whichever is
/// currently smaller. Both steps preserve `ratio` exactly.
///
/// A non-positive box (degenerate canvas) still yields a positive result.
pub fn scale_to_fit(ratio: f64, max_width: f64, max_height: f64, min_size: f64) -> Dimensions {
    let (mut width, mut height) = if max_width / max_height > ratio {
        (max_height * ratio, max_height)
    } else {
        (max_width, max_width / ratio)
    };

    if width < min_size || height < min_size {
        if width < height {
            width = min_size;
            height = min_size / ratio;
        } else {
            height = min_size;
            width = min_size * ratio;
        }
    }

    at_least_one_pixel(Dimensions::new(width, height))
}

/// Enforce `min_size` on already-scaled dimensions according to `policy`.
pub(crate) fn apply_floor(dims: Dimensions, min_size: f64, policy: FloorPolicy) -> Dimensions {
    let floored = match policy {
        FloorPolicy::Uniform => {
            let shorter = dims.width.min(dims.height);
            if shorter < min_size {
                dims.scale(min_size / shorter)
            } else {
                dims
            }
        }
        FloorPolicy::PerAxis => {
            Dimensions::new(dims.width.max(min_size), dims.height.max(min_size))
        }
    };
    at_least_one_pixel(floored)
}

/// Grow uniformly until both sides are at least 1.
fn at_least_one_pixel(dims: Dimensions) -> Dimensions {
    let shorter = dims.width.min(dims.height);
    if shorter < 1.0 {
        dims.scale(1.0 / shorter)
    } else {
        dims
    }
}
