//! Aspect-ratio validation of produced placements.

use alloc::collections::BTreeMap;

use crate::image::{ImageDescriptor, ImageId, PlacementRect};

/// Largest accepted `|rendered ratio - intrinsic ratio|`.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Whether `rect` renders `image` without visible distortion.
///
/// NaN ratios (zero-height rects) never validate.
pub fn validate(rect: &PlacementRect, image: &ImageDescriptor) -> bool {
    (rect.aspect_ratio() - image.aspect_ratio()).abs() <= RATIO_TOLERANCE
}

/// First placement, in emission order, that fails [`validate`] against its
/// source image. A placement whose id matches no image also fails.
pub fn find_distorted(rects: &[PlacementRect], images: &[ImageDescriptor]) -> Option<ImageId> {
    let by_id: BTreeMap<ImageId, &ImageDescriptor> =
        images.iter().map(|image| (image.id(), image)).collect();
    rects
        .iter()
        .find(|rect| match by_id.get(&rect.image_id) {
            Some(image) => !validate(rect, image),
            None => true,
        })
        .map(|rect| rect.image_id)
}
