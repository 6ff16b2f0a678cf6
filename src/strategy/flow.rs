//! Row packing.
//!
//! Images are laid left to right at a natural width of
//! `min(intrinsic width, 30% of available width)`. A row breaks when the next
//! image would cross the right margin; each finished row is scaled by one
//! shared factor so it spans the available width, never upscaled and never
//! shrunk below `max_scale_down`.

use alloc::vec::Vec;

use crate::config::LayoutConfig;
use crate::fit::{Dimensions, apply_floor};
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

/// Natural width as a fraction of the available width.
const NATURAL_WIDTH_SHARE: f64 = 0.3;

struct Pending<'a> {
    image: &'a ImageDescriptor,
    natural: Dimensions,
}

pub(super) fn arrange(
    images: &[&ImageDescriptor],
    config: &LayoutConfig,
    bounds: CanvasBounds,
) -> Vec<PlacementRect> {
    let margin = config.margin;
    let available = bounds.available_width(margin);

    let mut placements = Vec::with_capacity(images.len());
    let mut row: Vec<Pending<'_>> = Vec::new();
    let mut row_x = margin;
    let mut row_y = margin;

    for &image in images {
        let natural = natural_size(image, available, config.min_image_size);

        if !row.is_empty() && row_x + natural.width > available + margin {
            let height = finish_row(&row, row_y, available, config, &mut placements);
            row.clear();
            row_y += height + config.spacing;
            row_x = margin;
        }

        row_x += natural.width + config.spacing;
        row.push(Pending { image, natural });
    }
    finish_row(&row, row_y, available, config, &mut placements);

    placements
}

/// Pre-scale size of one image.
///
/// On a canvas with no room inside the margins, the natural width falls back
/// to `min_size` so the row still has a positive extent.
fn natural_size(image: &ImageDescriptor, available: f64, min_size: f64) -> Dimensions {
    let width = (image.width() as f64).min(available * NATURAL_WIDTH_SHARE);
    let width = if width > 0.0 { width } else { min_size };
    Dimensions::new(width, width / image.aspect_ratio())
}

/// Row scale factor: fit the row to `available`, clamped to `[max_scale_down, 1]`.
fn row_scale(row: &[Pending<'_>], available: f64, config: &LayoutConfig) -> f64 {
    let total: f64 = row.iter().map(|p| p.natural.width).sum();
    let gaps = row.len().saturating_sub(1) as f64 * config.spacing;
    let fit = (available - gaps) / total;
    fit.min(1.0).max(config.max_scale_down)
}

/// Scale and emit one row starting at `y`. Returns the tallest emitted height.
fn finish_row(
    row: &[Pending<'_>],
    y: f64,
    available: f64,
    config: &LayoutConfig,
    out: &mut Vec<PlacementRect>,
) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    let scale = row_scale(row, available, config);
    log::trace!("flow row of {} at y={y}: scale {scale}", row.len());

    let mut x = config.margin;
    let mut tallest: f64 = 0.0;
    for pending in row {
        let size = apply_floor(
            pending.natural.scale(scale),
            config.min_image_size,
            config.floor_policy,
        );
        out.push(PlacementRect::new(pending.image.id(), x, y, size.width, size.height));
        x += size.width + config.spacing;
        tallest = tallest.max(size.height);
    }
    tallest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloorPolicy;
    use crate::image::ImageId;

    fn img(id: u64, w: u32, h: u32) -> ImageDescriptor {
        ImageDescriptor::new(ImageId(id), w, h).unwrap()
    }

    fn run(images: &[ImageDescriptor], config: &LayoutConfig, w: f64, h: f64) -> Vec<PlacementRect> {
        let refs: Vec<_> = images.iter().collect();
        arrange(&refs, config, CanvasBounds::new(w, h).unwrap())
    }

    fn row_starts(out: &[PlacementRect]) -> Vec<f64> {
        let mut ys: Vec<f64> = Vec::new();
        for p in out {
            if ys.last() != Some(&p.y) {
                ys.push(p.y);
            }
        }
        ys
    }

    #[test]
    fn natural_width_capped_at_thirty_percent() {
        let n = natural_size(&img(1, 4000, 2000), 1000.0, 100.0);
        assert_eq!(n, Dimensions::new(300.0, 150.0));
        let n = natural_size(&img(1, 200, 100), 1000.0, 100.0);
        assert_eq!(n, Dimensions::new(200.0, 100.0));
    }

    #[test]
    fn single_row_starts_at_margin() {
        let config = LayoutConfig::default().min_image_size(10.0);
        let out = run(&[img(1, 200, 100), img(2, 200, 100)], &config, 1040.0, 800.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].x, 20.0);
        assert_eq!(out[0].y, 20.0);
        // Fits without scaling: 200 + 10 + 200 < 1000 → scale 1.
        assert_eq!(out[0].width, 200.0);
        assert_eq!(out[1].x, 230.0);
    }

    #[test]
    fn rows_break_when_crossing_right_margin() {
        // available = 1000, each natural width 300 → three per row
        // (20+300+10+300+10+300 = 940; a fourth would end at 1250 > 1020).
        let config = LayoutConfig::default().min_image_size(10.0);
        let images: Vec<_> = (0..7).map(|i| img(i, 3000, 2000)).collect();
        let out = run(&images, &config, 1040.0, 2000.0);
        assert_eq!(row_starts(&out).len(), 3);
        let first_row = out.iter().filter(|p| p.y == 20.0).count();
        assert_eq!(first_row, 3);
    }

    #[test]
    fn short_row_is_not_upscaled() {
        // 20 → 280 → 540 → 800; a fourth 250 would end at 1050 > 1020.
        let config = LayoutConfig::default().min_image_size(10.0);
        let images: Vec<_> = (0..4).map(|i| img(i, 250, 250)).collect();
        let out = run(&images, &config, 1040.0, 1000.0);
        assert_eq!(row_starts(&out).len(), 2);
        assert_eq!(out[0].width, 250.0);
        assert_eq!(out[3].width, 250.0);
    }

    #[test]
    fn row_content_never_exceeds_available_width() {
        // Natural widths are capped at 300, so 300 + 10 + 300 + 10 + 300 = 920.
        let config = LayoutConfig::default().min_image_size(10.0);
        let images: Vec<_> = (0..3).map(|i| img(i, 340, 340)).collect();
        let out = run(&images, &config, 1040.0, 1000.0);
        assert_eq!(row_starts(&out).len(), 1);
        assert_eq!(out[2].right(), 20.0 + 920.0);

        let config = LayoutConfig::default().spacing(0.0).margin(0.0).min_image_size(1.0);
        let images = [img(1, 600, 300), img(2, 600, 300), img(3, 600, 300), img(4, 50, 50)];
        let out = run(&images, &config, 1000.0, 1000.0);
        assert_eq!(row_starts(&out).len(), 1);
        let right = out.iter().map(|p| p.right()).fold(0.0, f64::max);
        assert!(right <= 1000.0 + 1e-9);
    }

    #[test]
    fn scale_never_below_max_scale_down() {
        let (a, b) = (img(1, 10, 10), img(2, 10, 10));
        let row = [
            Pending { image: &a, natural: Dimensions::new(1000.0, 1000.0) },
            Pending { image: &b, natural: Dimensions::new(1000.0, 1000.0) },
        ];
        let config = LayoutConfig::default().max_scale_down(0.5);
        assert_eq!(row_scale(&row, 500.0, &config), 0.5);
        assert_eq!(row_scale(&row, 5000.0, &config), 1.0);
        let s = row_scale(&row, 1510.0, &config);
        assert!((s - 0.75).abs() < 1e-12);
    }

    #[test]
    fn next_row_below_tallest_rendered_image() {
        let config = LayoutConfig::default().min_image_size(10.0);
        let images = [img(1, 300, 600), img(2, 300, 100), img(3, 300, 100), img(4, 300, 100)];
        let out = run(&images, &config, 1040.0, 3000.0);
        let first_row_bottom = out[..3].iter().map(|p| p.bottom()).fold(0.0, f64::max);
        assert_eq!(out[3].y, first_row_bottom + 10.0);
    }

    #[test]
    fn uniform_floor_is_ratio_exact() {
        let config = LayoutConfig::default().min_image_size(150.0);
        let images = [img(1, 1200, 100), img(2, 100, 100)];
        let out = run(&images, &config, 1040.0, 1000.0);
        for (p, i) in out.iter().zip(&images) {
            assert!((p.aspect_ratio() - i.aspect_ratio()).abs() <= 0.01);
            assert!(p.width >= 150.0 - 1e-9 && p.height >= 150.0 - 1e-9);
        }
    }

    #[test]
    fn per_axis_floor_distorts_thin_images() {
        let config = LayoutConfig::default()
            .min_image_size(150.0)
            .floor_policy(FloorPolicy::PerAxis);
        let images = [img(1, 1200, 100)];
        let out = run(&images, &config, 1040.0, 1000.0);
        // natural 300×25 → height floored to 150 → ratio 2 instead of 12.
        assert_eq!(out[0].width, 300.0);
        assert_eq!(out[0].height, 150.0);
    }

    #[test]
    fn degenerate_canvas_still_positive() {
        let config = LayoutConfig::default();
        let out = run(&[img(1, 400, 300), img(2, 300, 400)], &config, 30.0, 30.0);
        for p in &out {
            assert!(p.width >= 1.0 && p.height >= 1.0);
        }
    }
}
