//! Aspect-grouped rows: one flow block per aspect group, stacked top to bottom.

use alloc::vec::Vec;

use crate::aspect::partition_by_group;
use crate::config::LayoutConfig;
use crate::image::{CanvasBounds, ImageDescriptor, PlacementRect};

use super::{flow, priority_order};

pub(super) fn arrange(
    images: &[&ImageDescriptor],
    config: &LayoutConfig,
    bounds: CanvasBounds,
) -> Vec<PlacementRect> {
    let mut placements = Vec::with_capacity(images.len());
    let mut current_y = config.margin;

    for (group, members) in partition_by_group(images.iter().copied()) {
        let block = flow::arrange(&priority_order(&members, config), config, bounds);
        let Some(top) = block.iter().map(|p| p.y).reduce(f64::min) else {
            continue;
        };
        let bottom = block.iter().map(|p| p.bottom()).fold(top, f64::max);
        log::trace!(
            "group {} with {} images spans {}",
            group.key(),
            members.len(),
            bottom - top
        );

        let dy = current_y - top;
        placements.extend(block.into_iter().map(|p| p.translate(0.0, dy)));
        current_y += (bottom - top) + 2.0 * config.spacing;
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::AspectGroup;
    use crate::image::ImageId;

    fn img(id: u64, w: u32, h: u32) -> ImageDescriptor {
        ImageDescriptor::new(ImageId(id), w, h).unwrap()
    }

    fn run(images: &[ImageDescriptor], config: &LayoutConfig) -> Vec<PlacementRect> {
        let refs: Vec<_> = images.iter().collect();
        arrange(&refs, config, CanvasBounds::new(1040.0, 4000.0).unwrap())
    }

    #[test]
    fn groups_in_first_seen_order() {
        let images = [img(1, 1600, 900), img(2, 500, 500), img(3, 1920, 1080)];
        let refs: Vec<_> = images.iter().collect();
        let groups = partition_by_group(refs.iter().copied());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, AspectGroup::Wide);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, AspectGroup::Square);
    }

    #[test]
    fn groups_emitted_contiguously() {
        let images = [img(1, 1600, 900), img(2, 500, 500), img(3, 1920, 1080), img(4, 600, 600)];
        let out = run(&images, &LayoutConfig::default());
        let ids: Vec<_> = out.iter().map(|p| p.image_id.0).collect();
        assert_eq!(ids, [1, 3, 2, 4]);
    }

    #[test]
    fn blocks_stack_with_double_spacing() {
        let config = LayoutConfig::default().min_image_size(10.0);
        let images = [img(1, 1600, 900), img(2, 500, 500)];
        let out = run(&images, &config);

        assert_eq!(out[0].y, 20.0);
        // Wide block: natural 300 × 168.75, one row.
        let wide_bottom = out[0].bottom();
        assert!((out[1].y - (wide_bottom + 20.0)).abs() < 1e-9);
        assert_eq!(out[1].x, 20.0);
    }

    #[test]
    fn multi_row_group_height_includes_all_rows() {
        let config = LayoutConfig::default().min_image_size(10.0);
        let mut images: Vec<_> = (0..5).map(|i| img(i, 300, 300)).collect();
        images.push(img(99, 3000, 1000));
        let out = run(&images, &config);

        let square_bottom = out[..5].iter().map(|p| p.bottom()).fold(0.0, f64::max);
        assert_eq!(out[5].image_id, ImageId(99));
        assert!((out[5].y - (square_bottom + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn priority_sorts_within_group_only() {
        // Square group seen first; the larger wide image must not pull its
        // group ahead, but within the square group the larger square leads.
        let config = LayoutConfig::default().min_image_size(10.0).prioritize_large_images(true);
        let images = [img(1, 200, 200), img(2, 1600, 900), img(3, 500, 500)];
        let out = run(&images, &config);
        let ids: Vec<_> = out.iter().map(|p| p.image_id.0).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(out[0].y, 20.0);
    }

    #[test]
    fn every_image_placed_once() {
        let images: Vec<_> = (1..=30u32)
            .map(|i| img(i as u64, 200 + i * 41 % 900, 200 + i * 73 % 700))
            .collect();
        let out = run(&images, &LayoutConfig::default());
        assert_eq!(out.len(), images.len());
        let mut ids: Vec<_> = out.iter().map(|p| p.image_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), images.len());
    }
}
