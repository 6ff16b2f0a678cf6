//! Aspect-ratio classification and grouping.
//!
//! ```text
//!     ratio   0.6   0.9 0.95 1.05 1.18   1.48 1.58   1.98 2.0        3.0       4.5
//!             ├─────┤    ├───┤    ├──────┤    ├──────┤    ├──────────┤
//!             Portrait  Square   Landscape     Wide       Panoramic
//!                                                              ├─────────────┤
//!                                                                Ultra-wide
//! ```
//!
//! The catalog is checked in order and the first match wins, so the
//! 2.5–3.0 overlap classifies as Panoramic. Ratios falling in a gap get a
//! synthetic Landscape (ratio > 1) or Portrait category.

use alloc::vec::Vec;

use crate::image::ImageDescriptor;

/// Bucket key used by the aspect-grouped strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectGroup {
    Square,
    Portrait,
    Landscape,
    Wide,
    /// Panoramic and ultra-wide images.
    Panoramic,
}

impl AspectGroup {
    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Wide => "wide",
            Self::Panoramic => "panoramic",
        }
    }
}

/// A named aspect-ratio band.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectCategory {
    pub name: &'static str,
    /// Nominal ratio of the band.
    pub ratio: f64,
    /// Matches when `|ratio - self.ratio| <= tolerance`.
    pub tolerance: f64,
    pub group: AspectGroup,
    /// True for the Landscape/Portrait fallback produced when no catalog
    /// entry matches. Its `ratio` is the classified image's own ratio.
    pub synthetic: bool,
}

impl AspectCategory {
    const fn band(name: &'static str, ratio: f64, tolerance: f64, group: AspectGroup) -> Self {
        Self {
            name,
            ratio,
            tolerance,
            group,
            synthetic: false,
        }
    }

    /// Whether `ratio` falls within this band (inclusive).
    pub fn matches(&self, ratio: f64) -> bool {
        (ratio - self.ratio).abs() <= self.tolerance
    }
}

/// Ordered category catalog. First match wins.
pub const CATALOG: [AspectCategory; 6] = [
    AspectCategory::band("Square", 1.0, 0.05, AspectGroup::Square),
    AspectCategory::band("Portrait", 0.75, 0.15, AspectGroup::Portrait),
    AspectCategory::band("Landscape", 1.33, 0.15, AspectGroup::Landscape),
    AspectCategory::band("Wide", 1.78, 0.2, AspectGroup::Wide),
    AspectCategory::band("Panoramic", 2.5, 0.5, AspectGroup::Panoramic),
    AspectCategory::band("Ultra-wide", 3.5, 1.0, AspectGroup::Panoramic),
];

/// Classify an image by its intrinsic aspect ratio.
pub fn classify(image: &ImageDescriptor) -> AspectCategory {
    classify_ratio(image.aspect_ratio())
}

/// Classify a raw width/height ratio. Total: always returns a category.
pub fn classify_ratio(ratio: f64) -> AspectCategory {
    if let Some(category) = CATALOG.iter().find(|c| c.matches(ratio)) {
        return *category;
    }
    let (name, group) = if ratio > 1.0 {
        ("Landscape", AspectGroup::Landscape)
    } else {
        ("Portrait", AspectGroup::Portrait)
    };
    AspectCategory {
        name,
        ratio,
        tolerance: 0.0,
        group,
        synthetic: true,
    }
}

/// Bucket images by aspect group.
///
/// Groups are emitted in the order their first member appears; members keep
/// their input order.
pub fn partition_by_group<'a, I>(images: I) -> Vec<(AspectGroup, Vec<&'a ImageDescriptor>)>
where
    I: IntoIterator<Item = &'a ImageDescriptor>,
{
    let mut groups: Vec<(AspectGroup, Vec<&'a ImageDescriptor>)> = Vec::new();
    for image in images {
        let group = classify(image).group;
        match groups.iter_mut().find(|(g, _)| *g == group) {
            Some((_, members)) => members.push(image),
            None => groups.push((group, alloc::vec![image])),
        }
    }
    groups
}
