//! Aspect-ratio-preserving collage layout.
//!
//! Takes a set of images with fixed intrinsic proportions and a target
//! canvas, and produces placement rectangles that never distort any image.
//! Pure geometry: no pixel operations and no I/O. `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`image`]: Image descriptors, canvas bounds, placement rectangles
//! - [`config`]: Immutable per-call layout configuration
//! - [`aspect`]: Aspect-ratio classification and grouping
//! - [`fit`]: Ratio-exact scale-to-fit with a minimum-size floor
//! - [`strategy`]: The five packing strategies behind one contract
//! - [`validate`]: Ratio validation of produced placements
//! - [`engine`]: Strategy dispatch, validation, and the grid fallback
//! - `query`: Layout configuration from query strings (feature `query`)
//! - `svg`: SVG preview of an arrangement (feature `svg`)
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use zencollage::{CanvasBounds, ImageDescriptor, ImageId, LayoutConfig, LayoutEngine, Strategy};
//!
//! let images = [
//!     ImageDescriptor::new(ImageId(1), 1600, 900).unwrap(),
//!     ImageDescriptor::new(ImageId(2), 900, 1600).unwrap(),
//! ];
//! let bounds = CanvasBounds::new(1920.0, 1080.0).unwrap();
//! let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let arrangement = engine
//!     .apply(Strategy::Masonry, &images, bounds, &mut rng)
//!     .unwrap();
//! assert_eq!(arrangement.placements.len(), 2);
//! assert!(!arrangement.fell_back);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aspect;
pub mod config;
pub mod engine;
pub mod fit;
pub mod image;
#[cfg(feature = "query")]
pub mod query;
pub mod strategy;
#[cfg(feature = "svg")]
pub mod svg;
pub mod validate;

pub use aspect::{AspectCategory, AspectGroup, CATALOG, classify, partition_by_group};
pub use config::{FloorPolicy, LayoutConfig, StackDirection};
pub use engine::{Arrangement, LayoutEngine, LayoutError};
pub use fit::{Dimensions, scale_to_fit};
pub use image::{CanvasBounds, ImageDescriptor, ImageId, PlacementRect};
pub use strategy::{ParseStrategyError, Strategy};
pub use validate::{RATIO_TOLERANCE, find_distorted, validate};
