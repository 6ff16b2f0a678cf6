//! Layout inputs and outputs: image descriptors, canvas bounds, placements.

use core::fmt;

use crate::engine::LayoutError;

/// Caller-assigned opaque image identifier. Unique within one layout call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(pub u64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An image's identity and intrinsic pixel dimensions.
///
/// Both dimensions are guaranteed non-zero, so [`aspect_ratio()`](Self::aspect_ratio)
/// is always finite and positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDescriptor"))]
pub struct ImageDescriptor {
    id: ImageId,
    width: u32,
    height: u32,
}

impl ImageDescriptor {
    /// Create a descriptor, rejecting a zero width or height.
    pub fn new(id: ImageId, width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidImageDescriptor { id, width, height });
        }
        Ok(Self { id, width, height })
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intrinsic width divided by intrinsic height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Intrinsic pixel count, used for large-first ordering.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDescriptor {
    id: ImageId,
    width: u32,
    height: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDescriptor> for ImageDescriptor {
    type Error = LayoutError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.width, raw.height)
    }
}

/// Target canvas size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Create canvas bounds. Both dimensions must be positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let bounds = Self { width, height };
        bounds.check()?;
        Ok(bounds)
    }

    pub(crate) fn check(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidCanvas)
        }
    }

    /// Width left for content after subtracting `margin` on both sides.
    /// Negative on a degenerate canvas.
    pub fn available_width(&self, margin: f64) -> f64 {
        self.width - 2.0 * margin
    }

    /// Height left for content after subtracting `margin` on both sides.
    pub fn available_height(&self, margin: f64) -> f64 {
        self.height - 2.0 * margin
    }
}

/// Where one image lands on the canvas.
///
/// `order` is the draw order: the emission index when stacking is enabled,
/// otherwise 0 for every placement.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRect {
    pub image_id: ImageId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub order: u32,
}

impl PlacementRect {
    pub(crate) fn new(image_id: ImageId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            image_id,
            x,
            y,
            width,
            height,
            order: 0,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Rendered width divided by rendered height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Shift by `(dx, dy)`.
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }
}
