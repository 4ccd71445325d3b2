//! Pixel dimensions and the aspect-ratio inference used by resizing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// A width/height pair in pixels.
///
/// In a resize request either side may be `0`, meaning "unspecified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both sides are unspecified.
    pub const fn is_unspecified(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parse the `{w}x{h}` path segment of an image URL.
///
/// An empty side counts as `0`, so `x100` asks for height 100 with the
/// width inferred.
impl FromStr for Dimensions {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidInput(format!("Invalid image size: {s}"));
        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        let side = |raw: &str| -> Result<u32, CoreError> {
            if raw.is_empty() {
                Ok(0)
            } else {
                raw.parse().map_err(|_| invalid())
            }
        };
        Ok(Self::new(side(width)?, side(height)?))
    }
}

/// Upper bounds on the output of a resize.
///
/// Enforced before any pixel buffer is allocated, so an oversized request
/// fails with a 400 instead of exhausting memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeLimits {
    /// Largest allowed width or height.
    pub max_side: u32,
    /// Largest allowed `width * height`.
    pub max_pixels: u64,
}

impl ResizeLimits {
    pub const DEFAULT_MAX_SIDE: u32 = 10_000;
    pub const DEFAULT_MAX_PIXELS: u64 = 40_000_000;

    pub const fn new(max_side: u32, max_pixels: u64) -> Self {
        Self {
            max_side,
            max_pixels,
        }
    }

    /// Reject `target` if either side or the pixel count is over the limit.
    pub fn check(self, target: Dimensions) -> Result<(), CoreError> {
        if target.width > self.max_side || target.height > self.max_side {
            return Err(CoreError::InvalidInput(format!(
                "Requested image size {target} exceeds the maximum side of {} pixels",
                self.max_side
            )));
        }
        let pixels = u64::from(target.width) * u64::from(target.height);
        if pixels > self.max_pixels {
            return Err(CoreError::InvalidInput(format!(
                "Requested image size {target} exceeds the maximum of {} pixels",
                self.max_pixels
            )));
        }
        Ok(())
    }
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIDE, Self::DEFAULT_MAX_PIXELS)
    }
}

/// Round a computed side to a positive pixel count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    (value.round().clamp(1.0, f64::from(u32::MAX))) as u32
}

/// Fill in the unspecified side of `requested` from the `intrinsic` aspect ratio.
///
/// - width `0`: `width = round(height * ratio)`
/// - height `0`: `height = round(width / ratio)`
/// - both set: returned unchanged (a plain stretch, no aspect preservation)
///
/// Returns `None` when both sides are unspecified.
pub fn infer_dimensions(intrinsic: Dimensions, requested: Dimensions) -> Option<Dimensions> {
    if requested.is_unspecified() {
        return None;
    }

    let ratio = intrinsic.aspect_ratio();
    let inferred = if requested.width == 0 {
        Dimensions::new(to_pixels(f64::from(requested.height) * ratio), requested.height)
    } else if requested.height == 0 {
        Dimensions::new(requested.width, to_pixels(f64::from(requested.width) / ratio))
    } else {
        requested
    };
    Some(inferred)
}
