use crate::foundation::error::{EaselError, EaselResult};

pub use kurbo::{Point, Rect, Vec2};

/// Fixed pixel size shared by every buffer in an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest accepted width or height, in pixels.
    pub const MAX_SIDE: u32 = 8192;

    /// Build a canvas, rejecting zero-area sizes and sides above [`Canvas::MAX_SIDE`].
    pub fn new(width: u32, height: u32) -> EaselResult<Self> {
        if width == 0 || height == 0 {
            return Err(EaselError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(EaselError::validation(format!(
                "canvas side must be at most {}, got {width}x{height}",
                Self::MAX_SIDE
            )));
        }
        Ok(Self { width, height })
    }

    /// `(width, height)` in the order `image` uses.
    pub fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True if an image with `dims` fits this canvas exactly.
    pub fn matches(self, dims: (u32, u32)) -> bool {
        dims == self.dimensions()
    }

    /// Solid white 3-channel buffer of this size.
    pub fn blank(self) -> image::RgbImage {
        image::RgbImage::from_pixel(self.width, self.height, image::Rgb([255, 255, 255]))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
