//! Rec. 601 luma/chroma conversion for 8-bit RGB buffers.
//!
//! Chroma is offset by 128 so all three planes fit in `u8`.

use image::{GrayImage, Luma, Rgb, RgbImage};

const KR: f32 = 0.299;
const KG: f32 = 0.587;
const KB: f32 = 0.114;

/// Y, Cr and Cb planes of one image.
#[derive(Clone, Debug, PartialEq)]
pub struct YCrCbPlanes {
    /// Luma.
    pub y: GrayImage,
    /// Red-difference chroma.
    pub cr: GrayImage,
    /// Blue-difference chroma.
    pub cb: GrayImage,
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn luma_f32(px: Rgb<u8>) -> f32 {
    let [r, g, b] = px.0;
    KR * f32::from(r) + KG * f32::from(g) + KB * f32::from(b)
}

/// Rec. 601 luma of one pixel.
pub fn luma(px: Rgb<u8>) -> u8 {
    to_u8(luma_f32(px))
}

/// Single-channel luma image.
pub fn rgb_to_luma(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([luma(*img.get_pixel(x, y))])
    })
}

/// Split an RGB image into Y, Cr and Cb planes.
pub fn split(img: &RgbImage) -> YCrCbPlanes {
    let (w, h) = img.dimensions();
    let mut y = GrayImage::new(w, h);
    let mut cr = GrayImage::new(w, h);
    let mut cb = GrayImage::new(w, h);

    for (px_x, px_y, px) in img.enumerate_pixels() {
        let l = luma_f32(*px);
        let [r, _, b] = px.0;
        y.put_pixel(px_x, px_y, Luma([to_u8(l)]));
        cr.put_pixel(px_x, px_y, Luma([to_u8((f32::from(r) - l) * 0.713 + 128.0)]));
        cb.put_pixel(px_x, px_y, Luma([to_u8((f32::from(b) - l) * 0.564 + 128.0)]));
    }

    YCrCbPlanes { y, cr, cb }
}

/// Recombine planes into RGB. Planes must share dimensions.
pub fn merge(planes: &YCrCbPlanes) -> RgbImage {
    let (w, h) = planes.y.dimensions();
    debug_assert_eq!(planes.cr.dimensions(), (w, h));
    debug_assert_eq!(planes.cb.dimensions(), (w, h));

    RgbImage::from_fn(w, h, |x, y| {
        let l = f32::from(planes.y.get_pixel(x, y).0[0]);
        let cr = f32::from(planes.cr.get_pixel(x, y).0[0]) - 128.0;
        let cb = f32::from(planes.cb.get_pixel(x, y).0[0]) - 128.0;
        Rgb([
            to_u8(l + 1.403 * cr),
            to_u8(l - 0.714 * cr - 0.344 * cb),
            to_u8(l + 1.773 * cb),
        ])
    })
}

/// Expand a luma image to three equal channels.
pub fn gray_to_rgb(img: &GrayImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let v = img.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ycrcb.rs"]
mod tests;
