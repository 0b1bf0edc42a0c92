//! Histogram equalization restricted to the luma plane.
//!
//! Both entry points split RGB into YCrCb, equalize Y, and merge back so that hue
//! and saturation are left mostly untouched.

use image::{GrayImage, Luma, RgbImage};

use crate::{
    effects::ycrcb,
    foundation::{config::ClaheParams, error::EaselResult},
};

/// Global histogram equalization of the luma plane.
pub fn equalize_global(img: &RgbImage) -> RgbImage {
    let mut planes = ycrcb::split(img);
    planes.y = imageproc::contrast::equalize_histogram(&planes.y);
    ycrcb::merge(&planes)
}

/// Contrast-limited adaptive histogram equalization of the luma plane.
pub fn equalize_clahe(img: &RgbImage, params: &ClaheParams) -> EaselResult<RgbImage> {
    let mut planes = ycrcb::split(img);
    planes.y = clahe_gray(&planes.y, params)?;
    Ok(ycrcb::merge(&planes))
}

/// CLAHE on a single channel.
///
/// The image is cut into `params.grid` tiles (fewer if the image is smaller than
/// the grid). Each tile gets its own clipped-histogram lookup table and pixels are
/// mapped through a bilinear blend of the four nearest tile tables.
pub fn clahe_gray(src: &GrayImage, params: &ClaheParams) -> EaselResult<GrayImage> {
    params.validate()?;

    let (w, h) = src.dimensions();
    if w == 0 || h == 0 {
        return Ok(src.clone());
    }
    let gx = params.grid.0.min(w);
    let gy = params.grid.1.min(h);

    let mut luts = Vec::with_capacity((gx * gy) as usize);
    for ty in 0..gy {
        let (y0, y1) = tile_span(h, gy, ty);
        for tx in 0..gx {
            let (x0, x1) = tile_span(w, gx, tx);

            let mut hist = [0u32; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[usize::from(src.get_pixel(x, y).0[0])] += 1;
                }
            }
            let area = (x1 - x0) * (y1 - y0);
            clip_histogram(&mut hist, area, params.clip_limit);
            luts.push(tile_lut(&hist, area));
        }
    }

    let tile_w = w as f32 / gx as f32;
    let tile_h = h as f32 / gy as f32;
    let lut_at = |tx: u32, ty: u32, v: usize| f32::from(luts[(ty * gx + tx) as usize][v]);

    Ok(GrayImage::from_fn(w, h, |x, y| {
        let v = usize::from(src.get_pixel(x, y).0[0]);
        let (tx0, tx1, ax) = neighbours((x as f32 + 0.5) / tile_w - 0.5, gx);
        let (ty0, ty1, ay) = neighbours((y as f32 + 0.5) / tile_h - 0.5, gy);

        let top = lut_at(tx0, ty0, v) * (1.0 - ax) + lut_at(tx1, ty0, v) * ax;
        let bottom = lut_at(tx0, ty1, v) * (1.0 - ax) + lut_at(tx1, ty1, v) * ax;
        let out = top * (1.0 - ay) + bottom * ay;
        Luma([out.round().clamp(0.0, 255.0) as u8])
    }))
}

/// Half-open pixel range `[start, end)` of tile `i` when `len` is cut into `n` tiles.
fn tile_span(len: u32, n: u32, i: u32) -> (u32, u32) {
    let at = |k: u32| (u64::from(k) * u64::from(len) / u64::from(n)) as u32;
    (at(i), at(i + 1))
}

/// Lower/upper tile index around a fractional tile coordinate and the weight of the upper one.
fn neighbours(f: f32, n: u32) -> (u32, u32, f32) {
    let lo = f.floor();
    let weight = f - lo;
    let last = i64::from(n) - 1;
    let lo = lo as i64;
    (
        lo.clamp(0, last) as u32,
        (lo + 1).clamp(0, last) as u32,
        weight,
    )
}

fn clip_histogram(hist: &mut [u32; 256], area: u32, clip_limit: f64) {
    if clip_limit <= 0.0 {
        return;
    }
    let limit = ((clip_limit * f64::from(area) / 256.0) as u32).max(1);

    let mut clipped = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            clipped += *bin - limit;
            *bin = limit;
        }
    }

    let batch = clipped / 256;
    let residual = clipped % 256;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (256 / residual).max(1) as usize;
        for bin in hist.iter_mut().step_by(step).take(residual as usize) {
            *bin += 1;
        }
    }
}

fn tile_lut(hist: &[u32; 256], area: u32) -> [u8; 256] {
    let scale = 255.0 / area.max(1) as f32;
    let mut lut = [0u8; 256];
    let mut sum = 0u32;
    for (out, &count) in lut.iter_mut().zip(hist) {
        sum += count;
        *out = (sum as f32 * scale).round().min(255.0) as u8;
    }
    lut
}

#[cfg(test)]
#[path = "../../tests/unit/effects/equalize.rs"]
mod tests;
