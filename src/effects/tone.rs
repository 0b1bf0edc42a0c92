use image::{GrayImage, RgbImage};

use crate::{
    effects::ycrcb,
    foundation::error::{EaselError, EaselResult},
};

/// Single-channel Rec. 601 luma of `img`.
pub fn grayscale(img: &RgbImage) -> GrayImage {
    ycrcb::rgb_to_luma(img)
}

/// `255 - v` on every sample. Applying it twice returns the input.
pub fn negative(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    image::imageops::invert(&mut out);
    out
}

/// Saturating linear map `clamp(round(alpha * v + beta), 0, 255)` on every sample.
pub fn contrast_brightness(img: &RgbImage, alpha: f64, beta: f64) -> EaselResult<RgbImage> {
    if !alpha.is_finite() || !beta.is_finite() {
        return Err(EaselError::validation(format!(
            "contrast/brightness need finite alpha and beta, got {alpha} and {beta}"
        )));
    }

    let lut: [u8; 256] = std::array::from_fn(|v| {
        (alpha * v as f64 + beta).round_ties_even().clamp(0.0, 255.0) as u8
    });

    let mut out = img.clone();
    for v in out.iter_mut() {
        *v = lut[usize::from(*v)];
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
