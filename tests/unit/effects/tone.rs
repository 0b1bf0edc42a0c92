use image::Rgb;

use super::*;

fn ramp() -> RgbImage {
    RgbImage::from_fn(16, 16, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
    })
}

#[test]
fn negative_inverts_samples() {
    let img = RgbImage::from_pixel(2, 1, Rgb([0, 100, 255]));
    assert_eq!(negative(&img).get_pixel(0, 0), &Rgb([255, 155, 0]));
}

#[test]
fn negative_inverts_every_channel_independently() {
    let img = RgbImage::from_fn(3, 1, |x, _| Rgb([x as u8, 128 + x as u8, 250 - x as u8]));
    let out = negative(&img);
    for (src, dst) in img.pixels().zip(out.pixels()) {
        assert_eq!(dst.0, src.0.map(|v| 255 - v));
    }
}

#[test]
fn negative_twice_is_identity() {
    let img = ramp();
    assert_eq!(negative(&negative(&img)), img);
}

#[test]
fn unit_contrast_zero_brightness_is_identity() {
    let img = ramp();
    assert_eq!(contrast_brightness(&img, 1.0, 0.0).unwrap(), img);
}

#[test]
fn contrast_brightness_saturates() {
    let img = RgbImage::from_pixel(1, 1, Rgb([10, 100, 200]));
    let out = contrast_brightness(&img, 2.0, 10.0).unwrap();
    assert_eq!(out.get_pixel(0, 0), &Rgb([30, 210, 255]));

    let out = contrast_brightness(&img, 1.0, -50.0).unwrap();
    assert_eq!(out.get_pixel(0, 0), &Rgb([0, 50, 150]));

    let out = contrast_brightness(&img, 0.5, 0.0).unwrap();
    assert_eq!(out.get_pixel(0, 0), &Rgb([5, 50, 100]));
}

#[test]
fn contrast_brightness_rejects_non_finite() {
    let img = ramp();
    assert!(matches!(
        contrast_brightness(&img, f64::NAN, 0.0).unwrap_err(),
        EaselError::Validation(_)
    ));
    assert!(contrast_brightness(&img, 1.0, f64::INFINITY).is_err());
}

#[test]
fn grayscale_is_single_channel_luma() {
    let img = RgbImage::from_pixel(3, 2, Rgb([255, 0, 0]));
    let g = grayscale(&img);
    assert_eq!(g.dimensions(), (3, 2));
    assert!(g.as_raw().iter().all(|&v| v == 76));
}
