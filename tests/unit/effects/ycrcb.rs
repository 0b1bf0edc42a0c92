use super::*;

#[test]
fn luma_uses_rec601_weights() {
    assert_eq!(luma(Rgb([255, 255, 255])), 255);
    assert_eq!(luma(Rgb([0, 0, 0])), 0);
    assert_eq!(luma(Rgb([255, 0, 0])), 76);
    assert_eq!(luma(Rgb([0, 255, 0])), 150);
    assert_eq!(luma(Rgb([0, 0, 255])), 29);
}

#[test]
fn grays_have_neutral_chroma_and_round_trip_exactly() {
    let img = RgbImage::from_fn(16, 1, |x, _| {
        let v = (x * 17) as u8;
        Rgb([v, v, v])
    });
    let planes = split(&img);
    assert!(planes.cr.as_raw().iter().all(|&v| v == 128));
    assert!(planes.cb.as_raw().iter().all(|&v| v == 128));
    assert_eq!(merge(&planes), img);
}

#[test]
fn colors_round_trip_within_rounding() {
    let colors = [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [200, 100, 50],
        [12, 240, 180],
    ];
    let img = RgbImage::from_fn(colors.len() as u32, 1, |x, _| Rgb(colors[x as usize]));
    let back = merge(&split(&img));
    for (a, b) in img.as_raw().iter().zip(back.as_raw()) {
        assert!((i16::from(*a) - i16::from(*b)).abs() <= 3, "{a} vs {b}");
    }
}

#[test]
fn gray_to_rgb_replicates_channel() {
    let g = GrayImage::from_fn(2, 2, |x, y| Luma([(x + 2 * y) as u8 * 50]));
    let rgb = gray_to_rgb(&g);
    assert_eq!(rgb.get_pixel(1, 1), &Rgb([150, 150, 150]));
    assert_eq!(rgb_to_luma(&rgb), g);
}
