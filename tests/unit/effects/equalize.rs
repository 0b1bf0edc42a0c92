use image::Rgb;

use super::*;

fn two_level_gray(w: u32, h: u32, lo: u8, hi: u8) -> GrayImage {
    GrayImage::from_fn(w, h, |x, _| Luma([if x < w / 2 { lo } else { hi }]))
}

fn spread(img: &GrayImage) -> u8 {
    let min = img.as_raw().iter().copied().min().unwrap();
    let max = img.as_raw().iter().copied().max().unwrap();
    max - min
}

fn unclipped(grid: (u32, u32)) -> ClaheParams {
    ClaheParams {
        grid,
        clip_limit: 0.0,
    }
}

#[test]
fn single_tile_without_clipping_is_plain_equalization() {
    let src = two_level_gray(16, 16, 100, 110);
    let out = clahe_gray(&src, &unclipped((1, 1))).unwrap();
    assert_eq!(out.get_pixel(0, 0).0[0], 128);
    assert_eq!(out.get_pixel(15, 15).0[0], 255);
}

#[test]
fn clip_limit_bounds_contrast_gain() {
    let src = two_level_gray(16, 16, 100, 110);
    let limited = clahe_gray(
        &src,
        &ClaheParams {
            grid: (1, 1),
            clip_limit: 2.0,
        },
    )
    .unwrap();
    assert_eq!(limited.get_pixel(0, 0).0[0], 103);
    assert_eq!(limited.get_pixel(15, 0).0[0], 115);

    let free = clahe_gray(&src, &unclipped((1, 1))).unwrap();
    assert!(spread(&limited) < spread(&free));
}

#[test]
fn white_stays_white_with_default_params() {
    let src = GrayImage::from_pixel(64, 48, Luma([255]));
    let out = clahe_gray(&src, &ClaheParams::default()).unwrap();
    assert!(out.as_raw().iter().all(|&v| v == 255));
}

#[test]
fn tiled_equalization_stretches_low_contrast_ramp() {
    let src = GrayImage::from_fn(64, 64, |x, _| Luma([100 + (x / 6) as u8]));
    let out = clahe_gray(&src, &unclipped((8, 8))).unwrap();
    assert_eq!(out.dimensions(), src.dimensions());
    assert!(spread(&out) > spread(&src));
}

#[test]
fn grid_larger_than_image_is_capped() {
    let src = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 40 + y * 10) as u8]));
    let out = clahe_gray(&src, &ClaheParams::default()).unwrap();
    assert_eq!(out.dimensions(), (3, 2));
}

#[test]
fn invalid_params_are_rejected() {
    let src = GrayImage::new(4, 4);
    assert!(clahe_gray(&src, &unclipped((0, 2))).is_err());
    assert!(
        clahe_gray(
            &src,
            &ClaheParams {
                grid: (2, 2),
                clip_limit: f64::NAN,
            }
        )
        .is_err()
    );
}

#[test]
fn tile_spans_cover_length_without_gaps() {
    let spans: Vec<_> = (0..3).map(|i| tile_span(10, 3, i)).collect();
    assert_eq!(spans, vec![(0, 3), (3, 6), (6, 10)]);
}

#[test]
fn global_equalization_keeps_white_and_stretches_luma() {
    let white = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
    assert_eq!(equalize_global(&white), white);

    let dull = RgbImage::from_fn(32, 32, |x, _| {
        let v = 100 + (x / 4) as u8;
        Rgb([v, v, v])
    });
    let out = equalize_global(&dull);
    assert_eq!(out.dimensions(), dull.dimensions());
    let luma_in = ycrcb::rgb_to_luma(&dull);
    let luma_out = ycrcb::rgb_to_luma(&out);
    assert!(spread(&luma_out) > spread(&luma_in));
}

#[test]
fn clahe_on_rgb_keeps_grays_gray() {
    let src = RgbImage::from_fn(32, 32, |x, y| {
        let v = 60 + ((x + y) / 2) as u8;
        Rgb([v, v, v])
    });
    let out = equalize_clahe(&src, &ClaheParams::default()).unwrap();
    assert!(out.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}
