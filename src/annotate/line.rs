use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};

use crate::{
    assets::color::decode_color,
    foundation::{
        core::{Point, Rect, Vec2},
        error::{EaselError, EaselResult},
    },
};

/// A queued request to draw a straight line segment.
///
/// Nothing is validated when the request is queued; see [`LineAnnotation::resolve`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineAnnotation {
    /// Start point in pixel coordinates.
    pub from: (i32, i32),
    /// End point in pixel coordinates.
    pub to: (i32, i32),
    /// Stroke width; rounded to whole pixels when drawn.
    pub width: f64,
    /// Hex color string, see [`crate::decode_color`].
    pub color: String,
}

/// A validated annotation ready to rasterize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    /// Start point in pixel coordinates.
    pub from: (i32, i32),
    /// End point in pixel coordinates.
    pub to: (i32, i32),
    /// Stroke width in whole pixels, at least 1.
    pub width: u32,
    /// Stroke color.
    pub color: Rgb<u8>,
}

impl LineAnnotation {
    /// Decode the color and round the width.
    pub fn resolve(&self) -> EaselResult<Stroke> {
        let color = decode_color(&self.color)?.to_rgb8();

        let rounded = self.width.round();
        if !rounded.is_finite() || rounded < 1.0 || rounded > f64::from(u16::MAX) {
            return Err(EaselError::validation(format!(
                "stroke width {} does not round to a usable pixel width",
                self.width
            )));
        }

        Ok(Stroke {
            from: self.from,
            to: self.to,
            width: rounded as u32,
            color,
        })
    }
}

/// Rasterize `stroke` onto `img`. Pixels outside the image are skipped.
///
/// The segment is clipped to the image (grown by the stroke radius) before
/// rasterizing, so far off-canvas endpoints cost no more than on-canvas ones.
/// Widths above one are drawn as a filled quad along the segment with round caps
/// of radius `width / 2` at both ends.
pub fn draw_stroke(img: &mut RgbImage, stroke: &Stroke) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    let from = Point::new(f64::from(stroke.from.0), f64::from(stroke.from.1));
    let to = Point::new(f64::from(stroke.to.0), f64::from(stroke.to.1));
    let half = f64::from(stroke.width) / 2.0;
    let bounds =
        Rect::new(0.0, 0.0, f64::from(w - 1), f64::from(h - 1)).inflate(half + 1.0, half + 1.0);

    let Some((p0, p1)) = clip_segment(from, to, bounds) else {
        return;
    };

    if stroke.width <= 1 {
        draw_line_segment_mut(
            img,
            (p0.x as f32, p0.y as f32),
            (p1.x as f32, p1.y as f32),
            stroke.color,
        );
        return;
    }

    let dir = p1 - p0;
    let len = dir.hypot();
    if len > 0.0 {
        let normal = Vec2::new(-dir.y, dir.x) * (half / len);
        let quad = [p0 + normal, p1 + normal, p1 - normal, p0 - normal]
            .map(|p| imageproc::point::Point::new(p.x.round() as i32, p.y.round() as i32));
        draw_polygon_mut(img, &quad, stroke.color);
    }

    let radius = (stroke.width / 2) as i32;
    for cap in [from, to] {
        if bounds.contains(cap) {
            draw_filled_circle_mut(img, (cap.x as i32, cap.y as i32), radius, stroke.color);
        }
    }
}

/// Liang-Barsky clip of the segment `p0..p1` to `bounds`; `None` if nothing remains.
fn clip_segment(p0: Point, p1: Point, bounds: Rect) -> Option<(Point, Point)> {
    let d = p1 - p0;
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    for (p, q) in [
        (-d.x, p0.x - bounds.x0),
        (d.x, bounds.x1 - p0.x),
        (-d.y, p0.y - bounds.y0),
        (d.y, bounds.y1 - p0.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((p0.lerp(p1, t0), p0.lerp(p1, t1)))
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/line.rs"]
mod tests;
