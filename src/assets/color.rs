use image::Rgb;

use crate::foundation::error::{EaselError, EaselResult};

/// Channel values parsed from a hex color string.
///
/// Channels keep the parsed magnitude; wide forms such as `#fff000000` can exceed
/// 255 and are saturated by [`HexColor::to_rgb8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u32,
    /// Green channel.
    pub g: u32,
    /// Blue channel.
    pub b: u32,
}

impl HexColor {
    /// Saturating conversion to an 8-bit RGB pixel.
    pub fn to_rgb8(self) -> Rgb<u8> {
        fn sat(v: u32) -> u8 {
            v.min(255) as u8
        }
        Rgb([sat(self.r), sat(self.g), sat(self.b)])
    }
}

impl From<HexColor> for (u32, u32, u32) {
    fn from(c: HexColor) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Parse `#RGB`, `#RRGGBB`, `#RRRGGGBBB`, ... into three channels.
///
/// One leading `#` is optional. The remaining digits are split into three equal
/// runs, so the digit count must be a non-zero multiple of three.
pub fn decode_color(s: &str) -> EaselResult<HexColor> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.is_empty() || !digits.len().is_multiple_of(3) {
        return Err(EaselError::color_decode(format!(
            "\"{s}\" must hold a non-zero multiple of 3 hex digits, got {}",
            digits.len()
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EaselError::color_decode(format!(
            "\"{s}\" contains non-hex characters"
        )));
    }

    let run = digits.len() / 3;
    let channel = |i: usize| -> EaselResult<u32> {
        let part = &digits[i * run..(i + 1) * run];
        u32::from_str_radix(part, 16)
            .map_err(|e| EaselError::color_decode(format!("channel \"{part}\" in \"{s}\": {e}")))
    };

    Ok(HexColor {
        r: channel(0)?,
        g: channel(1)?,
        b: channel(2)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
