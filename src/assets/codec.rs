use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use image::RgbImage;

use crate::foundation::error::{EaselError, EaselResult};

/// Source and sink of raster images for an editing session.
pub trait ImageCodec {
    /// Read `path` into a 3-channel buffer at its native size.
    fn decode(&self, path: &Path) -> EaselResult<RgbImage>;

    /// Write `image` to `path`, choosing the format from its extension.
    fn encode(&self, path: &Path, image: &RgbImage) -> EaselResult<()>;
}

/// [`ImageCodec`] backed by the local filesystem and the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsCodec;

impl ImageCodec for FsCodec {
    fn decode(&self, path: &Path) -> EaselResult<RgbImage> {
        let dyn_img = image::open(path)
            .map_err(|e| EaselError::decode(format!("{}: {e}", path.display())))?;
        Ok(dyn_img.to_rgb8())
    }

    fn encode(&self, path: &Path, image: &RgbImage) -> EaselResult<()> {
        image
            .save(path)
            .map_err(|e| EaselError::encode(format!("{}: {e}", path.display())))
    }
}

/// Path `save` writes to: `path` unchanged when its name ends in `.png` or
/// `.jpg` (case-sensitive), otherwise `path` with `.png` appended.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    let raw = path.as_os_str().as_encoded_bytes();
    if raw.ends_with(b".png") || raw.ends_with(b".jpg") {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
