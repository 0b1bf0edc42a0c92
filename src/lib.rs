//! easel is the state manager behind a small raster image editor.
//!
//! An [`ImageStack`] owns an undoable history of same-sized RGB buffers and a queue
//! of pending line annotations:
//!
//! 1. **Load**: `load_image` decodes a file, fits it to the canvas and resets the session.
//! 2. **Preview**: grayscale, negative, global/CLAHE equalization and
//!    contrast/brightness return a new buffer without touching the history.
//! 3. **Commit**: `push` a preview, or `commit_annotations` to draw the queued lines
//!    onto a copy of the current image.
//! 4. **Undo / save**: `undo` pops one state; `save` writes the current image.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never empty**: the history always holds the current image.
//! - **All-or-nothing**: a failing operation leaves history and queue unchanged.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod annotate;
mod assets;
mod editor;
mod effects;
mod foundation;

pub use annotate::line::{LineAnnotation, Stroke, draw_stroke};
pub use assets::codec::{FsCodec, ImageCodec, resolve_save_path};
pub use assets::color::{HexColor, decode_color};
pub use editor::stack::ImageStack;
pub use effects::equalize::{clahe_gray, equalize_clahe, equalize_global};
pub use effects::tone::{contrast_brightness, grayscale, negative};
pub use effects::ycrcb::{gray_to_rgb, luma, rgb_to_luma};
pub use foundation::config::{ClaheParams, EditorConfig, ResizeFilter};
pub use foundation::core::{Canvas, Point, Vec2};
pub use foundation::error::{EaselError, EaselResult};
