use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage, imageops};

use crate::{
    annotate::line::{LineAnnotation, Stroke, draw_stroke},
    assets::codec::{FsCodec, ImageCodec, resolve_save_path},
    effects::{equalize, tone, ycrcb},
    foundation::{
        config::{ClaheParams, EditorConfig},
        error::{EaselError, EaselResult},
    },
};

/// Undoable stack of same-sized RGB images plus a queue of pending line annotations.
///
/// The current image is held apart from the earlier states, so the history is never
/// empty.
///
/// Filters (`to_grayscale`, `to_negative`, the equalizations and
/// `adjust_contrast_brightness`) return a preview and leave the history alone;
/// commit a preview with [`ImageStack::push`] or [`ImageStack::push_gray`].
pub struct ImageStack<C: ImageCodec = FsCodec> {
    config: EditorConfig,
    codec: C,
    current: RgbImage,
    previous: Vec<RgbImage>,
    pending: Vec<LineAnnotation>,
}

impl ImageStack<FsCodec> {
    /// Stack with default settings: a single white 512x512 image.
    pub fn new() -> Self {
        let config = EditorConfig::default();
        Self::from_parts(config, FsCodec)
    }

    /// Stack with validated custom settings and the filesystem codec.
    pub fn with_config(config: EditorConfig) -> EaselResult<Self> {
        Self::with_codec(config, FsCodec)
    }
}

impl Default for ImageStack<FsCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> ImageStack<C> {
    /// Stack with validated custom settings and a caller-provided codec.
    pub fn with_codec(config: EditorConfig, codec: C) -> EaselResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, codec))
    }

    fn from_parts(config: EditorConfig, codec: C) -> Self {
        let current = config.canvas().blank();
        Self {
            config,
            codec,
            current,
            previous: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Settings this stack was built with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current (last) image.
    pub fn current(&self) -> &RgbImage {
        &self.current
    }

    /// Number of states in the history, including the initial one.
    pub fn depth(&self) -> usize {
        self.previous.len() + 1
    }

    /// True if there is a state to return to.
    pub fn can_undo(&self) -> bool {
        !self.previous.is_empty()
    }

    /// True once anything beyond the initial image has been pushed.
    pub fn has_changes(&self) -> bool {
        self.can_undo()
    }

    /// Annotations queued since the last commit, in insertion order.
    pub fn pending_annotations(&self) -> &[LineAnnotation] {
        &self.pending
    }

    /// Replace the whole session with the image at `path`, fitted to the canvas.
    ///
    /// Undo depth and pending annotations are discarded. On error nothing changes.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> EaselResult<()> {
        let decoded = self.codec.decode(path.as_ref())?;
        let (width, height) = self.config.canvas().dimensions();
        let fitted = imageops::resize(
            &decoded,
            width,
            height,
            self.config.resize_filter.filter_type(),
        );
        tracing::debug!(
            source_width = decoded.width(),
            source_height = decoded.height(),
            dropped_states = self.depth(),
            dropped_annotations = self.pending.len(),
            "loaded image resets history"
        );

        self.previous.clear();
        self.current = fitted;
        self.pending.clear();
        Ok(())
    }

    /// Encode the current image. Names without a `.png` or `.jpg` suffix get
    /// `.png` appended; the path actually written is returned.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> EaselResult<PathBuf> {
        let target = resolve_save_path(path.as_ref());
        self.codec.encode(&target, self.current())?;
        tracing::debug!(written = %target.display(), "saved current image");
        Ok(target)
    }

    /// Drop the current image and return to the previous one.
    pub fn undo(&mut self) -> EaselResult<()> {
        self.current = self.previous.pop().ok_or(EaselError::UndoUnderflow)?;
        tracing::debug!(depth = self.depth(), "undo");
        Ok(())
    }

    /// Commit `image` as the new current image. It must match the canvas size.
    pub fn push(&mut self, image: RgbImage) -> EaselResult<()> {
        let canvas = self.config.canvas();
        if !canvas.matches(image.dimensions()) {
            return Err(EaselError::validation(format!(
                "pushed image is {}x{}, canvas is {}x{}",
                image.width(),
                image.height(),
                canvas.width,
                canvas.height
            )));
        }
        self.previous.push(std::mem::replace(&mut self.current, image));
        tracing::debug!(depth = self.depth(), "push");
        Ok(())
    }

    /// Commit a grayscale preview, expanded to three equal channels.
    pub fn push_gray(&mut self, image: &GrayImage) -> EaselResult<()> {
        self.push(ycrcb::gray_to_rgb(image))
    }

    /// Queue a line from `(x1, y1)` to `(x2, y2)`. Color and width are checked on commit.
    pub fn record_annotation(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: f64,
        color: impl Into<String>,
    ) {
        self.pending.push(LineAnnotation {
            from: (x1, y1),
            to: (x2, y2),
            width,
            color: color.into(),
        });
    }

    /// Draw every queued annotation, in order, onto a copy of the current image
    /// and push the result. An empty queue still pushes an unchanged copy.
    ///
    /// All annotations are validated before anything is drawn; on error neither the
    /// history nor the queue changes.
    pub fn commit_annotations(&mut self) -> EaselResult<()> {
        let strokes = self
            .pending
            .iter()
            .map(LineAnnotation::resolve)
            .collect::<EaselResult<Vec<Stroke>>>()?;

        let mut annotated = self.current.clone();
        for stroke in &strokes {
            draw_stroke(&mut annotated, stroke);
        }

        self.previous.push(std::mem::replace(&mut self.current, annotated));
        self.pending.clear();
        tracing::debug!(
            strokes = strokes.len(),
            depth = self.depth(),
            "committed annotations"
        );
        Ok(())
    }

    /// Grayscale preview of the current image.
    pub fn to_grayscale(&self) -> GrayImage {
        tone::grayscale(self.current())
    }

    /// Negative preview of the current image.
    pub fn to_negative(&self) -> RgbImage {
        tone::negative(self.current())
    }

    /// Preview with globally equalized luma.
    pub fn equalize_global(&self) -> RgbImage {
        equalize::equalize_global(self.current())
    }

    /// Preview with CLAHE-equalized luma.
    pub fn equalize_clahe(&self, params: &ClaheParams) -> EaselResult<RgbImage> {
        equalize::equalize_clahe(self.current(), params)
    }

    /// [`ImageStack::equalize_clahe`] with the configured parameters.
    pub fn equalize_clahe_default(&self) -> EaselResult<RgbImage> {
        let params = self.config.clahe;
        self.equalize_clahe(&params)
    }

    /// Preview of `clamp(alpha * v + beta, 0, 255)` over the current image.
    pub fn adjust_contrast_brightness(&self, alpha: f64, beta: f64) -> EaselResult<RgbImage> {
        tone::contrast_brightness(self.current(), alpha, beta)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/stack.rs"]
mod tests;
