use crate::encode::sink::{FrameSink, SinkConfig, check_order, ensure_dir};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::render::backend::FrameRGBA;
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Writes `frame_00000.png`, `frame_00001.png`, ... into a directory (straight alpha).
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    last_idx: Option<FrameIndex>,
    written: u64,
    started: bool,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_idx: None,
            written: 0,
            started: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> WedgeResult<()> {
        ensure_dir(&self.dir)?;
        self.last_idx = None;
        self.written = 0;
        self.started = true;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WedgeResult<()> {
        if !self.started {
            return Err(WedgeError::encode("png sink not started"));
        }
        check_order(self.last_idx, idx)?;
        self.last_idx = Some(idx);
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written += 1;
        tracing::trace!(frame = idx.0, path = %path.display(), "png written");
        Ok(())
    }

    fn end(&mut self) -> WedgeResult<()> {
        self.started = false;
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "png sequence done");
        Ok(())
    }

    fn fixed_frame_size(&self) -> bool {
        false
    }
}

/// Save one frame as a straight-alpha RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> WedgeResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
