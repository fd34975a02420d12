use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::render::backend::FrameRGBA;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of recorded frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between one `begin` and
/// one `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> WedgeResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WedgeResult<()>;
    fn end(&mut self) -> WedgeResult<()>;

    /// Whether every frame must match the size given to `begin` (true for video).
    fn fixed_frame_size(&self) -> bool {
        true
    }
}

/// Keeps every frame in memory. Frame size may change mid-run.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> WedgeResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WedgeResult<()> {
        if self.cfg.is_none() {
            return Err(WedgeError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> WedgeResult<()> {
        self.ended = true;
        Ok(())
    }

    fn fixed_frame_size(&self) -> bool {
        false
    }
}

/// Ensure `idx` strictly follows `last`.
pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> WedgeResult<()> {
    if let Some(last) = last
        && idx.0 <= last.0
    {
        return Err(WedgeError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, last.0
        )));
    }
    Ok(())
}

/// Create `path` and any missing parents.
pub(crate) fn ensure_dir(path: &std::path::Path) -> WedgeResult<()> {
    use anyhow::Context as _;
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create output directory '{}'", path.display()))?;
    Ok(())
}
