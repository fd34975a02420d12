use crate::encode::sink::{FrameSink, SinkConfig, check_order, ensure_dir};
use crate::foundation::core::{Fps, FrameIndex, Rgba8};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::render::backend::FrameRGBA;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Frames are flattened over this color; video has no alpha.
    pub background: Rgba8,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>, background: Rgba8) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background,
        }
    }
}

/// Streams opaque RGBA frames into the system `ffmpeg` (libx264, yuv420p MP4).
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> WedgeResult<()> {
        check_video_config(&cfg)?;
        if let Some(parent) = self.opts.out_path.parent() {
            ensure_dir(parent)?;
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(WedgeError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(WedgeError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
        ]);
        // rawvideo needs the rate before -i
        cmd.args(["-r", &fps_arg(cfg.fps)]);
        cmd.args(["-i", "pipe:0"]);
        cmd.args([
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]);
        cmd.arg(&self.opts.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            WedgeError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| WedgeError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| WedgeError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        tracing::debug!(
            width = cfg.width,
            height = cfg.height,
            out = %self.opts.out_path.display(),
            "ffmpeg started"
        );
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WedgeResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| WedgeError::encode("ffmpeg sink not started"))?;
        check_order(self.last_idx, idx)?;
        self.last_idx = Some(idx);
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(WedgeError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let opaque = frame.flattened_over(self.opts.background);
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(WedgeError::encode("ffmpeg sink is already finalized"));
        };
        use std::io::Write as _;
        stdin.write_all(&opaque).map_err(|e| {
            WedgeError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> WedgeResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| WedgeError::encode("ffmpeg sink not started"))?;
        let status = child
            .wait()
            .map_err(|e| WedgeError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| WedgeError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| WedgeError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(WedgeError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }
        self.cfg = None;
        Ok(())
    }
}

fn check_video_config(cfg: &SinkConfig) -> WedgeResult<()> {
    Fps::new(cfg.fps.num, cfg.fps.den)?;
    if cfg.width == 0 || cfg.height == 0 {
        return Err(WedgeError::validation(
            "ffmpeg sink width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(WedgeError::validation(
            "ffmpeg sink width/height must be even (yuv420p)",
        ));
    }
    Ok(())
}

fn fps_arg(fps: Fps) -> String {
    format!("{}/{}", fps.num, fps.den)
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
