//! wedgecut renders a procedurally textured dish (pizza, galette or tart), splits it into wedges,
//! and animates a cutter slicing it while crumbs fly.
//!
//! Everything runs headless on the CPU:
//!
//! - Drive a [`DemoSession`] directly (controls are method calls, time is a virtual clock)
//! - Or describe a run as a [`DemoScript`] and [`record`] it into a [`FrameSink`]
//!   (PNG sequence, `ffmpeg` MP4, or memory)
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animate;
pub(crate) mod assets;
pub(crate) mod crumbs;
pub(crate) mod draw;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod record;
pub(crate) mod render;
pub(crate) mod script;
pub(crate) mod session;
pub(crate) mod style;
pub(crate) mod texture;

pub use crate::foundation::core::{Affine, BezPath, Fps, FrameIndex, Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{WedgeError, WedgeResult};
pub use crate::foundation::rng::{DemoRng, demo_rng};

pub use crate::animate::animator::{AnimatorEvent, CutAnimator, Phase};
pub use crate::animate::clock::{IntervalGuard, IntervalId, Millis, Tick, VirtualClock};
pub use crate::animate::motion::{
    CutMotion, CutterPose, DIAMETER_MOVE_MS, PRE_ROLL_MS, RADIUS_MOVE_MS, SAMPLE_INTERVAL_MS,
    percent_to_px, plan_motions, sequence_duration,
};
pub use crate::assets::cutter::CutterIcon;
pub use crate::crumbs::{CRUMB_SCATTER, Crumb, CrumbShape, CrumbStore};
pub use crate::draw::gradient::RadialGradient;
pub use crate::draw::list::{DrawList, DrawOp, DrawMode, Paint, StrokeStyle};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::geometry::{
    CutKind, CutLine, DishLayout, Sector, SliceCount, cut_count, cut_lines, explosion_offset,
    sectors, wedge_path,
};
pub use crate::record::{RecordStats, record, render_still};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::plan::{EXPLOSION_OFFSET, ScenePlan, WedgePlacement, compile_scene};
pub use crate::render::cpu::CpuRasterizer;
pub use crate::render::renderer::SliceRenderer;
pub use crate::script::{Action, DemoConfig, DemoScript, TimedAction};
pub use crate::session::{
    ControlsView, CutButton, CutOutcome, DemoSession, RenderState, SessionEvent,
};
pub use crate::style::{Style, StyleSpec, TextureGenerator};
pub use crate::texture::cache::{Texture, TextureCache, TextureKey};
pub use crate::texture::generate;
pub use crate::texture::spiral::{SpiralSlot, spiral_layout};
