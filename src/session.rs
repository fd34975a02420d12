//! The interactive demo as an explicit state object.
//!
//! [`DemoSession`] holds everything the page kept in globals: the [`RenderState`], crumbs,
//! the texture cache, the cut animator and its clock. Controls become method calls; time only
//! moves when [`DemoSession::advance`] or [`DemoSession::advance_to`] is called.

use crate::animate::animator::{AnimatorEvent, CutAnimator};
use crate::animate::clock::{Millis, VirtualClock};
use crate::animate::motion::{CutterPose, percent_to_px};
use crate::assets::cutter::{CutterIcon, read_svg};
use crate::crumbs::CrumbStore;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::WedgeResult;
use crate::foundation::rng::{DemoRng, demo_rng};
use crate::geometry::{SliceCount, cut_count};
use crate::render::backend::FrameRGBA;
use crate::render::renderer::SliceRenderer;
use crate::script::DemoConfig;
use crate::style::Style;
use crate::texture::cache::TextureCache;
use std::sync::Arc;

/// What a frame shows. Read by the renderer on every draw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    pub style: Style,
    pub slices: SliceCount,
    pub cut: bool,
    pub animating: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutOutcome {
    /// A cut sequence began.
    Started,
    /// The dish was already cut and is whole again.
    Reset,
    /// A sequence is running; nothing changed.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    MotionStarted { index: u32 },
    /// A burst of `count` crumbs landed around `at` (logical px).
    CrumbsSpawned { index: u32, count: usize, at: Point },
    MotionFinished { index: u32 },
    CutCompleted,
    Redraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutButton {
    Cut,
    Reset,
}

impl CutButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cut => "Cut now",
            Self::Reset => "Reset",
        }
    }
}

/// What the controls display: slider value, cut counter, toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlsView {
    pub slices: u32,
    pub cuts: u32,
    pub button: CutButton,
    pub busy: bool,
}

pub struct DemoSession {
    state: RenderState,
    crumbs: CrumbStore,
    textures: TextureCache,
    clock: VirtualClock,
    animator: CutAnimator,
    renderer: SliceRenderer,
    rng: DemoRng,
    viewport: Viewport,
    cutter_size: f64,
    cutter_svg: Option<Arc<[u8]>>,
    cutter: CutterIcon,
    redraw_requests: u64,
}

impl std::fmt::Debug for DemoSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoSession")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("now", &self.clock.now())
            .field("crumbs", &self.crumbs.len())
            .finish_non_exhaustive()
    }
}

impl DemoSession {
    pub fn new(config: &DemoConfig) -> WedgeResult<Self> {
        config.validate()?;
        let viewport = config.viewport()?;
        let cutter_svg: Option<Arc<[u8]>> = match &config.cutter_svg {
            Some(path) => Some(read_svg(path)?.into()),
            None => None,
        };
        let cutter = build_cutter(cutter_svg.as_deref(), config.cutter_size, viewport.dpr)?;
        Ok(Self {
            state: RenderState {
                style: config.style,
                slices: config.slices,
                cut: false,
                animating: false,
            },
            crumbs: CrumbStore::new(),
            textures: TextureCache::new(),
            clock: VirtualClock::new(),
            animator: CutAnimator::new(),
            renderer: SliceRenderer::new(config.background),
            rng: demo_rng(config.seed),
            viewport,
            cutter_size: config.cutter_size,
            cutter_svg,
            cutter,
            redraw_requests: 0,
        })
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn crumbs(&self) -> &CrumbStore {
        &self.crumbs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn animator(&self) -> &CutAnimator {
        &self.animator
    }

    /// Sampler timers still registered with the clock.
    pub fn active_intervals(&self) -> usize {
        self.clock.active_intervals()
    }

    pub fn texture_generations(&self) -> u64 {
        self.textures.generations()
    }

    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    pub fn cutter_pose(&self) -> Option<CutterPose> {
        self.animator.cutter_pose(self.clock.now(), self.viewport.size)
    }

    pub fn controls(&self) -> ControlsView {
        ControlsView {
            slices: self.state.slices.get(),
            cuts: cut_count(self.state.slices),
            button: if self.state.cut {
                CutButton::Reset
            } else {
                CutButton::Cut
            },
            busy: self.state.animating,
        }
    }

    /// Slider moved: stops any cut in progress and shows the whole dish with the new guides.
    pub fn set_slices(&mut self, n: u32) -> WedgeResult<Vec<SessionEvent>> {
        let slices = SliceCount::new(n)?;
        self.stop_cut();
        self.state.slices = slices;
        tracing::debug!(slices = n, "slice count changed");
        Ok(vec![self.request_redraw()])
    }

    pub fn set_style(&mut self, style: Style) -> Vec<SessionEvent> {
        self.stop_cut();
        self.state.style = style;
        self.textures.invalidate();
        tracing::debug!(%style, "style changed");
        vec![self.request_redraw()]
    }

    /// The cut/reset button.
    pub fn press_cut(&mut self) -> (CutOutcome, Vec<SessionEvent>) {
        if self.state.animating || self.animator.is_running() {
            tracing::trace!("cut pressed while animating");
            return (CutOutcome::Ignored, Vec::new());
        }
        if self.state.cut {
            self.state.cut = false;
            self.crumbs.clear();
            return (CutOutcome::Reset, vec![self.request_redraw()]);
        }
        if !self.animator.start(self.state.slices, self.clock.now()) {
            return (CutOutcome::Ignored, Vec::new());
        }
        self.state.animating = true;
        (CutOutcome::Started, vec![self.request_redraw()])
    }

    /// New canvas size or pixel ratio. A running cut keeps going.
    pub fn resize(&mut self, viewport: Viewport) -> WedgeResult<Vec<SessionEvent>> {
        viewport.validate()?;
        if viewport.dpr != self.viewport.dpr {
            self.cutter = build_cutter(self.cutter_svg.as_deref(), self.cutter_size, viewport.dpr)?;
        }
        self.viewport = viewport;
        self.textures.invalidate();
        tracing::debug!(size = viewport.size, dpr = viewport.dpr, "viewport resized");
        Ok(vec![self.request_redraw()])
    }

    pub fn advance(&mut self, ms: Millis) -> WedgeResult<Vec<SessionEvent>> {
        let target = self.clock.now().saturating_add(ms);
        self.advance_to(target)
    }

    /// Run time forward to `t` (never backwards), applying every animator step on the way.
    pub fn advance_to(&mut self, t: Millis) -> WedgeResult<Vec<SessionEvent>> {
        let steps = self.animator.advance(&mut self.clock, t)?;
        let mut out = Vec::with_capacity(steps.len());
        for (_, event) in steps {
            match event {
                AnimatorEvent::MotionStarted { index } => {
                    out.push(SessionEvent::MotionStarted { index });
                }
                AnimatorEvent::Sample { index, at } => {
                    let at = percent_to_px(at, self.viewport.size);
                    let spec = self.state.style.spec();
                    let count = self.crumbs.spawn_burst(at, spec, &mut self.rng);
                    out.push(SessionEvent::CrumbsSpawned { index, count, at });
                    out.push(self.request_redraw());
                }
                AnimatorEvent::MotionFinished { index } => {
                    out.push(SessionEvent::MotionFinished { index });
                }
                AnimatorEvent::Completed => {
                    self.state.cut = true;
                    self.state.animating = false;
                    out.push(SessionEvent::CutCompleted);
                    out.push(self.request_redraw());
                }
            }
        }
        Ok(out)
    }

    /// Render the current state, regenerating the texture first if style or size changed.
    pub fn draw(&mut self) -> WedgeResult<FrameRGBA> {
        let texture = self.textures.ensure(
            self.state.style,
            &self.viewport,
            self.renderer.rasterizer_mut(),
            &mut self.rng,
        )?;
        let cutter = self
            .animator
            .cutter_pose(self.clock.now(), self.viewport.size)
            .map(|pose| (&self.cutter, pose));
        self.renderer
            .render(&self.state, &self.crumbs, texture, &self.viewport, cutter)
    }

    fn stop_cut(&mut self) {
        self.animator.abort();
        self.state.animating = false;
        self.state.cut = false;
        self.crumbs.clear();
    }

    fn request_redraw(&mut self) -> SessionEvent {
        self.redraw_requests += 1;
        SessionEvent::Redraw
    }
}

fn build_cutter(svg: Option<&[u8]>, size: f64, dpr: f64) -> WedgeResult<CutterIcon> {
    match svg {
        Some(bytes) => CutterIcon::from_svg_data(bytes, size, dpr),
        None => CutterIcon::pizza_wheel(size, dpr),
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
