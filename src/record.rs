//! Offline driver: plays a [`DemoScript`] against a [`DemoSession`] at a fixed frame rate.

use crate::animate::clock::Millis;
use crate::animate::motion::sequence_duration;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, Viewport};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::render::backend::FrameRGBA;
use crate::script::{Action, DemoConfig, DemoScript};
use crate::session::{DemoSession, SessionEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub frames: u64,
    /// Timestamp of the last recorded frame.
    pub duration_ms: Millis,
    pub crumbs_spawned: u64,
    pub cuts_completed: u32,
    pub texture_generations: u64,
    pub redraw_requests: u64,
}

impl RecordStats {
    fn tally(&mut self, events: &[SessionEvent]) {
        for e in events {
            match e {
                SessionEvent::CrumbsSpawned { count, .. } => self.crumbs_spawned += *count as u64,
                SessionEvent::CutCompleted => self.cuts_completed += 1,
                _ => {}
            }
        }
    }
}

/// Record `script` into `sink`, one frame per frame interval.
///
/// Actions run at their own timestamps, between frames. Recording stops once every action has
/// run, no cut is animating, and `tail_ms` of idle time has been captured.
#[tracing::instrument(skip_all, fields(actions = script.actions.len(), fps = script.config.fps.as_f64()))]
pub fn record(script: &DemoScript, sink: &mut dyn FrameSink) -> WedgeResult<RecordStats> {
    script.validate()?;
    let cfg = &script.config;
    let mut session = DemoSession::new(cfg)?;
    let side = session.viewport().physical_size();
    sink.begin(SinkConfig {
        width: side,
        height: side,
        fps: cfg.fps,
    })?;
    let fixed_size = sink.fixed_frame_size();

    let mut stats = RecordStats::default();
    let mut pending = script.actions.iter().peekable();
    let mut idle_since: Option<Millis> = None;
    for i in 0u64.. {
        let t = cfg.fps.frame_time_ms(FrameIndex(i));
        while let Some(action) = pending.next_if(|a| a.at_ms <= t) {
            stats.tally(&session.advance_to(action.at_ms)?);
            if fixed_size {
                check_frame_size(&action.action, side)?;
            }
            stats.tally(&apply(&mut session, &action.action)?);
        }
        stats.tally(&session.advance_to(t)?);

        let frame = session.draw()?;
        sink.push_frame(FrameIndex(i), &frame)?;
        stats.frames += 1;
        stats.duration_ms = t;

        if pending.peek().is_some() || session.state().animating {
            idle_since = None;
        } else {
            let since = *idle_since.get_or_insert(t);
            if t.saturating_sub(since) >= cfg.tail_ms {
                break;
            }
        }
    }
    sink.end()?;

    stats.texture_generations = session.texture_generations();
    stats.redraw_requests = session.redraw_requests();
    tracing::debug!(
        frames = stats.frames,
        duration_ms = stats.duration_ms,
        crumbs = stats.crumbs_spawned,
        "recording finished"
    );
    Ok(stats)
}

fn apply(session: &mut DemoSession, action: &Action) -> WedgeResult<Vec<SessionEvent>> {
    tracing::trace!(?action, at = session.now(), "applying action");
    match *action {
        Action::SetStyle { style } => Ok(session.set_style(style)),
        Action::SetSlices { slices } => session.set_slices(slices),
        Action::PressCut => Ok(session.press_cut().1),
        Action::Resize { size, dpr } => session.resize(Viewport::new(size, dpr)?),
    }
}

fn check_frame_size(action: &Action, side: u32) -> WedgeResult<()> {
    if let Action::Resize { size, dpr } = *action {
        let next = Viewport::new(size, dpr)?.physical_size();
        if next != side {
            return Err(WedgeError::validation(format!(
                "resize to {next}px would change the {side}px frame size of a fixed-size output"
            )));
        }
    }
    Ok(())
}

/// One frame of the initial scene; with `cut`, after a full cut has played out.
#[tracing::instrument(skip(config), fields(style = %config.style, slices = config.slices.get()))]
pub fn render_still(config: &DemoConfig, cut: bool) -> WedgeResult<FrameRGBA> {
    let mut session = DemoSession::new(config)?;
    if cut {
        session.press_cut();
        let span = sequence_duration(session.animator().motions());
        session.advance(span)?;
        if session.state().animating {
            return Err(WedgeError::render("cut did not finish in its planned duration"));
        }
    }
    session.draw()
}
