use crate::animate::clock::{IntervalGuard, Millis, Tick, VirtualClock};
use crate::animate::motion::{
    CutMotion, CutterPose, PRE_ROLL_MS, SAMPLE_INTERVAL_MS, percent_to_px, plan_motions,
};
use crate::foundation::core::Point;
use crate::foundation::error::WedgeResult;
use crate::geometry::SliceCount;

#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Cutter parked at the motion's start.
    PreRoll { motion: usize, until: Millis },
    /// Cutter travelling; `sampler` drives crumb bursts and is dropped when the move ends.
    Moving {
        motion: usize,
        started: Millis,
        until: Millis,
        sampler: IntervalGuard,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatorEvent {
    MotionStarted { index: u32 },
    /// The cutter passed `at` (percent of canvas); spawn crumbs there.
    Sample { index: u32, at: Point },
    MotionFinished { index: u32 },
    /// Last motion done; the dish is now cut.
    Completed,
}

/// Runs the motions of one cut strictly one after another.
#[derive(Debug, Default)]
pub struct CutAnimator {
    motions: Vec<CutMotion>,
    phase: Phase,
}

impl CutAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn motions(&self) -> &[CutMotion] {
        &self.motions
    }

    /// Begin a sequence at `now`. Returns `false` (and changes nothing) while one is running.
    pub fn start(&mut self, slices: SliceCount, now: Millis) -> bool {
        if self.is_running() {
            return false;
        }
        self.motions = plan_motions(slices);
        if self.motions.is_empty() {
            return false;
        }
        self.phase = Phase::PreRoll {
            motion: 0,
            until: now + PRE_ROLL_MS,
        };
        tracing::debug!(slices = slices.get(), motions = self.motions.len(), "cut started");
        true
    }

    /// Stop whatever is running, cancelling the sampler. Returns whether anything was running.
    pub fn abort(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = Phase::Idle;
        if was_running {
            tracing::debug!("cut aborted");
        }
        was_running
    }

    /// When the current phase ends.
    pub fn next_deadline(&self) -> Option<Millis> {
        match self.phase {
            Phase::Idle => None,
            Phase::PreRoll { until, .. } | Phase::Moving { until, .. } => Some(until),
        }
    }

    /// Handle the current phase's deadline. `now` must be at or past [`Self::next_deadline`].
    pub fn on_deadline(
        &mut self,
        clock: &VirtualClock,
        now: Millis,
    ) -> WedgeResult<Vec<AnimatorEvent>> {
        let mut events = Vec::new();
        match std::mem::take(&mut self.phase) {
            Phase::PreRoll { motion, until } if now >= until => {
                let m = &self.motions[motion];
                let sampler = clock.interval(SAMPLE_INTERVAL_MS)?;
                self.phase = Phase::Moving {
                    motion,
                    started: now,
                    until: now + m.duration,
                    sampler,
                };
                tracing::trace!(index = m.index, "motion started");
                events.push(AnimatorEvent::MotionStarted { index: m.index });
            }
            Phase::Moving {
                motion,
                until,
                sampler,
                ..
            } if now >= until => {
                drop(sampler);
                let index = self.motions[motion].index;
                tracing::trace!(index, "motion finished");
                events.push(AnimatorEvent::MotionFinished { index });
                if motion + 1 < self.motions.len() {
                    self.phase = Phase::PreRoll {
                        motion: motion + 1,
                        until: now + PRE_ROLL_MS,
                    };
                } else {
                    tracing::debug!("cut completed");
                    events.push(AnimatorEvent::Completed);
                }
            }
            other => self.phase = other,
        }
        Ok(events)
    }

    /// Handle a clock tick; only the current sampler's ticks strictly inside the move count.
    pub fn on_tick(&self, tick: Tick) -> Option<AnimatorEvent> {
        let Phase::Moving {
            motion,
            started,
            until,
            ref sampler,
        } = self.phase
        else {
            return None;
        };
        if tick.id != sampler.id() || tick.at >= until {
            return None;
        }
        let m = &self.motions[motion];
        Some(AnimatorEvent::Sample {
            index: m.index,
            at: m.position_at(tick.at.saturating_sub(started)),
        })
    }

    /// Run `clock` to `target`, interleaving phase deadlines and sampler ticks in time order.
    ///
    /// A deadline wins a tie with a tick: the sampler is cancelled before it could fire at the
    /// instant its move ends.
    pub fn advance(
        &mut self,
        clock: &mut VirtualClock,
        target: Millis,
    ) -> WedgeResult<Vec<(Millis, AnimatorEvent)>> {
        let mut out = Vec::new();
        loop {
            let deadline = self.next_deadline().filter(|&d| d <= target);
            let tick_at = clock.next_tick_at().filter(|&t| t <= target);
            match (deadline, tick_at) {
                (Some(d), t) if t.is_none_or(|t| d <= t) => {
                    clock.jump_to(d);
                    let now = clock.now();
                    for e in self.on_deadline(clock, now)? {
                        out.push((now, e));
                    }
                }
                (_, Some(_)) => {
                    let Some(tick) = clock.pop_tick(target) else {
                        break;
                    };
                    if let Some(e) = self.on_tick(tick) {
                        out.push((tick.at, e));
                    }
                }
                _ => break,
            }
        }
        clock.jump_to(target);
        Ok(out)
    }

    /// Icon placement at `now` on a canvas of `size` logical pixels, `None` when idle.
    pub fn cutter_pose(&self, now: Millis, size: f64) -> Option<CutterPose> {
        let (m, at) = match self.phase {
            Phase::Idle => return None,
            Phase::PreRoll { motion, .. } => {
                let m = &self.motions[motion];
                (m, m.start)
            }
            Phase::Moving {
                motion, started, ..
            } => {
                let m = &self.motions[motion];
                (m, m.position_at(now.saturating_sub(started)))
            }
        };
        Some(CutterPose {
            position: percent_to_px(at, size),
            rotation: m.rotation,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/animator.rs"]
mod tests;
