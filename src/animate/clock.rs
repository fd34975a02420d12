use crate::foundation::error::{WedgeError, WedgeResult};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Virtual time in whole milliseconds.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalId(u64);

/// One firing of a repeating interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub id: IntervalId,
    pub at: Millis,
}

#[derive(Debug)]
struct Interval {
    id: IntervalId,
    period: Millis,
    next_due: Millis,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    intervals: Vec<Interval>,
}

/// Single-threaded cooperative clock. Nothing runs on its own: callers move time forward and
/// receive the interval ticks that fell due, in time order.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Millis,
    registry: Rc<RefCell<Registry>>,
}

/// Keeps an interval registered. Dropping the guard cancels the interval.
#[derive(Debug)]
#[must_use = "dropping the guard cancels the interval immediately"]
pub struct IntervalGuard {
    id: IntervalId,
    registry: Weak<RefCell<Registry>>,
}

impl IntervalGuard {
    pub fn id(&self) -> IntervalId {
        self.id
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().intervals.retain(|i| i.id != self.id);
            tracing::trace!(id = self.id.0, "interval cancelled");
        }
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Register an interval firing every `period` ms, first at `now + period`.
    pub fn interval(&self, period: Millis) -> WedgeResult<IntervalGuard> {
        if period == 0 {
            return Err(WedgeError::validation("interval period must be > 0"));
        }
        let mut reg = self.registry.borrow_mut();
        let id = IntervalId(reg.next_id);
        reg.next_id += 1;
        reg.intervals.push(Interval {
            id,
            period,
            next_due: self.now + period,
        });
        Ok(IntervalGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        })
    }

    /// Number of live intervals.
    pub fn active_intervals(&self) -> usize {
        self.registry.borrow().intervals.len()
    }

    /// When the earliest live interval fires next.
    pub fn next_tick_at(&self) -> Option<Millis> {
        self.registry
            .borrow()
            .intervals
            .iter()
            .map(|i| i.next_due)
            .min()
    }

    /// Fire the earliest interval due at or before `limit`, moving `now` to its due time.
    /// Intervals due at the same instant fire in registration order.
    pub fn pop_tick(&mut self, limit: Millis) -> Option<Tick> {
        let mut reg = self.registry.borrow_mut();
        let interval = reg
            .intervals
            .iter_mut()
            .filter(|i| i.next_due <= limit)
            .min_by_key(|i| (i.next_due, i.id))?;
        let tick = Tick {
            id: interval.id,
            at: interval.next_due,
        };
        interval.next_due += interval.period;
        self.now = self.now.max(tick.at);
        Some(tick)
    }

    /// Move time to `t` without firing anything. Time never runs backwards.
    pub fn jump_to(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }

    /// All ticks due in `(now, t]`, in time order; afterwards `now == t`.
    pub fn advance_to(&mut self, t: Millis) -> Vec<Tick> {
        let mut out = Vec::new();
        while let Some(tick) = self.pop_tick(t) {
            out.push(tick);
        }
        self.jump_to(t);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/clock.rs"]
mod tests;
