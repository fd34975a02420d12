//! Cut animation: a virtual millisecond clock with scoped interval timers, the motion plan, and
//! the sequential animator that walks the cutter along each cut line.

pub(crate) mod animator;
pub(crate) mod clock;
pub(crate) mod motion;
