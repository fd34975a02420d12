//! Slice renderer: compiles a frame into a [`plan::ScenePlan`] and executes it on the CPU.

pub(crate) mod backend;
pub(crate) mod blur;
pub(crate) mod cpu;
pub(crate) mod plan;
pub(crate) mod renderer;
