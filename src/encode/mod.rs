//! Frame sinks for offline runs.
//!
//! The recorder pushes frames in order; sinks decide where they go (memory, a PNG sequence, or
//! the system `ffmpeg`).

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;
