//! Backend-agnostic draw lists.
//!
//! Texture generators, crumbs and cut guides describe what they paint as [`DrawList`]s; the CPU
//! backend turns them into pixels. Keeping the list inspectable is what lets tests assert
//! structural properties (bounds, counts) without comparing pixels.

pub(crate) mod gradient;
pub(crate) mod list;
