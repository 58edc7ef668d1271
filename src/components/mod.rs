//! ECS components for flipbook animation.
//!
//! Submodules overview:
//! - [`flipbook`] – clip definition, playback state and the tick
//! - [`meshslot`] – mesh handles, the frame sink trait and the render-target slot

pub mod flipbook;
pub mod meshslot;
