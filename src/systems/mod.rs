//! Engine systems.
//!
//! Submodules overview
//! - [`flipbook`] – advance flipbook animators and swap meshes
//! - [`time`] – update simulation time and delta

pub mod flipbook;
pub mod time;
