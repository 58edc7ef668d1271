//! Event types and observers.
//!
//! Submodules:
//! - [`flipbookcontrol`] – play, pause, reverse, seek and reset requests
pub mod flipbookcontrol;
