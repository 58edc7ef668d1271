//! Mesh handles and the render-target slot a flipbook writes into.
//!
//! The animator never owns mesh data. Frames are [`MeshHandle`]s, cheap keys
//! into whatever mesh storage the host renderer keeps. A [`FrameSink`] is the
//! single capability the animator needs from the render side: "show this
//! mesh now".
//!
//! [`MeshSlot`] is the stock sink component. Renderers read `mesh` and can
//! compare `revision` against their last upload to see if a swap happened.
//!
//! # Related
//!
//! - [`crate::components::flipbook::FlipbookAnimator`] – writes into a sink
//! - [`crate::systems::flipbook::flipbook_system`] – pairs animators with slots

use std::fmt;
use std::sync::Arc;

use bevy_ecs::change_detection::Mut;
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Opaque, cheaply clonable reference to a pre-baked mesh owned elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MeshHandle(Arc<str>);

impl MeshHandle {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        MeshHandle(key.into())
    }

    /// Key of the mesh in the host's mesh storage.
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MeshHandle {
    fn from(key: &str) -> Self {
        MeshHandle::new(key)
    }
}

impl From<String> for MeshHandle {
    fn from(key: String) -> Self {
        MeshHandle::new(key)
    }
}

impl From<MeshHandle> for String {
    fn from(handle: MeshHandle) -> Self {
        handle.0.to_string()
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can display one mesh frame at a time.
pub trait FrameSink {
    /// Replace the currently displayed mesh.
    fn set_frame(&mut self, frame: &MeshHandle);
}

/// Render-target slot holding the mesh currently assigned to an entity.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct MeshSlot {
    /// Mesh currently shown, `None` until the first frame is applied.
    pub mesh: Option<MeshHandle>,
    /// Number of writes so far.
    pub revision: u64,
}

impl MeshSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for MeshSlot {
    fn set_frame(&mut self, frame: &MeshHandle) {
        self.mesh = Some(frame.clone());
        self.revision += 1;
    }
}

// Only dereference mutably on an actual swap so `Changed<MeshSlot>` stays quiet
// on ticks that keep the same frame.
impl FrameSink for Mut<'_, MeshSlot> {
    fn set_frame(&mut self, frame: &MeshHandle) {
        (**self).set_frame(frame);
    }
}
