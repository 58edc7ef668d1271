//! Flipbook playback system.
//!
//! Bridges the host's per-frame schedule to [`FlipbookAnimator::tick`]. Each
//! run advances every animator by the current
//! [`WorldTime`](crate::resources::worldtime::WorldTime) delta and writes
//! the visible mesh into the entity's [`MeshSlot`].
//!
//! # Flow
//!
//! 1. [`update_world_time`](crate::systems::time::update_world_time) stores the frame delta
//! 2. `flipbook_system` ticks each `(FlipbookAnimator, MeshSlot)` pair once
//! 3. Renderers read `MeshSlot::mesh`; `Changed<MeshSlot>` fires only on a swap
//!
//! Animators on entities without a `MeshSlot` are not ticked.

use bevy_ecs::prelude::*;

use crate::components::flipbook::FlipbookAnimator;
use crate::components::meshslot::MeshSlot;
use crate::resources::worldtime::WorldTime;

/// Advance flipbook playback and swap meshes on index change.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`FlipbookAnimator`] clock state every run.
/// - Mutates [`MeshSlot`] only when the visible frame changes.
pub fn flipbook_system(
    mut query: Query<(&mut FlipbookAnimator, &mut MeshSlot)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut animator, mut slot) in query.iter_mut() {
        animator.tick(dt, &mut slot);
    }
}
