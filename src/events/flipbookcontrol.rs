//! Playback control events for flipbook animators.
//!
//! Gameplay code that does not own the animator query can steer playback by
//! triggering a [`FlipbookControlEvent`]. Register
//! [`flipbook_control_observer`] once on the world to apply them.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(flipbook_control_observer);
//! commands.trigger(FlipbookControlEvent {
//!     entity,
//!     action: FlipbookAction::Reverse,
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::flipbook::FlipbookAnimator`] – the controlled component

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::flipbook::{FlipbookAnimator, LoopMode};

/// What to do to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipbookAction {
    Play,
    Pause,
    Reverse,
    Reset,
    /// Seek to a fraction of the clip, clamped to `[0, 1]`.
    SetNormalizedTime(f32),
    SetSpeed(f32),
    SetLoopMode(LoopMode),
}

/// Event requesting a playback change on one entity's [`FlipbookAnimator`].
#[derive(Event, Debug, Clone, Copy)]
pub struct FlipbookControlEvent {
    /// Entity carrying the animator.
    pub entity: Entity,
    pub action: FlipbookAction,
}

/// Observer applying [`FlipbookControlEvent`]s.
///
/// Events aimed at entities without an animator are logged and dropped.
/// Changes show up on the render target at the next tick.
pub fn flipbook_control_observer(
    trigger: On<FlipbookControlEvent>,
    mut query: Query<&mut FlipbookAnimator>,
) {
    let event = trigger.event();
    let Ok(mut animator) = query.get_mut(event.entity) else {
        warn!(
            target: "meshflip",
            "FlipbookControlEvent {:?} for {:?}: entity has no FlipbookAnimator",
            event.action,
            event.entity
        );
        return;
    };
    match event.action {
        FlipbookAction::Play => animator.play(),
        FlipbookAction::Pause => animator.pause(),
        FlipbookAction::Reverse => animator.reverse(),
        FlipbookAction::Reset => animator.reset(),
        FlipbookAction::SetNormalizedTime(t) => animator.set_normalized_time(t),
        FlipbookAction::SetSpeed(speed) => animator.set_speed(speed),
        FlipbookAction::SetLoopMode(mode) => animator.set_loop_mode(mode),
    }
}
