//! Flipbook mesh animation.
//!
//! A flipbook simulates motion by swapping whole pre-baked meshes instead of
//! deforming geometry. Two types split configuration from runtime state:
//!
//! - [`FlipbookClip`] – immutable: a name, the ordered frames and the cycle
//!   duration. Clips are shared between animators through `Arc`.
//! - [`FlipbookAnimator`] – per-entity playback: clock, speed, [`LoopMode`]
//!   and the index last pushed to the render target.
//!
//! # Tick
//!
//! 1. `elapsed_time += speed * delta`
//! 2. [`LoopMode::Loop`] wraps into `[0, duration)`, [`LoopMode::Clamp`]
//!    clamps into `[0, duration]`
//! 3. `index = round(elapsed_time / duration * (frames - 1))`, clamped
//! 4. The frame is written to the [`FrameSink`] only when `index` changed
//!
//! An animator with no frames warns once on creation and ignores ticks.
//!
//! # Related
//!
//! - [`crate::components::meshslot`] – mesh handles and the sink component
//! - [`crate::systems::flipbook::flipbook_system`] – drives animators from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`crate::events::flipbookcontrol`] – playback control through observers

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::meshslot::{FrameSink, MeshHandle};
use crate::error::{FlipbookError, Result};

pub const DEFAULT_DURATION: f32 = 5.0;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Determines what happens when playback runs past either end of the clip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    /// Wrap around and keep cycling, in both directions.
    #[default]
    Loop,
    /// Stop at the first or last frame.
    Clamp,
}

/// Coarse playback state derived from the sign of the speed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    PlayingForward,
    PlayingBackward,
}

/// Immutable flipbook definition: which meshes, in which order, over how long.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipbookClip {
    name: Arc<str>,
    frames: Vec<MeshHandle>,
    duration: f32,
}

impl FlipbookClip {
    /// Build a clip, rejecting durations that are not finite and positive.
    ///
    /// An empty `frames` list is accepted; the animator reports it.
    pub fn new(
        name: impl Into<Arc<str>>,
        frames: Vec<MeshHandle>,
        duration: f32,
    ) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(FlipbookError::InvalidDuration(duration));
        }
        Ok(Self {
            name: name.into(),
            frames,
            duration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[MeshHandle] {
        &self.frames
    }

    /// Seconds for one full pass over all frames.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Per-entity flipbook playback state.
///
/// The clip is shared and read-only; everything else here changes at runtime.
/// `tick` is the only method that touches the render target.
#[derive(Component, Debug, Clone)]
pub struct FlipbookAnimator {
    clip: Arc<FlipbookClip>,
    /// Signed playback rate. Negative plays backwards.
    speed: f32,
    loop_mode: LoopMode,
    /// Seconds into the clip.
    elapsed_time: f32,
    current_frame_index: usize,
    /// Index last written to the sink, `None` before the first write.
    last_applied_index: Option<usize>,
}

impl FlipbookAnimator {
    /// Create an animator at time zero with default speed and loop mode.
    ///
    /// Logs a warning tagged with the clip name when the clip has no frames.
    pub fn new(clip: impl Into<Arc<FlipbookClip>>) -> Self {
        let clip = clip.into();
        if clip.is_empty() {
            warn!(
                target: "meshflip",
                "Flipbook '{}' has no mesh frames assigned; it will not animate",
                clip.name()
            );
        }
        Self {
            clip,
            speed: DEFAULT_SPEED,
            loop_mode: LoopMode::default(),
            elapsed_time: 0.0,
            current_frame_index: 0,
            last_applied_index: None,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Advance the clock by `delta` seconds and push the frame if it changed.
    ///
    /// Returns the index written to `sink`, or `None` when nothing was written
    /// (no frames, or the visible frame did not change). Every call advances
    /// time on its own, so sub-stepping is just calling this several times.
    pub fn tick<S: FrameSink + ?Sized>(&mut self, delta: f32, sink: &mut S) -> Option<usize> {
        let count = self.clip.frame_count();
        if count == 0 {
            return None;
        }

        let duration = self.clip.duration();
        let step = self.speed * delta;
        if !step.is_finite() {
            debug!(
                target: "meshflip",
                "Flipbook '{}': ignoring non-finite step (speed={}, delta={})",
                self.clip.name(),
                self.speed,
                delta
            );
        } else {
            match self.loop_mode {
                // Normalized time 1.0 lands on `duration` and wraps to frame 0
                LoopMode::Loop => {
                    self.elapsed_time = wrap(self.elapsed_time + step, duration);
                }
                LoopMode::Clamp => {
                    self.elapsed_time = (self.elapsed_time + step).clamp(0.0, duration);
                }
            }
        }

        let last = count - 1;
        let index = (self.elapsed_time / duration * last as f32).round();
        self.current_frame_index = (index.max(0.0) as usize).min(last);

        if self.last_applied_index == Some(self.current_frame_index) {
            return None;
        }
        sink.set_frame(&self.clip.frames()[self.current_frame_index]);
        debug!(
            target: "meshflip",
            "Flipbook '{}': frame {:?} -> {}",
            self.clip.name(),
            self.last_applied_index,
            self.current_frame_index
        );
        self.last_applied_index = Some(self.current_frame_index);
        Some(self.current_frame_index)
    }

    /// Seek to a fraction of the clip. `t` is clamped to `[0, 1]`.
    ///
    /// The render target is updated on the next [`tick`](Self::tick).
    /// Non-finite values are rejected with a warning.
    pub fn set_normalized_time(&mut self, t: f32) {
        if !t.is_finite() {
            warn!(
                target: "meshflip",
                "Flipbook '{}': ignoring non-finite normalized time {}",
                self.clip.name(),
                t
            );
            return;
        }
        self.elapsed_time = t.clamp(0.0, 1.0) * self.clip.duration();
    }

    /// Play forwards, keeping the current speed magnitude.
    pub fn play(&mut self) {
        self.speed = self.speed.abs();
    }

    /// Play backwards, keeping the current speed magnitude.
    pub fn reverse(&mut self) {
        self.speed = -self.speed.abs();
    }

    /// Freeze playback. The magnitude is lost; use [`set_speed`](Self::set_speed) to resume.
    pub fn pause(&mut self) {
        self.speed = 0.0;
    }

    /// Rewind the clock to zero. Speed and the applied frame are untouched.
    pub fn reset(&mut self) {
        self.elapsed_time = 0.0;
    }

    /// Non-finite speeds are rejected with a warning.
    pub fn set_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            warn!(
                target: "meshflip",
                "Flipbook '{}': ignoring non-finite speed {}",
                self.clip.name(),
                speed
            );
            return;
        }
        self.speed = speed;
    }

    pub fn set_loop_mode(&mut self, loop_mode: LoopMode) {
        self.loop_mode = loop_mode;
    }

    pub fn clip(&self) -> &Arc<FlipbookClip> {
        &self.clip
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Playback position as a fraction of the clip duration.
    pub fn normalized_time(&self) -> f32 {
        self.elapsed_time / self.clip.duration()
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn last_applied_index(&self) -> Option<usize> {
        self.last_applied_index
    }

    /// Frame the render target currently holds, if any was applied.
    pub fn current_frame(&self) -> Option<&MeshHandle> {
        self.last_applied_index
            .and_then(|index| self.clip.frames().get(index))
    }

    pub fn play_state(&self) -> PlayState {
        if self.speed > 0.0 {
            PlayState::PlayingForward
        } else if self.speed < 0.0 {
            PlayState::PlayingBackward
        } else {
            PlayState::Stopped
        }
    }
}

/// Floored modulo into `[0, duration)`.
fn wrap(time: f32, duration: f32) -> f32 {
    let wrapped = time.rem_euclid(duration);
    // rem_euclid can round up to `duration` for tiny negative inputs
    if wrapped >= duration { 0.0 } else { wrapped }
}
