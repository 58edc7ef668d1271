//! Flipbook clip registry.
//!
//! Clips are immutable and can back many animators at once (a field of
//! identical flags, a crowd of cloth props). The store keeps one
//! `Arc<FlipbookClip>` per name and hands out animators that share it.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;

use crate::components::flipbook::{FlipbookAnimator, FlipbookClip};
use crate::error::{FlipbookError, Result};
use crate::resources::flipbookconfig::FlipbookConfig;

/// Central registry of reusable flipbook clips keyed by name.
#[derive(Resource, Default)]
pub struct FlipbookStore {
    pub clips: FxHashMap<String, Arc<FlipbookClip>>,
}

impl FlipbookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip under its own name, replacing any previous one.
    pub fn insert(&mut self, clip: FlipbookClip) -> Arc<FlipbookClip> {
        let clip = Arc::new(clip);
        if self
            .clips
            .insert(clip.name().to_string(), Arc::clone(&clip))
            .is_some()
        {
            info!("Replaced flipbook clip '{}'", clip.name());
        }
        clip
    }

    /// Build a clip from configuration and register it.
    pub fn insert_config(&mut self, config: &FlipbookConfig) -> Result<Arc<FlipbookClip>> {
        Ok(self.insert(config.to_clip()?))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<FlipbookClip>> {
        self.clips.get(name)
    }

    /// New animator over a registered clip, with default playback settings.
    pub fn animator(&self, name: &str) -> Result<FlipbookAnimator> {
        self.get(name)
            .map(|clip| FlipbookAnimator::new(Arc::clone(clip)))
            .ok_or_else(|| FlipbookError::UnknownClip(name.to_string()))
    }
}
