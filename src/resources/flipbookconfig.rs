//! Flipbook configuration resource.
//!
//! Holds the construction surface of a flipbook: which meshes, the cycle
//! duration, speed and loop behaviour. Values can come from an INI file, a
//! JSON document, or be set in code. Missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [flipbook]
//! name = waving_flag
//! frames = flag_000, flag_001, flag_002, flag_003
//! duration = 5.0
//! speed = 1.0
//! loop = true
//! ```
//!
//! The same settings as JSON:
//!
//! ```json
//! { "name": "waving_flag", "frames": ["flag_000", "flag_001"], "loop_mode": "Clamp" }
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::flipbook::{
    DEFAULT_DURATION, DEFAULT_SPEED, FlipbookAnimator, FlipbookClip, LoopMode,
};
use crate::components::meshslot::MeshHandle;
use crate::error::{FlipbookError, Result};

const SECTION: &str = "flipbook";
const DEFAULT_NAME: &str = "flipbook";
const DEFAULT_CONFIG_PATH: &str = "./flipbook.ini";

/// Flipbook settings as authored, before validation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipbookConfig {
    /// Identity used to tag diagnostics and register the clip.
    pub name: String,
    /// Mesh keys in playback order.
    pub frames: Vec<MeshHandle>,
    /// Seconds for one full cycle.
    pub duration: f32,
    /// Signed playback rate.
    pub speed: f32,
    pub loop_mode: LoopMode,
    /// Path to the INI file.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for FlipbookConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipbookConfig {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            frames: Vec::new(),
            duration: DEFAULT_DURATION,
            speed: DEFAULT_SPEED,
            loop_mode: LoopMode::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Parse a JSON document. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| FlipbookError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply_ini(&ini)?;
        info!(
            "Loaded flipbook config '{}' from {:?}: {} frames, duration={}, speed={}, loop={:?}",
            self.name,
            self.config_path,
            self.frames.len(),
            self.duration,
            self.speed,
            self.loop_mode
        );
        Ok(())
    }

    /// Load settings from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| FlipbookError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<()> {
        if let Some(name) = ini.get(SECTION, "name") {
            self.name = name;
        }
        if let Some(frames) = ini.get(SECTION, "frames") {
            self.frames = frames
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(MeshHandle::from)
                .collect();
        }
        if let Some(duration) = ini.getfloat(SECTION, "duration").map_err(FlipbookError::Config)? {
            self.duration = duration as f32;
        }
        if let Some(speed) = ini.getfloat(SECTION, "speed").map_err(FlipbookError::Config)? {
            self.speed = speed as f32;
        }
        if let Some(looped) = ini.getbool(SECTION, "loop").map_err(FlipbookError::Config)? {
            self.loop_mode = if looped { LoopMode::Loop } else { LoopMode::Clamp };
        }
        Ok(())
    }

    /// Save settings to the INI file at `config_path`.
    pub fn save_to_file(&self) -> Result<()> {
        let mut ini = Ini::new();
        ini.set(SECTION, "name", Some(self.name.clone()));
        let frames: Vec<&str> = self.frames.iter().map(MeshHandle::key).collect();
        ini.set(SECTION, "frames", Some(frames.join(", ")));
        ini.set(SECTION, "duration", Some(self.duration.to_string()));
        ini.set(SECTION, "speed", Some(self.speed.to_string()));
        ini.set(
            SECTION,
            "loop",
            Some((self.loop_mode == LoopMode::Loop).to_string()),
        );
        ini.write(&self.config_path)
            .map_err(|e| FlipbookError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved flipbook config to {:?}", self.config_path);
        Ok(())
    }

    /// Validate into an immutable clip.
    pub fn to_clip(&self) -> Result<FlipbookClip> {
        FlipbookClip::new(self.name.as_str(), self.frames.clone(), self.duration)
    }

    /// Validate and build an animator with this config's speed and loop mode.
    pub fn to_animator(&self) -> Result<FlipbookAnimator> {
        Ok(FlipbookAnimator::new(self.to_clip()?)
            .with_speed(self.speed)
            .with_loop_mode(self.loop_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_config_defaults() {
        let config = FlipbookConfig::new();
        assert!(approx_eq(config.duration, 5.0));
        assert!(approx_eq(config.speed, 1.0));
        assert_eq!(config.loop_mode, LoopMode::Loop);
        assert!(config.frames.is_empty());
    }

    #[test]
    fn test_config_from_ini_text() {
        let mut config = FlipbookConfig::new();
        config
            .load_from_str(
                "[flipbook]\nname = flag\nframes = f0, f1 ,f2,\nduration = 2.5\nspeed = -0.5\nloop = false\n",
            )
            .unwrap();
        assert_eq!(config.name, "flag");
        let keys: Vec<&str> = config.frames.iter().map(MeshHandle::key).collect();
        assert_eq!(keys, ["f0", "f1", "f2"]);
        assert!(approx_eq(config.duration, 2.5));
        assert!(approx_eq(config.speed, -0.5));
        assert_eq!(config.loop_mode, LoopMode::Clamp);
    }

    #[test]
    fn test_config_ini_missing_keys_keep_defaults() {
        let mut config = FlipbookConfig::new();
        config.load_from_str("[flipbook]\nspeed = 2\n").unwrap();
        assert!(approx_eq(config.speed, 2.0));
        assert!(approx_eq(config.duration, 5.0));
        assert_eq!(config.loop_mode, LoopMode::Loop);
    }

    #[test]
    fn test_config_ini_bad_number_errors() {
        let mut config = FlipbookConfig::new();
        let err = config
            .load_from_str("[flipbook]\nduration = soon\n")
            .unwrap_err();
        assert!(matches!(err, FlipbookError::Config(_)));
    }

    #[test]
    fn test_config_from_json_with_defaults() {
        let config =
            FlipbookConfig::from_json(r#"{"name":"cloth","frames":["c0","c1"],"loop_mode":"Clamp"}"#)
                .unwrap();
        assert_eq!(config.name, "cloth");
        assert_eq!(config.frames.len(), 2);
        assert_eq!(config.loop_mode, LoopMode::Clamp);
        assert!(approx_eq(config.duration, 5.0));
    }

    #[test]
    fn test_config_from_json_malformed() {
        let err = FlipbookConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FlipbookError::Json(_)));
    }

    #[test]
    fn test_config_rejects_zero_duration() {
        let mut config = FlipbookConfig::new();
        config.duration = 0.0;
        assert!(matches!(
            config.to_animator(),
            Err(FlipbookError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_config_to_animator_carries_settings() {
        let mut config = FlipbookConfig::new();
        config.frames = vec![MeshHandle::from("a"), MeshHandle::from("b")];
        config.speed = -2.0;
        config.loop_mode = LoopMode::Clamp;
        let anim = config.to_animator().unwrap();
        assert!(approx_eq(anim.speed(), -2.0));
        assert_eq!(anim.loop_mode(), LoopMode::Clamp);
        assert_eq!(anim.clip().frame_count(), 2);
    }

    #[test]
    fn test_config_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("meshflip_{}.ini", std::process::id()));
        let mut config = FlipbookConfig::with_path(&path);
        config.name = "smoke".to_string();
        config.frames = vec![MeshHandle::from("s0"), MeshHandle::from("s1")];
        config.duration = 1.5;
        config.loop_mode = LoopMode::Clamp;
        config.save_to_file().unwrap();

        let mut loaded = FlipbookConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.name, "smoke");
        assert_eq!(loaded.frames, config.frames);
        assert!(approx_eq(loaded.duration, 1.5));
        assert_eq!(loaded.loop_mode, LoopMode::Clamp);
    }

    #[test]
    fn test_config_missing_file_errors() {
        let mut config = FlipbookConfig::with_path("/nonexistent/dir/flipbook.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(FlipbookError::Config(_))
        ));
    }
}
