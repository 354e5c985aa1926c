//! Game settings and preferences
//!
//! Feature toggles and difficulty presets, persisted as JSON next to the
//! high score file. Everything here is read at session start; the sim only
//! ever sees an immutable copy.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Enemy hp/speed multiplier
    pub fn enemy_mul(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.85,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.15,
        }
    }

    /// Spawn interval multiplier (lower = more enemies)
    pub fn spawn_mul(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.15,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.88,
        }
    }

    /// Boss hp multiplier
    pub fn boss_mul(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.9,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.1,
        }
    }
}

/// Feature toggles checked at the relevant decision points each frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Timed wave escalation
    pub waves: bool,
    /// Boss fights every few waves (requires `waves`)
    pub boss: bool,
    /// Power-up drops
    pub powerups: bool,
    /// Kill-streak score multiplier
    pub combo: bool,
    /// Hit points; disabled means one hit kills
    pub health: bool,
    /// Cosmetic particle bursts
    pub particles: bool,
    /// Cosmetic screen shake
    pub screen_shake: bool,
    /// Sound cues
    pub sounds: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            waves: true,
            boss: true,
            powerups: true,
            combo: true,
            health: true,
            particles: true,
            screen_shake: false,
            sounds: true,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub features: FeatureFlags,
    /// Difficulty preset offered as the menu default
    pub difficulty: Difficulty,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            features: FeatureFlags::default(),
            difficulty: Difficulty::Normal,
            master_volume: 0.30,
            sfx_volume: 0.65,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE: &'static str = "nova_strike_settings.json";

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON, best-effort
    pub fn save_to(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = std::fs::write(path, json) {
                log::warn!("Failed to save settings: {e}");
            }
        }
    }
}
