//! Nova Strike - a side-scrolling arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `settings`: Feature toggles and difficulty presets
//! - `highscores`: Plain-text high score store
//! - `audio`: Fire-and-forget sound cue collaborator

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, FeatureFlags, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const WIDTH: f32 = 960.0;
    pub const HEIGHT: f32 = 540.0;
    /// Player movement is clamped this far inside the playfield edges
    pub const PLAYFIELD_MARGIN: f32 = 40.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 420.0;
    pub const PLAYER_SLOW_MULT: f32 = 0.55;
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_MAX_HP: i32 = 100;
    /// Post-hit invulnerability window (seconds)
    pub const PLAYER_IFRAMES: f32 = 0.9;

    /// Friendly bullet defaults
    pub const BULLET_SPEED: f32 = 780.0;
    pub const BULLET_LIFETIME: f32 = 1.4;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const FIRE_COOLDOWN: f32 = 0.11;
    /// Cooldown multiplier while the rapid-fire buff is active
    pub const RAPID_COOLDOWN_MULT: f32 = 0.55;
    /// Spread-shot side bullets fire at this angle off forward (degrees)
    pub const SPREAD_ANGLE_DEG: f32 = 14.0;

    /// Enemy defaults
    pub const ENEMY_BASE_SPEED: f32 = 150.0;
    pub const ENEMY_SPAWN_BASE: f32 = 1.05;
    pub const ENEMY_HP: i32 = 20;
    pub const ENEMY_BULLET_SPEED: f32 = 420.0;
    pub const ENEMY_FIRE_COOLDOWN: f32 = 1.35;
    /// Enemies despawn once fully past the left edge
    pub const ENEMY_EXIT_X: f32 = -120.0;

    /// Wave progression
    pub const WAVE_DURATION: f32 = 18.0;
    pub const WAVE_BANNER_TIME: f32 = 2.0;
    pub const BOSS_EVERY_WAVES: u32 = 4;
    pub const BOSS_WARNING_TIME: f32 = 2.2;

    /// Boss defaults
    pub const BOSS_HP: i32 = 450;
    pub const BOSS_SPEED: f32 = 140.0;
    pub const BOSS_FIRE_COOLDOWN: f32 = 0.28;
    pub const BOSS_RADIUS: f32 = 48.0;

    /// Power-ups
    pub const POWERUP_SPAWN_BASE: f32 = 7.0;
    pub const POWERUP_DURATION: f32 = 7.0;
    pub const POWERUP_RADIUS: f32 = 14.0;
    pub const SHIELD_HP: i32 = 55;
    pub const HEAL_AMOUNT: i32 = 35;

    /// Combo scoring
    pub const COMBO_WINDOW: f32 = 1.8;
    pub const COMBO_STEP: u32 = 6;
    pub const MAX_MULTIPLIER: u32 = 6;

    /// Damage values
    pub const BULLET_DAMAGE: i32 = 10;
    pub const ENEMY_BULLET_DAMAGE: i32 = 18;
    pub const CONTACT_DAMAGE: i32 = 24;

    /// Cosmetics
    pub const SHAKE_DECAY: f32 = 18.0;
    pub const SHAKE_MAX: f32 = 24.0;
    pub const PARTICLE_LIFE: f32 = 0.55;
    pub const STAR_COUNT: usize = 80;
}
