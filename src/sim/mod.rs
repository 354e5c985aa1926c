//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies (sound cues are queued,
//!   never played)

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, resolve_combat};
pub use spawn::{
    maybe_advance_wave, maybe_spawn_enemy, maybe_spawn_powerup, maybe_trigger_boss, spawn_boss,
};
pub use state::{
    Bullet, Enemy, EnemyKind, GamePhase, GameState, Particle, Player, PowerUp, PowerUpKind, Star,
    WorldCtx,
};
pub use tick::{TickInput, tick};
