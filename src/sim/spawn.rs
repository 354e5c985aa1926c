//! Spawner/director
//!
//! Decides when and what to spawn (enemies, power-ups, bosses) from elapsed
//! time, wave number and the difficulty configuration, and drives the
//! wave/boss sub-progression. All timers are countdown floats owned by the
//! session; each "reaches zero, trigger and reset" below is one of them.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState, PowerUp, PowerUpKind};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Chance a spawn is a Shooter once wave 3 is reached
const SHOOTER_CHANCE: f32 = 0.38;

/// Tick the enemy spawn countdown and spawn on expiry. Regular spawns are
/// suppressed entirely while a boss is active.
pub fn maybe_spawn_enemy(state: &mut GameState, dt: f32) {
    if state.boss_active {
        return;
    }
    state.enemy_timer -= dt;
    if state.enemy_timer > 0.0 {
        return;
    }
    state.enemy_timer = state.rng.random_range(0.75..1.35) * state.spawn_interval();

    let pos = Vec2::new(
        WIDTH + 60.0,
        state.rng.random_range(40.0..HEIGHT - 40.0),
    );
    let speed = state.enemy_speed();
    let hp = state.enemy_hp();
    if state.wave >= 3 && state.rng.random::<f32>() < SHOOTER_CHANCE {
        let fire_cd = state.rng.random_range(0.4..ENEMY_FIRE_COOLDOWN);
        state
            .enemies
            .push(Enemy::shooter(pos, speed * 0.92, hp + 8, fire_cd));
    } else {
        state.enemies.push(Enemy::chaser(pos, speed, hp));
    }
    log::debug!("Enemy spawned (wave {}, {} active)", state.wave, state.enemies.len());
}

/// Tick the power-up spawn countdown and spawn a weighted-random capsule.
pub fn maybe_spawn_powerup(state: &mut GameState, dt: f32) {
    if !state.features.powerups {
        return;
    }
    state.power_timer -= dt;
    if state.power_timer > 0.0 {
        return;
    }
    let scaler = state.wave_scaler();
    state.power_timer =
        state.rng.random_range(0.7..1.2) * (POWERUP_SPAWN_BASE * (0.95 + scaler * 0.18));

    let pos = Vec2::new(
        WIDTH + 40.0,
        state.rng.random_range(60.0..HEIGHT - 60.0),
    );
    let roll: f32 = state.rng.random();
    let kind = if roll < 0.34 {
        PowerUpKind::Rapid
    } else if roll < 0.62 {
        PowerUpKind::Spread
    } else if roll < 0.84 {
        PowerUpKind::Shield
    } else {
        PowerUpKind::Heal
    };
    state.powerups.push(PowerUp::new(pos, kind));
}

/// Arm the boss warning countdown when a boss wave is reached. Each
/// qualifying wave arms at most once, and never while a boss is alive.
pub fn maybe_trigger_boss(state: &mut GameState) {
    if !(state.features.waves && state.features.boss) {
        return;
    }
    if state.boss_active {
        return;
    }
    if state.wave > 1
        && state.wave % BOSS_EVERY_WAVES == 0
        && state.last_boss_wave != state.wave
    {
        state.boss_warning = BOSS_WARNING_TIME;
        state.last_boss_wave = state.wave;
        state.play_sound(SoundEffect::Boss);
        log::info!("Boss incoming (wave {})", state.wave);
    }
}

/// Spawn the boss once the warning countdown has elapsed.
pub fn spawn_boss(state: &mut GameState) {
    let hp = (BOSS_HP as f32
        * state.difficulty.boss_mul()
        * (1.0 + (state.wave - 1) as f32 * 0.08)) as i32;
    state
        .enemies
        .push(Enemy::boss(Vec2::new(WIDTH + 120.0, HEIGHT * 0.5), hp));
    state.boss_active = true;
    log::info!("Boss spawned with {hp} hp");
}

/// Advance the wave once session time passes the current wave's deadline.
/// The pending enemy timer is capped at the new, shorter interval so the
/// escalation is felt immediately.
pub fn maybe_advance_wave(state: &mut GameState) {
    if !state.features.waves {
        return;
    }
    if state.time >= state.wave as f32 * WAVE_DURATION {
        state.wave += 1;
        state.wave_banner = WAVE_BANNER_TIME;
        state.play_sound(SoundEffect::Power);
        state.enemy_timer = state.enemy_timer.min(state.spawn_interval());
        log::info!("Wave {} started", state.wave);
    }
}
