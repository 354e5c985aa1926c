//! Collision detection and combat resolution
//!
//! Everything here is circle-vs-circle over entity positions. The resolver
//! runs once per frame after all entities have moved, and uses
//! mark-then-sweep removal: hits zero a bullet's lifetime or an enemy's hp,
//! and the corpses are compacted at the end of the pass.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Circle-circle overlap test (inclusive of touching)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) <= (ra + rb) * (ra + rb)
}

/// Resolve all entity interactions for one frame: friendly bullets vs
/// enemies, hostile bullets vs the player, ram contact, and power-up pickup.
pub fn resolve_combat(state: &mut GameState) {
    resolve_bullets_vs_enemies(state);
    resolve_bullets_vs_player(state);
    resolve_ram_contact(state);
    resolve_pickups(state);

    // Sweep consumed bullets and destroyed enemies
    state.bullets.retain(|b| b.life > 0.0);
    state.enemies.retain(|e| e.hp > 0);
}

fn resolve_bullets_vs_enemies(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        if !state.bullets[bi].friendly || state.bullets[bi].life <= 0.0 {
            continue;
        }
        for ei in 0..state.enemies.len() {
            if state.enemies[ei].hp <= 0 {
                continue;
            }
            let (bpos, brad) = (state.bullets[bi].pos, state.bullets[bi].radius);
            if !circles_overlap(bpos, brad, state.enemies[ei].pos, state.enemies[ei].radius) {
                continue;
            }
            state.enemies[ei].hp -= BULLET_DAMAGE;
            state.bullets[bi].life = 0.0;
            state.add_shake(2.0);
            if state.features.particles {
                let vel = Vec2::new(
                    state.rng.random_range(-90.0..90.0),
                    state.rng.random_range(-90.0..90.0),
                );
                state.particles.push(Particle::new(bpos, vel, 0.25, 3.0));
            }
            if state.enemies[ei].hp <= 0 {
                let pos = state.enemies[ei].pos;
                let points = state.enemies[ei].points();
                let is_boss = state.enemies[ei].is_boss();
                state.play_sound(SoundEffect::Boom);
                state.enemy_killed(pos, points);
                if is_boss {
                    state.boss_active = false;
                    state.score += 120 * state.score_mult();
                    state.play_sound(SoundEffect::Boom);
                    state.add_shake(12.0);
                }
            }
            // A bullet resolves against at most one enemy per frame
            break;
        }
    }
}

fn resolve_bullets_vs_player(state: &mut GameState) {
    let health = state.features.health;
    for bi in 0..state.bullets.len() {
        let b = &state.bullets[bi];
        if b.friendly || b.life <= 0.0 {
            continue;
        }
        if !circles_overlap(b.pos, b.radius, state.player.pos, state.player.radius()) {
            continue;
        }
        state.bullets[bi].life = 0.0;
        state.player.take_damage(ENEMY_BULLET_DAMAGE, health, &mut state.sounds);
        state.add_shake(10.0);
        if state.features.particles {
            let pos = state.player.pos;
            for _ in 0..12 {
                let vel = Vec2::new(
                    state.rng.random_range(-240.0..240.0),
                    state.rng.random_range(-240.0..240.0),
                );
                state.particles.push(Particle::new(pos, vel, 0.45, 3.0));
            }
        }
    }
}

/// Ram contact: heavier damage, destroys the enemy (bosses excepted) with no
/// score award, and breaks any combo streak. At most one contact per frame.
fn resolve_ram_contact(state: &mut GameState) {
    let health = state.features.health;
    for ei in 0..state.enemies.len() {
        if state.enemies[ei].hp <= 0 {
            continue;
        }
        if !circles_overlap(
            state.player.pos,
            state.player.radius(),
            state.enemies[ei].pos,
            state.enemies[ei].radius,
        ) {
            continue;
        }
        state.player.take_damage(CONTACT_DAMAGE, health, &mut state.sounds);
        state.add_shake(12.0);
        if !state.enemies[ei].is_boss() {
            state.enemies[ei].hp = 0;
        }
        if state.features.combo {
            state.combo_kills = 0;
            state.combo_timer = 0.0;
        }
        break;
    }
}

fn resolve_pickups(state: &mut GameState) {
    let mut i = 0;
    while i < state.powerups.len() {
        let pu = &state.powerups[i];
        if circles_overlap(
            state.player.pos,
            state.player.radius(),
            pu.pos,
            pu.radius(),
        ) {
            let picked = state.powerups.swap_remove(i);
            state.apply_powerup(picked.kind);
        } else {
            i += 1;
        }
    }
}
