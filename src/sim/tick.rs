//! Fixed timestep simulation tick
//!
//! Core frame function that advances one fixed timestep. The session state
//! machine gates whether simulation runs; cosmetic state (stars, particles,
//! screen shake) keeps animating in every phase.

use super::collision;
use super::spawn;
use super::state::{GamePhase, GameState, WorldCtx};
use crate::consts::*;
use crate::settings::Difficulty;

/// Input snapshot for a single tick: held movement keys plus discrete
/// menu/pause/restart events. The core only ever sees logical booleans,
/// never key codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Precision-movement modifier
    pub slow: bool,
    /// Fire held
    pub fire: bool,
    /// Pause toggle (discrete)
    pub pause: bool,
    /// Menu: start the run (discrete)
    pub confirm: bool,
    /// Game over: restart (discrete)
    pub restart: bool,
    /// Menu: difficulty selection
    pub select_difficulty: Option<Difficulty>,
    /// Autopilot plays the game (headless demo shell)
    pub demo: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut input = *input;
    if input.demo {
        synth_demo_input(state, &mut input);
    }
    let input = &input;

    // Background parallax, particle decay and shake keep moving in all phases
    let star_mul = 1.0 + (state.wave_scaler() - 1.0) * 0.25;
    for star in &mut state.stars {
        star.update(dt, star_mul, &mut state.rng);
    }
    for p in &mut state.particles {
        p.update(dt);
    }
    state.particles.retain(|p| !p.dead());
    if state.shake > 0.0 {
        state.shake = (state.shake - SHAKE_DECAY * dt).max(0.0);
    }

    match state.phase {
        GamePhase::Menu => {
            if let Some(difficulty) = input.select_difficulty {
                state.difficulty = difficulty;
            }
            if input.confirm {
                state.reset_run();
            }
            return;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_run();
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
        }
    }

    state.time += dt;

    spawn::maybe_advance_wave(state);
    if state.wave_banner > 0.0 {
        state.wave_banner -= dt;
    }

    spawn::maybe_trigger_boss(state);
    if state.boss_warning > 0.0 {
        state.boss_warning -= dt;
        if state.boss_warning <= 0.0 {
            spawn::spawn_boss(state);
        }
    }

    update_combo(state, dt);

    state.player.update(dt, input);
    if input.fire {
        state.player.shoot(&mut state.bullets, &mut state.sounds);
    }

    spawn::maybe_spawn_enemy(state, dt);
    spawn::maybe_spawn_powerup(state, dt);

    for pu in &mut state.powerups {
        pu.update(dt);
    }
    state.powerups.retain(|p| !p.dead());

    let mut ctx = WorldCtx {
        player_pos: state.player.pos,
        time: state.time,
        bullets: &mut state.bullets,
        rng: &mut state.rng,
    };
    for enemy in &mut state.enemies {
        enemy.update(dt, &mut ctx);
    }
    // Drop enemies that drifted fully off-screen to the left
    state.enemies.retain(|e| !e.dead());

    for b in &mut state.bullets {
        b.update(dt);
    }
    state.bullets.retain(|b| !b.dead());

    collision::resolve_combat(state);

    if !state.player.alive() {
        state.phase = GamePhase::GameOver;
        state.high_score = state.high_score.max(state.score);
        log::info!(
            "Game over: score {} on wave {} (high {})",
            state.score,
            state.wave,
            state.high_score
        );
    }
}

/// Decay the combo window; an expired window forfeits the streak.
fn update_combo(state: &mut GameState, dt: f32) {
    if !state.features.combo {
        return;
    }
    if state.combo_kills > 0 {
        state.combo_timer -= dt;
        if state.combo_timer <= 0.0 {
            state.combo_kills = 0;
            state.combo_timer = 0.0;
        }
    }
}

/// Autopilot for the headless demo shell: starts the run from the menu,
/// holds fire, dodges the nearest hazard, and chases power-ups when safe.
fn synth_demo_input(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Menu => {
            input.confirm = true;
            return;
        }
        GamePhase::Playing => {}
        _ => return,
    }
    input.fire = true;

    let me = state.player.pos;

    // Nearest hazard: hostile bullets and enemy hulls
    let mut nearest: Option<(f32, glam::Vec2)> = None;
    for b in state.bullets.iter().filter(|b| !b.friendly) {
        let d = b.pos.distance_squared(me);
        if nearest.is_none_or(|(nd, _)| d < nd) {
            nearest = Some((d, b.pos));
        }
    }
    for e in &state.enemies {
        let d = e.pos.distance_squared(me);
        if nearest.is_none_or(|(nd, _)| d < nd) {
            nearest = Some((d, e.pos));
        }
    }

    let target_y = match nearest {
        // Break away perpendicular to anything closing in
        Some((d, pos)) if d < 160.0 * 160.0 => {
            if pos.y >= me.y {
                me.y - 120.0
            } else {
                me.y + 120.0
            }
        }
        _ => state
            .powerups
            .iter()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(me)
                    .partial_cmp(&b.pos.distance_squared(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| p.pos.y)
            .unwrap_or(HEIGHT * 0.5),
    };
    input.up = target_y < me.y - 6.0;
    input.down = target_y > me.y + 6.0;

    // Hold station near the left-side home column
    let home_x = WIDTH * 0.18;
    input.left = me.x > home_x + 8.0;
    input.right = me.x < home_x - 8.0;
}
