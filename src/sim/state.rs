//! Game state and core simulation types
//!
//! Entity models own their own kinematics and per-frame update rule; the
//! session owns the entity collections and all score/combo/wave bookkeeping.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::TickInput;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::{Difficulty, FeatureFlags};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, difficulty selection
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen, cosmetics still animate
    Paused,
    /// Run ended
    GameOver,
}

/// Shared read context for enemy updates: player position for aiming plus
/// mutable access to the hostile bullet pool and session RNG.
pub struct WorldCtx<'a> {
    pub player_pos: Vec2,
    /// Elapsed session time in seconds
    pub time: f32,
    pub bullets: &'a mut Vec<Bullet>,
    pub rng: &'a mut Pcg32,
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub hp: i32,
    /// Damage immunity remaining (seconds)
    pub iframes: f32,
    pub shield: i32,
    /// Rapid-fire buff remaining (seconds)
    pub rapid_time: f32,
    /// Spread-shot buff remaining (seconds)
    pub spread_time: f32,
    pub fire_cd: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH * 0.18, HEIGHT * 0.5),
            hp: PLAYER_MAX_HP,
            iframes: 0.0,
            shield: 0,
            rapid_time: 0.0,
            spread_time: 0.0,
            fire_cd: 0.0,
        }
    }
}

impl Player {
    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// Decay timers, integrate 8-way movement, clamp to the playfield
    pub fn update(&mut self, dt: f32, input: &TickInput) {
        self.iframes = (self.iframes - dt).max(0.0);
        self.rapid_time = (self.rapid_time - dt).max(0.0);
        self.spread_time = (self.spread_time - dt).max(0.0);

        let speed = PLAYER_SPEED * if input.slow { PLAYER_SLOW_MULT } else { 1.0 };
        let dx = (input.right as i32 - input.left as i32) as f32;
        let dy = (input.down as i32 - input.up as i32) as f32;
        let dir = Vec2::new(dx, dy).normalize_or_zero();
        self.pos += dir * speed * dt;
        self.pos.x = self.pos.x.clamp(PLAYFIELD_MARGIN, WIDTH - PLAYFIELD_MARGIN);
        self.pos.y = self.pos.y.clamp(PLAYFIELD_MARGIN, HEIGHT - PLAYFIELD_MARGIN);

        self.fire_cd = (self.fire_cd - dt).max(0.0);
    }

    fn cooldown(&self) -> f32 {
        FIRE_COOLDOWN
            * if self.rapid_time > 0.0 {
                RAPID_COOLDOWN_MULT
            } else {
                1.0
            }
    }

    /// Fire forward; silently a no-op while on cooldown. Spread buff adds two
    /// bullets at ±14° off forward.
    pub fn shoot(&mut self, bullets: &mut Vec<Bullet>, sounds: &mut Vec<SoundEffect>) {
        if self.fire_cd > 0.0 {
            return;
        }
        self.fire_cd = self.cooldown();

        let muzzle = self.pos + Vec2::new(18.0, 0.0);
        let forward = Vec2::new(BULLET_SPEED, 0.0);
        bullets.push(Bullet::new(muzzle, forward, true, BULLET_RADIUS));
        if self.spread_time > 0.0 {
            let ang = SPREAD_ANGLE_DEG.to_radians();
            let up = Vec2::from_angle(ang).rotate(forward);
            let down = Vec2::from_angle(-ang).rotate(forward);
            bullets.push(Bullet::new(
                self.pos + Vec2::new(18.0, -2.0),
                up,
                true,
                BULLET_RADIUS,
            ));
            bullets.push(Bullet::new(
                self.pos + Vec2::new(18.0, 2.0),
                down,
                true,
                BULLET_RADIUS,
            ));
        }
        sounds.push(SoundEffect::Shoot);
    }

    /// Apply damage through the iframes/shield rules. With health disabled
    /// any hit is instantly lethal. Shield absorbs the whole hit without
    /// overflow into hp.
    pub fn take_damage(&mut self, dmg: i32, health_enabled: bool, sounds: &mut Vec<SoundEffect>) {
        if !health_enabled {
            self.hp = 0;
            return;
        }
        if self.iframes > 0.0 {
            return;
        }
        if self.shield > 0 {
            self.shield = (self.shield - dmg).max(0);
            self.iframes = PLAYER_IFRAMES * 0.55;
            sounds.push(SoundEffect::Hit);
            return;
        }
        self.hp -= dmg;
        self.iframes = PLAYER_IFRAMES;
        sounds.push(SoundEffect::Hit);
    }
}

/// A bullet, friendly or hostile
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub friendly: bool,
    pub radius: f32,
    /// Remaining lifetime (seconds); consumed bullets are zeroed
    pub life: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, friendly: bool, radius: f32) -> Self {
        Self {
            pos,
            vel,
            friendly,
            radius,
            life: BULLET_LIFETIME,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    /// Expired or left the extended screen bound
    pub fn dead(&self) -> bool {
        self.life <= 0.0
            || self.pos.x < -50.0
            || self.pos.x > WIDTH + 50.0
            || self.pos.y < -50.0
            || self.pos.y > HEIGHT + 50.0
    }
}

/// Variant-specific behavior state
#[derive(Debug, Clone)]
pub enum EnemyKind {
    /// Drifts left, easing vertically toward the player
    Chaser { speed: f32 },
    /// Drifts left with a sinusoidal bob, firing aimed shots
    Shooter { speed: f32, fire_cd: f32 },
    /// Two-phase: enters from the right, then holds x and oscillates
    Boss {
        fire_cd: f32,
        /// Internal phase clock (seconds since spawn)
        phase: f32,
        entering: bool,
    },
}

/// An enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub hp: i32,
    pub radius: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn chaser(pos: Vec2, speed: f32, hp: i32) -> Self {
        Self {
            pos,
            hp,
            radius: 16.0,
            kind: EnemyKind::Chaser { speed },
        }
    }

    pub fn shooter(pos: Vec2, speed: f32, hp: i32, fire_cd: f32) -> Self {
        Self {
            pos,
            hp,
            radius: 17.0,
            kind: EnemyKind::Shooter { speed, fire_cd },
        }
    }

    pub fn boss(pos: Vec2, hp: i32) -> Self {
        Self {
            pos,
            hp,
            radius: BOSS_RADIUS,
            kind: EnemyKind::Boss {
                fire_cd: 0.9,
                phase: 0.0,
                entering: true,
            },
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    /// Base score award on kill (before the combo multiplier)
    pub fn points(&self) -> u64 {
        match self.kind {
            EnemyKind::Shooter { .. } => 8,
            _ => 6,
        }
    }

    /// Destroyed, or drifted fully off-screen to the left
    pub fn dead(&self) -> bool {
        self.hp <= 0 || self.pos.x < ENEMY_EXIT_X
    }

    pub fn update(&mut self, dt: f32, ctx: &mut WorldCtx) {
        match &mut self.kind {
            EnemyKind::Chaser { speed } => {
                let dy = (ctx.player_pos.y - self.pos.y).clamp(-1.0, 1.0);
                self.pos.x -= *speed * dt;
                self.pos.y += dy * (*speed * 0.65) * dt;
                self.pos.y = self.pos.y.clamp(30.0, HEIGHT - 30.0);
            }
            EnemyKind::Shooter { speed, fire_cd } => {
                self.pos.x -= *speed * dt;
                self.pos.y += (ctx.time * 4.0 + self.pos.x * 0.01).sin() * 18.0 * dt;
                self.pos.y = self.pos.y.clamp(30.0, HEIGHT - 30.0);
                *fire_cd -= dt;
                if *fire_cd <= 0.0 && self.pos.x < WIDTH * 0.92 {
                    *fire_cd = ENEMY_FIRE_COOLDOWN * ctx.rng.random_range(0.8..1.2);
                    let aim = (ctx.player_pos - self.pos).normalize_or_zero();
                    ctx.bullets
                        .push(Bullet::new(self.pos, aim * ENEMY_BULLET_SPEED, false, 4.0));
                }
            }
            EnemyKind::Boss {
                fire_cd,
                phase,
                entering,
            } => {
                *phase += dt;
                if *entering {
                    self.pos.x -= BOSS_SPEED * dt;
                    if self.pos.x < WIDTH * 0.78 {
                        *entering = false;
                    }
                } else {
                    self.pos.y = HEIGHT * 0.5 + (*phase * 1.4).sin() * 110.0;
                }
                *fire_cd -= dt;
                if *fire_cd <= 0.0 {
                    *fire_cd = BOSS_FIRE_COOLDOWN;
                    let muzzle = self.pos + Vec2::new(-35.0, 0.0);
                    for deg in [-26.0f32, -13.0, 0.0, 13.0, 26.0] {
                        let vel = Vec2::from_angle(deg.to_radians())
                            .rotate(Vec2::new(-1.0, 0.0))
                            * (ENEMY_BULLET_SPEED * 1.10);
                        ctx.bullets.push(Bullet::new(muzzle, vel, false, 5.0));
                    }
                    // Extra aimed shot on every other integer second of the phase clock
                    if (phase.floor() as i64) % 2 == 0 {
                        let aim = (ctx.player_pos - self.pos).normalize_or_zero();
                        ctx.bullets.push(Bullet::new(
                            muzzle,
                            aim * (ENEMY_BULLET_SPEED * 1.25),
                            false,
                            5.0,
                        ));
                    }
                }
            }
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Rapid,
    Spread,
    Shield,
    Heal,
}

/// A drifting power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub vel: Vec2,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            vel: Vec2::new(-180.0, 0.0),
        }
    }

    pub fn radius(&self) -> f32 {
        POWERUP_RADIUS
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn dead(&self) -> bool {
        self.pos.x < -80.0
    }
}

/// A cosmetic particle; no gameplay effect
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, radius: f32) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            radius,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel *= 1.0 - 1.8 * dt;
        self.life -= dt;
    }

    pub fn dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// A parallax background star; wraps around off the left edge
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

impl Star {
    pub fn new(rng: &mut Pcg32) -> Self {
        let mut star = Self::respawned(rng);
        star.x = rng.random_range(0.0..WIDTH);
        star
    }

    fn respawned(rng: &mut Pcg32) -> Self {
        Self {
            x: WIDTH + rng.random_range(0.0..WIDTH),
            y: rng.random_range(0.0..HEIGHT),
            size: rng.random_range(1.0..3.2),
            speed: rng.random_range(40.0..140.0),
        }
    }

    pub fn update(&mut self, dt: f32, speed_mul: f32, rng: &mut Pcg32) {
        self.x -= self.speed * speed_mul * dt;
        if self.x < -10.0 {
            *self = Self::respawned(rng);
        }
    }
}

/// Complete session state. Owned exclusively by the shell; mutated only
/// during the single update pass per frame.
pub struct GameState {
    pub seed: u64,
    pub rng: Pcg32,
    /// Immutable for the lifetime of the session
    pub features: FeatureFlags,
    pub difficulty: Difficulty,
    pub phase: GamePhase,

    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,

    pub score: u64,
    pub high_score: u64,
    /// Elapsed session time (seconds)
    pub time: f32,
    pub wave: u32,
    /// Wave banner display countdown
    pub wave_banner: f32,
    /// Boss warning countdown; boss spawns when it elapses
    pub boss_warning: f32,
    pub boss_active: bool,
    /// Last wave that armed a boss warning, so a wave triggers at most once
    pub last_boss_wave: u32,
    /// Enemy spawn countdown
    pub enemy_timer: f32,
    /// Power-up spawn countdown
    pub power_timer: f32,
    pub combo_kills: u32,
    pub combo_timer: f32,
    /// Cosmetic screen shake magnitude
    pub shake: f32,

    /// Sound cues raised this frame, drained by the shell
    pub sounds: Vec<SoundEffect>,
}

impl GameState {
    pub fn new(features: FeatureFlags, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT).map(|_| Star::new(&mut rng)).collect();
        Self {
            seed,
            rng,
            features,
            difficulty,
            phase: GamePhase::Menu,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            stars,
            score: 0,
            high_score: 0,
            time: 0.0,
            wave: 1,
            wave_banner: 0.0,
            boss_warning: 0.0,
            boss_active: false,
            last_boss_wave: 0,
            enemy_timer: ENEMY_SPAWN_BASE,
            power_timer: POWERUP_SPAWN_BASE,
            combo_kills: 0,
            combo_timer: 0.0,
            shake: 0.0,
            sounds: Vec::new(),
        }
    }

    /// Discard all run-scoped state and start a fresh run. The persisted
    /// high score, feature flags and difficulty survive.
    pub fn reset_run(&mut self) {
        self.player = Player::default();
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.particles.clear();
        self.score = 0;
        self.time = 0.0;
        self.wave = 1;
        self.wave_banner = if self.features.waves {
            WAVE_BANNER_TIME
        } else {
            0.0
        };
        self.boss_warning = 0.0;
        self.boss_active = false;
        self.last_boss_wave = 0;
        self.enemy_timer = ENEMY_SPAWN_BASE;
        self.power_timer = POWERUP_SPAWN_BASE;
        self.combo_kills = 0;
        self.combo_timer = 0.0;
        self.shake = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("Run started: difficulty {}", self.difficulty.as_str());
    }

    /// Wave-based difficulty scaling factor
    pub fn wave_scaler(&self) -> f32 {
        if !self.features.waves {
            1.0
        } else {
            1.0 + (self.wave - 1) as f32 * 0.11
        }
    }

    /// Current enemy spawn interval (seconds, before jitter)
    pub fn spawn_interval(&self) -> f32 {
        (ENEMY_SPAWN_BASE / self.wave_scaler()) * self.difficulty.spawn_mul()
    }

    pub fn enemy_speed(&self) -> f32 {
        ENEMY_BASE_SPEED * self.difficulty.enemy_mul() * (1.0 + (self.wave_scaler() - 1.0) * 0.65)
    }

    pub fn enemy_hp(&self) -> i32 {
        (ENEMY_HP as f32 * self.difficulty.enemy_mul() * (1.0 + (self.wave_scaler() - 1.0) * 0.55))
            as i32
    }

    /// Active combo score multiplier, clamped to [1, MAX_MULTIPLIER]
    pub fn score_mult(&self) -> u64 {
        if !self.features.combo {
            return 1;
        }
        (1 + self.combo_kills / COMBO_STEP).clamp(1, MAX_MULTIPLIER) as u64
    }

    pub fn add_shake(&mut self, amount: f32) {
        if self.features.screen_shake {
            self.shake = (self.shake + amount).min(SHAKE_MAX);
        }
    }

    pub fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    /// Drain the frame's sound cues for the audio collaborator
    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Score and combo bookkeeping plus the explosion burst for a kill
    pub fn enemy_killed(&mut self, pos: Vec2, base_points: u64) {
        self.score += base_points * self.score_mult();
        if self.features.combo {
            self.combo_kills += 1;
            self.combo_timer = COMBO_WINDOW;
        }
        self.add_shake(7.0);
        if self.features.particles {
            for _ in 0..18 {
                let ang = self.rng.random_range(0.0..std::f32::consts::TAU);
                let speed = self.rng.random_range(80.0..320.0);
                let vel = Vec2::new(ang.cos(), ang.sin()) * speed;
                let radius = self.rng.random_range(2..=4) as f32;
                self.particles
                    .push(Particle::new(pos, vel, PARTICLE_LIFE, radius));
            }
        }
    }

    /// Apply a picked-up power-up's effect
    pub fn apply_powerup(&mut self, kind: PowerUpKind) {
        self.play_sound(SoundEffect::Power);
        match kind {
            PowerUpKind::Rapid => self.player.rapid_time = POWERUP_DURATION,
            PowerUpKind::Spread => self.player.spread_time = POWERUP_DURATION,
            PowerUpKind::Shield => {
                self.player.shield = (self.player.shield + SHIELD_HP).min(SHIELD_HP)
            }
            PowerUpKind::Heal => self.player.hp = (self.player.hp + HEAL_AMOUNT).min(PLAYER_MAX_HP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sounds() -> Vec<SoundEffect> {
        Vec::new()
    }

    #[test]
    fn test_shield_absorbs_without_overflow() {
        let mut player = Player::default();
        let mut cues = sounds();
        player.shield = 40;

        player.take_damage(25, true, &mut cues);
        assert_eq!(player.shield, 15);
        assert_eq!(player.hp, PLAYER_MAX_HP);

        // Shield hits grant short iframes; clear them to land the next hit
        player.iframes = 0.0;
        player.take_damage(25, true, &mut cues);
        // Excess damage beyond the remaining shield is discarded
        assert_eq!(player.shield, 0);
        assert_eq!(player.hp, PLAYER_MAX_HP);

        player.iframes = 0.0;
        player.take_damage(25, true, &mut cues);
        assert_eq!(player.hp, PLAYER_MAX_HP - 25);
    }

    #[test]
    fn test_iframes_block_damage() {
        let mut player = Player::default();
        let mut cues = sounds();
        player.take_damage(10, true, &mut cues);
        assert_eq!(player.hp, 90);
        assert!(player.iframes > 0.0);

        // Second hit lands inside the immunity window
        player.take_damage(10, true, &mut cues);
        assert_eq!(player.hp, 90);
    }

    #[test]
    fn test_shield_hit_uses_short_iframes() {
        let mut player = Player::default();
        let mut cues = sounds();
        player.shield = 55;
        player.take_damage(10, true, &mut cues);
        assert!((player.iframes - PLAYER_IFRAMES * 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_health_disabled_is_one_hit_kill() {
        let mut player = Player::default();
        let mut cues = sounds();
        player.shield = 55;
        player.take_damage(1, false, &mut cues);
        assert_eq!(player.hp, 0);
        assert!(!player.alive());
    }

    #[test]
    fn test_shoot_respects_cooldown() {
        let mut player = Player::default();
        let mut bullets = Vec::new();
        let mut cues = sounds();

        player.shoot(&mut bullets, &mut cues);
        assert_eq!(bullets.len(), 1);
        assert!(player.fire_cd > 0.0);

        // On cooldown: silent no-op
        player.shoot(&mut bullets, &mut cues);
        assert_eq!(bullets.len(), 1);
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn test_spread_buff_fires_three() {
        let mut player = Player::default();
        let mut bullets = Vec::new();
        let mut cues = sounds();
        player.spread_time = POWERUP_DURATION;

        player.shoot(&mut bullets, &mut cues);
        assert_eq!(bullets.len(), 3);
        assert!(bullets.iter().all(|b| b.friendly));
        // Side bullets diverge vertically, forward bullet does not
        assert_eq!(bullets[0].vel.y, 0.0);
        assert!(bullets[1].vel.y != 0.0 && bullets[2].vel.y != 0.0);
        assert!((bullets[1].vel.y + bullets[2].vel.y).abs() < 1e-3);
    }

    #[test]
    fn test_rapid_buff_shortens_cooldown() {
        let mut player = Player::default();
        let base = player.cooldown();
        player.rapid_time = POWERUP_DURATION;
        assert!((player.cooldown() - base * RAPID_COOLDOWN_MULT).abs() < 1e-6);
    }

    #[test]
    fn test_combo_multiplier_steps_and_clamps() {
        let mut state = GameState::new(FeatureFlags::default(), Difficulty::Normal, 7);
        assert_eq!(state.score_mult(), 1);

        state.combo_kills = 5;
        assert_eq!(state.score_mult(), 1);
        state.combo_kills = 6;
        assert_eq!(state.score_mult(), 2);
        state.combo_kills = 36;
        assert_eq!(state.score_mult(), 6);
        state.combo_kills = 500;
        assert_eq!(state.score_mult(), 6);
    }

    #[test]
    fn test_combo_disabled_multiplier_is_one() {
        let mut flags = FeatureFlags::default();
        flags.combo = false;
        let mut state = GameState::new(flags, Difficulty::Normal, 7);
        state.combo_kills = 40;
        assert_eq!(state.score_mult(), 1);
    }

    #[test]
    fn test_powerup_caps() {
        let mut state = GameState::new(FeatureFlags::default(), Difficulty::Normal, 7);
        state.apply_powerup(PowerUpKind::Shield);
        state.apply_powerup(PowerUpKind::Shield);
        assert_eq!(state.player.shield, SHIELD_HP);

        state.player.hp = 90;
        state.apply_powerup(PowerUpKind::Heal);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);

        state.apply_powerup(PowerUpKind::Rapid);
        state.apply_powerup(PowerUpKind::Spread);
        assert_eq!(state.player.rapid_time, POWERUP_DURATION);
        assert_eq!(state.player.spread_time, POWERUP_DURATION);
    }

    #[test]
    fn test_enemy_hp_scaling() {
        let mut state = GameState::new(FeatureFlags::default(), Difficulty::Normal, 7);
        assert_eq!(state.enemy_hp(), 20);
        state.wave = 2;
        // wave_scaler(2) = 1.11 -> 20 * (1 + 0.11 * 0.55) = 21.21, truncated
        assert!((state.wave_scaler() - 1.11).abs() < 1e-6);
        assert_eq!(state.enemy_hp(), 21);
    }

    #[test]
    fn test_chaser_eases_toward_player() {
        let mut enemy = Enemy::chaser(Vec2::new(800.0, 100.0), 150.0, 20);
        let mut bullets = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ctx = WorldCtx {
            player_pos: Vec2::new(170.0, 400.0),
            time: 0.0,
            bullets: &mut bullets,
            rng: &mut rng,
        };
        let before = enemy.pos;
        enemy.update(1.0 / 60.0, &mut ctx);
        assert!(enemy.pos.x < before.x);
        assert!(enemy.pos.y > before.y);
    }

    #[test]
    fn test_shooter_holds_fire_near_right_edge() {
        let mut enemy = Enemy::shooter(Vec2::new(WIDTH + 40.0, 200.0), 140.0, 28, 0.0);
        let mut bullets = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ctx = WorldCtx {
            player_pos: Vec2::new(170.0, 270.0),
            time: 0.0,
            bullets: &mut bullets,
            rng: &mut rng,
        };
        enemy.update(1.0 / 60.0, &mut ctx);
        // Still right of the 92% line: no shot yet
        assert!(bullets.is_empty());

        enemy.pos.x = WIDTH * 0.5;
        if let EnemyKind::Shooter { fire_cd, .. } = &mut enemy.kind {
            *fire_cd = 0.0;
        }
        let mut ctx = WorldCtx {
            player_pos: Vec2::new(170.0, 270.0),
            time: 0.0,
            bullets: &mut bullets,
            rng: &mut rng,
        };
        enemy.update(1.0 / 60.0, &mut ctx);
        assert_eq!(bullets.len(), 1);
        assert!(!bullets[0].friendly);
    }

    #[test]
    fn test_boss_enters_then_engages() {
        let mut enemy = Enemy::boss(Vec2::new(WIDTH + 120.0, HEIGHT * 0.5), 450);
        let mut bullets = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let dt = 1.0 / 60.0;
        for _ in 0..(60 * 10) {
            let mut ctx = WorldCtx {
                player_pos: Vec2::new(170.0, 270.0),
                time: 0.0,
                bullets: &mut bullets,
                rng: &mut rng,
            };
            enemy.update(dt, &mut ctx);
        }
        let EnemyKind::Boss { entering, .. } = enemy.kind else {
            panic!("boss changed kind");
        };
        assert!(!entering);
        // Holds position around the 78% line once engaged
        assert!(enemy.pos.x <= WIDTH * 0.78 + BOSS_SPEED * dt);
        // Fan volleys queued hostile fire
        assert!(bullets.iter().filter(|b| !b.friendly).count() >= 5);
    }

    #[test]
    fn test_bullet_expiry() {
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), Vec2::new(780.0, 0.0), true, 4.0);
        assert!(!bullet.dead());
        bullet.life = 0.0;
        assert!(bullet.dead());

        let stray = Bullet::new(Vec2::new(WIDTH + 60.0, 100.0), Vec2::ZERO, false, 4.0);
        assert!(stray.dead());
    }

    #[test]
    fn test_reset_run_preserves_high_score() {
        let mut state = GameState::new(FeatureFlags::default(), Difficulty::Hard, 7);
        state.high_score = 900;
        state.score = 450;
        state.wave = 5;
        state.boss_active = true;
        state.reset_run();
        assert_eq!(state.high_score, 900);
        assert_eq!(state.score, 0);
        assert_eq!(state.wave, 1);
        assert!(!state.boss_active);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Hard);
    }
}
