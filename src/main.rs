//! Nova Strike entry point
//!
//! Headless demo shell: runs the deterministic simulation at a fixed
//! timestep with the autopilot on the sticks, dispatches sound cues, and
//! persists the high score when a run ends. Rendering is a separate
//! collaborator and not wired in here.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use nova_strike::audio::AudioManager;
use nova_strike::consts::{MAX_SUBSTEPS, SIM_DT};
use nova_strike::highscores::{self, HIGHSCORE_FILE};
use nova_strike::settings::Settings;
use nova_strike::sim::{GamePhase, GameState, TickInput, tick};

/// Wall-clock cap on the demo session
const DEMO_MAX_SECS: u64 = 120;

/// Shell-side session wrapper: owns the fixed-timestep accumulator, the
/// input snapshot, and the phase watch used for high score persistence.
struct App {
    state: GameState,
    audio: AudioManager,
    accumulator: f32,
    input: TickInput,
    last_phase: GamePhase,
    score_path: PathBuf,
}

impl App {
    fn new(settings: &Settings, seed: u64) -> Self {
        let score_path = PathBuf::from(HIGHSCORE_FILE);
        let mut state = GameState::new(settings.features, settings.difficulty, seed);
        state.high_score = highscores::load_highscore(&score_path);

        let mut audio = AudioManager::new(settings.features.sounds);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);

        Self {
            state,
            audio,
            accumulator: 0.0,
            input: TickInput {
                demo: true,
                ..Default::default()
            },
            last_phase: GamePhase::Menu,
            score_path,
        }
    }

    /// Run simulation ticks for one frame's worth of wall time
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;
            self.input.confirm = false;
            self.input.restart = false;
            self.input.select_difficulty = None;
        }

        for cue in self.state.take_sounds() {
            self.audio.play(cue);
        }

        // Persist the high score the moment a run ends
        let phase = self.state.phase;
        if phase != self.last_phase {
            if phase == GamePhase::GameOver {
                highscores::save_highscore(&self.score_path, self.state.high_score);
                log::info!(
                    "Run over: score {} / high {} (wave {})",
                    self.state.score,
                    self.state.high_score,
                    self.state.wave
                );
            }
            self.last_phase = phase;
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load_from(&PathBuf::from(Settings::FILE));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!(
        "Nova Strike demo starting (seed {seed}, difficulty {})",
        settings.difficulty.as_str()
    );

    let mut app = App::new(&settings, seed);
    let started = Instant::now();
    let mut last = started;

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        app.update(dt);

        if app.state.phase == GamePhase::GameOver {
            break;
        }
        if started.elapsed() > Duration::from_secs(DEMO_MAX_SECS) {
            log::info!("Demo time limit reached");
            break;
        }
        std::thread::sleep(Duration::from_millis(4));
    }

    println!(
        "score {}  high {}  wave {}  time {:.1}s",
        app.state.score, app.state.high_score, app.state.wave, app.state.time
    );
}
