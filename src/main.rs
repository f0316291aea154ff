//! Monster Wrangler entry point
//!
//! Owns the application context for the main loop: window setup, input
//! collection, the fixed-timestep simulation, audio dispatch and rendering.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use monster_wrangler::Settings;
use monster_wrangler::audio::{AudioManager, SoundEffect};
use monster_wrangler::consts::*;
use monster_wrangler::render;
use monster_wrangler::sim::{GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Monster Wrangler".to_owned(),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Application context owning all state for the main loop
struct App {
    state: GameState,
    audio: AudioManager,
    settings: Settings,
    input: TickInput,
    accumulator: f32,
}

impl App {
    fn new(seed: u64, settings: Settings) -> Self {
        let mut audio = AudioManager::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        Self {
            state: GameState::new(seed),
            audio,
            settings,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Sample the keyboard into this frame's tick input
    fn collect_input(&mut self) {
        self.input.left = is_key_down(KeyCode::Left) || is_key_down(KeyCode::A);
        self.input.right = is_key_down(KeyCode::Right) || is_key_down(KeyCode::D);
        self.input.up = is_key_down(KeyCode::Up) || is_key_down(KeyCode::W);
        self.input.down = is_key_down(KeyCode::Down) || is_key_down(KeyCode::S);
        // One-shots accumulate until a tick consumes them
        self.input.warp |= is_key_pressed(KeyCode::Space);
        self.input.confirm |= is_key_pressed(KeyCode::Enter);
    }

    /// Run simulation ticks for the elapsed real time
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(&mut self.state, &input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.warp = false;
            self.input.confirm = false;
        }
    }

    /// Fire audio cues for this frame's gameplay events
    fn play_events(&mut self) {
        for event in self.state.drain_events() {
            self.audio.play(SoundEffect::for_event(event));
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Monster Wrangler starting with seed {seed}");

    let mut app = App::new(seed, settings);

    loop {
        // Quit is honored from any phase, including the pause screens
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.collect_input();
        app.update(get_frame_time());
        app.play_events();
        render::draw(&app.state, app.settings.show_fps);

        next_frame().await;
    }

    app.settings.save();
    log::info!("bye");
}
