use std::error::Error;

use engine::app::{AppConfig, run_game};
use engine::assets::AssetDir;
use engine::settings::SettingsStore;
use engine::surface::SurfaceSize;

use flappy::app::FlappyApp;
use flappy::settings::FlappySettings;
use flappy::sprites::FlappySprites;
use flappy::state::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SettingsStore::from_env("flappy");
    let settings: FlappySettings = store.load_or_create();
    log::debug!("settings: {} -> {settings:?}", store.path().display());

    let assets = AssetDir::from_env(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    log::info!("loading sprites from {}", assets.root().display());
    let sprites = FlappySprites::load(&assets)?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("pipe seed {seed}");

    let config = AppConfig {
        title: "Flappy Bird".to_string(),
        size: SurfaceSize::new(BOARD_WIDTH as u32, BOARD_HEIGHT as u32),
        tick_hz: settings.video.tick_hz,
        vsync: settings.video.vsync,
    };
    run_game(config, FlappyApp::new(settings.tuning, seed, sprites))
}
