use std::error::Error;

use engine::app::{AppConfig, run_game};
use engine::assets::AssetDir;
use engine::settings::SettingsStore;
use engine::surface::SurfaceSize;

use tetris::app::TetrisApp;
use tetris::settings::TetrisSettings;
use tetris::sprites::TetrisSprites;
use tetris::state::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SettingsStore::from_env("tetris");
    let settings: TetrisSettings = store.load_or_create();
    log::debug!("settings: {} -> {settings:?}", store.path().display());

    let assets = AssetDir::from_env(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    log::info!("loading sprites from {}", assets.root().display());
    let sprites = TetrisSprites::load(&assets)?;

    let config = AppConfig {
        title: "Tetris".to_string(),
        size: SurfaceSize::new(BOARD_WIDTH as u32, BOARD_HEIGHT as u32),
        tick_hz: settings.video.tick_hz,
        vsync: settings.video.vsync,
    };
    run_game(config, TetrisApp::new(sprites))
}
