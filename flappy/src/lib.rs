pub mod app;
pub mod logic;
pub mod render;
pub mod settings;
pub mod sprites;
pub mod state;
