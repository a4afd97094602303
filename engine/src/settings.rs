use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::timer::DEFAULT_TICK_HZ;

/// Overrides the settings file location for every game.
pub const SETTINGS_PATH_ENV: &str = "ARCADE_SETTINGS_PATH";

const SETTINGS_DIR_NAME: &str = "arcade-clones";

/// Clamps values a hand-edited settings file may have pushed out of range.
pub trait Sanitize {
    fn sanitized(self) -> Self;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSettings {
    pub vsync: bool,
    /// Simulation rate. Game tuning is expressed per tick, so raising this speeds the whole game
    /// up rather than making it smoother.
    pub tick_hz: u32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl Sanitize for VideoSettings {
    fn sanitized(mut self) -> Self {
        self.tick_hz = self.tick_hz.clamp(1, 240);
        self
    }
}

pub fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves `<config dir>/arcade-clones/<game>.json`, honouring `ARCADE_SETTINGS_PATH`.
    pub fn from_env(game: &str) -> Self {
        if let Some(explicit) = std::env::var_os(SETTINGS_PATH_ENV) {
            return Self::at(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push(SETTINGS_DIR_NAME);
        path.push(format!("{game}.json"));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file: defaults. Unparseable file: defaults plus a warning.
    pub fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default + Sanitize,
    {
        let Ok(bytes) = fs::read(&self.path) else {
            return T::default();
        };
        match serde_json::from_slice::<T>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!(
                    "ignoring unreadable settings {}: {err}; using defaults",
                    self.path.display()
                );
                T::default()
            }
        }
    }

    /// `load`, except that a missing file is first written out with the defaults so there is
    /// something to edit.
    pub fn load_or_create<T>(&self) -> T
    where
        T: DeserializeOwned + Serialize + Default + Sanitize,
    {
        if self.path.exists() {
            return self.load();
        }
        let settings = T::default();
        match self.save(&settings) {
            Ok(()) => log::info!("wrote default settings to {}", self.path.display()),
            Err(err) => log::warn!(
                "could not write default settings {}: {err}",
                self.path.display()
            ),
        }
        settings
    }

    pub fn save<T: Serialize>(&self, settings: &T) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
