//! Sprite loading from bundled PNG assets.
//!
//! Assets are loaded once at startup. Every failure carries the offending path so a missing or
//! broken file surfaces as a readable startup error instead of a blank window.

use std::{
    error::Error,
    fmt, fs,
    io::{self, Cursor},
    path::{Path, PathBuf},
};

use crate::graphics::Color;

/// Overrides the directory a game loads its sprites from.
pub const ASSETS_DIR_ENV: &str = "ARCADE_ASSETS_DIR";

/// An RGBA8 image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Sprite {
    /// Returns `None` when `rgba` does not hold exactly `width * height` pixels.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if rgba.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let pixels = width as usize * height as usize;
        let mut rgba = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            rgba.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    /// The message is wrapped into `AssetError::Decode` by `load_sprite`, which knows the path.
    pub(crate) fn decode_png(bytes: &[u8]) -> Result<Self, String> {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info().map_err(|e| e.to_string())?;

        let (color_type, _) = reader.output_color_type();
        let (width, height) = {
            let info = reader.info();
            (info.width, info.height)
        };
        let samples = color_type.samples();
        let mut buf = vec![0u8; width as usize * height as usize * samples];
        let frame = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;
        buf.truncate(frame.buffer_size());

        let rgba = match frame.color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
            png::ColorType::Indexed => {
                return Err("indexed colour was not expanded".to_string());
            }
        };

        Self::from_rgba(width, height, rgba)
            .ok_or_else(|| format!("decoded buffer does not match {width}x{height}"))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Debug)]
pub enum AssetError {
    Io { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "failed to read asset {}: {source}", path.display())
            }
            AssetError::Decode { path, message } => {
                write!(f, "failed to decode asset {}: {message}", path.display())
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { .. } => None,
        }
    }
}

pub fn load_sprite(path: impl AsRef<Path>) -> Result<Sprite, AssetError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sprite = Sprite::decode_png(&bytes).map_err(|message| AssetError::Decode {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!(
        "loaded sprite {} ({}x{})",
        path.display(),
        sprite.width(),
        sprite.height()
    );
    Ok(sprite)
}

/// Directory holding a game's bundled images.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses `ARCADE_ASSETS_DIR` when set, otherwise `default_root`.
    pub fn from_env(default_root: impl Into<PathBuf>) -> Self {
        match std::env::var_os(ASSETS_DIR_ENV) {
            Some(explicit) => Self::new(explicit),
            None => Self::new(default_root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn load_sprite(&self, file_name: &str) -> Result<Sprite, AssetError> {
        load_sprite(self.path(file_name))
    }
}
