//! Frame hashing for render regression tests.
//!
//! A frame is rendered into an in-memory surface with the CPU renderer and reduced to a SHA-256
//! hex digest, so tests can assert "same state, same pixels" without storing images.

use sha2::{Digest, Sha256};

use crate::{
    graphics::{CpuRenderer, Renderer2d},
    surface::{RgbaBufferSurface, SurfaceSize},
};

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    let digest = hasher.finalize();
    hex::encode(digest)
}

/// Renders one frame headlessly and returns the surface it was drawn into.
pub fn render_headless<F>(size: SurfaceSize, draw: F) -> RgbaBufferSurface
where
    F: FnOnce(&mut dyn Renderer2d),
{
    let mut surface = RgbaBufferSurface::new(size);
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
        gfx.begin_frame(size);
        draw(&mut gfx);
    }
    surface
}

pub fn render_hash<F>(size: SurfaceSize, draw: F) -> String
where
    F: FnOnce(&mut dyn Renderer2d),
{
    rgba_sha256_hex(render_headless(size, draw).frame())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;

    #[test]
    fn sha256_of_empty_input_matches_known_digest() {
        assert_eq!(
            rgba_sha256_hex(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn identical_draws_hash_identically() {
        let size = SurfaceSize::new(8, 8);
        let draw = |gfx: &mut dyn Renderer2d| gfx.fill_rect(Rect::new(1, 1, 3, 3), [9, 9, 9, 255]);
        assert_eq!(render_hash(size, draw), render_hash(size, draw));

        let other = render_hash(size, |gfx| gfx.fill_rect(Rect::new(2, 1, 3, 3), [9, 9, 9, 255]));
        assert_ne!(render_hash(size, draw), other);
    }
}
