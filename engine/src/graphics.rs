use crate::{assets::Sprite, rect::Rect, surface::SurfaceSize};

pub type Color = [u8; 4];

pub const WHITE: Color = [255, 255, 255, 255];

// 3x5 block font, scaled by whole pixels.
pub const GLYPH_W: u32 = 3;
pub const GLYPH_H: u32 = 5;

fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 1) * scale.max(1)
}

/// Unified 2D rendering interface.
///
/// Game code only talks to this trait; it does not care whether the pixels end up in a window or
/// in an in-memory buffer.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);

    /// Opaque fill, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `sprite` stretched to `dest` (nearest neighbour), alpha-blended over the frame.
    fn draw_sprite(&mut self, dest: Rect, sprite: &Sprite);

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn frame_fits(&self) -> bool {
        let expected = self.size.rgba_len();
        expected != 0 && self.frame.len() >= expected
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !self.frame_fits() {
            return;
        }
        let Some(clip) = rect.clip_to(self.size) else {
            return;
        };

        let stride = self.size.width as usize * 4;
        let row_bytes = clip.width() as usize * 4;
        let mut row_start = clip.y0 as usize * stride + clip.x0 as usize * 4;

        let [r, g, b, a] = color;
        for _ in clip.y0..clip.y1 {
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px[0] = r;
                px[1] = g;
                px[2] = b;
                px[3] = a;
            }
            row_start += stride;
        }
    }

    fn draw_sprite(&mut self, dest: Rect, sprite: &Sprite) {
        if !self.frame_fits() || dest.is_empty() || sprite.width() == 0 || sprite.height() == 0 {
            return;
        }
        let Some(clip) = dest.clip_to(self.size) else {
            return;
        };

        let stride = self.size.width as usize * 4;
        let dest_x = dest.x as i64;
        let dest_y = dest.y as i64;
        let (dw, dh) = (dest.w as i64, dest.h as i64);
        let (sw, sh) = (sprite.width() as i64, sprite.height() as i64);

        for py in clip.y0..clip.y1 {
            let sy = ((py as i64 - dest_y) * sh / dh) as u32;
            let row_start = py as usize * stride;
            for px in clip.x0..clip.x1 {
                let sx = ((px as i64 - dest_x) * sw / dw) as u32;
                let Some(src) = sprite.pixel(sx, sy) else {
                    continue;
                };
                let idx = row_start + px as usize * 4;
                blend_pixel(&mut self.frame[idx..idx + 4], src);
            }
        }
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let width = self.size.width;
        let height = self.size.height;
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in text.chars() {
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(adv_y);
                    if cursor_y >= height {
                        break;
                    }
                    continue;
                }
                ' ' => {
                    cursor_x = cursor_x.saturating_add(adv_x);
                    if cursor_x >= width {
                        break;
                    }
                    continue;
                }
                _ => {}
            }

            draw_char_cpu(self.frame, width, height, cursor_x, cursor_y, ch, color, scale);
            cursor_x = cursor_x.saturating_add(adv_x);
            if cursor_x >= width {
                break;
            }
        }
    }
}

fn blend_pixel(dst: &mut [u8], src: Color) {
    let a = src[3] as u32;
    if a == 0 {
        return;
    }
    if a == 255 {
        dst.copy_from_slice(&src);
        return;
    }
    let inv = 255 - a;
    for c in 0..3 {
        dst[c] = ((dst[c] as u32 * inv + src[c] as u32 * a + 127) / 255) as u8;
    }
    dst[3] = 255;
}

#[allow(clippy::too_many_arguments)]
fn draw_char_cpu(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    ch: char,
    color: Color,
    scale: u32,
) {
    let rows = glyph_rows(ch);
    for (row, bits) in rows.into_iter().enumerate() {
        let py0 = y.saturating_add((row as u32).saturating_mul(scale));
        for col in 0..GLYPH_W {
            let mask = 1u8 << (GLYPH_W - 1 - col);
            if (bits & mask) == 0 {
                continue;
            }
            let px0 = x.saturating_add(col.saturating_mul(scale));
            for dy in 0..scale {
                for dx in 0..scale {
                    set_pixel_cpu(frame, width, height, px0 + dx, py0 + dy, color);
                }
            }
        }
    }
}

fn set_pixel_cpu(frame: &mut [u8], width: u32, height: u32, x: u32, y: u32, color: Color) {
    if x >= width || y >= height {
        return;
    }
    let idx = (y as usize * width as usize + x as usize) * 4;
    if idx + 4 <= frame.len() {
        frame[idx..idx + 4].copy_from_slice(&color);
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    let c = ch.to_ascii_uppercase();
    match c {
        // Digits
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        // Letters
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],

        // Punctuation
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        '@' => [0b111, 0b101, 0b111, 0b100, 0b111],

        _ => [0b111, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RgbaBufferSurface;

    const RED: Color = [255, 0, 0, 255];
    const BLACK: Color = [0, 0, 0, 255];

    #[test]
    fn fill_rect_clips_negative_origin() {
        let size = SurfaceSize::new(4, 4);
        let mut surface = RgbaBufferSurface::new(size);
        {
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.fill_rect(Rect::new(-2, -2, 4, 4), RED);
        }
        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn draw_sprite_scales_nearest_neighbour() {
        let size = SurfaceSize::new(4, 2);
        let mut surface = RgbaBufferSurface::new(size);
        let mut rgba = Vec::new();
        rgba.extend_from_slice(&RED);
        rgba.extend_from_slice(&WHITE);
        let sprite = Sprite::from_rgba(2, 1, rgba).unwrap();
        {
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.draw_sprite(Rect::new(0, 0, 4, 2), &sprite);
        }
        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(2, 0), Some(WHITE));
        assert_eq!(surface.pixel(3, 1), Some(WHITE));
    }

    #[test]
    fn draw_sprite_skips_transparent_and_blends_translucent_pixels() {
        let size = SurfaceSize::new(2, 1);
        let mut surface = RgbaBufferSurface::new(size);
        let mut rgba = Vec::new();
        rgba.extend_from_slice(&[255, 255, 255, 0]);
        rgba.extend_from_slice(&[255, 255, 255, 128]);
        let sprite = Sprite::from_rgba(2, 1, rgba).unwrap();
        {
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.fill_rect(Rect::from_size(2, 1), BLACK);
            gfx.draw_sprite(Rect::new(0, 0, 2, 1), &sprite);
        }
        assert_eq!(surface.pixel(0, 0), Some(BLACK));
        assert_eq!(surface.pixel(1, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn draw_sprite_offscreen_is_a_noop() {
        let size = SurfaceSize::new(4, 4);
        let mut surface = RgbaBufferSurface::new(size);
        let sprite = Sprite::solid(2, 2, RED);
        {
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.draw_sprite(Rect::new(-8, 0, 4, 4), &sprite);
            gfx.draw_sprite(Rect::new(0, 10, 4, 4), &sprite);
        }
        assert!(surface.frame().iter().all(|&b| b == 0));
    }

    #[test]
    fn text_is_drawn_at_scale() {
        let size = SurfaceSize::new(16, 12);
        let mut surface = RgbaBufferSurface::new(size);
        {
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.draw_text_scaled(0, 0, "7", WHITE, 2);
        }
        // Top row of '7' is fully lit; the bottom-left of the glyph is not.
        assert_eq!(surface.pixel(0, 0), Some(WHITE));
        assert_eq!(surface.pixel(5, 0), Some(WHITE));
        assert_eq!(surface.pixel(0, 9), Some([0, 0, 0, 0]));
    }
}
