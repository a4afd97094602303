//! Axis-aligned rectangles in screen pixels.
//!
//! Positions are signed because entities routinely live partly off-screen (a pipe sprite starts
//! hundreds of pixels above the top edge). Sizes are unsigned.

use serde::{Deserialize, Serialize};

use crate::surface::SurfaceSize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.x as i64) < other.right()
            && self.right() > other.x as i64
            && (self.y as i64) < other.bottom()
            && self.bottom() > other.y as i64
    }

    /// The part of this rect that lies on a surface of `size`, in unsigned surface coordinates.
    pub fn clip_to(&self, size: SurfaceSize) -> Option<ClippedRect> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = self.right().min(size.width as i64);
        let y1 = self.bottom().min(size.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(ClippedRect {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }
}

/// Half-open pixel span `[x0, x1) x [y0, y1)` guaranteed to be inside a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl ClippedRect {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect_both_ways() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(!a.intersects(&Rect::new(-10, 0, 10, 10)));
    }

    #[test]
    fn negative_positions_are_supported() {
        let pipe = Rect::new(100, -300, 64, 512);
        assert_eq!(pipe.bottom(), 212);
        assert!(pipe.intersects(&Rect::new(120, 0, 1, 1)));
        assert!(!pipe.intersects(&Rect::new(120, 212, 1, 1)));
        assert!(pipe.intersects(&Rect::new(90, 200, 34, 24)));
    }

    #[test]
    fn clip_to_trims_offscreen_parts() {
        let size = SurfaceSize::new(100, 50);
        let clipped = Rect::new(-10, 40, 30, 30).clip_to(size).unwrap();
        assert_eq!(
            clipped,
            ClippedRect {
                x0: 0,
                y0: 40,
                x1: 20,
                y1: 50
            }
        );
        assert_eq!(clipped.width(), 20);
        assert_eq!(clipped.height(), 10);

        assert!(Rect::new(-40, 0, 40, 10).clip_to(size).is_none());
        assert!(Rect::new(0, 0, 0, 10).clip_to(size).is_none());
    }
}
