//! CPU frame buffer
//!
//! The whole frame is drawn here with plain pixel writes, then uploaded to
//! the GPU as one texture.

use glam::IVec2;

use crate::text::TextSprite;

pub type Rgba = [u8; 4];

/// RGBA8 pixel buffer, row-major, origin at the top-left
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let i = self.index(x, y)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    /// Write one pixel; anything outside the buffer is dropped
    pub fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&color);
        }
    }

    /// Filled axis-aligned rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.plot(px, py, color);
            }
        }
    }

    /// Filled circle rasterised point by point over a 2r square
    pub fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgba) {
        for w in 0..radius * 2 {
            for h in 0..radius * 2 {
                let dx = radius - w;
                let dy = radius - h;
                if dx * dx + dy * dy <= radius * radius {
                    self.plot(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Paint a pre-baked text texture in a solid colour
    pub fn draw_text(&mut self, sprite: &TextSprite, color: Rgba) {
        let texture = &sprite.texture;
        for ty in 0..texture.height() {
            for tx in 0..texture.width() {
                if texture.is_set(tx, ty) {
                    self.plot(sprite.x + tx as i32, sprite.y + ty as i32, color);
                }
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}
