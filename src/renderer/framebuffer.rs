//! ---------------------------------------------------------------------------
//! CPU pixel surface
//!
//! * Row-major, top-left origin, one packed `0xAARRGGBB` word per pixel.
//! * Size is fixed at construction and matches the presented surface.
//! * Every primitive clips against the surface; writes outside are dropped.
//! ---------------------------------------------------------------------------

use super::{Color, Rgba};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK.to_argb(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed pixels, `width * height` long.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Copy out in R,G,B,A byte order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&px| Color::from_argb(px).to_rgba_bytes())
            .collect()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        ((0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y))
            .then(|| y as usize * self.width + x as usize)
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_argb();
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_argb(self.pixels[i]))
    }

    /// Fill rows `y0..=y1` of column `x` (endpoints in any order).
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        if !(0..self.width as i32).contains(&x) || self.height == 0 {
            return;
        }
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let lo = lo.max(0);
        let hi = hi.min(self.height as i32 - 1);
        let px = color.to_argb();
        for y in lo..=hi {
            self.pixels[y as usize * self.width + x as usize] = px;
        }
    }

    /// Fill the `w × h` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = color.to_argb();
        for row in y0..y1 {
            let start = row as usize * self.width;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(px);
        }
    }

    /// Integer Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &Framebuffer, color: Color) -> usize {
        fb.pixels().iter().filter(|&&p| p == color.to_argb()).count()
    }

    #[test]
    fn set_pixel_clips() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel(-1, 0, Color::RED);
        fb.set_pixel(4, 0, Color::RED);
        fb.set_pixel(0, 3, Color::RED);
        assert_eq!(count(&fb, Color::RED), 0);

        fb.set_pixel(3, 2, Color::RED);
        assert_eq!(fb.pixel(3, 2), Some(Color::RED));
        assert_eq!(fb.pixels()[2 * 4 + 3], Color::RED.to_argb());
        assert_eq!(fb.pixel(4, 2), None);
    }

    #[test]
    fn vline_is_inclusive_and_clipped() {
        let mut fb = Framebuffer::new(3, 10);
        fb.vline(1, 2, 5, Color::GREEN);
        assert_eq!(count(&fb, Color::GREEN), 4);
        assert_eq!(fb.pixel(1, 2), Some(Color::GREEN));
        assert_eq!(fb.pixel(1, 5), Some(Color::GREEN));
        assert_eq!(fb.pixel(1, 6), Some(Color::BLACK));

        fb.clear(Color::BLACK);
        fb.vline(0, 100, -100, Color::GREEN);
        assert_eq!(count(&fb, Color::GREEN), 10);

        fb.vline(7, 0, 9, Color::BLUE);
        assert_eq!(count(&fb, Color::BLUE), 0);
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let mut fb = Framebuffer::new(8, 8);
        fb.fill_rect(6, 6, 4, 4, Color::WHITE);
        assert_eq!(count(&fb, Color::WHITE), 4);
        fb.fill_rect(-2, -2, 3, 3, Color::BLUE);
        assert_eq!(count(&fb, Color::BLUE), 1);
        fb.fill_rect(2, 2, 0, 5, Color::RED);
        assert_eq!(count(&fb, Color::RED), 0);
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = Framebuffer::new(16, 16);
        fb.draw_line(1, 1, 12, 7, Color::MAGENTA);
        assert_eq!(fb.pixel(1, 1), Some(Color::MAGENTA));
        assert_eq!(fb.pixel(12, 7), Some(Color::MAGENTA));
        // one pixel per step along the major axis
        assert_eq!(count(&fb, Color::MAGENTA), 12);

        // partly off-screen lines do not panic
        fb.draw_line(-20, -3, 40, 30, Color::CYAN);
        assert!(count(&fb, Color::CYAN) > 0);
    }

    #[test]
    fn rgba_byte_order() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(1, 0, Color::rgba(1, 2, 3, 4));
        assert_eq!(fb.to_rgba_bytes(), vec![0, 0, 0, 255, 1, 2, 3, 4]);
    }
}
