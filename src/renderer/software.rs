//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Composites into a [`Framebuffer`] in **0xAARRGGBB** format.
//! * Each frame starts from a ceiling/floor split; wall slices are painted
//!   over it, overlay rects and lines last.
//! ---------------------------------------------------------------------------

use crate::renderer::{Color, Framebuffer, Renderer, Rgba, WallSlice};

/// Flat-shaded column renderer.
pub struct Software {
    fb: Framebuffer,
    ceiling: Color,
    floor: Color,
}

impl Default for Software {
    fn default() -> Self {
        Self::new(Color::BLACK, Color::GRAY)
    }
}

impl Software {
    pub fn new(ceiling: Color, floor: Color) -> Self {
        Self {
            fb: Framebuffer::new(0, 0),
            ceiling,
            floor,
        }
    }

    /// Frame composited by the last `begin_frame` … `end_frame` cycle.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.fb.width() || h != self.fb.height() {
            self.fb = Framebuffer::new(w, h);
        }

        /* ceiling above the horizon, floor from the horizon down */
        self.fb.clear(self.ceiling);
        let horizon = (h / 2) as i32;
        self.fb
            .fill_rect(0, horizon, w as i32, h as i32 - horizon, self.floor);
    }

    fn draw_slice(&mut self, s: &WallSlice) {
        self.fb
            .vline(s.x as i32, s.draw_start as i32, s.draw_end as i32, s.color);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.fb.fill_rect(x, y, w, h, color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.fb.draw_line(x0, y0, x1, y1, color);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(self.fb.pixels(), self.fb.width(), self.fb.height());
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RendererExt};

    fn blue_slice() -> DrawCall {
        DrawCall::Slice(WallSlice {
            x: 2,
            draw_start: 1,
            draw_end: 4,
            color: Color::BLUE,
        })
    }

    #[test]
    fn software_renders_slice() {
        let mut sw = Software::default();
        let mut seen = Vec::new();

        sw.draw_frame(8, 8, &[blue_slice()], |fb, w, h| {
            assert_eq!((w, h), (8, 8));
            seen.extend_from_slice(fb);
        });

        let blue = Color::BLUE.to_argb();
        assert_eq!(seen.iter().filter(|&&px| px == blue).count(), 4);
        assert_eq!(sw.framebuffer().pixel(2, 1), Some(Color::BLUE));
        assert_eq!(sw.framebuffer().pixel(2, 5), Some(Color::GRAY));
    }

    #[test]
    fn begin_frame_splits_ceiling_and_floor() {
        let mut sw = Software::new(Color::CYAN, Color::RED);
        sw.draw_frame(4, 6, &[], |_, _, _| {});
        let fb = sw.framebuffer();
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(fb.pixel(x, y), Some(Color::CYAN));
            }
            for y in 3..6 {
                assert_eq!(fb.pixel(x, y), Some(Color::RED));
            }
        }
    }

    #[test]
    fn begin_frame_wipes_previous_frame() {
        let mut sw = Software::default();
        sw.draw_frame(8, 8, &[blue_slice()], |_, _, _| {});
        sw.draw_frame(8, 8, &[], |_, _, _| {});
        let blue = Color::BLUE.to_argb();
        assert!(!sw.framebuffer().pixels().contains(&blue));
    }

    #[test]
    fn resize_reallocates() {
        let mut sw = Software::default();
        sw.draw_frame(8, 8, &[], |_, _, _| {});
        sw.draw_frame(3, 2, &[], |fb, w, h| assert_eq!(fb.len(), w * h));
        assert_eq!(sw.framebuffer().width(), 3);
    }
}
