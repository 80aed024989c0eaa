//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The raycaster and the minimap produce a list of [`DrawCall`]s and hand
//! them to a type that implements [`Renderer`].
//!
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.
//! * Flat-shaded walls only: one solid colour per slice.

mod color;
mod framebuffer;
pub mod palette;
pub mod software;

pub use color::Color;
pub use framebuffer::Framebuffer;
pub use palette::Palette;
pub use software::Software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// One vertical wall slice: rows `draw_start ..= draw_end` of column `x`.
///
/// Rows outside the slice are left to the floor/ceiling fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WallSlice {
    pub x: usize,
    pub draw_start: usize,
    pub draw_end: usize,
    pub color: Color,
}

pub enum DrawCall {
    Slice(WallSlice),
    /// Filled `w × h` rectangle, top-left at `(x, y)`.
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Fill one wall slice.
    fn draw_slice(&mut self, slice: &WallSlice);

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * The window caller passes `|fb, w, h| presenter.blit(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, calls: &[DrawCall], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in calls {
            match c {
                DrawCall::Slice(s) => self.draw_slice(s),
                DrawCall::Rect { x, y, w, h, color } => self.draw_rect(*x, *y, *w, *h, *color),
                DrawCall::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    color,
                } => self.draw_line(*x0, *y0, *x1, *y1, *color),
            }
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
