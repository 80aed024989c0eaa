//! Seams to the outside world: keyboard, display surface, clock.
//!
//! The core never talks to a windowing library directly; the game loop is
//! generic over these traits and [`desktop`] provides the desktop backend.

pub mod desktop;

use thiserror::Error;

use crate::{renderer::Rgba, sim::InputSnapshot};

pub use crate::sim::clock::{Clock, MonotonicClock};
pub use desktop::MinifbWindow;

/// Window / surface failures.  Fatal to the session, never retried.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("cannot create {width}x{height} window: {source}")]
    Window {
        width: usize,
        height: usize,
        #[source]
        source: minifb::Error,
    },

    #[error("cannot present frame: {0}")]
    Present(#[from] minifb::Error),

    #[error("blit of {got} pixels does not fit {width}x{height} surface")]
    BadBlit {
        got: usize,
        width: usize,
        height: usize,
    },
}

/// Per-frame keyboard snapshot.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Display surface the finished frame is copied to.
///
/// Pixels are packed `0xAARRGGBB`, row-major, top-left origin.
pub trait Presenter {
    /// Copy a finished frame into the surface's back buffer.
    fn blit(&mut self, pixels: &[Rgba], width: usize, height: usize) -> Result<(), PlatformError>;

    /// Show the last blitted frame.
    fn present(&mut self) -> Result<(), PlatformError>;
}

/// A backend that is both keyboard and screen (one window).
pub trait Frontend: InputSource + Presenter {}
impl<T: InputSource + Presenter + ?Sized> Frontend for T {}
