//! `minifb` desktop backend: one window that is both the keyboard source
//! and the display surface.
//!
//! Controls  W/↑ S/↓ = forward/back  A/D = strafe  ←/→ or Q/E = turn
//!           1/2 = narrow/widen FoV  M = minimap  P = pause  Esc = quit

use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};
use smallvec::{SmallVec, smallvec};

use super::{InputSource, PlatformError, Presenter};
use crate::{
    renderer::Rgba,
    sim::{Action, InputSnapshot},
};

/// Keys bound to one action.
pub type KeySet = SmallVec<[Key; 2]>;

pub fn default_bindings() -> Vec<(Action, KeySet)> {
    vec![
        (Action::FORWARD, smallvec![Key::W, Key::Up]),
        (Action::BACK, smallvec![Key::S, Key::Down]),
        (Action::STRAFE_LEFT, smallvec![Key::A]),
        (Action::STRAFE_RIGHT, smallvec![Key::D]),
        (Action::TURN_LEFT, smallvec![Key::Left, Key::Q]),
        (Action::TURN_RIGHT, smallvec![Key::Right, Key::E]),
        (Action::FOV_NARROW, smallvec![Key::Key1]),
        (Action::FOV_WIDEN, smallvec![Key::Key2]),
        (Action::TOGGLE_MINIMAP, smallvec![Key::M]),
        (Action::PAUSE, smallvec![Key::P]),
    ]
}

/// Window scale factor → `minifb::Scale` (unsupported values fit the screen).
fn scale_of(factor: u32) -> Scale {
    match factor {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        16 => Scale::X16,
        32 => Scale::X32,
        _ => Scale::FitScreen,
    }
}

pub struct MinifbWindow {
    win: Window,
    back: Vec<Rgba>,
    width: usize,
    height: usize,
    bindings: Vec<(Action, KeySet)>,
}

impl MinifbWindow {
    /// Open a `width × height` surface, upscaled by `scale` on screen.
    pub fn create_surface(
        title: &str,
        width: usize,
        height: usize,
        scale: u32,
    ) -> Result<Self, PlatformError> {
        let opts = WindowOptions {
            scale: scale_of(scale),
            ..WindowOptions::default()
        };
        let mut win = Window::new(title, width, height, opts).map_err(|source| {
            PlatformError::Window {
                width,
                height,
                source,
            }
        })?;
        // pacing is done by the game loop
        win.set_target_fps(0);

        log::info!("opened {width}x{height} window (scale {scale})");
        Ok(Self {
            win,
            back: vec![0; width * height],
            width,
            height,
            bindings: default_bindings(),
        })
    }
}

impl InputSource for MinifbWindow {
    fn poll(&mut self) -> InputSnapshot {
        let mut snap = InputSnapshot {
            quit: !self.win.is_open() || self.win.is_key_down(Key::Escape),
            ..Default::default()
        };
        for (action, keys) in &self.bindings {
            if keys.iter().any(|&k| self.win.is_key_down(k)) {
                snap.held |= *action;
            }
            if keys
                .iter()
                .any(|&k| self.win.is_key_pressed(k, KeyRepeat::No))
            {
                snap.pressed |= *action;
            }
        }
        snap
    }
}

impl Presenter for MinifbWindow {
    fn blit(&mut self, pixels: &[Rgba], width: usize, height: usize) -> Result<(), PlatformError> {
        if width != self.width || height != self.height || pixels.len() != self.back.len() {
            return Err(PlatformError::BadBlit {
                got: pixels.len(),
                width: self.width,
                height: self.height,
            });
        }
        self.back.copy_from_slice(pixels);
        Ok(())
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        // also pumps window events, so key state is fresh for the next poll
        self.win
            .update_with_buffer(&self.back, self.width, self.height)?;
        Ok(())
    }
}
