//! Runtime settings.  The binary fills these from the command line; the
//! defaults reproduce the classic 640×480 / 60 Hz / 90° demo.

use thiserror::Error;

use crate::{
    renderer::Color,
    sim::player::{MAX_FOV, MIN_FOV, Tuning},
    world::{DEFAULT_MAP, maps},
};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("render resolution must be non-zero (got {width}x{height})")]
    ZeroResolution { width: usize, height: usize },

    #[error("window scale must be at least 1")]
    ZeroScale,

    #[error("field of view {0}° outside {min}..={max}°", min = MIN_FOV.to_degrees(), max = MAX_FOV.to_degrees())]
    FovOutOfRange(f64),

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("unknown map `{0}` (available: {list})", list = maps::names().join(", "))]
    UnknownMap(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// On-screen upscale of the render surface.
    pub scale: u32,
    /// 0 = uncapped.
    pub target_fps: u32,
    /// Horizontal FoV in degrees.
    pub fov_deg: f64,
    /// Tiles per second.
    pub move_speed: f64,
    /// Degrees per second.
    pub turn_speed_deg: f64,
    /// Plane scale per second while a zoom key is held.
    pub zoom_rate: f64,
    pub map: String,
    pub minimap: bool,
    pub ceiling: Color,
    pub floor: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            scale: 1,
            target_fps: 60,
            fov_deg: 90.0,
            move_speed: 3.0,
            turn_speed_deg: 180.0,
            zoom_rate: 2.0,
            map: DEFAULT_MAP.to_owned(),
            minimap: true,
            ceiling: Color::BLACK,
            floor: Color::GRAY,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        let fov = self.fov_deg.to_radians();
        if !(MIN_FOV..=MAX_FOV).contains(&fov) {
            return Err(ConfigError::FovOutOfRange(self.fov_deg));
        }
        for (name, value) in [
            ("move speed", self.move_speed),
            ("turn speed", self.turn_speed_deg),
            ("zoom rate", self.zoom_rate),
        ] {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if maps::by_name(&self.map).is_none() {
            return Err(ConfigError::UnknownMap(self.map.clone()));
        }
        Ok(())
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov_deg.to_radians()
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            move_speed: self.move_speed,
            turn_speed: self.turn_speed_deg.to_radians(),
            zoom_rate: self.zoom_rate,
        }
    }
}
