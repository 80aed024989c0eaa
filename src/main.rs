//! Flat-shaded tile raycaster.
//!
//! ```bash
//! cargo run --release -- --map courtyard --scale 2
//! RUST_LOG=debug cargo run -- --fps 0      # uncapped, with frame timings
//! ```

use anyhow::Context;
use clap::Parser;

use raycaster_rs::{
    config::Config,
    platform::{MinifbWindow, MonotonicClock},
    sim::GameLoop,
    world::{DEFAULT_MAP, maps},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Render width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Render height in pixels
    #[arg(long, default_value_t = 480)]
    height: usize,

    /// Window upscale factor (1, 2, 4, 8, ...)
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Frame-rate cap; 0 = uncapped
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f64,

    /// Walk speed in tiles per second
    #[arg(long, default_value_t = 3.0)]
    speed: f64,

    /// Turn speed in degrees per second
    #[arg(long, default_value_t = 180.0)]
    turn_speed: f64,

    /// Built-in map to load
    #[arg(long, default_value = DEFAULT_MAP)]
    map: String,

    /// Start with the minimap overlay hidden (toggle with M)
    #[arg(long)]
    no_minimap: bool,

    /// Print the built-in map names and exit
    #[arg(long)]
    list_maps: bool,
}

impl Opts {
    fn into_config(self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            scale: self.scale,
            target_fps: self.fps,
            fov_deg: self.fov,
            move_speed: self.speed,
            turn_speed_deg: self.turn_speed,
            map: self.map,
            minimap: !self.no_minimap,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    if opts.list_maps {
        for name in maps::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let cfg = opts.into_config();
    cfg.validate().context("invalid settings")?;
    log::info!(
        "map `{}`, {}x{} @ {} fps cap, FoV {}°",
        cfg.map,
        cfg.width,
        cfg.height,
        cfg.target_fps,
        cfg.fov_deg
    );

    let mut window = MinifbWindow::create_surface("Raycaster", cfg.width, cfg.height, cfg.scale)
        .context("cannot open display surface")?;
    let mut game = GameLoop::new(&cfg, MonotonicClock::new())?;

    game.run(&mut window)?;
    Ok(())
}
