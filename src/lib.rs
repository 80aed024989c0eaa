//! Flat-shaded tile raycaster.
//!
//! * [`world`]    – tile grid and the built-in maps
//! * [`engine`]   – camera rays, grid DDA, wall-slice projection, minimap
//! * [`renderer`] – draw calls, framebuffer, software compositor
//! * [`sim`]      – player controller, input model, clock, game loop
//! * [`platform`] – keyboard / surface / clock seams and the `minifb` window

pub mod config;
pub mod engine;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;
