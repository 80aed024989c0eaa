//! Raycasting core: per-column rays, grid DDA, projection to wall slices
//! and the minimap overlay built from the same casts.

pub mod minimap;
pub mod projection;
pub mod raycast;
mod raycaster;

pub use minimap::Minimap;
pub use raycast::{CastError, Hit, Ray, Side, cast_ray};
pub use raycaster::{ColumnCast, Raycaster};
