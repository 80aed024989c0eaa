//! Grid DDA: walk a ray tile-by-tile until it enters a wall.
//!
//! ```text
//! deltaDist = distance along the ray between two successive grid lines
//! sideDist  = distance along the ray to the *next* grid line
//! ```
//!
//! Each iteration advances whichever axis has the smaller `sideDist`, so
//! every tile the ray touches is visited exactly once.  The returned
//! distance is projected onto the view direction (no fish-eye).

use glam::{DVec2, IVec2};
use thiserror::Error;

use crate::world::{TileId, TileMap};

/// Which family of grid lines the ray crossed last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical grid line (east/west face).
    X,
    /// Crossed a horizontal grid line (north/south face).
    Y,
}

/// One camera ray.  `dir` is *not* normalised: its length is what makes
/// `perp_dist` come out perpendicular to the camera plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec2,
    pub dir: DVec2,
}

/// First wall a ray runs into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub tile: IVec2,
    pub tile_id: TileId,
    pub side: Side,
    /// Distance to the wall measured along the view direction.
    pub perp_dist: f64,
}

impl Hit {
    /// World-space point where the ray meets the wall face.
    #[inline]
    pub fn point(&self, ray: &Ray) -> DVec2 {
        ray.origin + ray.dir * self.perp_dist
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CastError {
    /// Both ray components are zero: there is nothing to traverse.
    #[error("degenerate ray: zero direction vector")]
    DegenerateRay,

    /// The ray left the map (or started outside it) without touching a wall.
    #[error("ray left the map at tile ({exit_x}, {exit_y}) without hitting a wall")]
    NoWallHit { exit_x: i32, exit_y: i32 },
}

/// Per-axis traversal state.
#[derive(Copy, Clone, Debug)]
struct Axis {
    step: i32,
    delta: f64,
    side: f64,
}

impl Axis {
    /// `d` / `other` are this and the other ray component, `pos` the origin
    /// on this axis, `cell` the tile index containing it.
    fn new(d: f64, other: f64, pos: f64, cell: i32) -> Self {
        let step = if d < 0.0 { -1 } else { 1 };
        if d == 0.0 {
            // parallel to this family of grid lines: never crosses one
            return Self {
                step,
                delta: f64::INFINITY,
                side: f64::INFINITY,
            };
        }
        let delta = (1.0 + (other / d) * (other / d)).sqrt();
        let frac = if d < 0.0 {
            pos - cell as f64
        } else {
            cell as f64 + 1.0 - pos
        };
        // on a grid line with an overflowed delta: the crossing is right here
        let side = if frac == 0.0 { 0.0 } else { frac * delta };
        Self { step, delta, side }
    }
}

/// Cast `ray` through `map`.
///
/// * Starting inside a wall reports that wall at distance `0`.
/// * Starting outside the map, or leaving it, yields [`CastError::NoWallHit`].
/// * The loop is bounded: each step moves one tile along a monotone axis,
///   so it runs at most `width + height` times before leaving the grid.
pub fn cast_ray(map: &TileMap, ray: &Ray) -> Result<Hit, CastError> {
    let dir = ray.dir;
    if dir.x == 0.0 && dir.y == 0.0 {
        return Err(CastError::DegenerateRay);
    }

    let mut tile = ray.origin.floor().as_ivec2();
    match map.get(tile.x, tile.y) {
        None => {
            return Err(CastError::NoWallHit {
                exit_x: tile.x,
                exit_y: tile.y,
            });
        }
        Some(id) if id > 0 => {
            let side = if dir.x.abs() >= dir.y.abs() {
                Side::X
            } else {
                Side::Y
            };
            return Ok(Hit {
                tile,
                tile_id: id,
                side,
                perp_dist: 0.0,
            });
        }
        Some(_) => {}
    }

    let mut ax = Axis::new(dir.x, dir.y, ray.origin.x, tile.x);
    let mut ay = Axis::new(dir.y, dir.x, ray.origin.y, tile.y);

    let max_steps = map.width() + map.height();
    for _ in 0..=max_steps {
        let side = if ax.side < ay.side {
            ax.side += ax.delta;
            tile.x += ax.step;
            Side::X
        } else {
            ay.side += ay.delta;
            tile.y += ay.step;
            Side::Y
        };

        match map.get(tile.x, tile.y) {
            None => {
                return Err(CastError::NoWallHit {
                    exit_x: tile.x,
                    exit_y: tile.y,
                });
            }
            Some(0) => continue,
            Some(id) => {
                let perp_dist = match side {
                    Side::X => {
                        (tile.x as f64 - ray.origin.x + (1 - ax.step) as f64 / 2.0) / dir.x
                    }
                    Side::Y => {
                        (tile.y as f64 - ray.origin.y + (1 - ay.step) as f64 / 2.0) / dir.y
                    }
                }
                .abs();
                return Ok(Hit {
                    tile,
                    tile_id: id,
                    side,
                    perp_dist,
                });
            }
        }
    }

    // unreachable for a well-formed grid; report where we stopped
    Err(CastError::NoWallHit {
        exit_x: tile.x,
        exit_y: tile.y,
    })
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
