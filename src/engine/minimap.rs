//! Top-down overlay: wall tiles, the player and the rays of the last pass.

use crate::{
    engine::raycaster::ColumnCast,
    renderer::{Color, DrawCall},
    sim::Player,
    world::TileMap,
};

/// Overlay layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minimap {
    /// Pixels per tile.
    pub scale: i32,
    /// Draw every n-th column's ray.
    pub ray_stride: usize,
    pub wall: Color,
    pub ray: Color,
    pub player: Color,
}

impl Default for Minimap {
    fn default() -> Self {
        Self {
            scale: 8,
            ray_stride: 8,
            wall: Color::WHITE,
            ray: Color::MAGENTA,
            player: Color::CYAN,
        }
    }
}

impl Minimap {
    /// Append the overlay's draw calls (drawn after the walls).
    pub fn build(
        &self,
        map: &TileMap,
        player: &Player,
        columns: &[ColumnCast],
        calls: &mut Vec<DrawCall>,
    ) {
        let s = self.scale;
        let to_px = |v: f64| (v * s as f64).floor() as i32;

        /* rays first so walls and player stay readable on top */
        let origin = player.position();
        for (ray, result) in columns.iter().step_by(self.ray_stride.max(1)) {
            let Ok(hit) = result else { continue };
            let end = hit.point(ray);
            calls.push(DrawCall::Line {
                x0: to_px(origin.x),
                y0: to_px(origin.y),
                x1: to_px(end.x),
                y1: to_px(end.y),
                color: self.ray,
            });
        }

        for (x, y, _) in map.walls() {
            calls.push(DrawCall::Rect {
                x: x as i32 * s,
                y: y as i32 * s,
                w: s,
                h: s,
                color: self.wall,
            });
        }

        let marker = (s / 2).max(1);
        calls.push(DrawCall::Rect {
            x: to_px(origin.x).saturating_sub(marker / 2),
            y: to_px(origin.y).saturating_sub(marker / 2),
            w: marker,
            h: marker,
            color: self.player,
        });
    }
}
