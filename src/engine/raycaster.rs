use crate::{
    engine::{
        projection::{column_ray_dir, project_slice},
        raycast::{CastError, Hit, Ray, cast_ray},
    },
    renderer::{DrawCall, Palette},
    sim::Player,
    world::TileMap,
};

/// Result of one column: the ray that was cast and what it ran into.
pub type ColumnCast = (Ray, Result<Hit, CastError>);

/// Turns player + map into one wall slice per screen column.
///
/// Keeps the last frame's per-column results so overlays (the minimap)
/// can draw the rays without casting them again.
#[derive(Default)]
pub struct Raycaster {
    palette: Palette,
    columns: Vec<ColumnCast>,
}

impl Raycaster {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            columns: Vec::new(),
        }
    }

    /// Per-column results of the last [`Raycaster::build_frame`].
    #[inline]
    pub fn columns(&self) -> &[ColumnCast] {
        &self.columns
    }

    /// Ray for screen column `x` of a `width`-wide view.
    pub fn column_ray(player: &Player, x: usize, width: usize) -> Ray {
        Ray {
            origin: player.position(),
            dir: column_ray_dir(player.direction(), player.plane(), x, width),
        }
    }

    pub fn cast_column(
        &self,
        map: &TileMap,
        player: &Player,
        x: usize,
        width: usize,
    ) -> Result<Hit, CastError> {
        cast_ray(map, &Self::column_ray(player, x, width))
    }

    /// Cast every column and push a [`DrawCall::Slice`] for each hit.
    ///
    /// Columns whose ray misses leave the background untouched.
    pub fn build_frame(
        &mut self,
        map: &TileMap,
        player: &Player,
        width: usize,
        height: usize,
        calls: &mut Vec<DrawCall>,
    ) {
        self.columns.clear();
        self.columns.reserve(width);
        let mut misses = 0usize;

        for x in 0..width {
            let ray = Self::column_ray(player, x, width);
            let result = cast_ray(map, &ray);
            match &result {
                Ok(hit) => {
                    let color = self.palette.wall_color(hit.tile_id, hit.side);
                    calls.push(DrawCall::Slice(project_slice(
                        x,
                        hit.perp_dist,
                        height,
                        color,
                    )));
                }
                Err(_) => misses += 1,
            }
            self.columns.push((ray, result));
        }

        if misses > 0 {
            log::trace!("{misses}/{width} columns hit no wall");
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::Side,
        renderer::{Color, RendererExt, Software, WallSlice},
        world::maps,
    };
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    const W: usize = 64;
    const H: usize = 48;

    fn slices(calls: &[DrawCall]) -> Vec<WallSlice> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Slice(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    fn room_player() -> (&'static TileMap, Player) {
        let def = maps::by_name("room").unwrap();
        (&def.tiles, Player::new(def.spawn, def.facing, FRAC_PI_2))
    }

    #[test]
    fn straight_ahead_column_distance() {
        let (map, player) = room_player();
        let rc = Raycaster::default();
        let hit = rc.cast_column(map, &player, W / 2, W).unwrap();
        assert_eq!(hit.perp_dist, 5.0);
        assert_eq!(hit.side, Side::X);
    }

    #[test]
    fn every_column_in_a_closed_room_gets_a_slice() {
        let (map, player) = room_player();
        let mut rc = Raycaster::default();
        let mut calls = Vec::new();
        rc.build_frame(map, &player, W, H, &mut calls);

        let s = slices(&calls);
        assert_eq!(s.len(), W);
        assert_eq!(rc.columns().len(), W);
        for (x, slice) in s.iter().enumerate() {
            assert_eq!(slice.x, x);
            assert!(slice.draw_start <= slice.draw_end);
            assert!(slice.draw_end <= H);
        }
    }

    #[test]
    fn slice_bounds_hold_while_turning_and_walking() {
        let def = maps::by_name("courtyard").unwrap();
        let mut player = Player::new(def.spawn, def.facing, FRAC_PI_2);
        let mut rc = Raycaster::default();
        let mut calls = Vec::new();
        for step in 0..40 {
            player.apply_rotation(0.37);
            player.apply_movement(1.0, 0.3, 0.4, 1.0);
            calls.clear();
            rc.build_frame(&def.tiles, &player, W, H, &mut calls);
            for s in slices(&calls) {
                assert!(s.draw_start <= s.draw_end, "step {step}");
                assert!(s.draw_end < H, "step {step}");
            }
        }
    }

    #[test]
    fn y_side_slices_are_half_bright() {
        let (map, _) = room_player();
        // facing south: centre column hits the bottom wall on a Y side
        let player = Player::new(DVec2::new(5.0, 5.0), DVec2::Y, FRAC_PI_2);
        let mut rc = Raycaster::default();
        let mut calls = Vec::new();
        rc.build_frame(map, &player, W, H, &mut calls);
        let centre = slices(&calls)[W / 2];
        assert_eq!(centre.color, Color::RED.shaded());
    }

    #[test]
    fn gap_columns_draw_nothing() {
        let def = maps::by_name("breach").unwrap();
        let player = Player::new(def.spawn, def.facing, FRAC_PI_2);
        let mut rc = Raycaster::default();
        let mut calls = Vec::new();
        rc.build_frame(&def.tiles, &player, W, H, &mut calls);

        let centre = &rc.columns()[W / 2];
        assert!(matches!(centre.1, Err(CastError::NoWallHit { .. })));
        assert!(slices(&calls).iter().all(|s| s.x != W / 2));
        assert!(slices(&calls).len() < W);
    }

    #[test]
    fn raycast_pass_is_idempotent() {
        let def = maps::by_name("courtyard").unwrap();
        let mut player = Player::new(def.spawn, def.facing, FRAC_PI_2);
        player.apply_rotation(0.42);
        let mut rc = Raycaster::default();
        let mut sw = Software::default();

        let mut frames = Vec::new();
        for _ in 0..2 {
            let mut calls = Vec::new();
            rc.build_frame(&def.tiles, &player, W, H, &mut calls);
            sw.draw_frame(W, H, &calls, |fb, _, _| frames.push(fb.to_vec()));
        }
        assert_eq!(frames[0], frames[1]);
    }
}
