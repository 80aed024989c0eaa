use glam::DVec2;

use super::input::InputCmd;
use crate::{
    math::{Rotate, signed_angle},
    world::TileMap,
};

/// Narrowest / widest horizontal FoV the camera plane may encode.
pub const MIN_FOV: f64 = 10.0 * (std::f64::consts::PI / 180.0);
pub const MAX_FOV: f64 = 170.0 * (std::f64::consts::PI / 180.0);

/// Movement rates, all per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Tiles per second.
    pub move_speed: f64,
    /// Radians per second.
    pub turn_speed: f64,
    /// Plane scale factor per second of held zoom (> 1).
    pub zoom_rate: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            turn_speed: std::f64::consts::PI,
            zoom_rate: 2.0,
        }
    }
}

/// Player view-point on the tile grid.
///
/// * `dir` is unit length.
/// * `plane` is perpendicular to `dir`; `|plane| = tan(fov / 2)`.
/// * Map y grows downwards, so `dir.perp()` points to the screen's right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pos: DVec2,
    dir: DVec2,
    plane: DVec2,
}

impl Player {
    /// `facing` is normalised; a zero vector falls back to +X.
    pub fn new(pos: DVec2, facing: DVec2, fov: f64) -> Self {
        let dir = facing.try_normalize().unwrap_or(DVec2::X);
        let fov = fov.clamp(MIN_FOV, MAX_FOV);
        Self {
            pos,
            dir,
            plane: dir.perp() * (fov * 0.5).tan(),
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.dir
    }

    #[inline]
    pub fn plane(&self) -> DVec2 {
        self.plane
    }

    /// Unit vector to the screen's right.
    #[inline]
    pub fn right(&self) -> DVec2 {
        self.dir.perp()
    }

    /// Heading as a scalar angle (radians, atan2 convention).
    #[inline]
    pub fn direction_angle(&self) -> f64 {
        self.dir.y.atan2(self.dir.x)
    }

    /// Current horizontal field of view in radians.
    #[inline]
    pub fn fov(&self) -> f64 {
        2.0 * (self.plane.length() / self.dir.length()).atan()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// `position += (dir·forward + right·strafe) · speed · dt`.
    ///
    /// No collision: the position may end up inside a wall tile.
    pub fn apply_movement(&mut self, forward: f64, strafe: f64, speed: f64, dt: f64) {
        self.pos += (self.dir * forward + self.right() * strafe) * speed * dt;
    }

    /// Rotate direction and plane together (positive = clockwise on screen).
    pub fn apply_rotation(&mut self, angle: f64) {
        self.dir.rotate_mut(angle);
        self.plane.rotate_mut(angle);
    }

    /// Scale the camera plane (< 1 narrows, > 1 widens the FoV).
    ///
    /// The resulting FoV is clamped to `MIN_FOV ..= MAX_FOV`.
    pub fn scale_fov(&mut self, factor: f64) {
        let wanted = 2.0 * (self.plane.length() * factor).atan();
        let fov = if wanted.is_nan() {
            self.fov()
        } else {
            wanted.clamp(MIN_FOV, MAX_FOV)
        };
        self.plane = self.right() * (fov * 0.5).tan();
    }

    /// Integrate one frame of input.
    pub fn update(&mut self, cmd: &InputCmd, tuning: &Tuning, dt: f64) {
        if cmd.turn != 0.0 {
            self.apply_rotation(cmd.turn * tuning.turn_speed * dt);
        }
        if cmd.forward != 0.0 || cmd.strafe != 0.0 {
            self.apply_movement(cmd.forward, cmd.strafe, tuning.move_speed, dt);
        }
        if cmd.zoom != 0.0 {
            self.scale_fov(tuning.zoom_rate.powf(cmd.zoom * dt));
        }
    }

    /// Would standing at `target` put the player inside a wall (or off the
    /// map)?  Not consulted by [`Player::update`]; a collision layer would
    /// call this before committing a move.
    pub fn would_collide(map: &TileMap, target: DVec2) -> bool {
        let t = target.floor();
        map.is_wall(t.x as i32, t.y as i32).unwrap_or(true)
    }

    /// Angle between direction and plane; stays ±90° under rotation.
    #[inline]
    pub fn plane_angle(&self) -> f64 {
        signed_angle(self.dir, self.plane)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::maps;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn classic() -> Player {
        // original demo: facing north, plane (1, 0) → 90° FoV
        Player::new(DVec2::new(14.5, 20.0), DVec2::new(0.0, -1.0), FRAC_PI_2)
    }

    #[test]
    fn plane_encodes_fov() {
        let p = classic();
        assert!((p.plane() - DVec2::new(1.0, 0.0)).length() < EPS);
        assert!((p.fov() - FRAC_PI_2).abs() < EPS);
        assert!((p.direction().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_facing_falls_back_to_east() {
        let p = Player::new(DVec2::ZERO, DVec2::ZERO, FRAC_PI_2);
        assert_eq!(p.direction(), DVec2::X);
        assert!(p.plane().length() > 0.0);
    }

    #[test]
    fn rotation_preserves_fov_and_orthogonality() {
        let mut p = classic();
        let fov0 = p.fov();
        let angles = [0.1, -2.3, 0.017, PI, 1e-6, -0.75, 5.5, 0.3];
        for _ in 0..250 {
            for a in angles {
                p.apply_rotation(a);
            }
        }
        assert!((p.fov() - fov0).abs() < 1e-9);
        assert!((p.plane_angle() - FRAC_PI_2).abs() < 1e-9);
        assert!(p.direction().dot(p.plane()).abs() < 1e-9);
    }

    #[test]
    fn movement_follows_direction() {
        let mut p = classic();
        p.apply_movement(1.0, 0.0, 2.0, 0.5);
        assert!((p.position() - DVec2::new(14.5, 19.0)).length() < EPS);

        // facing north, +strafe goes east (right on screen)
        p.apply_movement(0.0, 1.0, 1.0, 1.0);
        assert!((p.position() - DVec2::new(15.5, 19.0)).length() < EPS);
    }

    #[test]
    fn quarter_turn_right_faces_east() {
        let mut p = classic();
        p.apply_rotation(FRAC_PI_2);
        assert!((p.direction() - DVec2::X).length() < EPS);
        assert!((p.direction_angle() - 0.0).abs() < EPS);
    }

    #[test]
    fn fov_scaling_is_clamped() {
        let mut p = classic();
        p.scale_fov(0.9);
        assert!(p.fov() < FRAC_PI_2);
        for _ in 0..1000 {
            p.scale_fov(0.5);
        }
        assert!((p.fov() - MIN_FOV).abs() < EPS);
        for _ in 0..1000 {
            p.scale_fov(3.0);
        }
        assert!((p.fov() - MAX_FOV).abs() < EPS);
        assert!(p.plane().length() > 0.0);
        assert!(p.direction().dot(p.plane()).abs() < EPS);
    }

    #[test]
    fn update_integrates_input() {
        let mut p = classic();
        let tuning = Tuning::default();
        let cmd = InputCmd {
            forward: 1.0,
            ..Default::default()
        };
        p.update(&cmd, &tuning, 0.5);
        assert!((p.position().y - 18.5).abs() < EPS);

        let zoom = InputCmd {
            zoom: 1.0,
            ..Default::default()
        };
        let before = p.plane().length();
        p.update(&zoom, &tuning, 1.0);
        assert!((p.plane().length() - before * 2.0).abs() < 1e-9);

        let still = p;
        p.update(&InputCmd::default(), &tuning, 1.0);
        assert_eq!(p, still);
    }

    #[test]
    fn collision_probe() {
        let map = &maps::by_name("room").unwrap().tiles;
        assert!(!Player::would_collide(map, DVec2::new(5.0, 5.0)));
        assert!(Player::would_collide(map, DVec2::new(10.2, 5.0)));
        assert!(Player::would_collide(map, DVec2::new(-4.0, 5.0)));
    }
}
