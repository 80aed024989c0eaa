//! 2-D vector helpers on top of `glam::DVec2`.
//!
//! The engine works in `f64` tile units.  `glam` already gives us
//! add/sub/scale/component-wise mul, `length`, `normalize`, `distance`
//! and `==`; this module only adds the rotation helpers the player
//! controller needs.

use glam::DVec2;

/// World-space 2-D vector (tile units, y grows *down* the map).
pub type Vector2D = DVec2;

/// Rotation by an angle in radians (standard 2×2 rotation matrix).
///
/// ```text
/// x' = x·cosθ − y·sinθ
/// y' = x·sinθ + y·cosθ
/// ```
pub trait Rotate {
    /// Return a rotated copy.
    fn rotated(self, radians: f64) -> Self;
    /// Rotate in place.
    fn rotate_mut(&mut self, radians: f64);
}

impl Rotate for DVec2 {
    #[inline]
    fn rotated(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        DVec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    fn rotate_mut(&mut self, radians: f64) {
        *self = self.rotated(radians);
    }
}

/// Signed angle (radians, `-π..=π`) that rotates `from` onto `to`.
#[inline]
pub fn signed_angle(from: DVec2, to: DVec2) -> f64 {
    from.perp_dot(to).atan2(from.dot(to))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn rotate_quarter_turn() {
        let v = DVec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!((v - DVec2::new(0.0, 1.0)).length() < EPS);

        let mut w = DVec2::new(0.0, -1.0);
        w.rotate_mut(PI);
        assert!((w - DVec2::new(0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn rotation_keeps_length() {
        let v = DVec2::new(3.0, -4.0);
        for i in 0..32 {
            let r = v.rotated(i as f64 * 0.37);
            assert!((r.length() - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn vector_basics() {
        let a = DVec2::new(1.0, 2.0);
        let b = DVec2::new(4.0, 6.0);
        assert_eq!(a + b, DVec2::new(5.0, 8.0));
        assert_eq!(b - a, DVec2::new(3.0, 4.0));
        assert_eq!(a * 2.0, DVec2::new(2.0, 4.0));
        assert_eq!(a * b, DVec2::new(4.0, 12.0));
        assert_eq!(a.distance(b), 5.0);
        assert!((b.normalize().length() - 1.0).abs() < EPS);
        assert!(DVec2::ZERO.try_normalize().is_none());
    }

    #[test]
    fn signed_angle_sign() {
        let x = DVec2::X;
        assert!((signed_angle(x, DVec2::Y) - FRAC_PI_2).abs() < EPS);
        assert!((signed_angle(DVec2::Y, x) + FRAC_PI_2).abs() < EPS);
    }
}
