use glam::DVec2;

use crate::renderer::{Color, WallSlice};

/// Column `x` of a `width`-wide screen mapped onto the camera plane, `[-1, 1)`.
#[inline]
pub fn camera_x(x: usize, width: usize) -> f64 {
    2.0 * x as f64 / width as f64 - 1.0
}

/// Ray direction for one screen column.
#[inline]
pub fn column_ray_dir(dir: DVec2, plane: DVec2, x: usize, width: usize) -> DVec2 {
    dir + plane * camera_x(x, width)
}

/// On-screen wall height for a perpendicular distance.
///
/// Inverse relationship: closer walls are taller.  A zero distance (camera
/// inside a wall) saturates instead of dividing by zero.
#[inline]
pub fn line_height(perp_dist: f64, height: usize) -> i64 {
    if perp_dist <= 0.0 {
        return i64::MAX;
    }
    // `as` saturates for huge quotients
    (height as f64 / perp_dist).floor() as i64
}

/// Vertical extent of a wall slice, both ends clamped to `[0, height)`.
///
/// Guarantees `0 <= start <= end < height` for any non-zero `height`.
pub fn slice_span(perp_dist: f64, height: usize) -> (usize, usize) {
    let h = height as i64;
    let half_line = line_height(perp_dist, height) / 2;
    let bottom = (h - 1).max(0);
    let start = (h / 2).saturating_sub(half_line).clamp(0, bottom);
    let end = (h / 2).saturating_add(half_line).clamp(0, bottom);
    (start as usize, end as usize)
}

/// Build the slice for column `x`.
pub fn project_slice(x: usize, perp_dist: f64, height: usize, color: Color) -> WallSlice {
    let (draw_start, draw_end) = slice_span(perp_dist, height);
    WallSlice {
        x,
        draw_start,
        draw_end,
        color,
    }
}
