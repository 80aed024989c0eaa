// Tile id → wall colour.  Flat shading only: one colour per id, halved on
// Y-side hits so N/S faces read darker than E/W faces.

use std::ops::Index;

use super::Color;
use crate::{engine::Side, world::TileId};

/// Colour used for ids with no palette entry.
pub const FALLBACK: Color = Color::MAGENTA;

/// Fixed wall palette; entry `0` is never used (empty tile).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(pub Vec<Color>);

impl Default for Palette {
    fn default() -> Self {
        Palette(vec![
            FALLBACK,
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::WHITE,
        ])
    }
}

impl Index<TileId> for Palette {
    type Output = Color;
    fn index(&self, id: TileId) -> &Color {
        match id {
            0 => &FALLBACK,
            _ => self.0.get(id as usize).unwrap_or(&FALLBACK),
        }
    }
}

impl Palette {
    /// Unshaded colour of a wall id.
    #[inline]
    pub fn base(&self, id: TileId) -> Color {
        self[id]
    }

    /// Colour of a wall face as seen from `side`.
    #[inline]
    pub fn wall_color(&self, id: TileId, side: Side) -> Color {
        match side {
            Side::X => self.base(id),
            Side::Y => self.base(id).shaded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids() {
        let pal = Palette::default();
        assert_eq!(pal.base(1), Color::RED);
        assert_eq!(pal.base(2), Color::GREEN);
        assert_eq!(pal.base(3), Color::BLUE);
        assert_eq!(pal.base(4), Color::WHITE);
    }

    #[test]
    fn unknown_ids_fall_back() {
        let pal = Palette::default();
        assert_eq!(pal.base(0), FALLBACK);
        assert_eq!(pal.base(5), FALLBACK);
        assert_eq!(pal.base(TileId::MAX), FALLBACK);
    }

    #[test]
    fn y_side_is_exact_half() {
        let pal = Palette::default();
        for id in 0..=8 {
            let x = pal.wall_color(id, Side::X);
            let y = pal.wall_color(id, Side::Y);
            assert_eq!(x, pal.wall_color(id, Side::X));
            assert_eq!((y.r, y.g, y.b), (x.r / 2, x.g / 2, x.b / 2));
            assert_eq!(y.a, x.a);
        }
    }
}
