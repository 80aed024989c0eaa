// Flat, row-major grid of tile ids.
// The raycaster and the minimap talk to the grid only through `TileMap`.

/// Tile id: `0` = empty floor, anything else = wall colour variant.
pub type TileId = u16;

/// Passable tile.
pub const EMPTY: TileId = 0;

/// Things that can go wrong when building or querying a map.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TileError {
    /// Requested tile lies outside `0..width × 0..height`.
    #[error("tile ({x}, {y}) outside {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Width or height is zero.
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: usize, height: usize },

    /// `tiles.len()` does not equal `width * height`.
    #[error("expected {expected} tiles, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A literal row has a different length than the first one.
    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Immutable tile grid.
///
/// * Dimensions are fixed at construction.
/// * Every query is bounds-checked; nothing ever reads past the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<TileId>,
}

impl TileMap {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    pub fn new(width: usize, height: usize, tiles: Vec<TileId>) -> Result<Self, TileError> {
        if width == 0 || height == 0 {
            return Err(TileError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if tiles.len() != expected {
            return Err(TileError::SizeMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build from a compile-time grid; the shape is checked by the compiler.
    pub fn from_grid<const W: usize, const H: usize>(grid: &[[TileId; W]; H]) -> Self {
        const { assert!(W > 0 && H > 0, "map grid must not be empty") };
        Self {
            width: W,
            height: H,
            tiles: grid.iter().flatten().copied().collect(),
        }
    }

    /// Build from a literal grid, one slice per row (top row first).
    pub fn from_rows<R: AsRef<[TileId]>>(rows: &[R]) -> Result<Self, TileError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(TileError::RaggedRow {
                    row,
                    len: r.len(),
                    expected: width,
                });
            }
            tiles.extend_from_slice(r);
        }
        Self::new(width, rows.len(), tiles)
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Non-failing lookup: `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<TileId> {
        if self.contains(x, y) {
            Some(self.tiles[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Bounds-checked lookup.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<TileId, TileError> {
        self.get(x, y).ok_or(TileError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn is_wall(&self, x: i32, y: i32) -> Result<bool, TileError> {
        Ok(self.tile_at(x, y)? > EMPTY)
    }

    /// All wall tiles as `(x, y, id)`, row-major.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        let w = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t > EMPTY)
            .map(move |(i, t)| (i % w, i / w, *t))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn ring3() -> TileMap {
        TileMap::from_rows(&[[1, 1, 1], [1, 0, 2], [1, 1, 1]]).unwrap()
    }

    #[test]
    fn lookup_inside() {
        let map = ring3();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert_eq!(map.tile_at(1, 1), Ok(0));
        assert_eq!(map.tile_at(2, 1), Ok(2));
        assert_eq!(map.is_wall(0, 0), Ok(true));
        assert_eq!(map.is_wall(1, 1), Ok(false));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let map = ring3();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert_eq!(
                map.tile_at(x, y),
                Err(TileError::OutOfBounds {
                    x,
                    y,
                    width: 3,
                    height: 3
                })
            );
            assert!(map.get(x, y).is_none());
            assert!(map.is_wall(x, y).is_err());
        }
    }

    #[test]
    fn construction_guards() {
        assert_eq!(
            TileMap::new(0, 4, vec![]).unwrap_err(),
            TileError::EmptyDimensions {
                width: 0,
                height: 4
            }
        );
        assert_eq!(
            TileMap::new(2, 2, vec![0; 3]).unwrap_err(),
            TileError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
        let ragged: [&[TileId]; 2] = [&[1, 1], &[1]];
        assert_eq!(
            TileMap::from_rows(&ragged).unwrap_err(),
            TileError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
        let none: [&[TileId]; 0] = [];
        assert!(TileMap::from_rows(&none).is_err());
    }

    #[test]
    fn walls_iterator_skips_empty() {
        let map = ring3();
        let walls: Vec<_> = map.walls().collect();
        assert_eq!(walls.len(), 8);
        assert!(walls.contains(&(2, 1, 2)));
        assert!(!walls.iter().any(|&(x, y, _)| x == 1 && y == 1));
    }
}
