//! Built-in maps.
//!
//! Maps are literal grids compiled into the binary; there is no map file
//! format.  They are registered by name the first time anyone asks.

use glam::DVec2;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::tilemap::{TileId, TileMap};

/// Map used when the command line does not pick one.
pub const DEFAULT_MAP: &str = "courtyard";

/// A named map plus where the player starts on it.
#[derive(Clone, Debug)]
pub struct MapDef {
    pub name: &'static str,
    pub tiles: TileMap,
    /// Spawn point in tile units.
    pub spawn: DVec2,
    /// Initial facing; need not be normalised.
    pub facing: DVec2,
}

/*──────────────────────────── literal grids ───────────────────────────*/

/// 30×30 yard ringed by green walls, with a small red hut
/// (blue corner posts, doorway on the south side).
#[rustfmt::skip]
const COURTYARD: [[TileId; 30]; 30] = [
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 1, 1, 1, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 1, 0, 1, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
];

/// 11×11 box, red walls, white east wall.
#[rustfmt::skip]
const ROOM: [[TileId; 11]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 4],
];

/// 3×3 cell whose east wall has a hole: rays leaving through it hit nothing.
#[rustfmt::skip]
const BREACH: [[TileId; 3]; 3] = [
    [1, 1, 1],
    [1, 0, 0],
    [1, 1, 1],
];

/*──────────────────────────── registry ────────────────────────────────*/

static MAPS: Lazy<HashMap<&'static str, MapDef>> = Lazy::new(|| {
    [
        MapDef {
            name: "courtyard",
            tiles: TileMap::from_grid(&COURTYARD),
            spawn: DVec2::new(14.5, 20.0),
            facing: DVec2::new(0.0, -1.0),
        },
        MapDef {
            name: "room",
            tiles: TileMap::from_grid(&ROOM),
            spawn: DVec2::new(5.0, 5.0),
            facing: DVec2::X,
        },
        MapDef {
            name: "breach",
            tiles: TileMap::from_grid(&BREACH),
            spawn: DVec2::new(1.5, 1.5),
            facing: DVec2::X,
        },
    ]
    .into_iter()
    .map(|def| (def.name, def))
    .collect()
});

pub fn by_name(name: &str) -> Option<&'static MapDef> {
    MAPS.get(name)
}

/// Registered map names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = MAPS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_all_maps() {
        assert_eq!(names(), vec!["breach", "courtyard", "room"]);
        assert!(by_name(DEFAULT_MAP).is_some());
        assert!(by_name("e1m1").is_none());
    }

    #[test]
    fn spawns_are_on_empty_tiles() {
        for name in names() {
            let def = by_name(name).unwrap();
            let tile = def
                .tiles
                .tile_at(def.spawn.x.floor() as i32, def.spawn.y.floor() as i32)
                .unwrap();
            assert_eq!(tile, 0, "spawn of `{name}` is inside a wall");
        }
    }

    #[test]
    fn courtyard_layout() {
        let map = &by_name("courtyard").unwrap().tiles;
        assert_eq!((map.width(), map.height()), (30, 30));
        assert_eq!(map.tile_at(0, 0), Ok(2));
        assert_eq!(map.tile_at(11, 8), Ok(3));
        assert_eq!(map.tile_at(12, 8), Ok(1));
        // doorway
        assert_eq!(map.tile_at(14, 12), Ok(0));
    }
}
