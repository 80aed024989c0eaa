pub mod maps;
mod tilemap;

pub use maps::{DEFAULT_MAP, MapDef};
pub use tilemap::{EMPTY, TileError, TileId, TileMap};
