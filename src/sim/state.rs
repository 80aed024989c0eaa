use super::Player;
use crate::{
    config::{Config, ConfigError},
    world::{TileMap, maps},
};

/// Everything the simulation mutates, owned by the game loop and lent to
/// the player controller and the raycaster.  There are no globals.
#[derive(Clone, Debug)]
pub struct SimState {
    pub map: TileMap,
    pub player: Player,
    pub show_minimap: bool,
}

impl SimState {
    pub fn new(map: TileMap, player: Player, show_minimap: bool) -> Self {
        Self {
            map,
            player,
            show_minimap,
        }
    }

    /// Map + spawn selected by `cfg`.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let def = maps::by_name(&cfg.map).ok_or_else(|| ConfigError::UnknownMap(cfg.map.clone()))?;
        Ok(Self::new(
            def.tiles.clone(),
            Player::new(def.spawn, def.facing, cfg.fov()),
            cfg.minimap,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn spawns_from_map_definition() {
        let cfg = Config {
            map: "room".into(),
            minimap: false,
            ..Default::default()
        };
        let state = SimState::from_config(&cfg).unwrap();
        assert_eq!(state.player.position(), DVec2::new(5.0, 5.0));
        assert_eq!(state.player.direction(), DVec2::X);
        assert_eq!(state.map.width(), 11);
        assert!(!state.show_minimap);
    }

    #[test]
    fn unknown_map_is_reported() {
        let cfg = Config {
            map: "nowhere".into(),
            ..Default::default()
        };
        assert_eq!(
            SimState::from_config(&cfg).unwrap_err(),
            ConfigError::UnknownMap("nowhere".into())
        );
    }
}
