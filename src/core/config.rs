//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunable constants for physics, the player body, animation cadence and
// the level layout. Defaults reproduce the "Green Zone" reference game.
//
// Configuration is validated once at startup; a config that passes
// `validate()` can never put the tick loop into a degenerate state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeSet;

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::ConfigError;
use super::world::{TileId, EMPTY_TILE};

//=== PhysicsConfig =======================================================

/// Per-tick motion constants.
///
/// All values are in world units per tick; there is no variable timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every tick.
    pub gravity: f32,

    /// Horizontal speed while a move button is held.
    pub move_speed: f32,

    /// Vertical velocity set on jump. Negative is up.
    pub jump_power: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            move_speed: 5.0,
            jump_power: -15.0,
        }
    }
}

//=== PlayerConfig ========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial top-left corner of the bounding box.
    pub spawn: Vec2,

    /// Bounding box width and height, fixed for the run.
    pub size: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(200.0, 100.0),
            size: Vec2::new(48.0, 48.0),
        }
    }
}

//=== AnimationConfig =====================================================

/// Player animation cadence.
///
/// `frame_count` is the length of the frame sequence supplied by the
/// asset loader; the core only ever sees indices into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frame_count: usize,

    /// Ticks spent on each frame before advancing.
    pub ticks_per_frame: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 4,
            ticks_per_frame: 10,
        }
    }
}

//=== LevelConfig =========================================================

/// Tile grid, the set of solid tile identifiers, and the tile side length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub tile_size: f32,
    pub solid_tiles: BTreeSet<TileId>,

    /// Row-major grid of tile identifiers. `EMPTY_TILE` marks a blank cell.
    pub grid: Vec<Vec<TileId>>,
}

impl LevelConfig {
    /// The reference "Green Zone" level: an empty sky row, six rows of
    /// decorative tileset cells (some of them solid) and a three-row floor.
    pub fn green_zone() -> Self {
        const COLUMNS: i32 = 16;

        let mut grid = Vec::with_capacity(10);
        grid.push(vec![EMPTY_TILE; COLUMNS as usize]);
        for row in 0..6 {
            grid.push((0..COLUMNS).map(|col| row * COLUMNS + col).collect());
        }
        for _ in 0..3 {
            grid.push(vec![1; COLUMNS as usize]);
        }

        Self {
            tile_size: 32.0,
            solid_tiles: [0, 1, 2, 3, 5].into_iter().collect(),
            grid,
        }
    }

    /// Checks grid shape, tile identifiers and tile size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }

        let expected = match self.grid.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ConfigError::EmptyGrid),
        };

        for (row, cells) in self.grid.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigError::RaggedGrid {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some((col, &id)) = cells.iter().enumerate().find(|(_, &id)| id < EMPTY_TILE) {
                return Err(ConfigError::InvalidTileId { row, col, id });
            }
        }

        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::green_zone()
    }
}

//=== GameConfig ==========================================================

/// Complete configuration for one run of the simulation.
///
/// # Examples
///
/// ```
/// use verdant::core::config::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "physics": { "gravity": 0.5 } }"#).unwrap();
/// assert_eq!(config.physics.gravity, 0.5);
/// assert_eq!(config.physics.move_speed, 5.0); // unspecified keys keep defaults
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub animation: AnimationConfig,
    pub level: LevelConfig,
}

impl GameConfig {
    /// Parses a JSON configuration and validates it.
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        debug!("Parsed game configuration ({} level rows)", config.level.grid.len());
        Ok(config)
    }

    /// Rejects any configuration that would make the tick loop ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = [
            ("gravity", self.physics.gravity),
            ("move_speed", self.physics.move_speed),
            ("jump_power", self.physics.jump_power),
        ];
        if let Some(&(name, value)) = physics.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinitePhysics { name, value });
        }

        let size = self.player.size;
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::InvalidPlayerSize {
                width: size.x,
                height: size.y,
            });
        }

        if self.animation.frame_count == 0 {
            return Err(ConfigError::EmptyFrameSequence);
        }
        if self.animation.ticks_per_frame == 0 {
            return Err(ConfigError::ZeroAnimationSpeed);
        }

        self.level.validate()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
