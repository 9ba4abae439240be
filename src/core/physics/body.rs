//=========================================================================
// Player Body
//=========================================================================

use glam::Vec2;

use crate::core::config::PlayerConfig;
use crate::core::world::Rect;

//=== Facing ==============================================================

/// Horizontal orientation of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

//=== PlayerBody ==========================================================

/// The single dynamic body in the simulation.
///
/// `position` is the top-left corner of the bounding box. The size is
/// fixed at construction. `on_ground` reflects the most recent collision
/// resolution only; it is recomputed every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
    size: Vec2,
}

impl PlayerBody {
    /// Creates a body at rest, airborne, facing right.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            on_ground: false,
            facing: Facing::Right,
            size,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(config.spawn, config.size)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Bounding box at the current position.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
