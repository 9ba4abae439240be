//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use verdant::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::PlatformError;

// Configuration and errors
pub use crate::core::config::{AnimationConfig, GameConfig, LevelConfig, PhysicsConfig, PlayerConfig};
pub use crate::core::error::ConfigError;

// Input
pub use crate::core::input::{Button, InputSource, Intent, KeyBindings, KeyCode, MoveDir};

// Simulation
pub use crate::core::physics::{Facing, PlayerBody};
pub use crate::core::render::{RenderSnapshot, Renderer, TraceRenderer};
pub use crate::core::simulation::{LoopState, SimulationContext, SimulationLoop};
pub use crate::core::world::{Rect, SolidRect, TileId, TileMap};
