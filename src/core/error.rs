//=========================================================================
// Configuration Errors
//=========================================================================
//
// Everything that can be wrong with a game configuration is detected at
// startup, before the first tick. The tick loop itself has no
// recoverable-error paths.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigError =========================================================

/// Startup-time configuration failure.
///
/// Returned by [`GameConfig::validate`](crate::core::config::GameConfig::validate)
/// and by every constructor that takes configuration input. None of these
/// can occur once the simulation is running.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The player animation has no frames.
    #[error("animation frame sequence is empty")]
    EmptyFrameSequence,

    /// `ticks_per_frame` of zero would advance the animation never.
    #[error("animation ticks per frame must be at least 1")]
    ZeroAnimationSpeed,

    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),

    /// The level grid has no rows or no columns.
    #[error("tile grid is empty")]
    EmptyGrid,

    /// A row length differs from the first row.
    #[error("tile grid row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A tile identifier below the empty marker.
    #[error("invalid tile id {id} at row {row}, column {col}")]
    InvalidTileId { row: usize, col: usize, id: i32 },

    #[error("player size must be positive and finite, got {width}x{height}")]
    InvalidPlayerSize { width: f32, height: f32 },

    /// A physics constant is NaN or infinite.
    #[error("physics constant `{name}` must be finite, got {value}")]
    NonFinitePhysics { name: &'static str, value: f32 },

    /// The configuration text could not be parsed.
    #[error("failed to parse game configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

//=========================================================================
// Unit Tests
//=========================================================================
