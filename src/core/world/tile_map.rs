//=========================================================================
// Tile Map
//=========================================================================
//
// Immutable grid of tile identifiers plus the solid collision rectangles
// derived from it.
//
// Architecture:
//   LevelConfig ──validate()──> TileMap::new() ──derive──> Vec<SolidRect>
//
// Rectangles are derived exactly once, in row-major order, when the map is
// built. The grid never changes afterwards, so neither do the rectangles.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeSet;

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use super::rect::Rect;
use crate::core::config::LevelConfig;
use crate::core::error::ConfigError;

//=== Tile Identifiers ====================================================

/// Index into the tileset, or [`EMPTY_TILE`].
pub type TileId = i32;

/// Blank cell: not drawn, never solid.
pub const EMPTY_TILE: TileId = -1;

//=== SolidRect ===========================================================

/// Collision boundary of one solid grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidRect {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

//=== TileMap =============================================================

/// Level grid with its derived solid rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    grid: Vec<Vec<TileId>>,
    tile_size: f32,
    solid_tiles: BTreeSet<TileId>,
    solid_rects: Vec<SolidRect>,
}

impl TileMap {
    /// Validates the level and derives its solid rectangles.
    pub fn new(level: &LevelConfig) -> Result<Self, ConfigError> {
        level.validate()?;

        let solid_rects = derive_solid_rects(&level.grid, &level.solid_tiles, level.tile_size);
        debug!(
            "Tile map built: {}x{} cells, {} solid",
            level.grid.len(),
            level.grid[0].len(),
            solid_rects.len()
        );

        Ok(Self {
            grid: level.grid.clone(),
            tile_size: level.tile_size,
            solid_tiles: level.solid_tiles.clone(),
            solid_rects,
        })
    }

    //--- Queries ----------------------------------------------------------

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn columns(&self) -> usize {
        self.grid[0].len()
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Solid rectangles in row-major order.
    pub fn solid_rects(&self) -> &[SolidRect] {
        &self.solid_rects
    }

    /// Re-derives the solid rectangles from the grid.
    ///
    /// Always equal to [`solid_rects`](Self::solid_rects); exists so the
    /// derivation can be checked against the cached set.
    pub fn derive_solid_rects(&self) -> Vec<SolidRect> {
        derive_solid_rects(&self.grid, &self.solid_tiles, self.tile_size)
    }

    /// Iterates every drawable cell as `(row, col, id)`, skipping blanks.
    pub fn visible_tiles(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &id)| id != EMPTY_TILE)
                .map(move |(col, &id)| (row, col, id))
        })
    }

    /// World-space size of the whole map.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.columns() as f32 * self.tile_size,
            self.rows() as f32 * self.tile_size,
        )
    }
}

//--- Derivation ----------------------------------------------------------

fn derive_solid_rects(
    grid: &[Vec<TileId>],
    solid_tiles: &BTreeSet<TileId>,
    tile_size: f32,
) -> Vec<SolidRect> {
    let side = Vec2::splat(tile_size);
    let mut rects = Vec::new();

    for (row, cells) in grid.iter().enumerate() {
        for (col, id) in cells.iter().enumerate() {
            if *id == EMPTY_TILE || !solid_tiles.contains(id) {
                continue;
            }
            let origin = Vec2::new(col as f32 * tile_size, row as f32 * tile_size);
            rects.push(SolidRect {
                row,
                col,
                rect: Rect::new(origin, side),
            });
        }
    }

    rects
}

//=========================================================================
// Unit Tests
//=========================================================================
