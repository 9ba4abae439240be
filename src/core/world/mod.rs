//=========================================================================
// World
//=========================================================================
//
// Static level geometry: the tile grid and its collision rectangles.
//
//=========================================================================

mod rect;
mod tile_map;

pub use rect::Rect;
pub use tile_map::{SolidRect, TileId, TileMap, EMPTY_TILE};
