//=========================================================================
// Renderer Boundary
//=========================================================================
//
// The simulation hands one `RenderSnapshot` per tick to a `Renderer` and
// asks nothing else of it. How tiles and frames become pixels is up to the
// renderer; the core knows only tile ids and frame indices.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::physics::Facing;
use super::world::TileMap;

//=== RenderSnapshot ======================================================

/// Draw-ready view of one tick.
///
/// Cheap to clone: the tile map is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Tick number that produced this snapshot (first tick is 1).
    pub tick: u64,
    pub tile_map: Arc<TileMap>,

    /// Top-left of the player's bounding box in world units.
    pub player_position: Vec2,
    pub player_size: Vec2,

    /// Index into the player's frame sequence.
    pub frame: usize,

    /// Renderers mirror the frame horizontally for `Facing::Left`.
    pub facing: Facing,
    pub on_ground: bool,
}

//=== Renderer ============================================================

/// Consumer of render snapshots.
pub trait Renderer {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        (**self).present(snapshot);
    }
}

//=== TraceRenderer =======================================================

/// Renderer that only logs snapshots at `trace` level.
///
/// Walks the visible tiles like a drawing renderer would and counts them.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    presented: u64,
    tiles_presented: u64,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Total non-blank tiles walked across all presents.
    pub fn tiles_presented(&self) -> u64 {
        self.tiles_presented
    }
}

impl Renderer for TraceRenderer {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self.presented += 1;

        let map = &snapshot.tile_map;
        if self.presented == 1 {
            let size = map.world_size();
            debug!(
                target: "render",
                "Presenting {}x{} level ({}x{} world units)",
                map.columns(),
                map.rows(),
                size.x,
                size.y
            );
        }
        self.tiles_presented += map.visible_tiles().count() as u64;

        trace!(
            target: "render",
            "tick {} player=({:.1}, {:.1}) frame={} facing={:?} grounded={}",
            snapshot.tick,
            snapshot.player_position.x,
            snapshot.player_position.y,
            snapshot.frame,
            snapshot.facing,
            snapshot.on_ground
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LevelConfig;
    use crate::core::world::EMPTY_TILE;

    fn snapshot(tick: u64) -> RenderSnapshot {
        RenderSnapshot {
            tick,
            tile_map: Arc::new(TileMap::new(&LevelConfig::green_zone()).unwrap()),
            player_position: Vec2::new(200.0, 100.0),
            player_size: Vec2::splat(48.0),
            frame: 0,
            facing: Facing::Right,
            on_ground: false,
        }
    }

    #[test]
    fn trace_renderer_counts_presents() {
        let mut renderer = TraceRenderer::new();
        renderer.present(&snapshot(1));
        renderer.present(&snapshot(2));
        assert_eq!(renderer.presented(), 2);
    }

    #[test]
    fn trace_renderer_walks_visible_tiles() {
        let level = LevelConfig::green_zone();
        let non_blank = level
            .grid
            .iter()
            .flatten()
            .filter(|&&id| id != EMPTY_TILE)
            .count() as u64;
        assert!(non_blank > 0);

        let mut renderer = TraceRenderer::new();
        renderer.present(&snapshot(1));
        renderer.present(&snapshot(2));

        assert_eq!(renderer.tiles_presented(), 2 * non_blank);
    }

    #[test]
    fn boxed_renderer_forwards() {
        let mut renderer: Box<TraceRenderer> = Box::new(TraceRenderer::new());
        Renderer::present(&mut renderer, &snapshot(1));
        assert_eq!(renderer.presented(), 1);
    }

    #[test]
    fn snapshot_clone_shares_tile_map() {
        let a = snapshot(1);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.tile_map, &b.tile_map));
    }
}
