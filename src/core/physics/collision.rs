//=========================================================================
// Collision Resolver
//=========================================================================
//
// Resolves the player's bounding box against the level's solid rects.
//
// Only one rule exists: a falling body (vy > 0) that overlaps a solid
// rect is snapped onto its top edge and stops falling. Horizontal and
// ceiling contacts are not resolved; the body passes through walls and
// rises through platforms from below.
//
// The bounding box is taken once, at the post-integration position, and
// the rule is applied independently to every intersecting rect in
// iteration (row-major) order. A landing zeroes vy, so no later rect can
// qualify in the same call: the first qualifying rect decides the snap.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::body::PlayerBody;
use crate::core::world::SolidRect;

//=== CollisionResolver ===================================================

pub struct CollisionResolver;

impl CollisionResolver {
    /// Corrects position, velocity and ground state after integration.
    ///
    /// `on_ground` is cleared first and set again only if a landing
    /// happened this call. Returns the new ground state.
    pub fn resolve(body: &mut PlayerBody, solid_rects: &[SolidRect]) -> bool {
        let was_on_ground = body.on_ground;
        body.on_ground = false;

        let bounds = body.bounds();
        for solid in solid_rects {
            if !bounds.intersects(&solid.rect) {
                continue;
            }
            if body.velocity.y > 0.0 {
                trace!(
                    "Landing on tile ({}, {}) at y={:.2}",
                    solid.row,
                    solid.col,
                    solid.rect.top()
                );
                body.position.y = solid.rect.top() - body.size().y;
                body.velocity.y = 0.0;
                body.on_ground = true;
            }
        }

        if body.on_ground != was_on_ground {
            debug!(
                "Ground state changed: {} -> {} at y={:.2}",
                was_on_ground, body.on_ground, body.position.y
            );
        }

        body.on_ground
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
