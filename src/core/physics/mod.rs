//=========================================================================
// Physics
//=========================================================================
//
// Single-body platformer physics.
//
// Architecture:
//   Intent → PhysicsIntegrator (jump, velocity, position)
//          → CollisionResolver (snap, vy, on_ground)
//
//=========================================================================

mod body;
mod collision;
mod integrator;

pub use body::{Facing, PlayerBody};
pub use collision::CollisionResolver;
pub use integrator::PhysicsIntegrator;
