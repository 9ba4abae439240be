//=========================================================================
// Physics Integrator
//=========================================================================
//
// Fixed-step explicit Euler integration for the player body, plus jump
// execution.
//
// Per tick:
//   vx  = move_dir * move_speed      (no inertia)
//   vy += gravity                    (always, even on the ground)
//   pos += velocity
//
// There is no sub-stepping: a fall speed above one tile per tick can
// tunnel through a one-tile floor.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::body::{Facing, PlayerBody};
use crate::core::config::PhysicsConfig;
use crate::core::input::{Intent, MoveDir};

//=== PhysicsIntegrator ===================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsIntegrator {
    config: PhysicsConfig,
}

impl PhysicsIntegrator {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    //--- Jump -------------------------------------------------------------

    /// Applies the jump impulse if the body is grounded and a jump is
    /// requested. Returns `true` if it jumped.
    ///
    /// Must run before [`integrate`](Self::integrate) so the impulse is
    /// integrated on the tick it was requested. Holding jump does not
    /// re-trigger in the air because `on_ground` is cleared here.
    pub fn apply_jump(&self, body: &mut PlayerBody, intent: &Intent) -> bool {
        if !(intent.jump_requested && body.on_ground) {
            return false;
        }

        body.velocity.y = self.config.jump_power;
        body.on_ground = false;
        debug!("Jump from y={:.2}", body.position.y);
        true
    }

    //--- Integration ------------------------------------------------------

    /// Advances the body by one tick.
    pub fn integrate(&self, body: &mut PlayerBody, intent: &Intent) {
        body.velocity.x = intent.move_dir.sign() * self.config.move_speed;
        match intent.move_dir {
            MoveDir::Left => body.facing = Facing::Left,
            MoveDir::Right => body.facing = Facing::Right,
            MoveDir::None => {}
        }

        body.velocity.y += self.config.gravity;
        body.position += body.velocity;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
