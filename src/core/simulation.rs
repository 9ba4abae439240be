//=========================================================================
// Simulation Loop
//=========================================================================
//
// One fixed tick of the platformer, in a fixed order:
//
// ```text
//   quit? ──yes──> Stopped
//     │no
//   InputSampler::sample        → Intent
//   PhysicsIntegrator::apply_jump (grounded + requested only)
//   PhysicsIntegrator::integrate → velocity, position
//   CollisionResolver::resolve   → snap, vy, on_ground
//   AnimationController::advance → frame
//   Renderer::present(snapshot)
// ```
//
// All state lives in `SimulationContext`, owned by the loop and mutated
// only from `tick()`. Nothing here blocks, sleeps or touches the OS; pacing
// belongs to the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::animation::{AnimationController, AnimationState};
use super::config::GameConfig;
use super::error::ConfigError;
use super::input::{InputSampler, InputSource};
use super::physics::{CollisionResolver, PhysicsIntegrator, PlayerBody};
use super::render::{RenderSnapshot, Renderer};
use super::world::TileMap;

//=== LoopState ===========================================================

/// Lifecycle of the loop. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

//=== SimulationContext ===================================================

/// Everything one run of the simulation owns.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub body: PlayerBody,
    pub animation: AnimationState,
    pub tile_map: Arc<TileMap>,
    pub physics: PhysicsIntegrator,
}

impl SimulationContext {
    /// Builds the initial context from a configuration.
    ///
    /// Validates the whole configuration first, so no degenerate value can
    /// reach the tick loop.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            body: PlayerBody::from_config(&config.player),
            animation: AnimationState::from_config(&config.animation)?,
            tile_map: Arc::new(TileMap::new(&config.level)?),
            physics: PhysicsIntegrator::new(config.physics.clone()),
        })
    }
}

//=== SimulationLoop ======================================================

pub struct SimulationLoop {
    context: SimulationContext,
    state: LoopState,
    tick: u64,
}

impl SimulationLoop {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_context(SimulationContext::new(config)?))
    }

    pub fn from_context(context: SimulationContext) -> Self {
        info!(
            "Simulation ready: player at ({}, {}), {} solid tiles",
            context.body.position.x,
            context.body.position.y,
            context.tile_map.solid_rects().len()
        );

        Self {
            context,
            state: LoopState::Running,
            tick: 0,
        }
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one tick and presents its snapshot.
    ///
    /// Holding the quit button stops the loop at the top of the tick; the
    /// stopping tick changes no state and presents nothing. Once stopped,
    /// further calls are no-ops.
    pub fn tick<I, R>(&mut self, input: &I, renderer: &mut R) -> LoopState
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }
        if InputSampler::quit_requested(input) {
            debug!("Quit button held at tick {}", self.tick);
            self.stop();
            return LoopState::Stopped;
        }

        let ctx = &mut self.context;

        //--- Step 1: Input ----------------------------------------------
        let intent = InputSampler::sample(input);

        //--- Step 2: Jump + integration ---------------------------------
        ctx.physics.apply_jump(&mut ctx.body, &intent);
        ctx.physics.integrate(&mut ctx.body, &intent);

        //--- Step 3: Collision ------------------------------------------
        CollisionResolver::resolve(&mut ctx.body, ctx.tile_map.solid_rects());

        //--- Step 4: Animation ------------------------------------------
        AnimationController::advance(&mut ctx.animation);

        //--- Step 5: Present --------------------------------------------
        self.tick += 1;
        renderer.present(&self.snapshot());

        LoopState::Running
    }

    /// Applies the external quit signal.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!("Simulation stopped after {} ticks", self.tick);
            self.state = LoopState::Stopped;
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    /// Draw-ready view of the current state.
    pub fn snapshot(&self) -> RenderSnapshot {
        let ctx = &self.context;
        RenderSnapshot {
            tick: self.tick,
            tile_map: Arc::clone(&ctx.tile_map),
            player_position: ctx.body.position,
            player_size: ctx.body.size(),
            frame: ctx.animation.frame(),
            facing: ctx.body.facing,
            on_ground: ctx.body.on_ground,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
