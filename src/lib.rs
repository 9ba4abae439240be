//=========================================================================
// Verdant - Library Root
//
// Public API surface of the Verdant platformer runtime.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the deterministic simulation core for headless use and tests
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use verdant::EngineBuilder;
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     EngineBuilder::new().build()?.run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every system with state and invariants: configuration,
// tile map, input sampling, physics, collision, animation and the tick
// loop. None of it touches the OS, so it can be driven tick by tick.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the window and event loop and is not part of the
// public API surface. `engine` wires platform and core together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
