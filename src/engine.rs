//=========================================================================
// Verdant Engine
//
// Main entry point and coordinator for the platformer.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_config()              blocks until exit
//         ├─ with_bindings()
//         ├─ with_renderer()
//         └─ with_title() / with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::input::{InputSystem, KeyBindings};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::{RenderSnapshot, Renderer, TraceRenderer};
use crate::core::simulation::SimulationLoop;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (simulation ticks per second)
/// - **Channel capacity**: 128 events
/// - **Game**: [`GameConfig::default`], the "Green Zone" level
/// - **Bindings**: [`KeyBindings::default`] (A/D, arrows, Space, Escape)
/// - **Renderer**: [`TraceRenderer`]
/// - **Window**: "Platformer – Green Zone", 800×500
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use verdant::EngineBuilder;
///
/// EngineBuilder::new().build()?.run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Advanced configuration:
/// ```no_run
/// use verdant::core::config::GameConfig;
/// use verdant::core::input::{Button, KeyBindings, KeyCode};
/// use verdant::EngineBuilder;
///
/// let mut config = GameConfig::default();
/// config.physics.gravity = 0.6;
///
/// let mut bindings = KeyBindings::default();
/// bindings.bind(KeyCode::KeyW, Button::Jump);
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_config(config)
///     .with_bindings(bindings)
///     .build()?
///     .run()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    bindings: KeyBindings,
    renderer: Option<Box<dyn Renderer>>,
    window: WindowSettings,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            bindings: KeyBindings::default(),
            renderer: None,
            window: WindowSettings::default(),
        }
    }

    /// Sets the simulation tick rate.
    ///
    /// Every physics constant is per tick, so this also sets game speed.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not positive and finite.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the game configuration. Validated in [`build`](Self::build).
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Sets the renderer that receives the newest snapshot each frame.
    pub fn with_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive");
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Validates the game configuration and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the configuration.
    pub fn build(self) -> Result<Engine, ConfigError> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let simulation = SimulationLoop::new(&self.config)?;
        let input = InputSystem::new(self.bindings);

        Ok(Engine {
            orchestrator: CoreSystemsOrchestrator::new(simulation, input),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            renderer: self.renderer.unwrap_or_else(|| Box::new(TraceRenderer::new())),
            window: self.window,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Platformer runtime.
///
/// Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → SimulationLoop → SnapshotPublisher
///   │
///   └─► Platform (Event Loop)
///         └─► Window, key events, Renderer
///
/// Communication: bounded channels (PlatformEvent in, RenderSnapshot out)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    renderer: Box<dyn Renderer>,
    window: WindowSettings,
}

impl Engine {
    /// Snapshots in flight between core and platform. Small on purpose:
    /// only the newest one is ever drawn.
    const SNAPSHOT_CAPACITY: usize = 4;

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Quit button: core stops → snapshot channel disconnects → platform exits
    /// 5. Window close: platform sends `WindowClosed` → core stops
    /// 6. Joins the logic thread
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop could not be created or
    /// failed. The logic thread is still joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (snapshot_tx, snapshot_rx): (Sender<RenderSnapshot>, Receiver<RenderSnapshot>) =
            bounded(Self::SNAPSHOT_CAPACITY);

        info!("Channels created (events: {}, snapshots: {})", self.channel_capacity, Self::SNAPSHOT_CAPACITY);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(event_rx, snapshot_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, event_tx, snapshot_rx, self.renderer);
        info!("Platform initialized, entering event loop");

        // Platform (and its sender) is dropped on return, so the core
        // thread sees a disconnect even if the loop failed early
        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{Button, KeyCode};

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_can_be_created() {
        let _builder = EngineBuilder::new();
    }

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, GameConfig::default());
        assert!(builder.renderer.is_none());
        assert_eq!(builder.window, WindowSettings::default());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_infinity() {
        EngineBuilder::new().with_tps(f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_nan() {
        EngineBuilder::new().with_tps(f64::NAN);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_window_settings() {
        let builder = EngineBuilder::new()
            .with_title("Test Zone")
            .with_window_size(640, 480);

        assert_eq!(builder.window.title, "Test Zone");
        assert_eq!((builder.window.width, builder.window.height), (640, 480));
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 500);
    }

    #[test]
    fn builder_with_bindings() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::KeyW, Button::Jump);

        let builder = EngineBuilder::new().with_bindings(bindings);
        assert_eq!(builder.bindings.button_for(KeyCode::KeyW), Some(Button::Jump));
        assert_eq!(builder.bindings.button_for(KeyCode::Space), None);
    }

    #[test]
    fn builder_with_renderer() {
        let builder = EngineBuilder::new().with_renderer(TraceRenderer::new());
        assert!(builder.renderer.is_some());
    }

    #[test]
    fn builder_build_creates_engine() {
        assert!(EngineBuilder::new().build().is_ok());
    }

    #[test]
    fn builder_build_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.animation.frame_count = 0;

        let result = EngineBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(ConfigError::EmptyFrameSequence)));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build()
            .unwrap();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }
}
