//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the engine's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  InputSystem         │
//  │   ↓                      │    │   ↓                  │
//  │  InputBuffer             │    │  SimulationLoop      │
//  │   ↓                      │    │   ↓                  │
//  │  RedrawRequested (flush) │    │  SnapshotPublisher   │
//  │   ↓                      │    └──────────────────────┘
//  │  PlatformEvent ──────────┼──────────────↑    │
//  │                          │                   │
//  │  Renderer::present  ←────┼───────────────────┘
//  └──────────────────────────┘    RenderSnapshot
//
//  Frame Boundary: RedrawRequested
//    → All buffered key events sent as one batch
//    → Newest pending snapshot handed to the renderer
//    → Core ticks at fixed TPS (independent of refresh rate)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: batches input atomically so
//   arrival order survives the thread hop
// - **Snapshot disconnect = shutdown**: when the core thread stops (quit
//   button, window close) it drops its sender and the platform exits
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::{RenderSnapshot, Renderer};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Title and logical size of the game window.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Platformer – Green Zone".to_string(),
            width: 800,
            height: 500,
        }
    }
}

//=== Platform ============================================================

/// Window manager, input aggregator and snapshot presenter.
///
/// Runs on the main thread and is not `Send`; it talks to the core thread
/// only through its two channel ends.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
    settings: WindowSettings,

    /// Buffers key events until `RedrawRequested`.
    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    snapshots: Receiver<RenderSnapshot>,
    renderer: Box<dyn Renderer>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub(crate) fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        snapshots: Receiver<RenderSnapshot>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            snapshots,
            renderer,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes or the core
    /// thread stops.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered key events to the core thread as one batch.
    ///
    /// A disconnected channel means the core already stopped; the events
    /// are dropped with a warning.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} key events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    /// Presents the newest pending snapshot, if any.
    ///
    /// Returns `false` once the core thread has dropped its sender.
    fn present_latest(&mut self) -> bool {
        let mut latest = None;
        loop {
            match self.snapshots.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let Some(snapshot) = latest.take() {
                        self.renderer.present(&snapshot);
                    }
                    return false;
                }
            }
        }

        if let Some(snapshot) = latest {
            self.renderer.present(&snapshot);
        }
        true
    }

    fn notify_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core already stopped");
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                debug!(
                    target: "platform",
                    "Window lost focus, discarding {} buffered events",
                    self.buffer.len()
                );
                self.buffer.clear();
                if self.event_sender.send(PlatformEvent::FocusLost).is_err() {
                    debug!(target: "platform", "Core already stopped");
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = InputProcessor::process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, show the newest tick
                self.flush_input_buffer();

                if !self.present_latest() {
                    info!(target: "platform", "Core thread stopped, closing window");
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
