//=========================================================================
// Core Systems Orchestrator
//
// Coordinator for the simulation running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Drain platform events once per tick through the EventCollector
// - Fold key events into the InputSystem
// - Advance the SimulationLoop by exactly one tick
// - Publish each tick's RenderSnapshot back to the platform
// - Keep a fixed tick rate (TPS) with the TickPacer
//
// Notes:
// The orchestrator runs independently from the platform layer and owns
// every core system directly. Communication with the platform happens only
// through bounded channels: PlatformEvent in, RenderSnapshot out. When the
// loop ends, the snapshot sender is dropped; the platform treats that
// disconnect as its signal to close.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod render;
pub mod simulation;
pub mod world;

pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};

//=== Internal Modules ====================================================

use input::InputSystem;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::{RenderSnapshot, Renderer};
use simulation::{LoopState, SimulationLoop};

//=== TickPacer ===========================================================

/// Fixed-rate scheduler for the logic thread.
///
/// Sleeps away the rest of the interval when a tick finishes early. A late
/// tick restarts the schedule from "now", so at most one tick runs per
/// interval and a stall never turns into a burst of catch-up ticks.
pub(crate) struct TickPacer {
    interval: Duration,
    next_deadline: Instant,
}

impl TickPacer {
    /// # Panics
    ///
    /// Panics if `tps` is not positive and finite.
    pub(crate) fn new(tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        let interval = Duration::from_secs_f64(1.0 / tps);

        Self {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next tick is due. Returns how long it slept.
    pub(crate) fn wait(&mut self) -> Duration {
        let now = Instant::now();
        let slept = if now < self.next_deadline {
            let remaining = self.next_deadline - now;
            thread::sleep(remaining);
            remaining
        } else {
            trace!("Tick overran its interval by {:?}", now - self.next_deadline);
            Duration::ZERO
        };

        self.next_deadline = self.next_deadline.max(now) + self.interval;
        slept
    }
}

//=== SnapshotPublisher ===================================================

/// Renderer that forwards snapshots to the platform thread.
///
/// Never blocks the tick: a full channel drops the snapshot.
pub(crate) struct SnapshotPublisher {
    sender: Sender<RenderSnapshot>,
}

impl SnapshotPublisher {
    pub(crate) fn new(sender: Sender<RenderSnapshot>) -> Self {
        Self { sender }
    }
}

impl Renderer for SnapshotPublisher {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        match self.sender.try_send(snapshot.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                trace!("Snapshot channel full, dropping tick {}", snapshot.tick);
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!("Snapshot receiver gone, dropping tick {}", snapshot.tick);
            }
        }
    }
}

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    simulation: SimulationLoop,
    input: InputSystem,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Takes ownership of the core systems but does not yet start the logic
    // thread.
    //
    pub(crate) fn new(simulation: SimulationLoop, input: InputSystem) -> Self {
        Self { simulation, input }
    }

    //--- step() -----------------------------------------------------------
    //
    // One iteration of the logic thread:
    //  1. Collect platform events (quit on WindowClosed / disconnect)
    //  2. Release held keys if focus was lost, then apply input batches
    //  3. Tick the simulation (quit on the Quit button)
    //
    pub(crate) fn step<R>(&mut self, collector: &mut EventCollector, renderer: &mut R) -> TickControl
    where
        R: Renderer + ?Sized,
    {
        //--- Step 1: Gather platform events ------------------------------
        if collector.collect_frame() == TickControl::Exit {
            self.simulation.stop();
            return TickControl::Exit;
        }

        //--- Step 2: Update input ----------------------------------------
        if collector.focus_lost() {
            debug!("Focus lost, releasing held keys");
            self.input.release_all();
        }
        self.input.update(collector.batches());

        //--- Step 3: Advance the simulation ------------------------------
        match self.simulation.tick(&self.input, renderer) {
            LoopState::Running => TickControl::Continue,
            LoopState::Stopped => TickControl::Exit,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread, ticking at a fixed rate until a quit signal
    // arrives. Dropping `snapshots` on exit tells the platform to close.
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        snapshots: Sender<RenderSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut publisher = SnapshotPublisher::new(snapshots);
            let mut pacer = TickPacer::new(tps);

            info!("Core thread running (interval: {:?})", pacer.interval());

            loop {
                if self.step(&mut collector, &mut publisher) == TickControl::Exit {
                    break;
                }
                pacer.wait();
            }

            info!("Core thread exiting after {} ticks", self.simulation.ticks());
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::{bounded, unbounded};

    //--- Test Doubles -----------------------------------------------------

    #[derive(Default)]
    struct Recorder(Vec<RenderSnapshot>);

    impl Renderer for Recorder {
        fn present(&mut self, snapshot: &RenderSnapshot) {
            self.0.push(snapshot.clone());
        }
    }

    fn orchestrator() -> CoreSystemsOrchestrator {
        let simulation = SimulationLoop::new(&GameConfig::default()).unwrap();
        CoreSystemsOrchestrator::new(simulation, InputSystem::default())
    }

    fn inputs(events: &[InputEvent]) -> PlatformEvent {
        PlatformEvent::Inputs(events.to_vec())
    }

    //=====================================================================
    // TickPacer Tests
    //=====================================================================

    #[test]
    fn pacer_interval_matches_tps() {
        let pacer = TickPacer::new(50.0);
        assert_eq!(pacer.interval(), Duration::from_millis(20));
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn pacer_rejects_zero_tps() {
        TickPacer::new(0.0);
    }

    #[test]
    fn pacer_sleeps_when_ahead() {
        let mut pacer = TickPacer::new(100.0);
        let start = Instant::now();

        let slept = pacer.wait();

        assert!(slept > Duration::ZERO);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn pacer_does_not_burst_after_stall() {
        let mut pacer = TickPacer::new(100.0);
        thread::sleep(Duration::from_millis(50));

        assert_eq!(pacer.wait(), Duration::ZERO, "Late tick runs immediately");

        let slept = pacer.wait();
        assert!(slept > Duration::ZERO, "Next tick waits a full interval again");
        assert!(slept <= pacer.interval());
    }

    //=====================================================================
    // SnapshotPublisher Tests
    //=====================================================================

    #[test]
    fn publisher_drops_when_full() {
        let (tx, rx) = bounded(1);
        let mut publisher = SnapshotPublisher::new(tx);
        let mut sim = SimulationLoop::new(&GameConfig::default()).unwrap();
        let input = InputSystem::default();

        sim.tick(&input, &mut publisher);
        sim.tick(&input, &mut publisher);

        assert_eq!(rx.try_recv().unwrap().tick, 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn publisher_tolerates_disconnect() {
        let (tx, rx) = bounded(1);
        let mut publisher = SnapshotPublisher::new(tx);
        drop(rx);

        let sim = SimulationLoop::new(&GameConfig::default()).unwrap();
        publisher.present(&sim.snapshot());
    }

    //=====================================================================
    // Orchestrator Tests
    //=====================================================================

    #[test]
    fn step_applies_input_then_ticks() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(inputs(&[InputEvent::KeyDown(KeyCode::KeyD)])).unwrap();

        assert_eq!(core.step(&mut collector, &mut recorder), TickControl::Continue);
        assert_eq!(recorder.0.len(), 1);
        assert_eq!(recorder.0[0].player_position.x, 205.0);
    }

    #[test]
    fn held_key_keeps_moving_without_new_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(inputs(&[InputEvent::KeyDown(KeyCode::KeyA)])).unwrap();
        for _ in 0..3 {
            core.step(&mut collector, &mut recorder);
        }

        assert_eq!(recorder.0[2].player_position.x, 185.0);
    }

    #[test]
    fn window_closed_stops_simulation() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(core.step(&mut collector, &mut recorder), TickControl::Exit);
        assert_eq!(core.simulation.state(), LoopState::Stopped);
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn quit_button_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(inputs(&[InputEvent::KeyDown(KeyCode::Escape)])).unwrap();

        assert_eq!(core.step(&mut collector, &mut recorder), TickControl::Exit);
        assert_eq!(core.simulation.ticks(), 0);
    }

    #[test]
    fn focus_lost_releases_held_keys() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(inputs(&[InputEvent::KeyDown(KeyCode::KeyD)])).unwrap();
        core.step(&mut collector, &mut recorder);

        tx.send(PlatformEvent::FocusLost).unwrap();
        core.step(&mut collector, &mut recorder);
        core.step(&mut collector, &mut recorder);

        assert_eq!(recorder.0[0].player_position.x, 205.0);
        assert_eq!(recorder.0[1].player_position.x, 205.0);
        assert_eq!(recorder.0[2].player_position.x, 205.0);
    }

    #[test]
    fn focus_lost_key_not_held_after_step() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut core = orchestrator();
        let mut recorder = Recorder::default();

        tx.send(inputs(&[InputEvent::KeyDown(KeyCode::KeyD)])).unwrap();
        core.step(&mut collector, &mut recorder);
        assert!(core.input.keys().is_key_down(KeyCode::KeyD));

        tx.send(PlatformEvent::FocusLost).unwrap();
        core.step(&mut collector, &mut recorder);

        assert!(!core.input.keys().is_key_down(KeyCode::KeyD));
        assert_eq!(core.input.keys().keys_down().count(), 0);
    }

    #[test]
    fn core_thread_exits_and_drops_snapshot_sender() {
        let (event_tx, event_rx) = bounded(8);
        let (snapshot_tx, snapshot_rx) = bounded(4);

        let handle = orchestrator().spawn_core_thread(event_rx, snapshot_tx, 1000.0);
        event_tx.send(PlatformEvent::WindowClosed).unwrap();

        handle.join().unwrap();

        // Drain whatever was published, then the channel reports disconnect
        while snapshot_rx.try_recv().is_ok() {}
        assert!(snapshot_rx.recv().is_err());
    }

    #[test]
    fn core_thread_exits_when_platform_disconnects() {
        let (event_tx, event_rx) = bounded::<PlatformEvent>(8);
        let (snapshot_tx, _snapshot_rx) = bounded(4);

        let handle = orchestrator().spawn_core_thread(event_rx, snapshot_tx, 1000.0);
        drop(event_tx);

        assert!(handle.join().is_ok());
    }
}
