//=========================================================================
// Input System
//
// Engine-side input handling for the logic thread.
//
// Responsibilities:
// - Fold each tick's batches of key events into persistent key state
// - Resolve held keys to logical buttons through the key bindings
// - Serve as the `InputSource` polled once per tick by the simulation
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator. The
// simulation never sees key codes, only buttons and intents.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod button;
mod sampler;
mod state_tracker;

//=== Public API ==========================================================

pub use button::{Button, KeyBindings};
pub use event::{InputEvent, KeyCode};
pub use sampler::{InputSampler, InputSource, Intent, MoveDir};
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Owns key state and bindings; answers button queries.
pub struct InputSystem {
    keys: StateTracker,
    bindings: KeyBindings,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            keys: StateTracker::new(),
            bindings,
        }
    }

    //--- update() ---------------------------------------------------------
    //
    // Consumes every input batch received since the previous tick, in
    // arrival order.
    //
    pub fn update(&mut self, input_batches: &[Vec<InputEvent>]) {
        for batch in input_batches {
            trace!("Processing input batch ({} events)", batch.len());
            self.keys.process_events(batch);
        }
    }

    /// Treats every held key as released.
    pub fn release_all(&mut self) {
        trace!("Releasing all held keys");
        self.keys.release_all();
    }

    //--- Accessors --------------------------------------------------------

    pub fn keys(&self) -> &StateTracker {
        &self.keys
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputSource for InputSystem {
    fn is_down(&self, button: Button) -> bool {
        self.bindings.is_button_down(button, &self.keys)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_applies_batches_in_order() {
        let mut input = InputSystem::default();

        input.update(&[
            vec![InputEvent::KeyDown(KeyCode::KeyA)],
            vec![InputEvent::KeyUp(KeyCode::KeyA), InputEvent::KeyDown(KeyCode::KeyD)],
        ]);

        assert!(!input.is_down(Button::MoveLeft));
        assert!(input.is_down(Button::MoveRight));
    }

    #[test]
    fn held_buttons_persist_across_empty_updates() {
        let mut input = InputSystem::default();
        input.update(&[vec![InputEvent::KeyDown(KeyCode::Space)]]);

        input.update(&[]);
        input.update(&[]);

        assert!(input.is_down(Button::Jump));
        assert!(input.keys().is_key_down(KeyCode::Space));
    }

    #[test]
    fn release_all_drops_buttons() {
        let mut input = InputSystem::default();
        input.update(&[vec![InputEvent::KeyDown(KeyCode::KeyD)]]);

        input.release_all();

        assert!(!input.is_down(Button::MoveRight));
    }

    #[test]
    fn sampler_reads_input_system() {
        let mut input = InputSystem::default();
        input.update(&[vec![
            InputEvent::KeyDown(KeyCode::ArrowLeft),
            InputEvent::KeyDown(KeyCode::Space),
        ]]);

        let intent = InputSampler::sample(&input);
        assert_eq!(intent.move_dir, MoveDir::Left);
        assert!(intent.jump_requested);
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::KeyW, Button::Jump);
        let mut input = InputSystem::new(bindings);

        input.update(&[vec![InputEvent::KeyDown(KeyCode::Space)]]);
        assert!(!input.is_down(Button::Jump));

        input.update(&[vec![InputEvent::KeyDown(KeyCode::KeyW)]]);
        assert!(input.is_down(Button::Jump));
    }
}
