//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level held-key tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys held) → query
//
// State persists across ticks until a KeyUp or release_all().
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks which keys are currently held.
pub struct StateTracker {
    keys_down: HashSet<KeyCode>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
        }
    }

    //--- Event Processing -------------------------------------------------

    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Drops all held keys, e.g. when the window loses focus.
    pub(crate) fn release_all(&mut self) {
        self.keys_down.clear();
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                self.keys_down.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.keys_down.remove(&key);
            }
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn key_held_from_down_until_up() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::Space)]);
        assert!(tracker.is_key_down(KeyCode::Space));

        // Still held with no new events
        tracker.process_events(&[]);
        assert!(tracker.is_key_down(KeyCode::Space));

        tracker.process_events(&[key_up(KeyCode::Space)]);
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn key_down_persists_across_frames() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyD)]);

        for _ in 0..10 {
            tracker.process_events(&[]);
            assert!(tracker.is_key_down(KeyCode::KeyD), "Key should remain down");
        }
    }

    #[test]
    fn multiple_keys_tracked_independently() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[
            key_down(KeyCode::KeyA),
            key_down(KeyCode::KeyD),
            key_down(KeyCode::Space),
        ]);

        tracker.process_events(&[key_up(KeyCode::KeyA)]);

        assert!(!tracker.is_key_down(KeyCode::KeyA));
        assert!(tracker.is_key_down(KeyCode::KeyD));
        assert!(tracker.is_key_down(KeyCode::Space));
        assert_eq!(tracker.keys_down().count(), 2);
    }

    #[test]
    fn fast_tap_ends_released() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::Space), key_up(KeyCode::Space)]);

        assert!(!tracker.is_key_down(KeyCode::Space), "Should end up not down");
        assert_eq!(tracker.keys_down().count(), 0);
    }

    #[test]
    fn duplicate_key_down_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyA), key_down(KeyCode::KeyA)]);

        assert!(tracker.is_key_down(KeyCode::KeyA));
        assert_eq!(tracker.keys_down().count(), 1);

        // One release is enough
        tracker.process_events(&[key_up(KeyCode::KeyA)]);
        assert!(!tracker.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn key_up_without_down_ignored() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyD), key_up(KeyCode::KeyA)]);

        assert!(!tracker.is_key_down(KeyCode::KeyA));
        assert!(tracker.is_key_down(KeyCode::KeyD));
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyA), key_down(KeyCode::Space)]);

        tracker.release_all();

        assert_eq!(tracker.keys_down().count(), 0);
        assert!(!tracker.is_key_down(KeyCode::KeyA));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }
}
