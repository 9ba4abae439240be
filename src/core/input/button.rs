//=========================================================================
// Logical Buttons & Key Bindings
//=========================================================================
//
// Maps physical keys to the four logical buttons the simulation reads.
//
// Architecture:
//   KeyCode → HashMap → Button
//
// Several keys may drive one button (A and ArrowLeft both move left).
// A button is down while any key bound to it is down.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== Button ==============================================================

/// Logical input the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MoveLeft,
    MoveRight,
    Jump,
    Quit,
}

impl Button {
    pub const ALL: [Button; 4] = [Self::MoveLeft, Self::MoveRight, Self::Jump, Self::Quit];
}

//=== KeyBindings =========================================================

/// Key → button lookup table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Button>,
}

impl KeyBindings {
    /// Creates a table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a button, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, button: Button) {
        self.bindings.insert(key, button);
    }

    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Removes every key bound to `button`.
    pub fn unbind_button(&mut self, button: Button) {
        self.bindings.retain(|_, b| *b != button);
    }

    //--- Lookup -----------------------------------------------------------

    pub fn button_for(&self, key: KeyCode) -> Option<Button> {
        self.bindings.get(&key).copied()
    }

    /// Returns `true` if any key bound to `button` is held.
    pub(crate) fn is_button_down(&self, button: Button, keys: &StateTracker) -> bool {
        keys.keys_down().any(|key| self.button_for(*key) == Some(button))
    }
}

impl Default for KeyBindings {
    /// A/D or arrows to move, Space to jump, Escape to quit.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyA, Button::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, Button::MoveLeft);
        bindings.bind(KeyCode::KeyD, Button::MoveRight);
        bindings.bind(KeyCode::ArrowRight, Button::MoveRight);
        bindings.bind(KeyCode::Space, Button::Jump);
        bindings.bind(KeyCode::Escape, Button::Quit);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
