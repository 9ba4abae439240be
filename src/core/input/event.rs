//=========================================================================
// Key Event Types
//
// Engine-side representation of keyboard input, independent of the
// windowing library that produced it.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (keys held)
//         ↓
//    KeyBindings → Button → InputSampler → Intent
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced:
/// `KeyA` is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform reports but the engine does not name.
    Unidentified
}

//=== InputEvent ==========================================================

/// Key transition reported by the platform layer.
///
/// Consecutive identical events (OS key repeat) are collapsed by the
/// platform's input buffer before they cross the thread boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

impl InputEvent {
    /// The key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::KeyDown(key) | Self::KeyUp(key) => key,
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self, Self::KeyDown(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_accessor_covers_both_variants() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Space).key(), KeyCode::Space);
        assert_eq!(InputEvent::KeyUp(KeyCode::KeyA).key(), KeyCode::KeyA);
    }

    #[test]
    fn is_down_distinguishes_transitions() {
        assert!(InputEvent::KeyDown(KeyCode::KeyD).is_down());
        assert!(!InputEvent::KeyUp(KeyCode::KeyD).is_down());
    }

    #[test]
    fn down_and_up_are_distinct() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        set.insert(InputEvent::KeyUp(KeyCode::KeyA));
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        assert_eq!(set.len(), 2, "KeyDown and KeyUp must coexist as distinct events");
    }
}
