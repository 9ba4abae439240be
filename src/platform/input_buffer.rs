//=========================================================================
// Input Buffer
//
// Collects key events between two redraws. Acts as a transient event
// aggregator between winit callbacks and the core thread.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Collapse consecutive duplicates (OS key repeat)
// - Hand the whole frame's events over via `drain()`
//
// Notes:
// Only consecutive duplicates are dropped. A KeyDown/KeyUp/KeyDown tap
// within one frame keeps all three events so the core sees the release.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame so pushes rarely reallocate.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and empties the buffer. `None` when
    // nothing was buffered, so empty batches never cross the channel.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        let capacity = self.events.capacity();
        Some(std::mem::replace(&mut self.events, Vec::with_capacity(capacity)))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
