//=========================================================================
// Animation
//=========================================================================
//
// Free-running frame cycle for the player sprite.
//
// The controller advances on a fixed tick cadence regardless of motion,
// ground state or facing. There is a single cycle; no idle/run/jump sets.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroUsize;

use log::trace;

//=== Internal Dependencies ===============================================

use super::config::AnimationConfig;
use super::error::ConfigError;

//=== AnimationState ======================================================

/// Current frame index and progress toward the next frame.
///
/// The frame index is always in `[0, frame_count)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    frame_count: NonZeroUsize,
    ticks_per_frame: u32,
    frame: usize,
    timer: u32,
}

impl AnimationState {
    /// Creates a state at frame 0.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyFrameSequence`] if `frame_count` is 0 and
    /// [`ConfigError::ZeroAnimationSpeed`] if `ticks_per_frame` is 0.
    pub fn new(frame_count: usize, ticks_per_frame: u32) -> Result<Self, ConfigError> {
        let frame_count = NonZeroUsize::new(frame_count).ok_or(ConfigError::EmptyFrameSequence)?;
        if ticks_per_frame == 0 {
            return Err(ConfigError::ZeroAnimationSpeed);
        }

        Ok(Self {
            frame_count,
            ticks_per_frame,
            frame: 0,
            timer: 0,
        })
    }

    pub fn from_config(config: &AnimationConfig) -> Result<Self, ConfigError> {
        Self::new(config.frame_count, config.ticks_per_frame)
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count.get()
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }
}

//=== AnimationController =================================================

pub struct AnimationController;

impl AnimationController {
    /// Counts one tick; on the `ticks_per_frame`-th tick moves to the next
    /// frame (wrapping) and restarts the count. Returns the current frame.
    pub fn advance(state: &mut AnimationState) -> usize {
        state.timer += 1;
        if state.timer >= state.ticks_per_frame {
            state.frame = (state.frame + 1) % state.frame_count;
            state.timer = 0;
            trace!("Animation frame -> {}", state.frame);
        }
        state.frame
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
