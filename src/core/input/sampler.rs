//=========================================================================
// Input Sampler
//=========================================================================
//
// Turns the instantaneous button state into a per-tick intent.
//
// No debouncing and no key repeat: jump is requested on every tick the
// jump button is held. Whether a jump actually happens is decided later,
// against ground contact.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::button::Button;

//=== InputSource =========================================================

/// Non-blocking poll of the four logical buttons.
///
/// Implemented by the engine's [`InputSystem`](super::InputSystem); tests
/// and headless drivers can implement it directly.
pub trait InputSource {
    fn is_down(&self, button: Button) -> bool;
}

//=== MoveDir =============================================================

/// Horizontal movement direction chosen this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDir {
    Left,
    #[default]
    None,
    Right,
}

impl MoveDir {
    /// -1, 0 or +1.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::None => 0.0,
            Self::Right => 1.0,
        }
    }
}

//=== Intent ==============================================================

/// Discretised input decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub move_dir: MoveDir,
    pub jump_requested: bool,
}

//=== InputSampler ========================================================

pub struct InputSampler;

impl InputSampler {
    /// Reads the current button state into an [`Intent`].
    ///
    /// With both move buttons held, right wins.
    pub fn sample<I: InputSource + ?Sized>(input: &I) -> Intent {
        let move_dir = if input.is_down(Button::MoveRight) {
            MoveDir::Right
        } else if input.is_down(Button::MoveLeft) {
            MoveDir::Left
        } else {
            MoveDir::None
        };

        Intent {
            move_dir,
            jump_requested: input.is_down(Button::Jump),
        }
    }

    /// Returns `true` if the quit button is held.
    pub fn quit_requested<I: InputSource + ?Sized>(input: &I) -> bool {
        input.is_down(Button::Quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(&'static [Button]);

    impl InputSource for Held {
        fn is_down(&self, button: Button) -> bool {
            self.0.contains(&button)
        }
    }

    #[test]
    fn no_buttons_no_intent() {
        assert_eq!(InputSampler::sample(&Held(&[])), Intent::default());
    }

    #[test]
    fn single_direction() {
        assert_eq!(InputSampler::sample(&Held(&[Button::MoveLeft])).move_dir, MoveDir::Left);
        assert_eq!(InputSampler::sample(&Held(&[Button::MoveRight])).move_dir, MoveDir::Right);
    }

    #[test]
    fn both_directions_right_wins() {
        let intent = InputSampler::sample(&Held(&[Button::MoveLeft, Button::MoveRight]));
        assert_eq!(intent.move_dir, MoveDir::Right);
    }

    #[test]
    fn jump_requested_while_held() {
        let input = Held(&[Button::Jump]);
        for _ in 0..3 {
            assert!(InputSampler::sample(&input).jump_requested);
        }
    }

    #[test]
    fn quit_is_not_part_of_intent() {
        let input = Held(&[Button::Quit]);
        assert_eq!(InputSampler::sample(&input), Intent::default());
        assert!(InputSampler::quit_requested(&input));
    }

    #[test]
    fn move_dir_signs() {
        assert_eq!(MoveDir::Left.sign(), -1.0);
        assert_eq!(MoveDir::None.sign(), 0.0);
        assert_eq!(MoveDir::Right.sign(), 1.0);
    }
}
