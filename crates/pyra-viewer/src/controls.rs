//! Mapping from input events to transform commands.
//!
//! | input                              | effect                  |
//! |------------------------------------|-------------------------|
//! | drag (any button held)             | rotate X/Y by pointer   |
//! | wheel up / down                    | scale ± one step        |
//! | wheel, no vertical component       | nothing                 |
//! | double click left                  | reset scale             |
//! | double click right                 | reset rotation          |
//! | release `R`                        | reset rotation + scale  |

use pyra_engine::input::{
    InputEvent, InputState, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

use crate::transform::ModelTransform;

/// A change to apply to the model transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// Absolute rotation in degrees.
    Rotate { x: f32, y: f32, z: f32 },
    /// One wheel step; the sign gives the direction.
    StepScale(i32),
    ResetRotation,
    ResetScale,
    ResetAll,
}

impl Command {
    pub fn apply(self, transform: &mut ModelTransform) {
        match self {
            Command::Rotate { x, y, z } => transform.set_rotation(x, y, z),
            Command::StepScale(dir) => transform.step_scale(dir),
            Command::ResetRotation => transform.reset_rotation(),
            Command::ResetScale => transform.reset_scale(),
            Command::ResetAll => transform.reset(),
        }
    }
}

/// Interprets one input event. `state` must already include the event.
pub fn command_for(event: &InputEvent, state: &InputState) -> Option<Command> {
    match event {
        InputEvent::Key { key, state: KeyState::Pressed, .. } => {
            log::debug!("{key} pressed");
            None
        }

        InputEvent::Key { key: Key::R, state: KeyState::Released, .. } => Some(Command::ResetAll),

        InputEvent::PointerMoved(PointerMoveEvent { x, y }) if state.any_button_down() => {
            Some(Command::Rotate { x: *x, y: *y, z: 0.0 })
        }

        InputEvent::PointerButton(PointerButtonEvent { button, state: st, .. }) => {
            match st {
                MouseButtonState::Pressed => log::debug!("mouse button pressed: {button}"),
                MouseButtonState::Released => log::debug!("mouse button released: {button}"),
            }
            None
        }

        InputEvent::PointerDoubleClick { button: MouseButton::Left, .. } => {
            Some(Command::ResetScale)
        }
        InputEvent::PointerDoubleClick { button: MouseButton::Right, .. } => {
            Some(Command::ResetRotation)
        }

        InputEvent::MouseWheel { delta, .. } => {
            let dy = delta.vertical();
            if dy > 0.0 {
                Some(Command::StepScale(1))
            } else if dy < 0.0 {
                Some(Command::StepScale(-1))
            } else {
                // Horizontal-only scroll leaves the scale alone.
                None
            }
        }

        _ => None,
    }
}
