//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into `InputEvent`s through
//! [`platform::winit`].

mod click;
mod state;
mod types;

pub mod platform;

pub use click::{ClickTracker, DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_INTERVAL};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
