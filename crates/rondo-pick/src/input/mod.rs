//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Host code translates platform events into `InputEvent`s via
//! [`platform::winit::translate_window_event`], then feeds them through
//! [`dispatch`] to an [`InputSink`] such as the controller.

pub mod platform;
mod sink;
mod state;
mod types;

pub use sink::{dispatch, InputSink};
pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
