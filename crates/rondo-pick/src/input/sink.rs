use glam::Vec2;

use super::state::InputState;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// A consumer of pointer gestures, fed by [`dispatch`].
///
/// Positions are screen pixels; the implementor decides what to do with
/// them (the controller unprojects into world space).
pub trait InputSink {
    fn on_press(&mut self, button: MouseButton, pos: Vec2);
    fn on_release(&mut self, button: MouseButton, pos: Vec2);
    fn on_move(&mut self, pos: Vec2);
    fn on_scroll(&mut self, delta_lines: f32);
}

/// Applies an event to the tracked state, then forwards it to the sink.
///
/// State goes first so the sink observes post-event positions, matching what
/// the next event will report.
pub fn dispatch(state: &mut InputState, sink: &mut impl InputSink, ev: &InputEvent) {
    state.apply_event(ev);

    match ev {
        InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
            sink.on_move(Vec2::new(*x, *y));
        }

        InputEvent::PointerButton(PointerButtonEvent { button, state: st, x, y }) => {
            let pos = Vec2::new(*x, *y);
            match st {
                MouseButtonState::Pressed => sink.on_press(*button, pos),
                MouseButtonState::Released => sink.on_release(*button, pos),
            }
        }

        InputEvent::MouseWheel { delta } => {
            sink.on_scroll(delta.lines_y());
        }

        InputEvent::PointerLeft | InputEvent::Focused(_) => {}
    }
}
