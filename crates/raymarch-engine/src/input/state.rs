use super::frame::InputFrame;
use super::types::{
    InputEvent, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Current input state for the window.
///
/// Tracks the pointer position so button events, which carry none of their
/// own, can be placed. Every event is recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies an input event to the current state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                ..
            } => {
                frame.keys_pressed.insert(*key);
            }

            _ => {}
        }

        frame.push_event(ev);
    }

    /// Places a button transition at the tracked pointer position.
    ///
    /// A press with no known position is dropped: a drag anchored there
    /// would jump on the first move. Releases are always delivered so an
    /// active drag still ends.
    pub fn pointer_button(
        &self,
        button: MouseButton,
        state: MouseButtonState,
    ) -> Option<InputEvent> {
        let (x, y) = match (self.pointer_pos, state) {
            (Some(pos), _) => pos,
            (None, MouseButtonState::Pressed) => return None,
            (None, MouseButtonState::Released) => (0.0, 0.0),
        };

        Some(InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn press_before_any_move_is_dropped() {
        let state = InputState::default();
        assert_eq!(
            state.pointer_button(MouseButton::Left, MouseButtonState::Pressed),
            None
        );
    }

    #[test]
    fn press_after_pointer_left_is_dropped() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, moved(30.0, 40.0));
        state.apply_event(&mut frame, InputEvent::PointerLeft);

        assert_eq!(
            state.pointer_button(MouseButton::Left, MouseButtonState::Pressed),
            None
        );
    }

    #[test]
    fn press_uses_tracked_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, moved(4.0, 5.0));

        assert_eq!(
            state.pointer_button(MouseButton::Left, MouseButtonState::Pressed),
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 4.0,
                y: 5.0,
            }))
        );
    }

    #[test]
    fn release_without_position_is_still_delivered() {
        let state = InputState::default();
        let ev = state.pointer_button(MouseButton::Right, MouseButtonState::Released);
        assert!(matches!(
            ev,
            Some(InputEvent::PointerButton(PointerButtonEvent {
                state: MouseButtonState::Released,
                ..
            }))
        ));
    }

    #[test]
    fn button_events_do_not_move_the_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let release = state
            .pointer_button(MouseButton::Left, MouseButtonState::Released)
            .unwrap();
        state.apply_event(&mut frame, release);

        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn key_presses_and_repeats_are_recorded() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::ArrowUp, state: KeyState::Pressed, repeat: false },
        );
        frame.clear();
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::ArrowUp, state: KeyState::Pressed, repeat: true },
        );
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Escape, state: KeyState::Released, repeat: false },
        );

        assert!(frame.keys_pressed.contains(&Key::ArrowUp));
        assert!(!frame.keys_pressed.contains(&Key::Escape));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, moved(1.0, 2.0));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
