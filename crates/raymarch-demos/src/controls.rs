use raymarch_engine::input::{InputEvent, InputFrame, Key, KeyState};
use raymarch_engine::params::SceneControls;

/// Amount one key press moves the selected control.
pub const NUDGE_STEP: f32 = 0.05;

/// Which scene control the arrow keys adjust.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ControlSlot {
    #[default]
    Zoom,
    Blob,
    Spike,
    Hue,
}

/// Keyboard stand-in for the four range inputs of the scene panel.
///
/// `1`-`4` pick zoom / blob / spike / hue, arrow up/down nudge the picked
/// control, `R` restores the defaults.
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    pub values: SceneControls,
    pub selected: ControlSlot,
}

impl ControlPanel {
    /// Applies this frame's key presses in arrival order. Returns true if any
    /// value changed.
    pub fn apply_frame(&mut self, frame: &InputFrame) -> bool {
        let mut changed = false;
        for ev in &frame.events {
            if let InputEvent::Key { key, state: KeyState::Pressed, .. } = ev {
                changed |= self.press(*key);
            }
        }
        changed
    }

    /// Handles a single key press. Returns true if a value changed.
    pub fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Digit1 => self.selected = ControlSlot::Zoom,
            Key::Digit2 => self.selected = ControlSlot::Blob,
            Key::Digit3 => self.selected = ControlSlot::Spike,
            Key::Digit4 => self.selected = ControlSlot::Hue,
            Key::ArrowUp => return self.nudge(NUDGE_STEP),
            Key::ArrowDown => return self.nudge(-NUDGE_STEP),
            Key::R => {
                self.values = SceneControls::default();
                return true;
            }
            _ => {}
        }
        false
    }

    fn nudge(&mut self, step: f32) -> bool {
        let v = &mut self.values;
        match self.selected {
            ControlSlot::Zoom => v.zoom = (v.zoom + step).clamp(0.0, 1.0),
            ControlSlot::Blob => v.blob = (v.blob + step).clamp(0.0, 1.0),
            ControlSlot::Spike => v.spike = (v.spike + step).clamp(0.0, 1.0),
            ControlSlot::Hue => v.hue = (v.hue + step).rem_euclid(1.0),
        }
        true
    }
}
