use ggez::input::mouse::MouseButton;
use ggez::input::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Quit,
    Punch,
    Retract,
}

/// Queues discrete input events between ticks, preserving arrival order.
#[derive(Default)]
pub struct InputState {
    pending: Vec<PlayerAction>,
}

impl InputState {
    /// Take everything queued since the last tick.
    pub fn consume_actions(&mut self) -> Option<Vec<PlayerAction>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        if key == KeyCode::Escape {
            self.pending.push(PlayerAction::Quit);
        }
    }

    // Any button punches, matching the single-fist control scheme.
    pub fn process_mouse_down(&mut self, _button: MouseButton) {
        self.pending.push(PlayerAction::Punch);
    }

    pub fn process_mouse_up(&mut self, _button: MouseButton) {
        self.pending.push(PlayerAction::Retract);
    }

    pub fn process_quit(&mut self) {
        self.pending.push(PlayerAction::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_come_out_in_arrival_order() {
        let mut input = InputState::default();
        input.process_mouse_down(MouseButton::Left);
        input.process_key_down(KeyCode::Escape);
        input.process_mouse_up(MouseButton::Left);
        assert_eq!(
            input.consume_actions(),
            Some(vec![
                PlayerAction::Punch,
                PlayerAction::Quit,
                PlayerAction::Retract
            ])
        );
    }

    #[test]
    fn consume_drains_the_queue() {
        let mut input = InputState::default();
        input.process_mouse_down(MouseButton::Left);
        assert!(input.consume_actions().is_some());
        assert_eq!(input.consume_actions(), None);
    }

    #[test]
    fn only_escape_maps_to_quit() {
        let mut input = InputState::default();
        input.process_key_down(KeyCode::Space);
        assert_eq!(input.consume_actions(), None);
        input.process_key_down(KeyCode::Escape);
        assert_eq!(input.consume_actions(), Some(vec![PlayerAction::Quit]));
    }
}
