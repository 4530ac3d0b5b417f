use ggez::glam::Vec2;
use ggez::graphics::Rect;

use crate::chimp::Chimp;
use crate::fist::Fist;
use crate::input::PlayerAction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    Running,
    /// Terminal: no further ticks or draws.
    Stopped,
}

/// Which sound effect a processed punch asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCue {
    Punch,
    Whiff,
}

/// The whole simulation: both entities plus the loop phase. Pure state, no
/// handles to the display or audio, so every transition is testable directly.
pub struct GameState {
    pub fist: Fist,
    pub chimp: Chimp,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(fist_bounds: Rect, chimp_bounds: Rect, area: Rect) -> Self {
        Self {
            fist: Fist::new(fist_bounds),
            chimp: Chimp::new(chimp_bounds, area),
            phase: GamePhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Advance one fixed tick: apply the queued actions in arrival order, then
    /// move both entities. A quit action stops the game mid-queue; nothing
    /// else runs that tick. Returned cues are played by the caller.
    pub fn tick(
        &mut self,
        actions: impl IntoIterator<Item = PlayerAction>,
        pointer: Vec2,
    ) -> Vec<SoundCue> {
        let mut cues = Vec::new();
        for action in actions {
            match action {
                PlayerAction::Quit => {
                    self.phase = GamePhase::Stopped;
                    return cues;
                }
                PlayerAction::Punch => {
                    if self.fist.punch(self.chimp.rect) {
                        cues.push(SoundCue::Punch);
                        self.chimp.punched();
                    } else {
                        cues.push(SoundCue::Whiff);
                    }
                }
                PlayerAction::Retract => self.fist.unpunch(),
            }
        }
        self.fist.update(pointer);
        self.chimp.update();
        cues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chimp::ChimpState;

    const AREA: Rect = Rect::new(0.0, 0.0, 468.0, 60.0);
    const POINTER: Vec2 = Vec2::new(200.0, 30.0);

    fn state() -> GameState {
        // Fist starts over the chimp's spawn position.
        GameState::new(
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 40.0, 40.0),
            AREA,
        )
    }

    #[test]
    fn landed_punch_cues_punch_sound_and_dizzies_the_chimp() {
        let mut state = state();
        let cues = state.tick([PlayerAction::Punch], POINTER);
        assert_eq!(cues, vec![SoundCue::Punch]);
        // The chimp spun once by the end of the tick.
        assert_eq!(state.chimp.state, ChimpState::Dizzy { angle: 12.0 });
    }

    #[test]
    fn missed_punch_cues_whiff_and_leaves_the_chimp_walking() {
        let mut state = state();
        state.fist.rect.x = 400.0;
        let cues = state.tick([PlayerAction::Punch], POINTER);
        assert_eq!(cues, vec![SoundCue::Whiff]);
        assert_eq!(state.chimp.state, ChimpState::Walking);
    }

    #[test]
    fn second_punch_without_retract_is_a_whiff() {
        let mut state = state();
        state.tick([PlayerAction::Punch], POINTER);
        // Keep the fist over the chimp; the punch is still held.
        state.fist.rect = state.chimp.rect;
        let cues = state.tick([PlayerAction::Punch], POINTER);
        assert_eq!(cues, vec![SoundCue::Whiff]);
    }

    #[test]
    fn retract_rearms_the_fist_within_one_tick() {
        let mut state = state();
        state.tick([PlayerAction::Punch], POINTER);
        state.fist.rect = state.chimp.rect;
        let cues = state.tick([PlayerAction::Retract, PlayerAction::Punch], POINTER);
        assert_eq!(cues, vec![SoundCue::Punch]);
    }

    #[test]
    fn quit_stops_the_game_before_entity_updates() {
        let mut state = state();
        let fist_before = state.fist.rect;
        let chimp_before = state.chimp.rect;
        let cues = state.tick([PlayerAction::Punch, PlayerAction::Quit], POINTER);
        assert_eq!(cues, vec![SoundCue::Punch]);
        assert!(!state.is_running());
        assert_eq!(state.fist.rect, fist_before);
        assert_eq!(state.chimp.rect, chimp_before);
    }

    #[test]
    fn thirty_ticks_after_a_hit_the_chimp_walks_again() {
        let mut state = state();
        state.tick([PlayerAction::Punch], POINTER);
        for _ in 0..29 {
            state.tick([], POINTER);
        }
        assert_eq!(state.chimp.state, ChimpState::Walking);
    }

    #[test]
    fn idle_tick_tracks_the_pointer() {
        let mut state = state();
        state.tick([], POINTER);
        assert_eq!(state.fist.rect.x, POINTER.x - 10.0);
        assert_eq!(state.fist.rect.y, POINTER.y);
    }
}
