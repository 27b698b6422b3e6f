//! Attract-mode driver: steers each new piece toward a random column and
//! rotation, then lets gravity do the rest.

use tetris3d::core::{Game, SimpleRng};
use tetris3d::types::GameAction;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: SimpleRng,
    /// Pieces placed when the current plan was made
    planned_for: Option<u32>,
    rotations_left: u32,
    shift: i32,
}

impl Autopilot {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed ^ 0x5eed_a770),
            planned_for: None,
            rotations_left: 0,
            shift: 0,
        }
    }

    /// Next steering action for the active piece, if any is left
    pub fn next_action(&mut self, game: &Game) -> Option<GameAction> {
        if game.is_over() {
            return None;
        }

        if self.planned_for != Some(game.pieces_placed()) {
            self.planned_for = Some(game.pieces_placed());
            self.rotations_left = self.rng.next_range(4);
            let width = game.board().width() as u32;
            self.shift = self.rng.next_range(width) as i32 - (width / 2) as i32;
        }

        if self.rotations_left > 0 {
            self.rotations_left -= 1;
            return Some(GameAction::Rotate);
        }
        match self.shift.signum() {
            -1 => {
                self.shift += 1;
                Some(GameAction::MoveLeft)
            }
            1 => {
                self.shift -= 1;
                Some(GameAction::MoveRight)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris3d::core::GameConfig;

    #[test]
    fn plan_runs_out_then_waits_for_next_piece() {
        let game = Game::new(GameConfig::default()).unwrap();
        let mut pilot = Autopilot::new(9);

        let mut steps = 0;
        while pilot.next_action(&game).is_some() {
            steps += 1;
            assert!(steps < 16, "plan never finished");
        }
        assert_eq!(pilot.next_action(&game), None);
    }
}
