//! Session phase and the transitions between phases.
//!
//! The machine never polls. The collision pass calls `lose_life` and the
//! front end calls `restart`; both report what happened so the caller can
//! reset the world to match.

use tracing::info;

use crate::entities::Phase;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Request ignored in the current phase.
    None,
    /// A life was spent and play continues; the round must be reset.
    LifeLost { lives_left: u32 },
    /// The last life was spent.
    GameOver { final_score: u32 },
    /// A finished session was started over; the round must be reset.
    Restarted,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,
    pub board: Scoreboard,
    initial_lives: u32,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: Phase::Active,
            board: Scoreboard::new(settings.initial_lives),
            initial_lives: settings.initial_lives,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn lives(&self) -> u32 {
        self.board.lives()
    }

    /// The plane was hit. Going from one life to zero ends the session;
    /// the decrement is applied first so the HUD shows 0 on the final screen.
    pub fn lose_life(&mut self) -> Transition {
        if !self.is_active() {
            return Transition::None;
        }

        self.board.add_lives(-1);
        let lives_left = self.board.lives();
        if lives_left == 0 {
            self.phase = Phase::GameOver;
            self.board.prep_final_score();
            let final_score = self.board.score();
            info!(final_score, "game over");
            return Transition::GameOver { final_score };
        }

        info!(lives_left, "life lost");
        Transition::LifeLost { lives_left }
    }

    /// Start over after a game over. Ignored while a session is running.
    pub fn restart(&mut self) -> Transition {
        if self.is_active() {
            return Transition::None;
        }
        self.board.reset(self.initial_lives);
        self.phase = Phase::Active;
        info!(lives = self.initial_lives, "restarting");
        Transition::Restarted
    }
}
