//! Side-scrolling fighter game: simulation core.
//!
//! Everything here is presentation-free. The binary owns the terminal and
//! feeds `input::InputSnapshot`s into `game::Game::tick`.

pub mod clock;
pub mod collision;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod kinematics;
pub mod registry;
pub mod scoreboard;
pub mod settings;
pub mod spawn;
pub mod state;
