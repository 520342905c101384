//! This crate contains the game logic for heartmaze, a terminal maze that ends with a question.
//!
//! A perfect maze is carved at random and walked with the arrow keys or `wasd`. Reaching the goal
//! brings up a proposal whose "No" button refuses to be chosen, and answering "Yes" sets off a
//! burst of confetti.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod audio;
mod config;
mod confetti;
mod events;
mod guard;
mod logging;
mod maze;
mod proposal;
mod session;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use guard::TerminalGuard;
pub use logging::init as init_logging;
