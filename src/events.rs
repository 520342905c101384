//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{Direction, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the handler of the current
/// screen. It uses a timeout to avoid blocking the UI, so the confetti keeps falling while no key
/// is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    app.confetti.update();

    Ok(())
}

/// Dispatches a single key press.
///
/// `q` and `Esc` quit from any screen. Every other key is interpreted by the current screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        app.exit = true;
        return Ok(());
    }

    match app.screen {
        Screen::Maze => handle_maze_key(app, code),
        Screen::Proposal => handle_proposal_key(app, code),
        Screen::Celebration => handle_celebration_key(app, code)?,
    }

    Ok(())
}

/// Handles key presses while walking the maze.
///
/// Arrow keys and `wasd` move the player. Anything else is ignored.
pub(crate) fn handle_maze_key(app: &mut App, code: KeyCode) {
    if let Some(direction) = Direction::from_key(code) {
        app.walk(direction);
    }
}

/// Handles key presses while the proposal prompt is up.
///
/// Moving the focus reaches for "No", which runs away. Confirming answers "Yes". Any other key
/// brings "No" back beside "Yes".
pub(crate) fn handle_proposal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::Char('a' | 'd' | 'h' | 'l') => app.proposal.on_proximity(&mut app.rng),
        KeyCode::Enter | KeyCode::Char('y' | ' ') => app.accept(),
        _ => app.proposal.reset_no(),
    }
}

/// Handles key presses on the celebration screen.
///
/// `r` starts a new session.
pub(crate) fn handle_celebration_key(app: &mut App, code: KeyCode) -> Result<()> {
    if code == KeyCode::Char('r') {
        app.restart()?;
    }

    Ok(())
}
