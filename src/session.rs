//! Navigation state machine for a single playthrough.
//!
//! A [`Session`] owns the maze it was started with and tracks where the player stands. It goes
//! from [`State::Playing`] to [`State::Won`] exactly once, when the player steps onto the goal,
//! after which the position is frozen. The session never plays anything itself, it only reports
//! the [`Ambience`] cues its transitions call for.

use log::{debug, info};

use crate::{
    audio::Ambience,
    maze::{Cell, Grid},
    types::{Direction, Position},
};

/// Progress of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// The goal has not been reached yet.
    Playing,
    /// The goal has been reached. Terminal.
    Won,
}

/// What a single movement attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The player moved onto an open or start cell.
    Moved,
    /// The target was a wall or outside the grid; nothing changed.
    Blocked,
    /// The player moved onto the goal and the session is now won.
    Won,
    /// The session was already won; nothing changed.
    Frozen,
}

/// Result of a movement attempt, along with the ambience cues it calls for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    /// What the attempt did to the session.
    pub(crate) outcome: Outcome,
    /// Ambience cues to fire, in order.
    pub(crate) cues: Vec<Ambience>,
}

/// One playthrough over a fixed maze.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    /// The maze being walked. Never modified during the session.
    grid: Grid,
    /// Current player coordinates, always on a non-wall cell.
    position: Position,
    /// Current progress.
    state: State,
    /// Whether a directional input has been seen yet.
    ambience_started: bool,
}

impl Session {
    /// Starts a session on `grid` with the player on the start cell.
    pub(crate) fn new(grid: Grid) -> Self {
        let position = grid.start();
        debug!(
            "session started on a {}x{} maze at {position:?}",
            grid.rows(),
            grid.cols()
        );

        Self {
            grid,
            position,
            state: State::Playing,
            ambience_started: false,
        }
    }

    /// The maze of this session.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player coordinates.
    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    /// Current progress.
    pub(crate) const fn state(&self) -> State {
        self.state
    }

    /// Whether the goal has been reached.
    pub(crate) fn is_won(&self) -> bool {
        self.state() == State::Won
    }

    /// Whether the ambience has been cued to start during this session.
    pub(crate) const fn ambience_started(&self) -> bool {
        self.ambience_started
    }

    /// Attempts to move the player one cell in `direction`.
    ///
    /// Moves into walls or out of the grid are no-ops, as is any move once the session is won.
    /// The first call of a session cues the ambience to start regardless of its outcome, and the
    /// call that reaches the goal cues it to stop.
    pub(crate) fn step(&mut self, direction: Direction) -> Step {
        let mut cues = Vec::new();
        if !self.ambience_started {
            self.ambience_started = true;
            cues.push(Ambience::Start);
        }

        if self.state == State::Won {
            return Step {
                outcome: Outcome::Frozen,
                cues,
            };
        }

        let target = self
            .position
            .offset(direction, 1)
            .and_then(|target| self.grid.cell(target).map(|cell| (target, cell)));

        let outcome = match target {
            None | Some((_, Cell::Wall)) => Outcome::Blocked,
            Some((target, Cell::Goal)) => {
                self.position = target;
                self.state = State::Won;
                cues.push(Ambience::Stop);
                info!("goal reached at {target:?}");
                Outcome::Won
            }
            Some((target, Cell::Open | Cell::Start)) => {
                self.position = target;
                Outcome::Moved
            }
        };

        Step { outcome, cues }
    }
}
