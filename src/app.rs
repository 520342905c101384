//! Core application state and logic for the game.

use std::io;

use color_eyre::eyre::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    audio::{self, Ambience, Audio, Bell, Silent},
    config::Config,
    confetti::Confetti,
    events, maze,
    proposal::Proposal,
    session::{Outcome, Session},
    types::{Direction, Screen},
    ui,
};

/// Application state container for the game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Current playthrough.
    ///
    /// This field holds the maze being walked along with the player's position in it. A new
    /// session is started every time the player chooses to play again.
    pub(crate) session: Session,
    /// Question asked once the maze is solved.
    pub(crate) proposal: Proposal,
    /// Confetti burst played over the celebration screen.
    pub(crate) confetti: Confetti,
    /// Sink for sound cues.
    pub(crate) audio: Box<dyn Audio>,
    /// Random source shared by maze generation, the evasive button and the confetti.
    pub(crate) rng: StdRng,
    /// Requested maze rows.
    pub(crate) rows: usize,
    /// Requested maze columns.
    pub(crate) cols: usize,
    /// Whether playing again keeps the current maze.
    pub(crate) reuse_maze: bool,
}

impl App {
    /// Creates the application from its configuration and generates the first maze.
    ///
    /// # Errors
    ///
    /// Fails if the configured maze dimensions are rejected by the generator.
    pub fn new(config: &Config) -> Result<Self> {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let audio: Box<dyn Audio> = if config.mute {
            Box::new(Silent)
        } else {
            Box::new(Bell::new(io::stdout()))
        };

        Self::with_parts(
            usize::from(config.rows),
            usize::from(config.cols),
            config.reuse_maze,
            rng,
            audio,
        )
    }

    /// Assembles the application from already-built collaborators.
    pub(crate) fn with_parts(
        rows: usize,
        cols: usize,
        reuse_maze: bool,
        mut rng: StdRng,
        audio: Box<dyn Audio>,
    ) -> Result<Self> {
        let grid = maze::generate(rows, cols, &mut rng)?;

        Ok(Self {
            exit: false,
            screen: Screen::Maze,
            session: Session::new(grid),
            proposal: Proposal::new(),
            confetti: Confetti::new(),
            audio,
            rng,
            rows,
            cols,
            reuse_maze,
        })
    }

    /// Plain-text rendering of the current maze.
    pub fn maze_text(&self) -> String {
        self.session.grid().to_string()
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the app is [finished](Self::finish) and the
    /// function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }
        self.finish();

        Ok(())
    }

    /// Tears down the current session, silencing the ambience if play started but never reached
    /// the goal.
    pub(crate) fn finish(&mut self) {
        if self.session.ambience_started() && !self.session.is_won() {
            audio::fire("ambience", self.audio.ambience(Ambience::Stop));
        }
    }

    /// Moves the player and fires whatever the move calls for.
    pub(crate) fn walk(&mut self, direction: Direction) {
        let step = self.session.step(direction);
        for cue in step.cues {
            audio::fire("ambience", self.audio.ambience(cue));
        }

        if step.outcome == Outcome::Won {
            self.proposal = Proposal::new();
            self.screen = Screen::Proposal;
        }
    }

    /// Confirms the proposal, bursting the confetti and playing the confirmation sound once.
    pub(crate) fn accept(&mut self) {
        if !self.proposal.accept() {
            return;
        }

        info!(
            "proposal accepted after the no button ran away {} times",
            self.proposal.evasions()
        );
        self.confetti.burst(&mut self.rng);
        audio::fire("confirmation sound", self.audio.confirmation());
        self.screen = Screen::Celebration;
    }

    /// Starts a new session, on a fresh maze unless the current one is to be reused.
    ///
    /// # Errors
    ///
    /// Fails if a new maze cannot be generated.
    pub(crate) fn restart(&mut self) -> Result<()> {
        let grid = if self.reuse_maze {
            self.session.grid().clone()
        } else {
            maze::generate(self.rows, self.cols, &mut self.rng)?
        };

        self.session = Session::new(grid);
        self.proposal = Proposal::new();
        self.confetti.clear();
        self.screen = Screen::Maze;

        Ok(())
    }
}
