use serde::{Deserialize, Serialize};

use crate::*;

/// Sub-action of the acting team's turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Moving,
    Firing,
}

impl Phase {
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Moving)
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Moving => Self::Firing,
            Self::Firing => Self::Moving,
        }
    }
}

/// Where the game is from the point of view of the input layer.
///
/// Valid transitions:
/// - AwaitingMove -> PieceSelected
/// - PieceSelected -> PieceSelected (switching to another piece)
/// - PieceSelected -> AwaitingMove (deselecting)
/// - PieceSelected -> AwaitingFire
/// - AwaitingFire -> AwaitingMove (next team)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    AwaitingMove(Team),
    PieceSelected(Team, Coord2),
    AwaitingFire(Team),
}

/// Receiver for "the board changed, draw it again" notifications.
pub trait Redraw {
    fn request_redraw(&mut self);
}

/// Redraw sink for callers that poll the board instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoRedraw;

impl Redraw for NoRedraw {
    fn request_redraw(&mut self) {}
}

impl<F: FnMut()> Redraw for F {
    fn request_redraw(&mut self) {
        self()
    }
}

/// Turn and phase bookkeeping on top of a [`Board`].
#[derive(Clone, Debug)]
pub struct GameController<R = NoRedraw> {
    board: Board,
    teams: Team,
    /// Completed move+fire cycles. The acting team is derived from it.
    turn: u32,
    phase: Phase,
    redraw: R,
}

impl GameController {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_redraw(config, NoRedraw)
    }
}

impl<R: Redraw> GameController<R> {
    pub fn with_redraw(config: GameConfig, redraw: R) -> Result<Self> {
        Ok(Self::from_board(Board::new(&config)?, config.teams, redraw))
    }

    /// Starts a game on an already prepared board, with team 0 to move.
    pub fn from_board(board: Board, teams: Team, redraw: R) -> Self {
        let clamped_teams = teams.max(1);
        if clamped_teams != teams {
            log::warn!("A game needs at least one team, using {clamped_teams}");
        }
        Self {
            board,
            teams: clamped_teams,
            turn: 0,
            phase: Phase::Moving,
            redraw,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn teams(&self) -> Team {
        self.teams
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_team(&self) -> Team {
        // the remainder is below `teams`, which is a `Team`
        (self.turn % u32::from(self.teams)) as Team
    }

    pub fn state(&self) -> ControllerState {
        let team = self.current_team();
        match (self.phase, self.board.considering()) {
            (Phase::Moving, None) => ControllerState::AwaitingMove(team),
            (Phase::Moving, Some(piece)) => ControllerState::PieceSelected(team, piece),
            (Phase::Firing, _) => ControllerState::AwaitingFire(team),
        }
    }

    pub fn redraw_sink(&self) -> &R {
        &self.redraw
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Handles a click on `coords` by whoever is due to act.
    pub fn handle_selection(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        let team = self.current_team();
        let outcome = self.board.select(coords, team, self.phase.is_moving())?;

        if outcome.is_complete() {
            if self.phase == Phase::Firing {
                self.turn += 1;
                log::debug!("Turn {} goes to team {}", self.turn, self.current_team());
            }
            self.phase = self.phase.next();
        }

        if outcome.has_update() {
            self.redraw.request_redraw();
        }

        Ok(outcome)
    }
}
