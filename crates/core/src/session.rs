//! Game session - the `Running`/`GameOver` state machine.
//!
//! A session is an explicit owned object: grid, active piece, score, RNG,
//! and phase. The caller owns the clock and drives gravity with [`GameSession::step`];
//! key events arrive through [`GameSession::apply_action`]. Both are plain
//! synchronous calls, so a test harness can run whole games without timers.

use blockfall_types::{
    GameAction, Phase, PieceKind, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, POINTS_PER_LINE,
};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::SimpleRng;

/// Session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            seed: 1,
        }
    }
}

/// Outcome of one gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Session is not running; nothing advanced.
    Idle,
    /// The active piece descended one row.
    Descended,
    /// The piece landed and merged; `lines` rows collapsed.
    Locked { lines: u32 },
    /// A fresh spawn had no room; the session is over.
    GameOver { final_score: u32 },
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    active: Option<Piece>,
    score: u32,
    rng: SimpleRng,
    phase: Phase,
    started: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            active: None,
            score: 0,
            rng: SimpleRng::new(config.seed),
            phase: Phase::Running,
            started: false,
        }
    }

    /// Begin or restart the session: empty grid, zero score, fresh piece.
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.phase = Phase::Running;
        self.started = true;
        self.active = None;
        self.spawn_piece();
    }

    /// Force the terminal phase (external session control).
    pub fn end(&mut self) {
        self.phase = Phase::GameOver;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.started && self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Draw a kind uniformly at random and place it at the spawn position.
    /// A blocked spawn ends the session and leaves the grid untouched.
    fn spawn_piece(&mut self) -> bool {
        let kind = *self.rng.pick(&PieceKind::ALL);
        let piece = Piece::spawn(kind, self.grid.cols());

        if self.grid.collides(&piece) {
            self.phase = Phase::GameOver;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// One gravity tick: advance the active piece a row, or lock it, clear
    /// lines, and spawn the next piece.
    pub fn step(&mut self) -> StepResult {
        if !self.is_running() {
            return StepResult::Idle;
        }
        let Some(active) = self.active.clone() else {
            return StepResult::Idle;
        };

        let dropped = active.translated(0, 1);
        if !self.grid.collides(&dropped) {
            self.active = Some(dropped);
            return StepResult::Descended;
        }

        // The piece rests where it is, one row above the collision.
        self.grid.merge(&active);
        self.active = None;

        let lines = self.grid.remove_lines() as u32;
        self.score += POINTS_PER_LINE * lines;

        if self.spawn_piece() {
            StepResult::Locked { lines }
        } else {
            StepResult::GameOver {
                final_score: self.score,
            }
        }
    }

    /// Apply one key event. Movement and rotation go through
    /// candidate-validate-commit: a colliding candidate is discarded and the
    /// active piece stays exactly as it was. Returns whether the mutation
    /// committed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.start();
                true
            }
            GameAction::End => {
                self.end();
                true
            }
            _ if !self.is_running() => false,
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active.clone() else {
            return false;
        };

        let moved = active.translated(dx, dy);
        if self.grid.collides(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.clone() else {
            return false;
        };

        let rotated = active.rotated();
        if self.grid.collides(&rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
