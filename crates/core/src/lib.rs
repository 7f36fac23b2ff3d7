//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the whole gameplay engine with zero dependencies on
//! UI or I/O. The session is an explicit owned object driven by two plain
//! calls - [`GameSession::step`] for one gravity tick and
//! [`GameSession::apply_action`] for one key event - so a test harness can
//! play entire games without timers or a terminal.
//!
//! # Module structure
//!
//! - [`grid`]: occupancy grid with collision, merge, and line collapse
//! - [`shape`]: 0/1 shape matrices, the piece catalog, clockwise rotation
//! - [`piece`]: the active falling piece
//! - [`rng`]: small LCG for uniform piece selection
//! - [`session`]: the `Running`/`GameOver` state machine tying it together
//!
//! # Game rules
//!
//! - Pieces are drawn uniformly at random from the seven-piece catalog and
//!   spawn horizontally centered on the top row.
//! - Gravity is one row per tick; a piece that cannot descend locks in
//!   place, full rows collapse, and 100 points are awarded per row.
//! - Every move and rotation is candidate-validate-commit: a colliding
//!   candidate is discarded whole, never partially applied.
//! - A blocked spawn ends the session.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SessionConfig};
//! use blockfall_types::GameAction;
//!
//! let mut session = GameSession::new(SessionConfig::default());
//! session.start();
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.step();
//!
//! assert!(session.is_running());
//! ```

pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;

pub use grid::Grid;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use session::{GameSession, SessionConfig, StepResult};
pub use shape::{template, Shape};
