//! Core game logic - pure, deterministic, and testable
//!
//! Everything the falling-block simulation needs and nothing it does not:
//! no UI, no I/O, no timers. An external driver owns the tick cadence and
//! all rendering, and talks to [`GameSession`] through commands and
//! queries; every call returns after a synchronous state update.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with occupancy queries and line clearing
//! - [`pieces`]: tetromino catalog, shape matrices, rotation, collision
//! - [`session`]: the Ready/Running/Paused/GameOver state machine
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear points, level progression, drop cadence
//! - [`snapshot`]: per-frame view of the observable state
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//!
//! let mut session = GameSession::new(12345);
//! session.start();
//!
//! session.move_left();
//! session.rotate();
//! session.hard_drop();
//!
//! assert!(session.current().is_some());
//! assert!(!session.game_over());
//! ```
//!
//! Rotation carries no wall kicks: a rotation that would overlap a wall
//! or stacked cells is silently rejected, matching the original game.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use pieces::{base_shape, Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use session::GameSession;
pub use snapshot::{PieceView, SessionSnapshot};
