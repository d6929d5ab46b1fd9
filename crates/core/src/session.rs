//! Game session - the complete state machine
//!
//! Ties together board, pieces, RNG, and scoring. The session is purely
//! call/response: an external driver invokes `tick` on a cadence derived
//! from the level and feeds it commands; every call returns after a
//! synchronous state update. States run Ready -> Running <-> Paused, with
//! GameOver terminal until the next `start`.

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::SimpleRng;
use crate::scoring::{level_for_lines, line_clear_score};
use crate::snapshot::{PieceView, SessionSnapshot};
use blockfall_types::Command;

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a session in the Ready state with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether gameplay commands currently have any effect
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// (Re)start: reset board and counters, draw a next piece, spawn it
    /// as current. Valid from Ready and GameOver; calling it mid-game
    /// restarts from scratch.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.current = None;
        self.next = Some(Piece::random(&mut self.rng));
        self.spawn();
    }

    /// Gravity step (soft drop): move the current piece down one row, or
    /// land it when the row below is blocked. No-op unless Running.
    pub fn tick(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if piece.collision(&self.board, 0, 1) {
            self.land();
        } else {
            piece.y += 1;
        }
        true
    }

    /// Move one column left; silently rejected on collision
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Move one column right; silently rejected on collision
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if piece.collision(&self.board, dx, 0) {
            return false;
        }
        piece.x += dx;
        true
    }

    /// Rotate the current piece clockwise; silently rejected when the
    /// rotated shape would not fit
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.rotate(&self.board)
    }

    /// Drop the current piece to the lowest free position and land it in
    /// one step
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        while !piece.collision(&self.board, 0, 1) {
            piece.y += 1;
        }
        self.land();
        true
    }

    /// Running <-> Paused; a no-op in Ready and GameOver
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Dispatch a command from the input collaborator
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => {
                self.start();
                true
            }
            Command::Tick => self.tick(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
        }
    }

    /// Merge the current piece into the board, clear full rows, apply
    /// scoring, and spawn the next piece
    fn land(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.merge(&piece);
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            // Points use the level in effect when the rows cleared; the
            // level advances afterwards
            self.score += line_clear_score(cleared, self.level);
            self.level = level_for_lines(self.lines);
        }
        self.spawn();
    }

    /// Promote the queued piece to current and queue a fresh draw. A
    /// spawn that immediately overlaps board contents ends the game; the
    /// colliding piece stays in place for the renderer.
    fn spawn(&mut self) {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => Piece::random(&mut self.rng),
        };
        self.next = Some(Piece::random(&mut self.rng));
        if piece.collision(&self.board, 0, 0) {
            self.game_over = true;
        }
        self.current = Some(piece);
    }

    /// Write the observable state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_grid(&mut out.board);
        out.current = self.current.as_ref().map(PieceView::from);
        out.next = self.next.as_ref().map(PieceView::from);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Produce a fresh snapshot of the observable state
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
