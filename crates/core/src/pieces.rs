//! Pieces module - tetromino catalog, shape matrices, and rotation
//!
//! A shape is the rectangular boolean matrix over the piece's bounding
//! box, in the canonical rotation-0 form of the classic seven pieces.
//! Clockwise rotation is a transpose with reversed row order. A rotation
//! that would overlap a wall or stacked cells is rejected in place; there
//! is no wall-kick adjustment, so rotation simply fails near walls and
//! obstacles.

use crate::board::Board;
use crate::rng::SimpleRng;
use blockfall_types::{TetrominoKind, BOARD_WIDTH};

/// Rectangular boolean matrix marking the occupied cells of a piece's
/// bounding box. Never empty; rotation preserves the occupied count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    fn from_rows(rows: &[&[bool]]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Height of the bounding box
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at (x, y) within the bounding box is occupied
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Iterate the occupied cells as (x, y) offsets within the bounding box
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(x, _)| (x, y))
        })
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&filled| filled).count()
    }

    /// Clockwise rotation: transpose with row order reversed
    pub fn rotated_cw(&self) -> Shape {
        let (width, height) = (self.width(), self.height());
        let rows = (0..width)
            .map(|x| (0..height).rev().map(|y| self.rows[y][x]).collect())
            .collect();
        Shape { rows }
    }
}

/// Canonical rotation-0 matrix for a piece kind
pub fn base_shape(kind: TetrominoKind) -> Shape {
    let rows: &[&[bool]] = match kind {
        TetrominoKind::I => &[&[true, true, true, true]],
        TetrominoKind::O => &[&[true, true], &[true, true]],
        TetrominoKind::T => &[&[false, true, false], &[true, true, true]],
        TetrominoKind::L => &[&[false, false, true], &[true, true, true]],
        TetrominoKind::J => &[&[true, false, false], &[true, true, true]],
        TetrominoKind::S => &[&[false, true, true], &[true, true, false]],
        TetrominoKind::Z => &[&[true, true, false], &[false, true, true]],
    };
    Shape::from_rows(rows)
}

/// Active falling piece: kind, shape matrix, and anchor position of the
/// shape's top-left corner on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: TetrominoKind,
    shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position: centered
    /// horizontally, top row 0
    pub fn new(kind: TetrominoKind) -> Self {
        let shape = base_shape(kind);
        let x = (BOARD_WIDTH as i8 - shape.width() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }

    /// Create a piece of a uniformly random kind from the catalog
    pub fn random(rng: &mut SimpleRng) -> Self {
        let kind = TetrominoKind::ALL[rng.next_range(TetrominoKind::ALL.len() as u32) as usize];
        Self::new(kind)
    }

    /// Shape matrix for the current orientation
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Test whether the piece, moved by (dx, dy), would overlap the board
    /// boundary or occupied cells
    pub fn collision(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.collides_with(board, dx, dy, &self.shape)
    }

    /// Collision test with a candidate shape in place of the current one.
    /// Cells above the top edge (absolute y < 0) are checked against the
    /// side and floor bounds only, never against board contents.
    pub fn collides_with(&self, board: &Board, dx: i8, dy: i8, shape: &Shape) -> bool {
        for (cx, cy) in shape.cells() {
            let nx = self.x + cx as i8 + dx;
            let ny = self.y + cy as i8 + dy;
            if board.is_out_of_bounds(nx, ny) {
                return true;
            }
            if ny >= 0 && board.is_occupied(nx, ny) {
                return true;
            }
        }
        false
    }

    /// Rotate clockwise in place, keeping the anchor. Rejected when the
    /// rotated shape would collide; the shape is left unchanged.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        if self.collides_with(board, 0, 0, &rotated) {
            return false;
        }
        self.shape = rotated;
        true
    }
}
