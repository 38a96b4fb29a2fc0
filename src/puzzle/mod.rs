//! Mathdoku puzzles

pub use self::cage::{Cage, Extents, Operator};

mod cage;
mod generate;

use std::fmt;
use std::fmt::Display;

use rand::{thread_rng, Rng};

use crate::collections::square::{AsSquareIndex, Square};
use crate::error::InvalidWidth;

pub type CageId = usize;
pub type CellId = usize;
pub type Value = i32;

/// The smallest supported puzzle width
pub const MIN_WIDTH: usize = 3;

/// One cell of the grid: a solution value and the cage the cell belongs to
///
/// The cage id is a back-reference only; the puzzle owns the cages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    value: Value,
    cage_id: Option<CageId>,
}

impl Cell {
    /// The solution value of the cell (0 while unfilled)
    pub fn value(self) -> Value {
        self.value
    }

    /// The id of the cage containing the cell, absent until the cell is caged
    pub fn cage_id(self) -> Option<CageId> {
        self.cage_id
    }
}

/// A generated Mathdoku puzzle together with its solution
///
/// The cages partition the grid: every cell belongs to exactly one cage.
/// Cage ids are indices into the cage list, assigned in creation order.
#[derive(Debug, PartialEq)]
pub struct Puzzle {
    cells: Square<Cell>,
    cages: Vec<Cage>,
}

impl Puzzle {
    /// Generates a puzzle of the given width using the thread-local RNG
    pub fn generate(width: usize) -> Result<Self, InvalidWidth> {
        Self::generate_with_rng(width, &mut thread_rng())
    }

    /// Generates a puzzle of the given width using the given RNG
    ///
    /// The same width and RNG state always produce the same puzzle.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        width: usize,
        rng: &mut R,
    ) -> Result<Self, InvalidWidth> {
        if width < MIN_WIDTH {
            return Err(InvalidWidth::new(width));
        }
        Ok(generate::generate_puzzle(width, rng))
    }

    pub(crate) fn new(cells: Square<Cell>, cages: Vec<Cage>) -> Self {
        debug_assert!(cells.iter().all(|cell| cell.cage_id.is_some()));
        Self { cells, cages }
    }

    /// The width (and height) of the puzzle
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// The number of cells in the puzzle
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell<I: AsSquareIndex>(&self, index: I) -> Cell {
        self.cells[index]
    }

    /// The solution value at the given cell
    pub fn value<I: AsSquareIndex>(&self, index: I) -> Value {
        self.cells[index].value
    }

    /// The id of the cage containing the given cell
    pub fn cage_id_at<I: AsSquareIndex>(&self, index: I) -> CageId {
        self.cells[index].cage_id.expect("every cell is caged")
    }

    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id]
    }

    /// All cages, indexed by cage id
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// The solution grid, a Latin square
    pub fn solution(&self) -> Square<Value> {
        self.cells.map(|cell| cell.value)
    }

    /// The cage id of every cell
    pub fn cage_ids(&self) -> Square<CageId> {
        self.cells
            .map(|cell| cell.cage_id.expect("every cell is caged"))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width())?;
        for row in self.cells.rows() {
            for cell in row {
                let id = cell.cage_id.expect("every cell is caged");
                let byte = b'A' + (id % 26) as u8;
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        for cage in &self.cages {
            write!(f, "{}", cage.target())?;
            if let Some(symbol) = cage.operator().symbol() {
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
