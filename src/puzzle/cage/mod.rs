pub use self::operator::Operator;

mod operator;

use crate::collections::square::Coord;
use crate::puzzle::{CellId, Value};

/// How far a cage reaches from its hinge in each cardinal direction
///
/// Counting includes the hinge: an extent of 1 reaches only the hinge
/// itself, an extent of k reaches the hinge plus k - 1 cells outward.
/// An extent of 0 means the direction is unused. Up means decreasing
/// row, left means decreasing column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extents {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl Extents {
    /// The extents of a hinge-only cage
    pub const NONE: Extents = Extents {
        up: 0,
        down: 0,
        left: 0,
        right: 0,
    };
}

/// A cage in a Mathdoku puzzle
///
/// Every cell in a puzzle belongs to a cage. Every cage has an operator
/// and a target number that the operator must produce from the cell
/// values. A cage is immutable once built.
#[derive(Debug, PartialEq)]
pub struct Cage {
    /// The anchor cell the arm extents are measured from
    hinge: Coord,

    /// The arm extents of the cage
    extents: Extents,

    /// The positions of the cells in this cage, hinge first
    cell_ids: Box<[CellId]>,

    /// The solution values of the cells, in the order the target folds
    /// over them
    values: Box<[Value]>,

    /// The math operator that must be used with the numbers in the cage
    /// to produce the target number
    operator: Operator,

    /// The target number that must be produced using the numbers in this cage
    target: Value,
}

impl Cage {
    pub(crate) fn new(
        hinge: Coord,
        extents: Extents,
        cell_ids: impl Into<Box<[CellId]>>,
        values: impl Into<Box<[Value]>>,
        operator: Operator,
        target: Value,
    ) -> Self {
        let cage = Self {
            hinge,
            extents,
            cell_ids: cell_ids.into(),
            values: values.into(),
            operator,
            target,
        };
        debug_assert!(!cage.cell_ids.is_empty());
        debug_assert_eq!(cage.cell_ids.len(), cage.values.len());
        cage
    }

    /// The anchor cell of the cage
    pub fn hinge(&self) -> Coord {
        self.hinge
    }

    /// The arm extents measured from the hinge
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// The IDs of the cells in the cage
    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    /// The solution values of the cells in the cage
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The number of cells in the cage
    pub fn size(&self) -> usize {
        self.cell_ids.len()
    }
}
