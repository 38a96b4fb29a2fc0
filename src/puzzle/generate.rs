//! Puzzle generation
//!
//! Generation runs in two passes over one grid of cells: a backtracking
//! search fills the value layer with a Latin square, then a row-major
//! scan partitions the cells into cages.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::square::{Coord, Square};
use crate::puzzle::{Cage, Cell, Extents, Operator, Puzzle, Value};

pub(crate) fn generate_puzzle<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Puzzle {
    let mut cells = Square::with_width_and_value(width, Cell::default());
    let filled = fill(&mut cells, 0, rng);
    debug_assert!(filled, "a latin square exists for every width");
    debug!("solution:\n{}", cells.map(|cell| cell.value));
    let cages = assign_cages(&mut cells, rng);
    debug!("placed {} cages", cages.len());
    Puzzle::new(cells, cages)
}

/// Fills cells from `index` onward so that the grid is a Latin square,
/// trying candidate values in random order. Returns false if no value
/// fits at `index`, leaving the cell unfilled for the caller to backtrack.
fn fill<R: Rng + ?Sized>(cells: &mut Square<Cell>, index: usize, rng: &mut R) -> bool {
    if index == cells.len() {
        return true;
    }
    let mut candidates = (1..=cells.width() as Value).collect::<Vec<_>>();
    candidates.shuffle(rng);
    for value in candidates {
        cells[index].value = value;
        if placement_valid(cells, index) && fill(cells, index + 1, rng) {
            return true;
        }
    }
    cells[index].value = 0;
    false
}

/// Whether the value just placed at `index` is unique within its row and
/// column. Cells before `index` form a valid partial square and cells
/// after it are unfilled, so checking the placed cell's two vectors is
/// equivalent to revalidating the whole grid.
fn placement_valid(cells: &Square<Cell>, index: usize) -> bool {
    let width = cells.width();
    let (row, col) = (index / width, index % width);
    let value = cells[index].value;
    let row_count = (0..width)
        .filter(|&c| cells[row * width + c].value == value)
        .count();
    let col_count = (0..width)
        .filter(|&r| cells[r * width + col].value == value)
        .count();
    row_count == 1 && col_count == 1
}

/// Partitions the grid into cages. Scans in row-major order; each uncaged
/// cell becomes the hinge of a new cage chosen uniformly from the legal
/// shapes at that cell. Arms only ever claim cells at larger row-major
/// indices, so a visited cell is always already caged.
fn assign_cages<R: Rng + ?Sized>(cells: &mut Square<Cell>, rng: &mut R) -> Vec<Cage> {
    let mut cages: Vec<Cage> = Vec::new();
    for index in 0..cells.len() {
        if cells[index].cage_id.is_some() {
            continue;
        }
        let hinge = cells.coord_at(index);
        let mut candidates = possible_cages(cells, hinge, rng);
        let choice = rng.gen_range(0, candidates.len());
        let cage = candidates.swap_remove(choice);
        let cage_id = cages.len();
        for &cell_id in cage.cell_ids() {
            debug_assert!(cells[cell_id].cage_id.is_none());
            cells[cell_id].cage_id = Some(cage_id);
        }
        cages.push(cage);
    }
    cages
}

/// All structurally legal cage shapes hinged at `hinge`, each returned as
/// a fully built cage.
///
/// For every direction with a hinge-inclusive free run of M cells, pure
/// arms of extent 1 to M - 1 are offered, each also combined into L-shapes
/// with an equal extent in a perpendicular direction where that fits. The
/// hinge-only cage is always included, so the result is never empty.
fn possible_cages<R: Rng + ?Sized>(
    cells: &Square<Cell>,
    hinge: Coord,
    rng: &mut R,
) -> Vec<Cage> {
    let max_up = max_extent(cells, hinge, -1, 0);
    let max_down = max_extent(cells, hinge, 1, 0);
    let max_left = max_extent(cells, hinge, 0, -1);
    let max_right = max_extent(cells, hinge, 0, 1);
    let mut shapes = Vec::new();
    for e in 1..max_up {
        if e <= max_left {
            shapes.push(Extents { up: e, left: e, ..Extents::NONE });
        }
        if e <= max_right {
            shapes.push(Extents { up: e, right: e, ..Extents::NONE });
        }
        shapes.push(Extents { up: e, ..Extents::NONE });
    }
    for e in 1..max_down {
        if e <= max_left {
            shapes.push(Extents { down: e, left: e, ..Extents::NONE });
        }
        if e <= max_right {
            shapes.push(Extents { down: e, right: e, ..Extents::NONE });
        }
        shapes.push(Extents { down: e, ..Extents::NONE });
    }
    for e in 1..max_left {
        if e <= max_up {
            shapes.push(Extents { left: e, up: e, ..Extents::NONE });
        }
        if e <= max_down {
            shapes.push(Extents { left: e, down: e, ..Extents::NONE });
        }
        shapes.push(Extents { left: e, ..Extents::NONE });
    }
    for e in 1..max_right {
        if e <= max_up {
            shapes.push(Extents { right: e, up: e, ..Extents::NONE });
        }
        if e <= max_down {
            shapes.push(Extents { right: e, down: e, ..Extents::NONE });
        }
        shapes.push(Extents { right: e, ..Extents::NONE });
    }
    shapes.push(Extents::NONE);
    shapes
        .into_iter()
        .map(|extents| build_cage(cells, hinge, extents, rng))
        .collect()
}

/// The hinge-inclusive run of uncaged cells from `hinge` in one direction,
/// stopping at the board edge or the first caged cell
fn max_extent(cells: &Square<Cell>, hinge: Coord, delta_row: isize, delta_col: isize) -> usize {
    let width = cells.width() as isize;
    let mut row = hinge.row() as isize;
    let mut col = hinge.col() as isize;
    let mut run = 0;
    while (0..width).contains(&row) && (0..width).contains(&col) {
        let coord = Coord::new(col as usize, row as usize);
        if cells[coord].cage_id.is_some() {
            break;
        }
        run += 1;
        row += delta_row;
        col += delta_col;
    }
    run
}

/// Materializes the cage at `hinge` with the given arm extents: collects
/// the member cells and values, picks an operator, and computes the target.
fn build_cage<R: Rng + ?Sized>(
    cells: &Square<Cell>,
    hinge: Coord,
    extents: Extents,
    rng: &mut R,
) -> Cage {
    let width = cells.width();
    let hinge_id = hinge.row() * width + hinge.col();
    let mut cell_ids = vec![hinge_id];
    cell_ids.extend((1..extents.left).map(|i| hinge_id - i));
    cell_ids.extend((1..extents.right).map(|i| hinge_id + i));
    cell_ids.extend((1..extents.up).map(|i| hinge_id - i * width));
    cell_ids.extend((1..extents.down).map(|i| hinge_id + i * width));
    let mut values = cell_ids
        .iter()
        .map(|&id| cells[id].value)
        .collect::<Vec<_>>();
    let operator = random_operator(values.len(), rng);
    if let Operator::Subtract | Operator::Divide = operator {
        // descending order keeps the folded target non-negative
        values.sort_unstable_by(|a, b| b.cmp(a));
    }
    let target = fold_target(operator, &values);
    Cage::new(hinge, extents, cell_ids, values, operator, target)
}

/// Picks an operator for a cage of `size` cells. Two-cell cages may use
/// any operator; larger cages only the commutative ones; a single cell
/// has no operator.
fn random_operator<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Operator {
    match size {
        1 => Operator::Nop,
        2 => *[
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
        .choose(rng)
        .unwrap(),
        _ => *[Operator::Add, Operator::Multiply].choose(rng).unwrap(),
    }
}

/// Left-to-right fold of the operator over the cage values
fn fold_target(operator: Operator, values: &[Value]) -> Value {
    match operator {
        Operator::Add => values.iter().sum(),
        Operator::Multiply => values.iter().product(),
        Operator::Subtract => values.iter().skip(1).fold(values[0], |a, &b| a - b),
        Operator::Divide => values.iter().skip(1).fold(values[0], |a, &b| a / b),
        Operator::Nop => values[0],
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn square_of_values(values: Vec<Value>) -> Square<Cell> {
        Square::try_from(values).unwrap().map(|&value| Cell {
            value,
            cage_id: None,
        })
    }

    #[test]
    fn fill_produces_latin_square() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cells = Square::with_width_and_value(4, Cell::default());
        assert!(fill(&mut cells, 0, &mut rng));
        for row in 0..4usize {
            let mut values = (0..4).map(|col| cells[row * 4 + col].value).collect::<Vec<_>>();
            values.sort_unstable();
            assert_eq!(vec![1, 2, 3, 4], values);
        }
        for col in 0..4usize {
            let mut values = (0..4).map(|row| cells[row * 4 + col].value).collect::<Vec<_>>();
            values.sort_unstable();
            assert_eq!(vec![1, 2, 3, 4], values);
        }
    }

    #[test]
    fn placement_rejects_row_duplicate() {
        let mut cells = square_of_values(vec![1, 2, 3, 0, 0, 0, 0, 0, 0]);
        cells[3_usize].value = 2;
        assert!(placement_valid(&cells, 3));
        cells[4_usize].value = 2;
        assert!(!placement_valid(&cells, 4));
    }

    #[test]
    fn placement_rejects_column_duplicate() {
        let mut cells = square_of_values(vec![1, 2, 3, 0, 0, 0, 0, 0, 0]);
        cells[3_usize].value = 1;
        assert!(!placement_valid(&cells, 3));
    }

    #[test]
    fn max_extent_stops_at_edge_and_caged_cells() {
        let mut cells = square_of_values(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]);
        let hinge = Coord::new(0, 0);
        assert_eq!(1, max_extent(&cells, hinge, -1, 0));
        assert_eq!(3, max_extent(&cells, hinge, 1, 0));
        assert_eq!(3, max_extent(&cells, hinge, 0, 1));
        cells[Coord::new(2, 0)].cage_id = Some(0);
        assert_eq!(2, max_extent(&cells, hinge, 0, 1));
    }

    #[test]
    fn singleton_shape_always_offered() {
        let mut cells = square_of_values(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]);
        // cage everything but the last cell
        for index in 0..8usize {
            cells[index].cage_id = Some(0);
        }
        let mut rng = StdRng::seed_from_u64(2);
        let cages = possible_cages(&cells, Coord::new(2, 2), &mut rng);
        assert_eq!(1, cages.len());
        assert_eq!(Extents::NONE, cages[0].extents());
        assert_eq!(&[8], cages[0].cell_ids());
    }

    #[test]
    fn shapes_stay_on_uncaged_cells() {
        let cells = square_of_values(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]);
        let mut rng = StdRng::seed_from_u64(3);
        let cages = possible_cages(&cells, Coord::new(0, 0), &mut rng);
        // down and right runs of 3 each yield extents 1 and 2
        assert_eq!(11, cages.len());
        for cage in &cages {
            assert!(cage.cell_ids().iter().all(|&id| id < 9));
        }
    }

    #[test]
    fn cage_values_walk_the_arms() {
        let cells = square_of_values(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]);
        let mut rng = StdRng::seed_from_u64(4);
        let extents = Extents {
            down: 3,
            right: 2,
            ..Extents::NONE
        };
        let cage = build_cage(&cells, Coord::new(0, 0), extents, &mut rng);
        assert_eq!(&[0, 1, 3, 6], cage.cell_ids());
        assert_eq!(4, cage.size());
        assert_eq!(&[1, 2, 2, 3], cage.values());
        // operator is + or * for a 4-cell cage
        match cage.operator() {
            Operator::Add => assert_eq!(8, cage.target()),
            Operator::Multiply => assert_eq!(12, cage.target()),
            operator => panic!("unexpected operator {:?}", operator),
        }
    }

    #[test]
    fn singleton_cage_has_no_operator() {
        let cells = square_of_values(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]);
        let mut rng = StdRng::seed_from_u64(5);
        let cage = build_cage(&cells, Coord::new(1, 1), Extents::NONE, &mut rng);
        assert_eq!(Operator::Nop, cage.operator());
        assert_eq!(3, cage.target());
    }

    #[test]
    fn fold_targets() {
        assert_eq!(7, fold_target(Operator::Add, &[1, 2, 4]));
        assert_eq!(8, fold_target(Operator::Multiply, &[1, 2, 4]));
        assert_eq!(3, fold_target(Operator::Subtract, &[5, 2]));
        assert_eq!(2, fold_target(Operator::Divide, &[6, 3]));
        assert_eq!(4, fold_target(Operator::Nop, &[4]));
    }
}
