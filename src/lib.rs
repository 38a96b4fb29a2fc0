//! Generate Mathdoku (KenKen-style) arithmetic cage puzzles
//!
//! A puzzle is built in two passes: a backtracking search fills the grid
//! with a random Latin square, then the filled grid is partitioned into
//! cages, each tagged with an operator and a target number.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

pub mod collections;
pub mod error;
pub mod puzzle;
