#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;
use mathdoku::puzzle::Puzzle;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    for i in 0..options.count() {
        if options.count() > 1 {
            println!("Puzzle {}/{}", i + 1, options.count());
        }
        let puzzle = match options.seed() {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(i)));
                Puzzle::generate_with_rng(options.width(), &mut rng)?
            }
            None => Puzzle::generate(options.width())?,
        };
        print_puzzle(&puzzle);
        if options.show_solution() {
            println!("{}", puzzle.solution());
        }
    }
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    let cages = puzzle
        .cages()
        .iter()
        .enumerate()
        .map(|(i, cage)| {
            format!(
                " {:>2}: {}{}",
                i,
                cage.operator().symbol().unwrap_or(' '),
                cage.target()
            )
        })
        .join("\n");
    println!("{}{}", puzzle.cage_ids(), cages);
}
