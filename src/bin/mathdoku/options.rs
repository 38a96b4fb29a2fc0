use clap::ArgMatches;

const DEFAULT_PUZZLE_WIDTH: usize = 4;

#[derive(Clone)]
pub(crate) struct Options {
    width: usize,
    count: u32,
    seed: Option<u64>,
    show_solution: bool,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            width: matches.value_of("width").map_or(DEFAULT_PUZZLE_WIDTH, |s| {
                s.parse::<usize>().expect("invalid width")
            }),
            count: matches
                .value_of("count")
                .map_or(1, |s| s.parse::<u32>().expect("invalid count")),
            seed: matches
                .value_of("seed")
                .map(|s| s.parse::<u64>().expect("invalid seed")),
            show_solution: matches.is_present("solution"),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn show_solution(&self) -> bool {
        self.show_solution
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Mathdoku")
        .about("Generate Mathdoku puzzles")
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("WIDTH")
                .help("set the width and height of the generated puzzle"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .help("the number of puzzles to generate"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("seed the random number generator for reproducible output"),
        )
        .arg(
            Arg::with_name("solution")
                .short("s")
                .long("solution")
                .help("print the solution grid after each puzzle"),
        )
}
