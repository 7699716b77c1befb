// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the grid word finder.
//!
//! With no arguments, runs the built-in sample grids. Otherwise searches a
//! single grid given on the command line.
//!
//! # Usage
//!
//! ```bash
//! wordgrid
//! wordgrid --columns 3 --rows 5 --cells "a b x z a b t a b t a b t a b" ab ttt zz
//! RUST_LOG=debug wordgrid --cells "a b c d" ab ac
//! ```

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use word_grid_search::{InvalidShape, WordFinder};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(about = "Report the most frequent words found in a character grid")]
struct Args {
    /// Grid cells in row-major order, separated by whitespace.
    #[arg(long)]
    cells: Option<String>,

    /// Column count; the grid is assumed square when omitted.
    #[arg(long, requires = "rows")]
    columns: Option<usize>,

    /// Row count; the grid is assumed square when omitted.
    #[arg(long, requires = "columns")]
    rows: Option<usize>,

    /// Words to search for.
    words: Vec<String>,
}

/// A sample grid, its explicit shape if not square, and the words to look for.
struct Sample {
    cells: &'static str,
    shape: Option<(usize, usize)>,
    words: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample {
        cells: "a b x t l r w z a b x t l r w z a b x t l r w z a b x t l r w z \
                a b x t l r w z a b x t l r w z a b x t l r w z z w r l t x b a",
        shape: None,
        words: &[
            "abx", "bbb", "abxtlrw", "qypbm", "rwqfdfmnjp", "aa", "aaaaaaa", "b", "bbbb",
            "zwrltxb", "xx", "tt", "ll", "rr", "ww", "zz",
        ],
    },
    Sample {
        cells: "a b x z a b t a b",
        shape: None,
        words: &[
            "", "", "ab", "xb", "bb", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "bb",
            "xb", "az", "bb",
        ],
    },
    Sample {
        cells: "a b x z a b t a b t a b t a b",
        shape: Some((3, 5)),
        words: &[
            "", "", "ab", "xb", "bb", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "ab", "bb",
            "xb", "az", "bb", "tt", "ta", "tab",
        ],
    },
];

fn build_finder(cells: &str, shape: Option<(usize, usize)>) -> Result<WordFinder, InvalidShape> {
    let cells = cells.split_whitespace();
    match shape {
        Some((columns, rows)) => WordFinder::with_dimensions(columns, rows, cells),
        None => WordFinder::new(cells),
    }
}

fn report<S: AsRef<str>>(finder: &WordFinder, words: &[S]) {
    println!("Grid {}x{}:", finder.horizontal().columns(), finder.horizontal().rows());
    print!("{}", finder.horizontal());
    for word in finder.find(words) {
        println!("{:>12} {}", word, finder.count(&word));
    }
    println!();
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let Some(cells) = args.cells else {
        info!("No grid given, running {} sample grids", SAMPLES.len());
        for sample in SAMPLES {
            match build_finder(sample.cells, sample.shape) {
                Ok(finder) => report(&finder, sample.words),
                Err(e) => {
                    error!("Sample grid rejected: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        return ExitCode::SUCCESS;
    };

    let shape = args.columns.zip(args.rows);
    match build_finder(&cells, shape) {
        Ok(finder) => {
            report(&finder, &args.words);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Invalid grid: {}", e);
            ExitCode::FAILURE
        }
    }
}
