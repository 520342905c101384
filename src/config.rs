//! Command-line configuration.

use std::path::PathBuf;

use clap::{builder::RangedI64ValueParser, Parser};

/// Walk the maze, find out what waits at the end.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of maze rows, rounded up to the next odd value and to at least 5 so the start
    /// and goal are distinct cells.
    #[arg(long, default_value_t = 21, value_parser = size_parser())]
    pub rows: u16,
    /// Number of maze columns, rounded up to the next odd value and to at least 5 so the start
    /// and goal are distinct cells.
    #[arg(long, default_value_t = 21, value_parser = size_parser())]
    pub cols: u16,
    /// Seed for maze generation; a random seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Keep the same maze when playing again instead of generating a new one.
    #[arg(long)]
    pub reuse_maze: bool,
    /// Disable every sound cue.
    #[arg(long)]
    pub mute: bool,
    /// Print a generated maze as text and exit.
    #[arg(long)]
    pub print: bool,
    /// Append logs to this file. The level is read from `RUST_LOG` and defaults to `info`.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Largest side length accepted on the command line.
const MAX_DIMENSION: u16 = 1001;

/// Parses a side length between 1 and [`MAX_DIMENSION`].
fn size_parser() -> RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(1..=i64::from(MAX_DIMENSION))
}
