use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rope_bridge::{read_moves, solve, Expected};

/// Counts the distinct positions visited by the tail of a rope whose head
/// follows a list of moves, for a 2-knot and a 10-knot rope.
#[derive(Parser, Debug)]
#[command(name = "day09", version)]
struct Cli {
    /// Move list, one `<R|U|D|L> <count>` per line.
    input: PathBuf,

    /// Fail instead of printing if part one doesn't come out to this.
    #[arg(long)]
    expect_part_one: Option<usize>,

    /// Fail instead of printing if part two doesn't come out to this.
    #[arg(long)]
    expect_part_two: Option<usize>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let moves = read_moves(&cli.input)?;
    let answers = solve(&moves);
    info!(?answers, "solved");

    answers.verify(&Expected {
        part_one: cli.expect_part_one,
        part_two: cli.expect_part_two,
    })?;

    println!("part one: {}", answers.part_one);
    println!("part two: {}", answers.part_two);

    Ok(())
}
