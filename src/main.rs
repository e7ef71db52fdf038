//! Headless auto-play runner (default binary).
//!
//! Plays a seeded game with the default brain and prints the final board and a
//! summary. No terminal control, no timing: each piece is placed as fast as the
//! search returns.

use anyhow::{Context, Result};
use clap::Parser;

use tetris_brain::engine::{Session, SessionConfig, StepOutcome};
use tetris_brain::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PIECE_LIMIT};

#[derive(Parser)]
#[command(name = "tetris-brain", version, about = "Let the brain play a seeded game")]
struct Cli {
    /// Board width in columns
    #[arg(long, default_value_t = BOARD_WIDTH as usize)]
    width: usize,
    /// Visible board height in rows
    #[arg(long, default_value_t = BOARD_HEIGHT as usize)]
    height: usize,
    /// Piece sequence seed
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Stop after this many pieces
    #[arg(long, default_value_t = DEFAULT_PIECE_LIMIT)]
    pieces: u32,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Print every placement as it happens
    #[arg(long, short)]
    verbose: bool,
    /// Omit the final board
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SessionConfig {
        width: cli.width,
        height: cli.height,
        seed: cli.seed,
        piece_limit: cli.pieces,
    };
    let mut session = Session::new(config).context("invalid board options")?;

    while !session.is_finished() {
        let outcome = session.step().context("session step failed")?;
        if !cli.verbose {
            continue;
        }
        match outcome {
            StepOutcome::Placed {
                kind,
                mv,
                rows_cleared,
            } => println!(
                "{:>5} {:<8} rot={} x={:<2} y={:<2} score={:.2} cleared={}",
                session.summary().pieces,
                kind.as_str(),
                mv.rotation,
                mv.x,
                mv.y,
                mv.score,
                rows_cleared
            ),
            StepOutcome::NoMove { kind } => {
                println!("no legal move for {}", kind.as_str())
            }
            StepOutcome::Finished(_) => {}
        }
    }

    let summary = session.summary();
    if !cli.quiet {
        println!("{}", session.board());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("encoding summary")?;
        println!("{json}");
    } else {
        let end = match summary.end {
            Some(reason) => format!("{:?}", reason),
            None => "running".to_string(),
        };
        println!(
            "seed={} pieces={} rows_cleared={} max_height={} end={}",
            summary.seed, summary.pieces, summary.rows_cleared, summary.max_height, end
        );
    }

    Ok(())
}
