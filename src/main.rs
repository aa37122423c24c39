// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::Parser;
use doubleword_square::config::{LetterOrder, SearchConfig, SearchMode};
use doubleword_square::lexicon::Lexicon;
use doubleword_square::search::{search, SearchOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dwsquare")]
#[command(about = "Search for doubleword squares: every row and column a different word")]
struct Cmd {
    /// Word list, one word per line
    #[arg(long, default_value = "words_sorted.txt")]
    words: PathBuf,

    /// Side length of the square
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// Letter for the top-left cell
    #[arg(long)]
    start: Option<char>,

    /// Log statistics and the partial square on reaching this depth
    #[arg(long)]
    watch: Option<usize>,

    #[arg(long, value_enum, default_value_t = SearchMode::First)]
    mode: SearchMode,

    /// Order in which letters are tried at an unconstrained cell
    #[arg(long, value_enum, default_value_t = LetterOrder::Rarest)]
    letter_order: LetterOrder,

    /// Log progress every N lookahead cutoffs
    #[arg(long)]
    progress_every: Option<u64>,
}

impl Cmd {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            size: self.size,
            seed: self.start,
            watch_depth: self.watch,
            mode: self.mode,
            progress_every: self.progress_every,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();

    let lexicon = Lexicon::load(&cmd.words, cmd.size, cmd.letter_order)
        .with_context(|| format!("loading word list for {}x{} squares", cmd.size, cmd.size))?;
    let config = cmd.config();
    let report = search(lexicon, &config).context("invalid search configuration")?;

    for solution in &report.solutions {
        println!("{}", solution);
    }
    if report.outcome == SearchOutcome::Exhausted {
        tracing::info!(start = ?config.seed, "no square exists");
    } else {
        tracing::info!(squares = report.solution_count(), "search complete");
    }
    println!("{}", report.statistics);
    Ok(())
}
