// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`   — runs the full classification pipeline:
//                  load AG News → tokenize → train → evaluate
//                  → classify one demo headline
//   2. `outline` — prints the stage diagram of the (unimplemented)
//                  character-level generation pipeline
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "news-classifier",
    version = "0.1.0",
    about = "Train a mean-pooled embedding classifier on AG News headlines."
)]
pub struct Cli {
    /// The subcommand to run (train or outline)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// Destructure first: matching on `self.command` directly would
    /// move the args out of `self` and leave it partially moved.
    pub fn run(self) -> Result<()> {
        let Self { command } = self;
        match command {
            Commands::Train(args) => Self::run_train(args),
            Commands::Outline     => Self::run_outline(),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a PipelineConfig and hands off to Layer 2.
    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::classify_use_case::ClassifyUseCase;

        tracing::info!(
            "Starting classification pipeline: dataset='{}', tokenizer='{}'",
            args.dataset, args.model_name
        );

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ClassifyUseCase::new(args.into());
        use_case.execute()?;

        println!("Pipeline complete.");
        Ok(())
    }

    /// Handles the `outline` subcommand.
    /// The generation pipeline exists only as a stage diagram,
    /// so all we can do is print it.
    fn run_outline() -> Result<()> {
        println!("{}", crate::generation::render_outline());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_dispatch_consumes_cli() {
        // run() takes self by value and must dispatch without
        // leaving a partially moved Cli behind
        let cli = Cli { command: Commands::Outline };
        assert!(cli.run().is_ok());
    }
}
