// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `outline`
// and all the configurable flags of the training pipeline.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::classify_use_case::PipelineConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier on AG News, evaluate it, and classify a demo headline
    Train(TrainArgs),

    /// Print the stage diagram of the character-level generation pipeline
    Outline,
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Pretrained tokenizer identifier (resolved by the tokenizers crate)
    #[arg(long, default_value = "bert-base-uncased")]
    pub model_name: String,

    /// Dataset identifier resolved by the HuggingFace dataset loader
    #[arg(long, default_value = "ag_news")]
    pub dataset: String,

    /// Fixed token-sequence length — shorter inputs are padded,
    /// longer ones truncated
    #[arg(long, default_value_t = 64)]
    pub max_length: usize,

    /// Number of examples processed together in one forward pass
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Dimension of each token embedding vector
    #[arg(long, default_value_t = 128)]
    pub embed_dim: usize,

    /// Adam learning rate — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Number of full passes through the training subset
    #[arg(long, default_value_t = 3)]
    pub epochs: usize,

    /// How many training examples to take (prefix of the train split)
    #[arg(long, default_value_t = 10000)]
    pub train_subset: usize,

    /// How many test examples to take (prefix of the test split)
    #[arg(long, default_value_t = 1000)]
    pub test_subset: usize,

    /// Seed for weight initialisation and epoch shuffling —
    /// fixing it makes a run reproducible
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Directory for the per-epoch loss CSV
    #[arg(long, default_value = "metrics")]
    pub metrics_dir: String,

    /// Headline classified after training as a single-example demo
    #[arg(long, default_value = "The government announced new economic policies today.")]
    pub demo_text: String,
}

/// Convert CLI TrainArgs into the application-layer PipelineConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for PipelineConfig {
    fn from(a: TrainArgs) -> Self {
        PipelineConfig {
            model_name:   a.model_name,
            dataset:      a.dataset,
            max_length:   a.max_length,
            batch_size:   a.batch_size,
            embed_dim:    a.embed_dim,
            lr:           a.lr,
            epochs:       a.epochs,
            train_subset: a.train_subset,
            test_subset:  a.test_subset,
            seed:         a.seed,
            metrics_dir:  a.metrics_dir,
            demo_text:    a.demo_text,
        }
    }
}
