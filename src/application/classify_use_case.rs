// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Orchestrates the full classification pipeline in order:
//
//   Step 1: Load pretrained tokenizer  (Layer 6 - infra)
//   Step 2: Load dataset subsets       (Layer 4 - data)
//   Step 3: Tokenise both subsets      (Layer 4 - data)
//   Step 4: Run training loop          (Layer 5 - ml)
//   Step 5: Evaluate on the test set   (Layer 5 - ml)
//   Step 6: Classify the demo headline (Layer 5 - ml)
//
// Every stage receives the configuration it needs as an explicit
// parameter — there are no module-level globals and no shared
// device variable.
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use burn::module::AutodiffModule;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::NewsDataset,
    loader::AgNewsLoader,
};
use crate::domain::example::NewsExample;
use crate::domain::labels::CLASS_NAMES;
use crate::infra::{
    metrics::MetricsLogger,
    tokenizer::PretrainedTokenizer,
};
use crate::ml::{
    evaluator::evaluate,
    inferencer::Inferencer,
    trainer::run_training,
};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// All knobs for one end-to-end run, threaded through each stage
// via parameters. Serialisable so a run's exact configuration can
// be displayed or recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub model_name:   String,
    pub dataset:      String,
    pub max_length:   usize,
    pub batch_size:   usize,
    pub embed_dim:    usize,
    pub lr:           f64,
    pub epochs:       usize,
    pub train_subset: usize,
    pub test_subset:  usize,
    pub seed:         u64,
    pub metrics_dir:  String,
    pub demo_text:    String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_name:   "bert-base-uncased".to_string(),
            dataset:      "ag_news".to_string(),
            max_length:   64,
            batch_size:   64,
            embed_dim:    128,
            lr:           1e-3,
            epochs:       3,
            train_subset: 10000,
            test_subset:  1000,
            seed:         42,
            metrics_dir:  "metrics".to_string(),
            demo_text:    "The government announced new economic policies today.".to_string(),
        }
    }
}

// ─── ClassifyUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct ClassifyUseCase {
    config: PipelineConfig,
}

impl ClassifyUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Run configuration: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Load the pretrained tokenizer ─────────────────────────────
        // The one fallible external lookup besides the dataset itself;
        // an unresolvable identifier aborts the run here.
        let tokenizer = PretrainedTokenizer::from_pretrained(&cfg.model_name, cfg.max_length)?;

        // ── Step 2: Load bounded prefixes of both splits ──────────────────────
        let loader        = AgNewsLoader::new(&cfg.dataset);
        let train_raw     = loader.load_split("train", cfg.train_subset)?;
        let test_raw      = loader.load_split("test", cfg.test_subset)?;
        println!(
            "Dataset '{}': {} train / {} test examples",
            cfg.dataset, train_raw.len(), test_raw.len(),
        );

        // ── Step 3: Tokenise both subsets once, up front ──────────────────────
        let train_dataset = NewsDataset::encode(&train_raw, &tokenizer)?;
        let test_dataset  = NewsDataset::encode(&test_raw, &tokenizer)?;
        self.log_sample_encoding(&train_raw, &tokenizer)?;

        // ── Step 4: Train ─────────────────────────────────────────────────────
        let metrics = MetricsLogger::new(&cfg.metrics_dir)?;
        let model   = run_training(cfg, tokenizer.vocab_size(), train_dataset, &metrics)?;

        // ── Step 5: Evaluate ──────────────────────────────────────────────────
        // model.valid() moves to the non-autodiff backend so no
        // gradient state is tracked during evaluation.
        let model  = model.valid();
        let report = evaluate(&model, test_dataset, cfg.batch_size)?;
        println!("\n{}", report.render(&CLASS_NAMES));

        // ── Step 6: Single-headline demo inference ────────────────────────────
        // Same tokenizer instance, same padding policy as training.
        let inferencer = Inferencer::new(&model, &tokenizer);
        let prediction = inferencer.predict(&cfg.demo_text)?;
        println!(
            "Demo: '{}' → class {} ({})",
            cfg.demo_text, prediction.class_index, prediction.class_name,
        );

        Ok(())
    }

    /// Show how the first headline tokenises — id→token display is
    /// diagnostic only and never feeds the computation.
    fn log_sample_encoding(
        &self,
        raw:       &[NewsExample],
        tokenizer: &PretrainedTokenizer,
    ) -> Result<()> {
        let Some(first) = raw.first() else { return Ok(()) };

        let (ids, mask) = tokenizer.encode(&first.text)?;
        let real = mask.iter().filter(|&&m| m == 1).count();
        let pieces: Vec<String> = ids
            .iter()
            .take(real.min(12))
            .filter_map(|&id| tokenizer.id_to_token(id))
            .collect();

        tracing::debug!(
            "Sample encoding: '{}' → {} real tokens, first pieces: {:?}",
            first.text, real, pieces,
        );
        Ok(())
    }
}
