// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Fixed-epoch training using Burn's DataLoader and Adam.
//
// Key Burn 0.20 insight:
//   - Training uses TrainBackend (Autodiff<Wgpu>) for gradients
//   - model.valid() returns the model on EvalBackend (Wgpu)
//     for gradient-free evaluation and inference
//
// Reproducibility: the backend is seeded before the model is
// built (weight initialisation) and the DataLoader shuffles
// with the same seed (a fresh permutation each epoch). A run
// with a fixed seed and fixed data is repeatable.
//
// There is no early stopping, no validation checkpointing, and
// no resumption: the configured number of epochs always runs
// to completion, or an unhandled numerical failure aborts the
// whole process.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::classify_use_case::PipelineConfig;
use crate::data::{batcher::ClassificationBatcher, dataset::NewsDataset};
use crate::domain::labels::NUM_CLASSES;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{NewsClassifier, NewsClassifierConfig};

pub type TrainBackend = burn::backend::Autodiff<burn::backend::Wgpu>;
pub type EvalBackend  = burn::backend::Wgpu;

/// Number of batches one epoch produces: ceil(examples / batch_size).
/// The last batch is smaller whenever batch_size does not divide
/// the example count.
pub fn batch_count(examples: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    (examples + batch_size - 1) / batch_size
}

pub fn run_training(
    cfg:           &PipelineConfig,
    vocab_size:    usize,
    train_dataset: NewsDataset,
    metrics:       &MetricsLogger,
) -> Result<NewsClassifier<TrainBackend>> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);

    // Seed weight initialisation before building the model
    TrainBackend::seed(cfg.seed);

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = NewsClassifierConfig::new(vocab_size, cfg.embed_dim, NUM_CLASSES);
    let mut model: NewsClassifier<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: vocab_size={}, embed_dim={}, num_classes={}",
        vocab_size, cfg.embed_dim, NUM_CLASSES,
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Training data loader ──────────────────────────────────────────────────
    // Shuffles with the configured seed; a fresh permutation of the
    // training subset is drawn each epoch.
    let example_count     = train_dataset.example_count();
    let batches_per_epoch = batch_count(example_count, cfg.batch_size);
    let train_batcher = ClassificationBatcher::<TrainBackend>::new(device.clone());
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    tracing::info!(
        "Training: {} examples, {} batches/epoch, {} epochs",
        example_count, batches_per_epoch, cfg.epochs,
    );

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _logits) = model.forward_classification(
                batch.token_ids,
                batch.attention_mask,
                batch.labels,
            );

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val;
            batches  += 1;

            // Backward pass + Adam update; gradients are consumed by
            // the step, so nothing accumulates across batches.
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 {
            loss_sum / batches as f64
        } else { f64::NAN };

        println!(
            "Epoch {:>3}/{} | batches={} | avg_loss={:.4}",
            epoch, cfg.epochs, batches, avg_loss,
        );

        metrics.log(&EpochMetrics::new(epoch, avg_loss))?;
    }

    tracing::info!("Training complete!");
    Ok(model)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_count_exact_division() {
        assert_eq!(batch_count(128, 64), 2);
    }

    #[test]
    fn test_batch_count_with_remainder() {
        // 10000 examples at batch size 64 → 156 full batches
        // plus one final batch of 16
        assert_eq!(batch_count(10000, 64), 157);
        assert_eq!(10000 - 156 * 64, 16);
    }

    #[test]
    fn test_batch_count_degenerate() {
        assert_eq!(batch_count(0, 64), 0);
        assert_eq!(batch_count(10, 0), 0);
        assert_eq!(batch_count(1, 64), 1);
    }
}
