// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the data layer's batcher.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without a GPU
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs      — The mean-pooled embedding classifier
//                   • Token embedding table
//                   • Mask-aware mean pooling over the sequence
//                   • Linear projection to 4 class logits
//
//   trainer.rs    — The training loop
//                   Forward pass, cross-entropy loss, backward
//                   pass, Adam step, per-epoch loss reporting
//
//   evaluator.rs  — Gradient-free evaluation over the test set
//                   producing the confusion matrix and
//                   per-class metrics
//
//   inferencer.rs — Single-headline inference through the same
//                   tokenisation path as training
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Kingma & Ba (2015) Adam

/// The embedding + mean-pool + linear classifier
pub mod model;

/// Epoch/batch training loop with Adam
pub mod trainer;

/// Gradient-free evaluation and metric aggregation
pub mod evaluator;

/// Single-example inference path
pub mod inferencer;
