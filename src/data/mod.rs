// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the remote dataset
// all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   ag_news (HuggingFace)
//       │
//       ▼
//   AgNewsLoader      → downloads the split, takes the first N rows
//       │
//       ▼
//   Tokenizer         → converts headlines to fixed-length token IDs
//       │
//       ▼
//   NewsDataset       → implements Burn's Dataset trait
//       │
//       ▼
//   ClassificationBatcher → stacks examples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Downloads AG News splits and takes a bounded prefix
pub mod loader;

/// EncodedExample and Burn's Dataset trait implementation
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
