// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   tokenizer.rs — Pretrained tokenizer adapter
//                  Downloads a named vocabulary once, then
//                  exposes a pure encode operation with a fixed
//                  padding/truncation policy. The SAME adapter
//                  instance serves training, evaluation, and the
//                  single-headline demo so there is no
//                  train/serve skew.
//
//   metrics.rs   — Training metrics logging
//                  Writes epoch-level average loss to a CSV
//                  file for later analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pretrained tokenizer loading and fixed-length encoding
pub mod tokenizer;

/// Training metrics CSV logger
pub mod metrics;
