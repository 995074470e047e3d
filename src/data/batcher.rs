// ============================================================
// Layer 4 — Classification Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec of
// EncodedExamples into GPU-ready tensors.
//
// How batching works here:
//   Input:  Vec of N EncodedExamples, each with sequences of length S
//   Output: ClassificationBatch with tensors of shape [N, S]
//
//   We flatten all token ids into one long Vec, then reshape:
//   [e1_t1, e1_t2, ..., e1_tS, e2_t1, ..., eN_tS] → [N, S]
//
// Why is this easy here?
//   Because all sequences are already padded to the same length
//   by the tokenizer adapter. If they weren't, we'd need dynamic
//   padding here.
//
// Batches are ephemeral: one is built per step, consumed by the
// forward pass, and dropped.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::EncodedExample;

// ─── ClassificationBatch ──────────────────────────────────────────────────────
/// A batch of examples ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct ClassificationBatch<B: Backend> {
    /// Token ID sequences — shape: [batch_size, seq_len]
    pub token_ids: Tensor<B, 2, Int>,

    /// Attention masks — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub attention_mask: Tensor<B, 2, Int>,

    /// True class indices — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── ClassificationBatcher ────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct GPU/CPU.
#[derive(Clone, Debug)]
pub struct ClassificationBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ClassificationBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<EncodedExample, ClassificationBatch<B>> for ClassificationBatcher<B> {
    /// Convert a Vec of EncodedExamples into a single batch.
    ///
    /// Steps:
    ///   1. Flatten all token_ids into one Vec<i32>
    ///   2. Create a 1D tensor and reshape to [batch_size, seq_len]
    ///   3. Repeat for attention_mask
    ///   4. Create a 1D tensor for the labels
    fn batch(&self, items: Vec<EncodedExample>) -> ClassificationBatch<B> {
        let batch_size = items.len();
        // All sequences have the same length (pre-padded)
        let seq_len    = items[0].token_ids.len();

        // Burn uses i32 for Int tensors, so widen from u32 here
        let ids_flat: Vec<i32> = items
            .iter()
            .flat_map(|e| e.token_ids.iter().map(|&x| x as i32))
            .collect();

        let mask_flat: Vec<i32> = items
            .iter()
            .flat_map(|e| e.attention_mask.iter().map(|&x| x as i32))
            .collect();

        let labels: Vec<i32> = items
            .iter()
            .map(|e| e.label as i32)
            .collect();

        let token_ids = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        // Labels stay as a 1D tensor [batch_size]
        let labels = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        );

        ClassificationBatch { token_ids, attention_mask, labels }
    }
}
