// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Classifies one raw headline with the freshly trained model.
//
// The single-example path reuses the SAME tokenizer adapter
// instance (and therefore the same truncation/padding policy)
// as training-time preprocessing. Re-implementing the policy
// here would invite train/serve skew: a headline padded one
// way during training and another way at inference would see
// a different pooled vector.
//
// With a fixed trained model this path is deterministic —
// there is no dropout and no sampling, only an argmax.

use anyhow::Result;
use burn::prelude::*;

use crate::domain::labels::class_name;
use crate::infra::tokenizer::PretrainedTokenizer;
use crate::ml::model::NewsClassifier;
use crate::ml::trainer::EvalBackend;

/// The outcome of classifying one headline.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class index in 0..NUM_CLASSES
    pub class_index: usize,
    /// The mapped human-readable topic name
    pub class_name: &'static str,
}

pub struct Inferencer<'a> {
    model:     &'a NewsClassifier<EvalBackend>,
    tokenizer: &'a PretrainedTokenizer,
    device:    burn::backend::wgpu::WgpuDevice,
}

impl<'a> Inferencer<'a> {
    pub fn new(
        model:     &'a NewsClassifier<EvalBackend>,
        tokenizer: &'a PretrainedTokenizer,
    ) -> Self {
        Self {
            model,
            tokenizer,
            device: burn::backend::wgpu::WgpuDevice::default(),
        }
    }

    /// Tokenise one headline, forward a [1, seq_len] batch, and
    /// map the argmax index through the label map.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let (token_ids, attention_mask) = self.tokenizer.encode(text)?;
        let seq_len = token_ids.len();

        let ids_flat:  Vec<i32> = token_ids.iter().map(|&x| x as i32).collect();
        let mask_flat: Vec<i32> = attention_mask.iter().map(|&x| x as i32).collect();

        let token_tensor = Tensor::<EvalBackend, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device,
        ).reshape([1, seq_len]);

        let mask_tensor = Tensor::<EvalBackend, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device,
        ).reshape([1, seq_len]);

        let logits = self.model.forward(token_tensor, mask_tensor); // [1, num_classes]

        let class_index: i32 = logits
            .argmax(1)
            .flatten::<1>(0, 1)
            .into_scalar()
            .elem::<i32>();
        let class_index = class_index as usize;

        let name = class_name(class_index)
            .ok_or_else(|| anyhow::anyhow!(
                "Predicted class index {class_index} has no label"
            ))?;

        tracing::debug!("Predicted class {} ('{}') for '{}'", class_index, name, text);

        Ok(Prediction { class_index, class_name: name })
    }
}
