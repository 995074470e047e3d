// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Runs the trained model over the test subset with gradient
// tracking disabled (the caller hands us the model on the
// non-autodiff backend via model.valid()).
//
// For each batch: forward pass → argmax over the 4 logits →
// one predicted class per example. All (true, predicted) pairs
// are accumulated across the full test set and folded into the
// domain-layer ClassificationReport. The model is only read,
// never mutated.
//
// argmax(1) returns shape [batch, 1] — flatten to [batch]
// before reading the values out.
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    prelude::*,
};

use crate::data::{batcher::ClassificationBatcher, dataset::NewsDataset};
use crate::domain::labels::NUM_CLASSES;
use crate::domain::metrics::ClassificationReport;
use crate::ml::model::NewsClassifier;
use crate::ml::trainer::EvalBackend;

pub fn evaluate(
    model:        &NewsClassifier<EvalBackend>,
    test_dataset: NewsDataset,
    batch_size:   usize,
) -> Result<ClassificationReport> {
    let device = burn::backend::wgpu::WgpuDevice::default();

    let example_count = test_dataset.example_count();

    // No shuffle: evaluation order is irrelevant to the metrics
    // and a stable order makes runs comparable.
    let batcher = ClassificationBatcher::<EvalBackend>::new(device);
    let loader  = DataLoaderBuilder::new(batcher)
        .batch_size(batch_size)
        .num_workers(1)
        .build(test_dataset);

    let mut truths:      Vec<usize> = Vec::with_capacity(example_count);
    let mut predictions: Vec<usize> = Vec::with_capacity(example_count);

    for batch in loader.iter() {
        let logits = model.forward(batch.token_ids, batch.attention_mask);

        // argmax(1) → [batch, 1], flatten → [batch]
        let predicted = logits.argmax(1).flatten::<1>(0, 1);

        predictions.extend(class_indices(predicted)?);
        truths.extend(class_indices(batch.labels)?);
    }

    tracing::info!("Evaluated {} test examples", truths.len());

    Ok(ClassificationReport::from_pairs(&truths, &predictions, NUM_CLASSES))
}

/// Read a 1D Int tensor of class indices back off the device.
///
/// A failed conversion propagates as an error instead of being
/// swallowed — an empty batch here would silently skew every
/// metric downstream. Reads the backend's own int element type
/// rather than assuming i32.
fn class_indices<B: Backend>(classes: Tensor<B, 1, Int>) -> Result<Vec<usize>> {
    let values: Vec<B::IntElem> = classes
        .into_data()
        .to_vec()
        .map_err(|e| anyhow::anyhow!("Cannot read class indices off the device: {e:?}"))?;

    Ok(values.into_iter().map(|v| v.elem::<i64>() as usize).collect())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;

    #[test]
    fn test_class_indices_reads_values_in_order() {
        let device = NdArrayDevice::default();
        let tensor = Tensor::<NdArray, 1, Int>::from_ints(
            [2, 0, 3, 1].as_slice(), &device,
        );
        assert_eq!(class_indices(tensor).unwrap(), vec![2, 0, 3, 1]);
    }
}
