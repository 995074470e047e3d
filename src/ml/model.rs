use burn::{
    nn::{
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

/// Minimum denominator for the mean-pool division. An all-padding
/// sequence would otherwise divide by zero; the tokenizer never
/// produces one (it always emits [CLS]/[SEP]), but the forward
/// pass must not rely on that.
const MIN_POOL_DENOM: f64 = 1e-9;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct NewsClassifierConfig {
    pub vocab_size:  usize,
    pub embed_dim:   usize,
    pub num_classes: usize,
}

impl NewsClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> NewsClassifier<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embed_dim).init(device);
        let output    = LinearConfig::new(self.embed_dim, self.num_classes).init(device);
        NewsClassifier {
            embedding,
            output,
            embed_dim: self.embed_dim,
        }
    }
}

/// Mean-pooled embedding classifier:
///
///   token ids → embedding lookup → zero padded positions →
///   sum over the sequence → divide by real-token count →
///   linear projection → raw logits
///
/// No output activation: the logits go straight into a
/// cross-entropy loss that applies its own normalisation.
#[derive(Module, Debug)]
pub struct NewsClassifier<B: Backend> {
    pub embedding: Embedding<B>,
    pub output:    Linear<B>,
    pub embed_dim: usize,
}

impl<B: Backend> NewsClassifier<B> {
    /// token_ids, attention_mask: [batch, seq_len] → logits: [batch, num_classes]
    pub fn forward(
        &self,
        token_ids:      Tensor<B, 2, Int>,
        attention_mask: Tensor<B, 2, Int>,
    ) -> Tensor<B, 2> {
        let [batch_size, seq_len] = token_ids.dims();

        let embedded = self.embedding.forward(token_ids); // [batch, seq, dim]

        // Zero out embeddings at padded positions so they cannot
        // contribute to the sum. Broadcasting [batch, seq, 1] over
        // the embedding dimension.
        let mask = attention_mask.float(); // [batch, seq]
        let masked = embedded * mask.clone().reshape([batch_size, seq_len, 1]);

        // Mean over real tokens only: sum the surviving embeddings,
        // divide by how many positions were unmasked.
        let summed = masked.sum_dim(1).reshape([batch_size, self.embed_dim]);
        let counts = mask.sum_dim(1).clamp_min(MIN_POOL_DENOM); // [batch, 1]
        let pooled = summed / counts; // [batch, dim] / [batch, 1]

        self.output.forward(pooled) // [batch, num_classes]
    }

    /// Forward pass plus mean cross-entropy against the true labels.
    pub fn forward_classification(
        &self,
        token_ids:      Tensor<B, 2, Int>,
        attention_mask: Tensor<B, 2, Int>,
        labels:         Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(token_ids, attention_mask);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new()
            .init(&logits.device());
        let loss = ce.forward(logits.clone(), labels);
        (loss, logits)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Run on the CPU ndarray backend so no WGPU device is needed.
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn int_tensor(
        values: &[i32],
        shape:  [usize; 2],
        device: &NdArrayDevice,
    ) -> Tensor<TestBackend, 2, Int> {
        Tensor::<TestBackend, 1, Int>::from_ints(values, device).reshape(shape)
    }

    #[test]
    fn test_logits_shape_is_batch_by_num_classes() {
        let device = NdArrayDevice::default();
        let model = NewsClassifierConfig::new(50, 8, 4).init::<TestBackend>(&device);

        let tokens = int_tensor(&[1, 2, 3, 0, 4, 5, 0, 0, 6, 0, 0, 0], [3, 4], &device);
        let mask   = int_tensor(&[1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0], [3, 4], &device);

        let logits = model.forward(tokens, mask);
        assert_eq!(logits.dims(), [3, 4]);
    }

    #[test]
    fn test_pooling_ignores_padded_positions() {
        let device = NdArrayDevice::default();
        let model = NewsClassifierConfig::new(50, 8, 4).init::<TestBackend>(&device);

        // Same real tokens in the same order, arbitrary ids in the
        // masked tail — the pooled vector, and therefore the logits,
        // must not change.
        let mask = int_tensor(&[1, 1, 1, 0, 0, 0], [1, 6], &device);
        let a = model.forward(
            int_tensor(&[7, 8, 9, 0, 0, 0], [1, 6], &device),
            mask.clone(),
        );
        let b = model.forward(
            int_tensor(&[7, 8, 9, 41, 42, 43], [1, 6], &device),
            mask,
        );

        let a: Vec<f32> = a.into_data().to_vec::<f32>().unwrap();
        let b: Vec<f32> = b.into_data().to_vec::<f32>().unwrap();
        assert_eq!(a.len(), 4);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-6, "logits diverged: {x} vs {y}");
        }
    }
}
