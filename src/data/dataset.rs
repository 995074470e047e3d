// ============================================================
// Layer 4 — Encoded Dataset
// ============================================================
// EncodedExample is the tokenised form of one headline, and
// NewsDataset implements Burn's Dataset trait over a Vec of
// them so the DataLoader can call .get(index) and .len().
//
// Every EncodedExample upholds the fixed-length invariant:
//   token_ids.len() == attention_mask.len() == max_length
// because both vectors come from the same pad_and_truncate
// call in the tokenizer adapter. Encoding happens once at
// preprocess time; examples are immutable afterwards.

use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::example::NewsExample;
use crate::infra::tokenizer::PretrainedTokenizer;

/// One fully tokenised and padded example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedExample {
    pub token_ids:      Vec<u32>,
    pub attention_mask: Vec<u32>,
    pub label:          usize,
}

impl EncodedExample {
    /// Number of real (non-padding) tokens in this example
    pub fn real_token_count(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m == 1).count()
    }
}

pub struct NewsDataset {
    examples: Vec<EncodedExample>,
}

impl NewsDataset {
    pub fn new(examples: Vec<EncodedExample>) -> Self {
        Self { examples }
    }

    /// Tokenise a whole subset of raw examples in one pass.
    /// This is the only place raw text turns into token ids.
    pub fn encode(
        raw:       &[NewsExample],
        tokenizer: &PretrainedTokenizer,
    ) -> Result<Self> {
        let mut examples = Vec::with_capacity(raw.len());
        for item in raw {
            let (token_ids, attention_mask) = tokenizer.encode(&item.text)?;
            examples.push(EncodedExample {
                token_ids,
                attention_mask,
                label: item.label,
            });
        }
        Ok(Self::new(examples))
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }
}

impl Dataset<EncodedExample> for NewsDataset {
    fn get(&self, index: usize) -> Option<EncodedExample> {
        self.examples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(mask: Vec<u32>) -> EncodedExample {
        EncodedExample {
            token_ids: vec![0; mask.len()],
            attention_mask: mask,
            label: 0,
        }
    }

    #[test]
    fn test_real_token_count() {
        assert_eq!(sample(vec![1, 1, 1, 0, 0]).real_token_count(), 3);
        assert_eq!(sample(vec![0, 0]).real_token_count(), 0);
    }

    #[test]
    fn test_dataset_get_and_len() {
        let ds = NewsDataset::new(vec![sample(vec![1]), sample(vec![1, 0])]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(1).unwrap().attention_mask, vec![1, 0]);
        assert!(ds.get(2).is_none());
    }
}
