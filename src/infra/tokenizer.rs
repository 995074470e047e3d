// ============================================================
// Layer 6 — Pretrained Tokenizer Adapter
// ============================================================
// Wraps a pretrained WordPiece tokenizer from the `tokenizers`
// crate behind a small fixed-length interface.
//
// Contract (the rest of the crate depends on exactly this):
//   encode(text) → (token_ids, attention_mask) where
//     - both vectors have length == max_length, always
//     - sequences longer than max_length are truncated
//     - shorter ones are padded with the vocabulary's [PAD] id
//     - mask[i] == 1 for real tokens, 0 for the padded tail
//
// Loading the vocabulary is the only fallible, networked step;
// once loaded, encoding is a pure function of the input text.
// An unresolvable identifier surfaces as an anyhow error and
// aborts the run (one-shot script, no retries).
//
// The tokenizers crate returns boxed string errors rather than
// std error types, so they are wrapped with anyhow::anyhow!.
//
// Reference: tokenizers crate documentation
//            Devlin et al. (2019) BERT (WordPiece vocabulary)

use anyhow::Result;
use tokenizers::Tokenizer;

pub struct PretrainedTokenizer {
    tokenizer:  Tokenizer,
    max_length: usize,
    pad_id:     u32,
}

impl PretrainedTokenizer {
    /// Download/load the named pretrained vocabulary.
    /// `model_name` is e.g. "bert-base-uncased".
    pub fn from_pretrained(model_name: &str, max_length: usize) -> Result<Self> {
        let tokenizer = Tokenizer::from_pretrained(model_name, None)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load pretrained tokenizer '{model_name}': {e}"
            ))?;

        // BERT-family vocabularies reserve [PAD]; fall back to id 0
        // if the vocabulary names it differently.
        let pad_id = tokenizer.token_to_id("[PAD]").unwrap_or(0);

        tracing::info!(
            "Tokenizer '{}' ready: vocab_size={}, pad_id={}, max_length={}",
            model_name,
            tokenizer.get_vocab_size(true),
            pad_id,
            max_length,
        );

        Ok(Self { tokenizer, max_length, pad_id })
    }

    /// Encode one text into exactly max_length ids plus the
    /// matching 0/1 attention mask.
    pub fn encode(&self, text: &str) -> Result<(Vec<u32>, Vec<u32>)> {
        // `true` adds the special tokens ([CLS] ... [SEP])
        let enc = self.tokenizer.encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;

        Ok(pad_and_truncate(enc.get_ids().to_vec(), self.max_length, self.pad_id))
    }

    /// Number of entries in the vocabulary (including specials) —
    /// this sizes the embedding table.
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }

    pub fn pad_id(&self) -> u32 {
        self.pad_id
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Map an id back to its token string.
    /// Diagnostic display only — never part of the computation.
    pub fn id_to_token(&self, id: u32) -> Option<String> {
        self.tokenizer.id_to_token(id)
    }
}

/// Apply the fixed-length policy to an already-encoded id sequence.
///
/// Kept as a free function so the length/mask invariants are
/// unit-testable without downloading a vocabulary.
pub fn pad_and_truncate(
    mut ids:    Vec<u32>,
    max_length: usize,
    pad_id:     u32,
) -> (Vec<u32>, Vec<u32>) {
    ids.truncate(max_length);

    // 1 for every surviving real token, 0 for the padded tail
    let mut mask = vec![1u32; ids.len()];
    while ids.len() < max_length {
        ids.push(pad_id);
        mask.push(0);
    }

    (ids, mask)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const PAD: u32 = 0;

    #[test]
    fn test_short_sequence_is_padded() {
        let (ids, mask) = pad_and_truncate(vec![101, 7, 8, 102], 8, PAD);
        assert_eq!(ids.len(), 8);
        assert_eq!(mask.len(), 8);
        assert_eq!(ids, vec![101, 7, 8, 102, PAD, PAD, PAD, PAD]);
        assert_eq!(mask, vec![1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_long_sequence_is_truncated() {
        let (ids, mask) = pad_and_truncate((0..20).map(|i| i + 100).collect(), 8, PAD);
        assert_eq!(ids.len(), 8);
        assert_eq!(mask, vec![1; 8]);
        assert_eq!(ids[0], 100);
        assert_eq!(ids[7], 107);
    }

    #[test]
    fn test_exact_length_untouched() {
        let input: Vec<u32> = vec![1, 2, 3, 4];
        let (ids, mask) = pad_and_truncate(input.clone(), 4, PAD);
        assert_eq!(ids, input);
        assert_eq!(mask, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_mask_zero_iff_padded_tail() {
        let (ids, mask) = pad_and_truncate(vec![5, 6], 6, PAD);
        for (i, &m) in mask.iter().enumerate() {
            if m == 0 {
                assert_eq!(ids[i], PAD);
            } else {
                assert!(i < 2);
            }
        }
    }

    #[test]
    fn test_empty_input_all_padding() {
        let (ids, mask) = pad_and_truncate(Vec::new(), 4, PAD);
        assert_eq!(ids, vec![PAD; 4]);
        assert_eq!(mask, vec![0; 4]);
    }
}
