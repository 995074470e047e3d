// ============================================================
// Layer 4 — AG News Loader
// ============================================================
// Fetches the `ag_news` dataset through Burn's HuggingFace
// dataset loader. The loader downloads the named dataset once,
// converts it to a local SQLite database, and serves records
// from there on later runs.
//
// Only a bounded prefix of each split is consumed: the first
// `subset` records. The full train split has 120k headlines,
// far more than a teaching run needs, and a fixed prefix keeps
// runs comparable with each other.
//
// Failure mode: an unreachable dataset source or an invalid
// identifier propagates as an error and terminates the run.
// There is no retry — this is a one-shot pipeline, not a service.
//
// Reference: Burn Book §4 (Datasets)

use anyhow::{Context, Result};
use burn::data::dataset::{source::huggingface::HuggingfaceDatasetLoader, Dataset};

use crate::domain::example::NewsExample;

/// Loads a size-bounded prefix of one AG News split.
pub struct AgNewsLoader {
    /// Dataset identifier resolved by the HuggingFace loader
    dataset_id: String,
}

impl AgNewsLoader {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self { dataset_id: dataset_id.into() }
    }

    /// Download (or reuse) the split and materialise its first
    /// `subset` records as owned NewsExamples.
    pub fn load_split(&self, split: &str, subset: usize) -> Result<Vec<NewsExample>> {
        tracing::info!(
            "Loading dataset '{}' split '{}' (first {} records)",
            self.dataset_id, split, subset,
        );

        let dataset = HuggingfaceDatasetLoader::new(&self.dataset_id)
            .dataset::<NewsExample>(split)
            .with_context(|| format!(
                "Cannot load dataset '{}' split '{}'", self.dataset_id, split
            ))?;

        // Dataset::get returns Option — stop at the first gap or at
        // the subset bound, whichever comes first.
        let take = subset.min(dataset.len());
        let mut examples = Vec::with_capacity(take);
        for index in 0..take {
            if let Some(example) = dataset.get(index) {
                examples.push(example);
            }
        }

        tracing::info!(
            "Loaded {} of {} '{}' records",
            examples.len(), dataset.len(), split,
        );

        Ok(examples)
    }
}
