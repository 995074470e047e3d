// ============================================================
// Layer 3 — NewsExample Domain Type
// ============================================================
// Represents a single labelled headline from the dataset.
// This is a plain data struct with no behaviour — just the
// raw text and its class index.
//
// The field names match the HuggingFace `ag_news` record
// schema ({"text": ..., "label": ...}) so the dataset loader
// can deserialise rows straight into this struct.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One labelled example from the news corpus.
/// Immutable once loaded — every later stage derives new
/// values from it instead of mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsExample {
    /// The raw headline text, exactly as the dataset ships it
    pub text: String,

    /// Class index in 0..NUM_CLASSES (see domain::labels)
    pub label: usize,
}

impl NewsExample {
    /// Create a new NewsExample.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(text: impl Into<String>, label: usize) -> Self {
        Self { text: text.into(), label }
    }
}
