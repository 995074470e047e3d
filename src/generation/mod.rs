// ============================================================
// Character-Level Generation Pipeline (outline only)
// ============================================================
// The second teaching artifact sketches a character-level
// recurrent text generator, but only as a stage diagram:
//
//   corpus
//       │
//       ▼
//   character vocabulary
//       │
//       ▼
//   encoded sequences
//       │
//       ▼
//   embedding + recurrent + linear model
//       │
//       ▼
//   epoch-based training with gradient clipping
//       │
//       ▼
//   autoregressive sampling from a seed string
//
// No executable logic, parameters, or behavioural contract
// exists for it: the vocabulary construction, the sequence
// window size, and the sampling strategy (greedy vs.
// temperature) are all left open, and guessing them would
// produce an implementation with no source of truth. This
// module therefore captures exactly what the diagram gives:
// the ordered stage names, and nothing more.

use std::fmt;

/// The six stages of the generation pipeline, in data-flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Corpus,
    CharacterVocabulary,
    EncodedSequences,
    RecurrentModel,
    TrainingWithGradientClipping,
    AutoregressiveSampling,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corpus                       => "corpus",
            Self::CharacterVocabulary          => "character vocabulary",
            Self::EncodedSequences             => "encoded sequences",
            Self::RecurrentModel               => "embedding + recurrent + linear model",
            Self::TrainingWithGradientClipping => "epoch-based training with gradient clipping",
            Self::AutoregressiveSampling       => "autoregressive character sampling from a seed string",
        };
        f.write_str(label)
    }
}

/// The full diagram, in order.
pub fn stages() -> [GenerationStage; 6] {
    [
        GenerationStage::Corpus,
        GenerationStage::CharacterVocabulary,
        GenerationStage::EncodedSequences,
        GenerationStage::RecurrentModel,
        GenerationStage::TrainingWithGradientClipping,
        GenerationStage::AutoregressiveSampling,
    ]
}

/// Render the stage diagram for the `outline` subcommand.
pub fn render_outline() -> String {
    let mut out = String::from(
        "Character-level generation pipeline (stage diagram only, not implemented):\n",
    );
    for (i, stage) in stages().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, stage));
    }
    out.push_str(
        "\nVocabulary construction, window size, and sampling strategy are\n\
         unspecified; no executable contract exists for this pipeline.\n",
    );
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_stages_in_order() {
        let s = stages();
        assert_eq!(s.len(), 6);
        assert_eq!(s[0], GenerationStage::Corpus);
        assert_eq!(s[5], GenerationStage::AutoregressiveSampling);
    }

    #[test]
    fn test_outline_lists_every_stage() {
        let text = render_outline();
        for stage in stages() {
            assert!(text.contains(&stage.to_string()));
        }
        assert!(text.contains("not implemented"));
    }
}
