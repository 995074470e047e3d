// ============================================================
// Layer 3 — AG News Label Map
// ============================================================
// The dataset assigns every headline one of four fixed topics.
// The integer class index is what the model predicts and the
// loss consumes; the string name is only for display.
//
// The mapping is part of the dataset definition and never
// changes at runtime, so plain constants are enough.

/// Number of topic classes in AG News
pub const NUM_CLASSES: usize = 4;

/// Class index → human-readable topic name
pub const CLASS_NAMES: [&str; NUM_CLASSES] = ["World", "Sports", "Business", "Sci/Tech"];

/// Look up the display name for a class index.
/// Returns None for an out-of-range index rather than panicking —
/// the caller decides how to report a bad prediction.
pub fn class_name(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_classes() {
        assert_eq!(NUM_CLASSES, 4);
        assert_eq!(CLASS_NAMES.len(), 4);
    }

    #[test]
    fn test_known_names() {
        assert_eq!(class_name(0), Some("World"));
        assert_eq!(class_name(1), Some("Sports"));
        assert_eq!(class_name(2), Some("Business"));
        assert_eq!(class_name(3), Some("Sci/Tech"));
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(class_name(4), None);
        assert_eq!(class_name(usize::MAX), None);
    }
}
