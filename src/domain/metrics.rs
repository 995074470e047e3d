// ============================================================
// Layer 3 — Evaluation Metrics
// ============================================================
// Pure computation over already-collected prediction pairs.
// No tensors, no GPU — just counting.
//
// The central structure is the confusion matrix:
//   rows    = true class
//   columns = predicted class
//   cell    = how many test examples fell in that combination
//
// Everything else derives from it:
//   accuracy     = trace / total
//   precision(c) = cell[c][c] / column_sum(c)   "of everything
//                  predicted c, how much really was c?"
//   recall(c)    = cell[c][c] / row_sum(c)      "of everything
//                  that really was c, how much did we find?"
//   f1(c)        = harmonic mean of precision and recall
//
// Whenever a denominator is zero (a class never predicted,
// or absent from the test set) the metric is defined as 0.0
// instead of dividing by zero.
//
// Reference: Rust Book §8 (Collections), §11 (Testing)

/// Count matrix of true class (row) vs predicted class (column).
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    counts:      Vec<Vec<usize>>,
    num_classes: usize,
}

impl ConfusionMatrix {
    /// Create an all-zero num_classes × num_classes matrix
    pub fn new(num_classes: usize) -> Self {
        Self {
            counts: vec![vec![0; num_classes]; num_classes],
            num_classes,
        }
    }

    /// Record one (true label, predicted label) observation.
    /// Out-of-range indices are ignored rather than panicking;
    /// they cannot occur when labels come from the dataset and
    /// predictions from an argmax over num_classes logits.
    pub fn record(&mut self, truth: usize, predicted: usize) {
        if truth < self.num_classes && predicted < self.num_classes {
            self.counts[truth][predicted] += 1;
        }
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Raw count in one cell
    pub fn count(&self, truth: usize, predicted: usize) -> usize {
        self.counts[truth][predicted]
    }

    /// Total number of recorded observations
    pub fn total(&self) -> usize {
        self.counts.iter().map(|row| row.iter().sum::<usize>()).sum()
    }

    /// Sum of the diagonal — the number of correct predictions
    pub fn trace(&self) -> usize {
        (0..self.num_classes).map(|c| self.counts[c][c]).sum()
    }

    /// Number of test examples whose true class is `c` (support)
    pub fn row_sum(&self, c: usize) -> usize {
        self.counts[c].iter().sum()
    }

    /// Number of test examples predicted as class `c`
    pub fn col_sum(&self, c: usize) -> usize {
        self.counts.iter().map(|row| row[c]).sum()
    }

    /// Fraction of all predictions that were correct
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.trace() as f64 / total as f64
    }

    pub fn precision(&self, c: usize) -> f64 {
        let predicted = self.col_sum(c);
        if predicted == 0 {
            return 0.0;
        }
        self.counts[c][c] as f64 / predicted as f64
    }

    pub fn recall(&self, c: usize) -> f64 {
        let support = self.row_sum(c);
        if support == 0 {
            return 0.0;
        }
        self.counts[c][c] as f64 / support as f64
    }

    pub fn f1(&self, c: usize) -> f64 {
        let p = self.precision(c);
        let r = self.recall(c);
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

// ─── ClassificationReport ─────────────────────────────────────────────────────
/// The full evaluation result: the confusion matrix plus a
/// renderer for the human-readable metric table.
/// Built once by the evaluator, then only read.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Build a report from parallel slices of true and predicted
    /// class indices (one entry per test example).
    pub fn from_pairs(truths: &[usize], predictions: &[usize], num_classes: usize) -> Self {
        let mut confusion = ConfusionMatrix::new(num_classes);
        for (&t, &p) in truths.iter().zip(predictions.iter()) {
            confusion.record(t, p);
        }
        Self { confusion }
    }

    /// Render the per-class table and the confusion-matrix grid.
    /// `class_names` must have one entry per class; it is display
    /// text only and never feeds back into the computation.
    pub fn render(&self, class_names: &[&str]) -> String {
        let cm = &self.confusion;
        let mut out = String::new();

        out.push_str(&format!(
            "Accuracy: {:.4} ({}/{} correct)\n\n",
            cm.accuracy(),
            cm.trace(),
            cm.total(),
        ));

        // Per-class precision / recall / F1 / support table
        out.push_str(&format!(
            "{:<10} {:>9} {:>9} {:>9} {:>9}\n",
            "class", "precision", "recall", "f1", "support"
        ));
        for c in 0..cm.num_classes() {
            let name = class_names.get(c).copied().unwrap_or("?");
            out.push_str(&format!(
                "{:<10} {:>9.4} {:>9.4} {:>9.4} {:>9}\n",
                name,
                cm.precision(c),
                cm.recall(c),
                cm.f1(c),
                cm.row_sum(c),
            ));
        }

        // Confusion matrix grid: rows = true class, columns = predicted
        out.push_str("\nConfusion matrix (rows = true, columns = predicted):\n");
        out.push_str(&format!("{:<10}", ""));
        for c in 0..cm.num_classes() {
            out.push_str(&format!("{:>10}", class_names.get(c).copied().unwrap_or("?")));
        }
        out.push('\n');
        for t in 0..cm.num_classes() {
            out.push_str(&format!("{:<10}", class_names.get(t).copied().unwrap_or("?")));
            for p in 0..cm.num_classes() {
                out.push_str(&format!("{:>10}", cm.count(t, p)));
            }
            out.push('\n');
        }

        out
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// A small worked 3-class example used by several tests:
    ///
    ///           pred0 pred1 pred2
    ///   true0 [   2     1     0 ]
    ///   true1 [   0     3     1 ]
    ///   true2 [   1     0     2 ]
    fn worked_example() -> ConfusionMatrix {
        let mut cm = ConfusionMatrix::new(3);
        // true 0
        cm.record(0, 0); cm.record(0, 0); cm.record(0, 1);
        // true 1
        cm.record(1, 1); cm.record(1, 1); cm.record(1, 1); cm.record(1, 2);
        // true 2
        cm.record(2, 0); cm.record(2, 2); cm.record(2, 2);
        cm
    }

    #[test]
    fn test_accuracy_is_trace_over_total() {
        let cm = worked_example();
        assert_eq!(cm.trace(), 7);
        assert_eq!(cm.total(), 10);
        assert!((cm.accuracy() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_row_sums_equal_support() {
        let cm = worked_example();
        assert_eq!(cm.row_sum(0), 3);
        assert_eq!(cm.row_sum(1), 4);
        assert_eq!(cm.row_sum(2), 3);
        // Row sums account for every observation
        let total: usize = (0..3).map(|c| cm.row_sum(c)).sum();
        assert_eq!(total, cm.total());
    }

    #[test]
    fn test_precision_and_recall() {
        let cm = worked_example();
        // class 1: 3 correct, 4 predicted as 1, 4 truly 1
        assert!((cm.precision(1) - 0.75).abs() < 1e-12);
        assert!((cm.recall(1) - 0.75).abs() < 1e-12);
        // class 0: 2 correct, 3 predicted as 0, 3 truly 0
        assert!((cm.precision(0) - 2.0 / 3.0).abs() < 1e-12);
        assert!((cm.recall(0) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_f1_harmonic_mean() {
        let cm = worked_example();
        let p = cm.precision(1);
        let r = cm.recall(1);
        assert!((cm.f1(1) - 2.0 * p * r / (p + r)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators_give_zero() {
        // Class 1 never appears as truth or prediction
        let mut cm = ConfusionMatrix::new(2);
        cm.record(0, 0);
        assert_eq!(cm.precision(1), 0.0);
        assert_eq!(cm.recall(1), 0.0);
        assert_eq!(cm.f1(1), 0.0);
    }

    #[test]
    fn test_empty_matrix_accuracy() {
        let cm = ConfusionMatrix::new(4);
        assert_eq!(cm.accuracy(), 0.0);
    }

    #[test]
    fn test_report_from_pairs() {
        let truths      = vec![0, 1, 2, 3, 0, 1];
        let predictions = vec![0, 1, 2, 0, 0, 2];
        let report = ClassificationReport::from_pairs(&truths, &predictions, 4);
        assert_eq!(report.confusion.total(), 6);
        assert_eq!(report.confusion.trace(), 4);
        // Every row sums to that class's count in `truths`
        assert_eq!(report.confusion.row_sum(0), 2);
        assert_eq!(report.confusion.row_sum(1), 2);
        assert_eq!(report.confusion.row_sum(2), 1);
        assert_eq!(report.confusion.row_sum(3), 1);
    }

    #[test]
    fn test_render_contains_class_names() {
        let report = ClassificationReport::from_pairs(&[0, 1], &[0, 1], 2);
        let text = report.render(&["Alpha", "Beta"]);
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
        assert!(text.contains("Accuracy: 1.0000"));
    }
}
